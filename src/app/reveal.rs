use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::motion::{reveal_class, reveal_style, RevealState, RevealVariant};

/// Whether the nearest enclosing [`Reveal`] has played. Lets children
/// start their own transitions (e.g. progress rings) in step with it.
#[derive(Clone, Copy)]
pub struct Revealed(pub Signal<bool>);

#[component]
pub fn Reveal(
    #[prop(optional)] variant: RevealVariant,
    #[prop(optional)] delay_ms: u32,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let state = RwSignal::new(RevealState::new());

    Effect::new(move |_| {
        let is_visible = visible.get();
        if is_visible && !state.with_untracked(RevealState::has_fired) {
            state.update(|s| {
                s.observe(is_visible);
            });
        }
    });

    let fired = Signal::derive(move || state.with(RevealState::has_fired));
    provide_context(Revealed(fired));

    view! {
        <div
            node_ref=target
            class=move || format!("{} {}", reveal_class(variant, fired.get()), class)
            style=reveal_style(delay_ms)
        >
            {children()}
        </div>
    }
}
