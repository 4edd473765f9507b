use leptos::prelude::*;

use super::scroll_to_section;
use crate::portfolio::{NAV_ITEMS, SITE_OWNER};

#[component]
pub fn Navigation() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let go_to = move |section_id: &str| {
        set_menu_open.set(false);
        scroll_to_section(section_id);
    };

    view! {
        <nav class="fixed top-0 inset-x-0 z-50 bg-background/80 backdrop-blur-md border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <button
                    class="text-xl font-black gradient-text"
                    data-testid="nav-logo"
                    on:click=move |_| go_to("home")
                >
                    {SITE_OWNER}
                </button>
                <div class="hidden md:flex items-center gap-8">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <button
                                    class="text-sm font-medium text-muted-foreground hover:text-primary transition-colors"
                                    data-testid=format!("nav-{}", item.section_id)
                                    on:click=move |_| go_to(item.section_id)
                                >
                                    {item.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="md:hidden text-2xl"
                    aria-label="Toggle menu"
                    data-testid="nav-menu-toggle"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden flex flex-col px-4 pb-4 gap-2 bg-background/95">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <button
                                    class="text-left py-2 text-muted-foreground hover:text-primary transition-colors"
                                    on:click=move |_| go_to(item.section_id)
                                >
                                    {item.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
