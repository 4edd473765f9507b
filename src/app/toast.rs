use leptos::prelude::*;

use crate::notify::{Toast, ToastId, ToastKind, ToastQueue, TOAST_DURATION};

#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
}

impl Toaster {
    /// Shows `toast` until it is clicked away or [`TOAST_DURATION`] passes.
    pub fn show(&self, toast: Toast) {
        let queue = self.queue;
        let id = if let Some(id) = queue.try_update(|q| q.push(toast)) {
            id
        } else {
            return;
        };
        set_timeout(
            move || {
                queue.update(|q| {
                    q.dismiss(id);
                });
            },
            TOAST_DURATION,
        );
    }

    pub fn dismiss(&self, id: ToastId) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    fn entries(&self) -> Vec<(ToastId, Toast)> {
        self.queue.with(|q| q.iter().cloned().collect())
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster {
        queue: RwSignal::new(ToastQueue::default()),
    };
    provide_context(toaster);
    toaster
}

#[component]
pub fn Toasts() -> impl IntoView {
    let toaster = expect_context::<Toaster>();

    view! {
        <ol
            class="fixed bottom-4 right-4 z-[100] flex flex-col gap-2 w-full max-w-sm"
            aria-live="polite"
        >
            <For
                each=move || toaster.entries()
                key=|(id, _)| *id
                children=move |(id, toast)| {
                    let class = match toast.kind {
                        ToastKind::Default => "border-border bg-background text-foreground",
                        ToastKind::Destructive => "border-destructive bg-destructive text-white",
                    };
                    view! {
                        <li
                            role="status"
                            data-testid="toast"
                            class=format!(
                                "cursor-pointer rounded-lg border p-4 shadow-lg transition-all {class}",
                            )
                            on:click=move |_| toaster.dismiss(id)
                        >
                            <div class="font-semibold">{toast.title}</div>
                            <div class="text-sm opacity-90">{toast.description}</div>
                        </li>
                    }
                }
            />
        </ol>
    }
}
