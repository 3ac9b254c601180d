use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::contact::Notification;
use crate::notify::{Toast, ToastId, ToastQueue, TOAST_DURATION};

/// Handle to the page's notification sink, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
}

impl Toasts {
    pub fn push(&self, notification: Notification) {
        if let Some(id) = self.queue.try_update(|q| q.push(notification)) {
            log::debug!("showing toast {id:?}");
        }
    }

    pub fn dismiss(&self, id: ToastId) {
        // timers can outlive the page
        self.queue.try_update(|q| q.dismiss(id));
    }

    fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts {
        queue: RwSignal::new(ToastQueue::default()),
    };
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();
    view! {
        <ol class="fixed bottom-0 right-0 z-[100] flex flex-col gap-2 p-4 w-full md:max-w-[420px]">
            <For
                each=move || toasts.toasts()
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast /> }
            />
        </ol>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = use_toasts();
    let id = toast.id;
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| toasts.dismiss(id),
        TOAST_DURATION.as_millis() as f64,
    );
    start(());

    view! {
        <li
            role="status"
            class="relative flex items-start justify-between gap-4 rounded-md border bg-background p-4 shadow-lg"
        >
            <div class="grid gap-1">
                <div class="text-sm font-semibold">{toast.title}</div>
                <div class="text-sm opacity-90">{toast.description}</div>
            </div>
            <button
                class="text-muted-foreground hover:text-foreground"
                aria-label="Close"
                on:click=move |_| toasts.dismiss(id)
            >
                "✕"
            </button>
        </li>
    }
}
