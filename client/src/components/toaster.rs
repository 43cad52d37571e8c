//! Notification stack rendered once at the app root.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    }
}

/// Renders every visible toast; clicking one dismisses it early.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toaster" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast: Toast| {
                        let id = toast.id;
                        view! {
                            <li class=toast_class(toast.kind) on:click=move |_| toasts.update(|t| t.dismiss(id))>
                                {toast.message}
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ol>
    }
}
