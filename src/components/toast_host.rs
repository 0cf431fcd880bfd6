//! Renders the queued notifications in a fixed overlay.

#[cfg(test)]
#[path = "toast_host_test.rs"]
mod toast_host_test;

use leptos::prelude::*;

use crate::state::toast::{ToastVariant, use_toasts};

fn variant_class(variant: ToastVariant) -> &'static str {
    match variant {
        ToastVariant::Info => "toast toast--info",
        ToastVariant::Success => "toast toast--success",
        ToastVariant::Error => "toast toast--error",
    }
}

/// Notification overlay. Reads the toast context; must render inside the
/// provider installed by `App`.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.items()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=variant_class(toast.variant)>
                            <p class="toast__title">{toast.title.clone()}</p>
                            <p class="toast__description">{toast.description.clone()}</p>
                            <button
                                class="toast__dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
