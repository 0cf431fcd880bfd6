//! Notification sink shared by providers and pages.
//!
//! DESIGN
//! ======
//! Notifications are fire-and-forget: callers queue a toast and move on,
//! nothing is returned to await. The queue lives behind a context handle so
//! the session provider and any page share one sink.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// How long a toast stays visible before it dismisses itself.
#[cfg(feature = "hydrate")]
const AUTO_DISMISS: std::time::Duration = std::time::Duration::from_secs(5);

/// Visual severity of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Info,
    Success,
    Error,
}

/// A single queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Ordered notification queue with monotonically increasing ids.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    pub next_id: u64,
}

impl ToastState {
    /// Queue a notification and return its id.
    pub fn push(&mut self, title: &str, description: &str, variant: ToastVariant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            title: title.to_owned(),
            description: description.to_owned(),
            variant,
        });
        id
    }

    /// Drop the toast with `id`, if it is still queued.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

/// Handle to the notification sink.
#[derive(Clone, Copy)]
pub struct ToastContext {
    state: RwSignal<ToastState>,
}

/// Install the toast context for the component subtree.
pub fn provide_toasts() -> ToastContext {
    let ctx = ToastContext {
        state: RwSignal::new(ToastState::default()),
    };
    provide_context(ctx);
    ctx
}

/// Access the toast context.
///
/// # Panics
///
/// Panics when called outside the provider scope; that is a wiring defect,
/// not a runtime condition to recover from.
pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}

impl ToastContext {
    /// Queue a notification and schedule its auto-dismiss.
    pub fn notify(self, title: &str, description: &str, variant: ToastVariant) {
        let id = self
            .state
            .try_update(|s| s.push(title, description, variant))
            .unwrap_or_default();
        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(AUTO_DISMISS).await;
                state.update(|s| s.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }

    /// Queue a success notification.
    pub fn success(self, title: &str, description: &str) {
        self.notify(title, description, ToastVariant::Success);
    }

    /// Queue an error notification.
    pub fn error(self, title: &str, description: &str) {
        self.notify(title, description, ToastVariant::Error);
    }

    /// Snapshot of the queued toasts (reactive read).
    pub fn items(self) -> Vec<Toast> {
        self.state.with(|s| s.items.clone())
    }

    /// Drop a toast immediately, ahead of its auto-dismiss.
    pub fn dismiss(self, id: u64) {
        self.state.update(|s| s.dismiss(id));
    }
}
