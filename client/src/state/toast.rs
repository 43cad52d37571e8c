//! Transient notifications shown after form submissions and failed mutations.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::{RwSignal, Update};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible notifications, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, kind, message: message.into() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

/// Show a notification and schedule its removal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let Some(id) = toasts.try_update(|t| t.push(kind, message)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(crate::config::TOAST_TTL_MS, move || {
        toasts.update(|t| t.dismiss(id));
    })
    .forget();
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

pub fn success(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    notify(toasts, ToastKind::Success, message);
}

pub fn error(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    notify(toasts, ToastKind::Error, message);
}
