//! Global UI chrome state: loading indicator and toast notifications.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state so any request
//! or page can raise feedback without knowing which component renders it.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use leptos::prelude::*;

/// How long a toast stays on screen.
pub const TOAST_LIFETIME_MS: u32 = 3000;

/// Pending-request counter behind the spinner.
///
/// The spinner only shows once a request has been pending for the reveal
/// delay; `generation` ties each delayed reveal to the burst that scheduled it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadingState {
    pub pending: u32,
    pub visible: bool,
    generation: u64,
}

impl LoadingState {
    /// Count a new request. Returns a reveal token when it starts a burst.
    pub fn begin(&mut self) -> Option<u64> {
        self.pending += 1;
        if self.pending == 1 {
            self.generation = self.generation.wrapping_add(1);
            Some(self.generation)
        } else {
            None
        }
    }

    /// Count a finished request; hides the spinner once idle.
    pub fn end(&mut self) {
        self.pending = self.pending.saturating_sub(1);
        if self.pending == 0 {
            self.visible = false;
        }
    }

    /// Show the spinner if the burst behind `generation` is still pending.
    pub fn reveal(&mut self, generation: u64) {
        if self.pending > 0 && generation == self.generation {
            self.visible = true;
        }
    }
}

/// Toast severity; selects the CSS modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast-success",
            Self::Error => "toast toast-error",
            Self::Warning => "toast toast-warning",
            Self::Info => "toast toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, message: message.into() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Show a toast that dismisses itself after [`TOAST_LIFETIME_MS`].
///
/// Callers log the underlying error themselves; the toast text is not logged.
pub fn show_toast(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let mut id = 0;
    toasts.update(|t| id = t.push(kind, message));
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            toasts.update(|t| t.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
