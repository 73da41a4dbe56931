//! Transient notification queue.
//!
//! Every user-facing outcome (login failure, sync success, guard redirect)
//! is reported as a toast. The `Toaster` component renders the queue and
//! schedules `dismiss` after each toast's duration.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

pub const SUCCESS_DURATION_MS: u32 = 2000;
pub const ERROR_DURATION_MS: u32 = 4000;
/// Oldest toasts are dropped past this many visible at once.
pub const MAX_VISIBLE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    #[must_use]
    pub fn default_duration_ms(self) -> u32 {
        match self {
            Self::Success => SUCCESS_DURATION_MS,
            Self::Error => ERROR_DURATION_MS,
        }
    }

    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
    pub duration_ms: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, duration_ms: u32) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(Toast { id: id.clone(), kind, message: message.into(), duration_ms });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> String {
        self.push(ToastKind::Success, message, ToastKind::Success.default_duration_ms())
    }

    pub fn error(&mut self, message: impl Into<String>) -> String {
        self.push(ToastKind::Error, message, ToastKind::Error.default_duration_ms())
    }

    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|t| t.id != id);
    }
}
