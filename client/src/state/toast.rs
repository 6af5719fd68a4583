//! Toast queue state backing the notification surface.
//!
//! DESIGN
//! ======
//! Plain-struct state wrapped in an `RwSignal` and provided via context.
//! `push_unique` gives one-shot notices a state-level invariant: repeated
//! pushes with the same key keep a single toast, so a mount-time warning
//! stays single no matter how often the surrounding tree re-renders.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Severity variant controlling the toast's visual treatment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastVariant {
    /// CSS modifier suffix for the variant.
    #[must_use]
    pub fn css_suffix(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A single dismissible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    /// Dedupe key for one-shot notices; `None` for ad-hoc toasts.
    pub key: Option<&'static str>,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Queue of live toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast, returning its id.
    pub fn push(&mut self, title: &str, description: &str, variant: ToastVariant) -> u64 {
        self.push_inner(None, title, description, variant)
    }

    /// Append a keyed toast unless one with the same key is already live.
    /// Returns the new id, or `None` when the key deduplicated the push.
    pub fn push_unique(&mut self, key: &'static str, title: &str, description: &str, variant: ToastVariant) -> Option<u64> {
        if self.toasts.iter().any(|t| t.key == Some(key)) {
            return None;
        }
        Some(self.push_inner(Some(key), title, description, variant))
    }

    fn push_inner(&mut self, key: Option<&'static str>, title: &str, description: &str, variant: ToastVariant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            key,
            title: title.to_owned(),
            description: description.to_owned(),
            variant,
        });
        id
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Live toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}
