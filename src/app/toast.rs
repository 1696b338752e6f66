//! Transient notifications shown over the current screen.

use std::time::{Duration, Instant};

/// How many toasts are drawn at once; older ones stay queued until they expire.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
    pub expires_at: Instant,
}

#[derive(Debug)]
pub struct Toasts {
    items: Vec<Toast>,
    duration: Duration,
}

impl Toasts {
    pub fn new(duration: Duration) -> Self {
        Self {
            items: Vec::new(),
            duration,
        }
    }

    pub fn success(&mut self, text: impl Into<String>, now: Instant) {
        self.push(ToastKind::Success, text.into(), now);
    }

    pub fn error(&mut self, text: impl Into<String>, now: Instant) {
        self.push(ToastKind::Error, text.into(), now);
    }

    fn push(&mut self, kind: ToastKind, text: String, now: Instant) {
        self.items.push(Toast {
            kind,
            text,
            expires_at: now + self.duration,
        });
    }

    /// Drop expired toasts. Returns true if anything was removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.expires_at > now);
        self.items.len() != before
    }

    /// Newest first, capped at [`MAX_VISIBLE`].
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter().rev().take(MAX_VISIBLE)
    }
}

#[cfg(test)]
impl Toasts {
    pub fn latest(&self) -> Option<&Toast> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
