//! Transient notifications with auto-dismiss.

use std::time::Instant;

use crate::constants::{MAX_TOASTS, TOAST_TTL};

/// Visual flavor of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// A single on-screen notification.
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    expires_at: Instant,
}

impl Notification {
    /// Whether this notification has outlived its TTL.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Queue of visible notifications, oldest first.
///
/// Each entry auto-dismisses after a fixed TTL; when the queue is full
/// the oldest entry is dropped to make room.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Notification>,
}

impl ToastQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a notification, dropping the oldest if at capacity.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) {
        if self.toasts.len() >= MAX_TOASTS {
            self.toasts.remove(0);
        }
        self.toasts.push(Notification {
            kind,
            message: message.into(),
            expires_at: now + TOAST_TTL,
        });
    }

    /// Drop expired notifications. Returns true if any were removed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired(now));
        self.toasts.len() != before
    }

    /// Dismiss the oldest notification, if any.
    pub fn dismiss_oldest(&mut self) {
        if !self.toasts.is_empty() {
            self.toasts.remove(0);
        }
    }

    /// Currently visible notifications, oldest first.
    #[must_use]
    pub fn visible(&self) -> &[Notification] {
        &self.toasts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
