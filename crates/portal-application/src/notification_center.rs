//! The single transient banner.

use std::time::{Duration, Instant};

use portal_core::notification::{Notification, NotificationKind, NotificationPhase};

/// Holds at most one banner; showing a new one evicts the previous.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    ttl: Duration,
    current: Option<Notification>,
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, current: None }
    }

    pub fn show_at(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) {
        let notification = Notification::new(kind, message, now, self.ttl);
        tracing::debug!(kind = %notification.kind, message = %notification.message, "banner");
        self.current = Some(notification);
    }

    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.show_at(kind, message, Instant::now());
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(NotificationKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(NotificationKind::Error, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(NotificationKind::Info, message);
    }

    /// The banner visible at `now` and its phase. Drops it once gone.
    pub fn visible_at(&mut self, now: Instant) -> Option<(Notification, NotificationPhase)> {
        let phase = self.current.as_ref()?.phase_at(now);
        match phase {
            Some(phase) => self.current.clone().map(|n| (n, phase)),
            None => {
                self.current = None;
                None
            }
        }
    }
}
