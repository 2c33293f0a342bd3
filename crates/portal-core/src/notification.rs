//! Transient notification banner.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use strum::Display;

/// Default time a banner stays fully visible.
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Length of the exit transition after the visible period.
pub const LEAVE_TRANSITION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Visible,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub shown_at: Instant,
    pub ttl: Duration,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        message: impl Into<String>,
        shown_at: Instant,
        ttl: Duration,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at,
            ttl,
        }
    }

    /// Phase of the banner at `now`, or `None` once it has disappeared.
    pub fn phase_at(&self, now: Instant) -> Option<NotificationPhase> {
        let elapsed = now.saturating_duration_since(self.shown_at);
        if elapsed < self.ttl {
            Some(NotificationPhase::Visible)
        } else if elapsed < self.ttl + LEAVE_TRANSITION {
            Some(NotificationPhase::Leaving)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases_follow_clock() {
        let start = Instant::now();
        let banner = Notification::new(
            NotificationKind::Success,
            "Logged out",
            start,
            DEFAULT_NOTIFICATION_TTL,
        );

        assert_eq!(banner.phase_at(start), Some(NotificationPhase::Visible));
        assert_eq!(
            banner.phase_at(start + Duration::from_millis(4_999)),
            Some(NotificationPhase::Visible)
        );
        assert_eq!(
            banner.phase_at(start + Duration::from_secs(5)),
            Some(NotificationPhase::Leaving)
        );
        assert_eq!(
            banner.phase_at(start + Duration::from_millis(5_299)),
            Some(NotificationPhase::Leaving)
        );
        assert_eq!(banner.phase_at(start + Duration::from_millis(5_300)), None);
    }

    #[test]
    fn test_clock_before_shown_counts_as_visible() {
        let start = Instant::now() + Duration::from_secs(1);
        let banner = Notification::new(NotificationKind::Info, "x", start, Duration::from_secs(1));
        assert_eq!(banner.phase_at(Instant::now()), Some(NotificationPhase::Visible));
    }
}
