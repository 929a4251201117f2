// Transient error notice.
// Holds the currently displayed error and hides it after a fixed delay.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

/// Default time an error stays on screen.
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(5);

/// A displayed error message.
#[derive(Debug, Clone)]
pub struct NoticeMessage {
    pub message: String,
    pub shown_at: DateTime<Utc>,
    expires: Instant,
}

/// Auto-dismissing error banner state.
#[derive(Debug)]
pub struct Notice {
    ttl: Duration,
    current: Option<NoticeMessage>,
}

impl Default for Notice {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TTL)
    }
}

impl Notice {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, current: None }
    }

    /// Show an error, replacing any current one and restarting the timer.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some(NoticeMessage {
            message: message.into(),
            shown_at: Utc::now(),
            expires: now + self.ttl,
        });
    }

    /// The visible message, if it has not expired yet.
    pub fn current(&self, now: Instant) -> Option<&NoticeMessage> {
        self.current.as_ref().filter(|n| now < n.expires)
    }

    /// Drop the message once its deadline has passed. Returns true if it changed.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|n| now >= n.expires) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.current(now).is_some()
    }
}
