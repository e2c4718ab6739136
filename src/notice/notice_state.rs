use std::time::{Duration, Instant};

/// Notice level - determines how long the notice stays up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeLevel {
    /// Short-lived confirmations
    #[default]
    Info,
    /// Degraded-but-working situations, e.g. an invalid config file
    Warning,
    /// Permanent until dismissed - the session lost its worker
    Error,
}

impl NoticeLevel {
    /// How long a notice of this level stays visible
    fn duration(self) -> Option<Duration> {
        match self {
            NoticeLevel::Info => Some(Duration::from_millis(1500)),
            NoticeLevel::Warning => Some(Duration::from_secs(10)),
            NoticeLevel::Error => None, // Permanent
        }
    }
}

/// A single transient notice
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
    created_at: Instant,
    duration: Option<Duration>,
}

impl Notice {
    fn at(message: &str, level: NoticeLevel, now: Instant) -> Self {
        Self {
            message: message.to_string(),
            level,
            created_at: now,
            duration: level.duration(),
        }
    }

    /// Whether the notice has outlived its duration
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.duration {
            Some(d) => now.saturating_duration_since(self.created_at) > d,
            None => false, // Permanent notices never expire
        }
    }
}

/// Notice state for the session - at most one notice at a time,
/// newest wins
#[derive(Debug, Default)]
pub struct NoticeState {
    current: Option<Notice>,
}

impl NoticeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_at(&mut self, message: &str, now: Instant) {
        self.current = Some(Notice::at(message, NoticeLevel::Info, now));
    }

    pub fn show_warning_at(&mut self, message: &str, now: Instant) {
        self.current = Some(Notice::at(message, NoticeLevel::Warning, now));
    }

    pub fn show_error_at(&mut self, message: &str, now: Instant) {
        self.current = Some(Notice::at(message, NoticeLevel::Error, now));
    }

    /// Dismiss the current notice (user action on a permanent error)
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Clear an expired notice, returns true if one was cleared
    pub fn clear_if_expired_at(&mut self, now: Instant) -> bool {
        if let Some(ref notice) = self.current
            && notice.is_expired_at(now)
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

#[cfg(test)]
#[path = "notice_state_tests.rs"]
mod notice_state_tests;
