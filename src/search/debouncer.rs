use std::time::{Duration, Instant};

/// Manages debounced dispatch timing.
///
/// Tracks when the last input occurred and whether a dispatch is waiting for
/// the quiet period to elapse. Rapid keystrokes keep resetting the timer, so
/// at most one dispatch happens per pause in typing.
///
/// Time is passed in explicitly, which keeps the timing logic testable
/// without sleeping.
#[derive(Debug)]
pub struct Debouncer {
    /// Quiet period between the last input and dispatch
    quiet_period: Duration,
    /// Timestamp of the last input that triggered a schedule
    last_input_time: Option<Instant>,
    /// Whether there's a pending dispatch waiting for the quiet period
    pending_dispatch: bool,
}

impl Debouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            last_input_time: None,
            pending_dispatch: false,
        }
    }

    /// Schedule a dispatch after the quiet period.
    ///
    /// Each call resets the timer, superseding any earlier schedule.
    pub fn schedule_execution_at(&mut self, now: Instant) {
        self.last_input_time = Some(now);
        self.pending_dispatch = true;
    }

    /// Cancel any pending dispatch.
    pub fn cancel(&mut self) {
        self.pending_dispatch = false;
        self.last_input_time = None;
    }

    /// Whether the quiet period has elapsed and the dispatch should fire.
    pub fn should_execute_at(&self, now: Instant) -> bool {
        if !self.pending_dispatch {
            return false;
        }
        match self.last_input_time {
            Some(last) => now.saturating_duration_since(last) >= self.quiet_period,
            None => false,
        }
    }

    /// Clear the pending dispatch after it has fired.
    pub fn mark_executed(&mut self) {
        self.pending_dispatch = false;
        self.last_input_time = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending_dispatch
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
