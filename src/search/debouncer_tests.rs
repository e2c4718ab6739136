//! Tests for the search debouncer

use super::*;

const QUIET_MS: u64 = 300;

fn quiet() -> Duration {
    Duration::from_millis(QUIET_MS)
}

fn at(base: Instant, ms: u64) -> Instant {
    base + Duration::from_millis(ms)
}

#[test]
fn test_new_debouncer_has_no_pending() {
    let base = Instant::now();
    let debouncer = Debouncer::new(quiet());
    assert!(!debouncer.has_pending());
    assert!(!debouncer.should_execute_at(base));
}

#[test]
fn test_schedule_sets_pending() {
    let base = Instant::now();
    let mut debouncer = Debouncer::new(quiet());
    debouncer.schedule_execution_at(base);
    assert!(debouncer.has_pending());
}

#[test]
fn test_should_execute_false_before_quiet_period() {
    let base = Instant::now();
    let mut debouncer = Debouncer::new(quiet());
    debouncer.schedule_execution_at(base);
    assert!(!debouncer.should_execute_at(base));
    assert!(!debouncer.should_execute_at(at(base, QUIET_MS - 1)));
}

#[test]
fn test_should_execute_true_after_quiet_period() {
    let base = Instant::now();
    let mut debouncer = Debouncer::new(quiet());
    debouncer.schedule_execution_at(base);
    assert!(debouncer.should_execute_at(at(base, QUIET_MS)));
    assert!(debouncer.should_execute_at(at(base, QUIET_MS + 50)));
}

#[test]
fn test_reschedule_resets_timer() {
    let base = Instant::now();
    let mut debouncer = Debouncer::new(quiet());

    debouncer.schedule_execution_at(base);
    // Halfway through, a new keystroke arrives
    debouncer.schedule_execution_at(at(base, QUIET_MS / 2));
    // The original deadline must no longer fire
    assert!(!debouncer.should_execute_at(at(base, QUIET_MS)));
    // The new one does
    assert!(debouncer.should_execute_at(at(base, QUIET_MS / 2 + QUIET_MS)));
}

#[test]
fn test_cancel_clears_pending() {
    let base = Instant::now();
    let mut debouncer = Debouncer::new(quiet());
    debouncer.schedule_execution_at(base);
    debouncer.cancel();
    assert!(!debouncer.has_pending());
    assert!(!debouncer.should_execute_at(at(base, QUIET_MS * 2)));
}

#[test]
fn test_mark_executed_clears_state() {
    let base = Instant::now();
    let mut debouncer = Debouncer::new(quiet());
    debouncer.schedule_execution_at(base);
    assert!(debouncer.should_execute_at(at(base, QUIET_MS)));

    debouncer.mark_executed();
    assert!(!debouncer.has_pending());
    assert!(!debouncer.should_execute_at(at(base, QUIET_MS)));
}
