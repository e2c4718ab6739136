//! Tests for session notices

use super::*;

fn at(base: Instant, ms: u64) -> Instant {
    base + Duration::from_millis(ms)
}

#[test]
fn test_info_notice_expires() {
    let base = Instant::now();
    let mut notices = NoticeState::new();
    notices.show_at("Saved", base);

    assert_eq!(notices.current().unwrap().message, "Saved");
    assert!(!notices.clear_if_expired_at(at(base, 1000)));
    assert!(notices.clear_if_expired_at(at(base, 2000)));
    assert!(notices.current().is_none());
}

#[test]
fn test_warning_notice_outlives_info_duration() {
    let base = Instant::now();
    let mut notices = NoticeState::new();
    notices.show_warning_at("Invalid config: parse error", base);

    assert!(!notices.clear_if_expired_at(at(base, 5_000)));
    assert!(notices.clear_if_expired_at(at(base, 11_000)));
}

#[test]
fn test_error_notice_is_permanent_until_dismissed() {
    let base = Instant::now();
    let mut notices = NoticeState::new();
    notices.show_error_at("API worker disconnected", base);

    assert!(!notices.clear_if_expired_at(at(base, 60_000 * 60)));
    assert_eq!(notices.current().unwrap().level, NoticeLevel::Error);

    notices.dismiss();
    assert!(notices.current().is_none());
}

#[test]
fn test_newest_notice_wins() {
    let base = Instant::now();
    let mut notices = NoticeState::new();
    notices.show_at("first", base);
    notices.show_warning_at("second", at(base, 100));
    assert_eq!(notices.current().unwrap().message, "second");
    assert_eq!(notices.current().unwrap().level, NoticeLevel::Warning);
}
