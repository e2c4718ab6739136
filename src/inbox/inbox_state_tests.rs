//! Tests for the inbox state

use std::sync::mpsc;

use super::*;
use crate::api::types::{ApiRequest, UserSummary};

fn note(id: u64, read: bool) -> InboxNotification {
    InboxNotification {
        id,
        actor: UserSummary {
            id: 50,
            username: "luna".to_string(),
            display_name: "Luna".to_string(),
            avatar_url: None,
        },
        kind: "like".to_string(),
        text: "liked your dream".to_string(),
        created_at: "2024-05-01T03:00:00Z".to_string(),
        is_read: read,
    }
}

fn loaded(notes: Vec<InboxNotification>) -> (InboxState, mpsc::Receiver<ApiRequest>) {
    let (tx, rx) = mpsc::channel();
    let mut inbox = InboxState::new();
    inbox.set_request_channel(tx);
    inbox.load();
    let _ = rx.try_recv();
    inbox.on_inbox(Ok(notes));
    (inbox, rx)
}

fn network_error() -> ApiError {
    ApiError::Network {
        message: "connection reset".to_string(),
    }
}

#[test]
fn test_unread_count_derives_from_entries() {
    let (inbox, _rx) = loaded(vec![note(1, false), note(2, true), note(3, false)]);
    assert_eq!(inbox.unread_count(), 2);
}

#[test]
fn test_mark_read_applies_optimistically() {
    let (mut inbox, rx) = loaded(vec![note(1, false)]);

    inbox.mark_read(1);

    assert_eq!(inbox.unread_count(), 0);
    assert!(matches!(
        rx.try_recv(),
        Ok(ApiRequest::MarkRead { notification_id: 1 })
    ));
}

#[test]
fn test_mark_read_failure_restores_unread() {
    let (mut inbox, _rx) = loaded(vec![note(1, false)]);

    inbox.mark_read(1);
    inbox.on_mark_read_result(1, Err(network_error()));

    assert_eq!(inbox.unread_count(), 1);
}

#[test]
fn test_mark_read_on_read_entry_is_a_no_op() {
    let (mut inbox, rx) = loaded(vec![note(1, true)]);
    inbox.mark_read(1);
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_mark_all_read_applies_and_dispatches_once() {
    let (mut inbox, rx) = loaded(vec![note(1, false), note(2, true), note(3, false)]);

    inbox.mark_all_read();

    assert_eq!(inbox.unread_count(), 0);
    assert!(matches!(rx.try_recv(), Ok(ApiRequest::MarkAllRead)));

    // Re-trigger while pending: suppressed
    inbox.mark_all_read();
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_mark_all_failure_restores_exactly_the_unread_set() {
    let (mut inbox, _rx) = loaded(vec![note(1, false), note(2, true), note(3, false)]);

    inbox.mark_all_read();
    inbox.on_mark_all_result(Err(network_error()));

    assert_eq!(inbox.unread_count(), 2);
    assert!(inbox.entries()[1].is_read(), "already-read entry untouched");
}

#[test]
fn test_mark_all_with_nothing_unread_sends_nothing() {
    let (mut inbox, rx) = loaded(vec![note(1, true)]);
    inbox.mark_all_read();
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_mark_all_success_settles() {
    let (mut inbox, _rx) = loaded(vec![note(1, false)]);
    inbox.mark_all_read();
    inbox.on_mark_all_result(Ok(()));
    assert_eq!(inbox.unread_count(), 0);

    // A later mark-all with nothing unread stays quiet
    inbox.mark_all_read();
    assert_eq!(inbox.unread_count(), 0);
}
