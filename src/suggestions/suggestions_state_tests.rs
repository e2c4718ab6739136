//! Tests for the shared suggestion cache

use std::sync::mpsc;

use super::*;
use crate::api::types::{ApiRequest, FollowStatus};

fn user(id: u64, username: &str) -> UserSummary {
    UserSummary {
        id,
        username: username.to_string(),
        display_name: username.to_string(),
        avatar_url: None,
    }
}

fn followed_outcome() -> FollowOutcome {
    FollowOutcome {
        status: FollowStatus::Following,
    }
}

fn network_error() -> ApiError {
    ApiError::Network {
        message: "connection reset".to_string(),
    }
}

#[test]
fn test_unauthenticated_start_never_fetches() {
    let (tx, rx) = mpsc::channel();
    let mut state = SuggestionsState::new();
    state.set_request_channel(tx);

    state.start(false);

    assert!(!state.is_loading());
    assert!(state.suggestions().is_empty());
    assert!(rx.try_recv().is_err(), "no request may be sent");
}

#[test]
fn test_authenticated_start_fetches_once() {
    let (tx, rx) = mpsc::channel();
    let mut state = SuggestionsState::new();
    state.set_request_channel(tx);

    state.start(true);
    state.start(true);

    assert!(state.is_loading());
    assert!(matches!(rx.try_recv(), Ok(ApiRequest::FetchSuggestions)));
    assert!(rx.try_recv().is_err(), "second start must not refetch");
}

#[test]
fn test_loaded_list_is_stored_and_loading_clears() {
    let (tx, _rx) = mpsc::channel();
    let mut state = SuggestionsState::new();
    state.set_request_channel(tx);
    state.start(true);

    state.on_loaded(Ok(vec![user(1, "luna"), user(2, "morpheus")]));

    assert!(!state.is_loading());
    assert_eq!(state.suggestions().len(), 2);
}

#[test]
fn test_fetch_failure_leaves_list_empty_and_loading_clear() {
    let (tx, _rx) = mpsc::channel();
    let mut state = SuggestionsState::new();
    state.set_request_channel(tx);
    state.start(true);

    state.on_loaded(Err(network_error()));

    assert!(!state.is_loading());
    assert!(state.suggestions().is_empty());
}

#[test]
fn test_followed_set_starts_empty_even_after_load() {
    let (tx, _rx) = mpsc::channel();
    let mut state = SuggestionsState::new();
    state.set_request_channel(tx);
    state.start(true);
    state.on_loaded(Ok(vec![user(1, "luna")]));

    assert!(!state.is_followed(1));
}

#[test]
fn test_toggle_follow_applies_before_response() {
    let (tx, rx) = mpsc::channel();
    let mut state = SuggestionsState::new();
    state.set_request_channel(tx);

    state.toggle_follow(7);

    assert!(state.is_followed(7), "membership flips pre-network");
    match rx.try_recv() {
        Ok(ApiRequest::SetFollow {
            user_id, follow, ..
        }) => {
            assert_eq!(user_id, 7);
            assert!(follow);
        }
        other => panic!("expected SetFollow, got {:?}", other),
    }
}

#[test]
fn test_toggle_follow_back_dispatches_unfollow() {
    let (tx, rx) = mpsc::channel();
    let mut state = SuggestionsState::new();
    state.set_request_channel(tx);

    state.toggle_follow(7);
    state.on_follow_result(7, Ok(followed_outcome()));
    let _ = rx.try_recv();

    state.toggle_follow(7);
    assert!(!state.is_followed(7));
    match rx.try_recv() {
        Ok(ApiRequest::SetFollow { follow, .. }) => assert!(!follow),
        other => panic!("expected SetFollow, got {:?}", other),
    }
}

#[test]
fn test_reentrant_toggle_is_suppressed_while_pending() {
    let (tx, rx) = mpsc::channel();
    let mut state = SuggestionsState::new();
    state.set_request_channel(tx);

    state.toggle_follow(7);
    state.toggle_follow(7);

    assert!(state.is_followed(7), "second trigger must not unwind the first");
    assert!(rx.try_recv().is_ok());
    assert!(rx.try_recv().is_err(), "only one request may be in flight");
}

#[test]
fn test_failure_restores_membership() {
    let (tx, _rx) = mpsc::channel();
    let mut state = SuggestionsState::new();
    state.set_request_channel(tx);

    state.toggle_follow(7);
    assert!(state.is_followed(7));

    state.on_follow_result(7, Err(network_error()));
    assert!(!state.is_followed(7));
}

#[test]
fn test_failure_restores_membership_for_unfollow() {
    let (tx, _rx) = mpsc::channel();
    let mut state = SuggestionsState::new();
    state.set_request_channel(tx);

    state.toggle_follow(7);
    state.on_follow_result(7, Ok(followed_outcome()));

    state.toggle_follow(7);
    assert!(!state.is_followed(7));
    state.on_follow_result(7, Err(network_error()));
    assert!(state.is_followed(7), "failed unfollow snaps back to followed");
}

#[test]
fn test_result_without_pending_toggle_is_ignored() {
    let (tx, _rx) = mpsc::channel();
    let mut state = SuggestionsState::new();
    state.set_request_channel(tx);

    state.on_follow_result(7, Ok(followed_outcome()));
    assert!(!state.is_followed(7));
}

#[test]
fn test_toggles_for_different_users_are_independent() {
    let (tx, _rx) = mpsc::channel();
    let mut state = SuggestionsState::new();
    state.set_request_channel(tx);

    state.toggle_follow(1);
    state.toggle_follow(2);
    assert!(state.is_followed(1));
    assert!(state.is_followed(2));

    state.on_follow_result(1, Err(network_error()));
    assert!(!state.is_followed(1));
    assert!(state.is_followed(2), "user 2's toggle is unaffected");
}
