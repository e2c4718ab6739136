//! Tests for the community page state

use std::sync::mpsc;
use std::time::{Duration, Instant};

use super::*;
use crate::api::types::ApiRequest;

fn view(id: u64, member: bool, members: i64) -> CommunityView {
    CommunityView {
        id,
        name: "Lucid Dreamers".to_string(),
        description: None,
        member_count: members,
        is_member: member,
        is_moderator: true,
    }
}

fn loaded(id: u64, member: bool, members: i64) -> (CommunityState, mpsc::Receiver<ApiRequest>) {
    let (tx, rx) = mpsc::channel();
    let mut state = CommunityState::new(&SearchConfig::default());
    state.set_request_channel(tx);
    state.load(id);
    let _ = rx.try_recv();
    state.on_community(Ok(view(id, member, members)));
    (state, rx)
}

fn network_error() -> ApiError {
    ApiError::Network {
        message: "connection reset".to_string(),
    }
}

#[test]
fn test_community_hydrates_membership() {
    let (state, _rx) = loaded(3, true, 120);
    assert!(!state.is_loading());
    assert!(state.is_member());
    assert_eq!(state.member_count(), Some(120));
}

#[test]
fn test_join_applies_optimistically_and_dispatches() {
    let (mut state, rx) = loaded(3, false, 120);

    state.join();

    assert!(state.is_member());
    assert_eq!(state.member_count(), Some(121));
    assert!(matches!(
        rx.try_recv(),
        Ok(ApiRequest::JoinCommunity { community_id: 3 })
    ));
}

#[test]
fn test_join_failure_rolls_back() {
    let (mut state, _rx) = loaded(3, false, 120);

    state.join();
    state.on_join_result(3, Err(network_error()));

    assert!(!state.is_member());
    assert_eq!(state.member_count(), Some(120));
}

#[test]
fn test_join_when_already_member_is_a_no_op() {
    let (mut state, rx) = loaded(3, true, 120);
    state.join();
    assert!(rx.try_recv().is_err());
    assert_eq!(state.member_count(), Some(120));
}

#[test]
fn test_double_join_is_suppressed() {
    let (mut state, rx) = loaded(3, false, 120);
    state.join();
    state.join();
    assert_eq!(state.member_count(), Some(121), "no double apply");
    assert!(rx.try_recv().is_ok());
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_invite_search_uses_users_scope_and_short_limit() {
    let base = Instant::now();
    let (mut state, _rx) = loaded(3, true, 120);

    state.invite_search.on_input("lu", base);
    let dispatch = state
        .invite_search
        .poll_dispatch(base + Duration::from_millis(300))
        .unwrap();

    assert_eq!(dispatch.scope, SearchScope::Users);
    assert_eq!(dispatch.limit, 8);
    assert_eq!(dispatch.query, "lu");
}
