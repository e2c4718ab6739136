use std::collections::{HashMap, HashSet};
use std::sync::mpsc::Sender;

use crate::api::client::ApiError;
use crate::api::types::{ApiRequest, FollowOrigin, FollowOutcome, UserSummary};

/// Session-wide cache of suggested users to follow.
///
/// Fetched at most once per session. The set of users the session has
/// followed from a suggestion surface is tracked here, separately from
/// whatever relationship flags the fetched payload may carry - it starts
/// empty and only toggle actions mutate it.
///
/// There is exactly one instance, owned by the session; every consumer
/// reads the same list, the same loading flag, and the same followed-set.
#[derive(Debug)]
pub struct SuggestionsState {
    suggestions: Vec<UserSummary>,
    loading: bool,
    started: bool,
    /// Users followed from a suggestion surface this session
    followed: HashSet<u64>,
    /// In-flight follow toggles: user id -> membership before the flip
    pending: HashMap<u64, bool>,
    request_tx: Option<Sender<ApiRequest>>,
}

impl SuggestionsState {
    pub fn new() -> Self {
        Self {
            suggestions: Vec::new(),
            loading: true,
            started: false,
            followed: HashSet::new(),
            pending: HashMap::new(),
            request_tx: None,
        }
    }

    /// Set the channel used to reach the API worker
    pub fn set_request_channel(&mut self, request_tx: Sender<ApiRequest>) {
        self.request_tx = Some(request_tx);
    }

    /// Issue the one fetch of the session.
    ///
    /// Unauthenticated sessions never ask the server: the list stays empty
    /// and loading completes immediately. Subsequent calls are no-ops.
    pub fn start(&mut self, authenticated: bool) {
        if self.started {
            return;
        }
        self.started = true;

        if !authenticated {
            self.loading = false;
            return;
        }

        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(ApiRequest::FetchSuggestions).is_ok());
        if !sent {
            log::error!("Failed to request suggestions: worker unavailable");
            self.loading = false;
        }
    }

    pub fn suggestions(&self) -> &[UserSummary] {
        &self.suggestions
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the session has locally followed this user
    pub fn is_followed(&self, user_id: u64) -> bool {
        self.followed.contains(&user_id)
    }

    /// The users followed from a suggestion surface this session
    pub fn followed(&self) -> &HashSet<u64> {
        &self.followed
    }

    /// The fetch came back
    pub fn on_loaded(&mut self, result: Result<Vec<UserSummary>, ApiError>) {
        match result {
            Ok(list) => {
                self.suggestions = list;
            }
            Err(e) => {
                log::error!("Error fetching suggestions: {}", e);
            }
        }
        self.loading = false;
    }

    /// Optimistically flip membership in the followed-set and dispatch the
    /// matching follow/unfollow. A second trigger for the same user while
    /// one is in flight is suppressed.
    pub fn toggle_follow(&mut self, user_id: u64) {
        if self.pending.contains_key(&user_id) {
            log::debug!("follow toggle already pending for user {}", user_id);
            return;
        }

        let was_followed = self.followed.contains(&user_id);
        if was_followed {
            self.followed.remove(&user_id);
        } else {
            self.followed.insert(user_id);
        }
        self.pending.insert(user_id, was_followed);

        let sent = self.request_tx.as_ref().is_some_and(|tx| {
            tx.send(ApiRequest::SetFollow {
                origin: FollowOrigin::Suggestions,
                user_id,
                follow: !was_followed,
            })
            .is_ok()
        });
        if !sent {
            log::error!("Failed to dispatch follow toggle: worker unavailable");
            self.restore(user_id, was_followed);
        }
    }

    /// The follow/unfollow came back.
    ///
    /// Success keeps the optimistic membership; failure restores the
    /// pre-toggle membership exactly.
    pub fn on_follow_result(&mut self, user_id: u64, result: Result<FollowOutcome, ApiError>) {
        let Some(was_followed) = self.pending.remove(&user_id) else {
            log::debug!("follow result for user {} with no pending toggle", user_id);
            return;
        };

        if let Err(e) = result {
            log::error!("Follow toggle failed for user {}: {}", user_id, e);
            if was_followed {
                self.followed.insert(user_id);
            } else {
                self.followed.remove(&user_id);
            }
        }
    }

    fn restore(&mut self, user_id: u64, was_followed: bool) {
        self.pending.remove(&user_id);
        if was_followed {
            self.followed.insert(user_id);
        } else {
            self.followed.remove(&user_id);
        }
    }
}

impl Default for SuggestionsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "suggestions_state_tests.rs"]
mod suggestions_state_tests;
