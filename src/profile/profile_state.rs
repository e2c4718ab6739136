use std::sync::mpsc::Sender;

use crate::api::client::ApiError;
use crate::api::types::{ApiRequest, FollowOrigin, FollowOutcome, FollowStatus, ProfileView};
use crate::toggle::ToggleState;

/// Profile page state for the currently viewed user
#[derive(Debug)]
pub struct ProfileState {
    profile: Option<ProfileView>,
    loading: bool,
    /// Follow flag with the follower count riding along
    follow: ToggleState,
    /// Set when a private account has answered follow with "requested"
    follow_requested: bool,
    block: ToggleState,
    mute: ToggleState,
    request_tx: Option<Sender<ApiRequest>>,
}

impl ProfileState {
    pub fn new() -> Self {
        Self {
            profile: None,
            loading: false,
            follow: ToggleState::new(false),
            follow_requested: false,
            block: ToggleState::new(false),
            mute: ToggleState::new(false),
            request_tx: None,
        }
    }

    pub fn set_request_channel(&mut self, request_tx: Sender<ApiRequest>) {
        self.request_tx = Some(request_tx);
    }

    pub fn profile(&self) -> Option<&ProfileView> {
        self.profile.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_following(&self) -> bool {
        self.follow.flag()
    }

    pub fn follower_count(&self) -> Option<i64> {
        self.follow.count()
    }

    pub fn is_follow_requested(&self) -> bool {
        self.follow_requested
    }

    pub fn is_blocked(&self) -> bool {
        self.block.flag()
    }

    pub fn is_muted(&self) -> bool {
        self.mute.flag()
    }

    fn viewed_user_id(&self) -> Option<u64> {
        self.profile.as_ref().map(|p| p.user.id)
    }

    pub fn load(&mut self, user_id: u64) {
        self.loading = true;
        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(ApiRequest::FetchProfile { user_id }).is_ok());
        if !sent {
            log::error!("Failed to request profile: worker unavailable");
            self.loading = false;
        }
    }

    pub fn on_profile(&mut self, result: Result<ProfileView, ApiError>) {
        match result {
            Ok(view) => {
                self.follow
                    .hydrate(view.is_following, Some(view.follower_count));
                self.follow_requested = view.follow_requested;
                self.block.hydrate(view.is_blocked, None);
                self.mute.hydrate(view.is_muted, None);
                self.profile = Some(view);
            }
            Err(e) => {
                log::error!("Error loading profile: {}", e);
            }
        }
        self.loading = false;
    }

    /// Optimistic follow/unfollow of the viewed user.
    ///
    /// While a follow request to a private account is pending approval the
    /// button is inert; cancelling a request is not a client operation here.
    pub fn toggle_follow(&mut self) {
        let Some(user_id) = self.viewed_user_id() else {
            return;
        };
        if self.follow_requested {
            log::debug!("follow request pending approval, ignoring toggle");
            return;
        }
        if !self.follow.begin() {
            return;
        }

        let follow = self.follow.flag();
        let sent = self.request_tx.as_ref().is_some_and(|tx| {
            tx.send(ApiRequest::SetFollow {
                origin: FollowOrigin::Profile,
                user_id,
                follow,
            })
            .is_ok()
        });
        if !sent {
            log::error!("Failed to dispatch follow toggle: worker unavailable");
            self.follow.rollback();
        }
    }

    pub fn on_follow_result(&mut self, user_id: u64, result: Result<FollowOutcome, ApiError>) {
        if self.viewed_user_id() != Some(user_id) {
            log::debug!("follow result for user {} no longer displayed", user_id);
            return;
        }
        match result {
            Ok(outcome) => match outcome.status {
                FollowStatus::Following => self.follow.reconcile(true, None),
                FollowStatus::NotFollowing => self.follow.reconcile(false, None),
                FollowStatus::Requested => {
                    // Private account: nothing changed yet, the request waits
                    self.follow.rollback();
                    self.follow_requested = true;
                }
            },
            Err(e) => {
                log::error!("Follow toggle failed for user {}: {}", user_id, e);
                self.follow.rollback();
            }
        }
    }

    pub fn toggle_block(&mut self) {
        let Some(user_id) = self.viewed_user_id() else {
            return;
        };
        if !self.block.begin() {
            return;
        }

        let block = self.block.flag();
        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(ApiRequest::SetBlock { user_id, block }).is_ok());
        if !sent {
            log::error!("Failed to dispatch block toggle: worker unavailable");
            self.block.rollback();
        }
    }

    pub fn on_block_result(&mut self, user_id: u64, result: Result<(), ApiError>) {
        if self.viewed_user_id() != Some(user_id) {
            log::debug!("block result for user {} no longer displayed", user_id);
            return;
        }
        match result {
            Ok(()) => {
                self.block.confirm();
                if self.block.flag() {
                    // The server drops the follow relation when blocking
                    if self.follow.flag() {
                        let count = self.follow.count().map(|c| c - 1);
                        self.follow.hydrate(false, count);
                    }
                    self.follow_requested = false;
                }
            }
            Err(e) => {
                log::error!("Block toggle failed for user {}: {}", user_id, e);
                self.block.rollback();
            }
        }
    }

    pub fn toggle_mute(&mut self) {
        let Some(user_id) = self.viewed_user_id() else {
            return;
        };
        if !self.mute.begin() {
            return;
        }

        let mute = self.mute.flag();
        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(ApiRequest::SetMute { user_id, mute }).is_ok());
        if !sent {
            log::error!("Failed to dispatch mute toggle: worker unavailable");
            self.mute.rollback();
        }
    }

    pub fn on_mute_result(&mut self, user_id: u64, result: Result<(), ApiError>) {
        if self.viewed_user_id() != Some(user_id) {
            log::debug!("mute result for user {} no longer displayed", user_id);
            return;
        }
        match result {
            Ok(()) => self.mute.confirm(),
            Err(e) => {
                log::error!("Mute toggle failed for user {}: {}", user_id, e);
                self.mute.rollback();
            }
        }
    }
}

impl Default for ProfileState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "profile_state_tests.rs"]
mod profile_state_tests;
