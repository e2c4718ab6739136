use std::sync::mpsc::Sender;

use crate::api::client::ApiError;
use crate::api::types::{ApiRequest, CommunityView, SearchScope};
use crate::config::SearchConfig;
use crate::search::SearchState;
use crate::toggle::ToggleState;

/// The invite picker wants a short list, not a results page
const INVITE_RESULT_LIMIT: u32 = 8;

/// Community page state
#[derive(Debug)]
pub struct CommunityState {
    community: Option<CommunityView>,
    loading: bool,
    /// Membership flag with the member count riding along
    joined: ToggleState,
    /// Moderator invite picker; dispatches are tagged CommunityInvite
    pub invite_search: SearchState,
    request_tx: Option<Sender<ApiRequest>>,
}

impl CommunityState {
    pub fn new(search_config: &SearchConfig) -> Self {
        Self {
            community: None,
            loading: false,
            joined: ToggleState::new(false),
            invite_search: SearchState::new(SearchScope::Users, search_config)
                .with_limit(INVITE_RESULT_LIMIT),
            request_tx: None,
        }
    }

    pub fn set_request_channel(&mut self, request_tx: Sender<ApiRequest>) {
        self.request_tx = Some(request_tx);
    }

    pub fn community(&self) -> Option<&CommunityView> {
        self.community.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_member(&self) -> bool {
        self.joined.flag()
    }

    pub fn member_count(&self) -> Option<i64> {
        self.joined.count()
    }

    fn viewed_community_id(&self) -> Option<u64> {
        self.community.as_ref().map(|c| c.id)
    }

    pub fn load(&mut self, community_id: u64) {
        self.loading = true;
        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(ApiRequest::FetchCommunity { community_id }).is_ok());
        if !sent {
            log::error!("Failed to request community: worker unavailable");
            self.loading = false;
        }
    }

    pub fn on_community(&mut self, result: Result<CommunityView, ApiError>) {
        match result {
            Ok(view) => {
                self.joined.hydrate(view.is_member, Some(view.member_count));
                self.community = Some(view);
            }
            Err(e) => {
                log::error!("Error loading community: {}", e);
            }
        }
        self.loading = false;
    }

    /// Optimistically join the viewed community. Joining is one-way from
    /// this page; an existing membership makes this a no-op.
    pub fn join(&mut self) {
        let Some(community_id) = self.viewed_community_id() else {
            return;
        };
        if self.joined.flag() {
            log::debug!("already a member of community {}", community_id);
            return;
        }
        if !self.joined.begin() {
            return;
        }

        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(ApiRequest::JoinCommunity { community_id }).is_ok());
        if !sent {
            log::error!("Failed to dispatch join: worker unavailable");
            self.joined.rollback();
        }
    }

    pub fn on_join_result(&mut self, community_id: u64, result: Result<(), ApiError>) {
        if self.viewed_community_id() != Some(community_id) {
            log::debug!(
                "join result for community {} no longer displayed",
                community_id
            );
            return;
        }
        match result {
            Ok(()) => self.joined.confirm(),
            Err(e) => {
                log::error!("Join failed for community {}: {}", community_id, e);
                self.joined.rollback();
            }
        }
    }
}

#[cfg(test)]
#[path = "community_state_tests.rs"]
mod community_state_tests;
