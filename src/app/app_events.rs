use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use super::app_state::App;
use crate::api::types::{ApiRequest, ApiResponse, FollowOrigin, SearchSurface};
use crate::search::SearchDispatch;

impl App {
    /// Advance the session.
    ///
    /// Called from the embedding event loop: fires search dispatches whose
    /// quiet period has elapsed, drains worker responses, and expires
    /// notices. Never blocks.
    pub fn tick(&mut self, now: Instant) {
        self.dispatch_due_searches(now);
        self.poll_responses(now);
        self.notice.clear_if_expired_at(now);
    }

    /// Record a keystroke in the global search box
    pub fn search_input(&mut self, text: &str, now: Instant) {
        self.search.on_input(text, now);
    }

    /// Record a keystroke in the moderator invite picker
    pub fn invite_search_input(&mut self, text: &str, now: Instant) {
        self.community.invite_search.on_input(text, now);
    }

    fn dispatch_due_searches(&mut self, now: Instant) {
        if let Some(dispatch) = self.search.poll_dispatch(now) {
            self.send_search(SearchSurface::Global, dispatch);
        }
        if let Some(dispatch) = self.community.invite_search.poll_dispatch(now) {
            self.send_search(SearchSurface::CommunityInvite, dispatch);
        }
    }

    fn send_search(&mut self, surface: SearchSurface, dispatch: SearchDispatch) {
        let request = ApiRequest::Search {
            surface,
            query: dispatch.query,
            scope: dispatch.scope,
            limit: dispatch.limit,
            request_id: dispatch.request_id,
        };
        if self.request_tx.send(request).is_err() {
            log::error!("API worker unavailable, dropping search dispatch");
        }
    }

    /// Drain the response channel without blocking and route everything.
    fn poll_responses(&mut self, now: Instant) {
        let mut responses = Vec::new();
        let mut disconnected = false;

        loop {
            match self.response_rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        for response in responses {
            self.handle_response(response);
        }

        if disconnected && !self.worker_down {
            self.worker_down = true;
            self.notice
                .show_error_at("API worker disconnected unexpectedly", now);
        }
    }

    /// Route one worker response to the state that owns it.
    ///
    /// Correlation is by tag: entity id for toggles, origin for follow
    /// toggles (the suggestion cache and the profile page both follow),
    /// surface + sequence number for searches.
    fn handle_response(&mut self, response: ApiResponse) {
        match response {
            ApiResponse::Feed { result } => self.feed.on_feed(result),
            ApiResponse::Like { dream_id, result } => self.feed.on_like_result(dream_id, result),
            ApiResponse::Save { dream_id, result } => self.feed.on_save_result(dream_id, result),
            ApiResponse::DreamDeleted { dream_id, result } => {
                self.feed.on_delete_result(dream_id, result)
            }
            ApiResponse::Profile { result } => self.profile.on_profile(result),
            ApiResponse::Follow {
                origin,
                user_id,
                result,
            } => match origin {
                FollowOrigin::Suggestions => self.suggestions.on_follow_result(user_id, result),
                FollowOrigin::Profile => self.profile.on_follow_result(user_id, result),
            },
            ApiResponse::Block { user_id, result } => self.profile.on_block_result(user_id, result),
            ApiResponse::Mute { user_id, result } => self.profile.on_mute_result(user_id, result),
            ApiResponse::Suggestions { result } => self.suggestions.on_loaded(result),
            ApiResponse::Community { result } => self.community.on_community(result),
            ApiResponse::Joined {
                community_id,
                result,
            } => self.community.on_join_result(community_id, result),
            ApiResponse::Inbox { result } => self.inbox.on_inbox(result),
            ApiResponse::MarkedRead {
                notification_id,
                result,
            } => self.inbox.on_mark_read_result(notification_id, result),
            ApiResponse::MarkedAllRead { result } => self.inbox.on_mark_all_result(result),
            ApiResponse::Search {
                surface,
                request_id,
                result,
            } => match surface {
                SearchSurface::Global => self.search.on_response(request_id, result),
                SearchSurface::CommunityInvite => {
                    self.community.invite_search.on_response(request_id, result)
                }
            },
        }
    }
}
