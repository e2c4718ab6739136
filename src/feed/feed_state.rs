use std::sync::mpsc::Sender;

use crate::api::client::ApiError;
use crate::api::types::{ApiRequest, DreamPost, FeedTab, LikeOutcome, SaveOutcome};
use crate::toggle::ToggleState;

/// One dream in the feed with its optimistic action state
#[derive(Debug)]
pub struct FeedEntry {
    pub post: DreamPost,
    pub like: ToggleState,
    pub save: ToggleState,
    deleting: bool,
}

impl FeedEntry {
    fn new(post: DreamPost) -> Self {
        let like = ToggleState::with_count(post.is_liked, post.likes_count);
        let save = ToggleState::new(post.is_saved);
        Self {
            post,
            like,
            save,
            deleting: false,
        }
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }
}

/// Feed page state
#[derive(Debug)]
pub struct FeedState {
    entries: Vec<FeedEntry>,
    tab: FeedTab,
    community_id: Option<u64>,
    loading: bool,
    request_tx: Option<Sender<ApiRequest>>,
}

impl FeedState {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            tab: FeedTab::Following,
            community_id: None,
            loading: false,
            request_tx: None,
        }
    }

    pub fn set_request_channel(&mut self, request_tx: Sender<ApiRequest>) {
        self.request_tx = Some(request_tx);
    }

    pub fn entries(&self) -> &[FeedEntry] {
        &self.entries
    }

    pub fn entry(&self, dream_id: u64) -> Option<&FeedEntry> {
        self.entries.iter().find(|e| e.post.id == dream_id)
    }

    fn entry_mut(&mut self, dream_id: u64) -> Option<&mut FeedEntry> {
        self.entries.iter_mut().find(|e| e.post.id == dream_id)
    }

    pub fn tab(&self) -> FeedTab {
        self.tab
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Fetch the feed for a tab (optionally scoped to a community).
    /// The previous entries stay visible until the new page arrives.
    pub fn load(&mut self, tab: FeedTab, community_id: Option<u64>) {
        self.tab = tab;
        self.community_id = community_id;
        self.loading = true;

        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(ApiRequest::FetchFeed { tab, community_id }).is_ok());
        if !sent {
            log::error!("Failed to request feed: worker unavailable");
            self.loading = false;
        }
    }

    pub fn on_feed(&mut self, result: Result<Vec<DreamPost>, ApiError>) {
        match result {
            Ok(posts) => {
                self.entries = posts.into_iter().map(FeedEntry::new).collect();
            }
            Err(e) => {
                log::error!("Error loading feed: {}", e);
            }
        }
        self.loading = false;
    }

    /// Optimistic like flip for one dream
    pub fn toggle_like(&mut self, dream_id: u64) {
        let Some(entry) = self.entry_mut(dream_id) else {
            log::warn!("like toggle for unknown dream {}", dream_id);
            return;
        };
        if !entry.like.begin() {
            return;
        }

        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(ApiRequest::ToggleLike { dream_id }).is_ok());
        if !sent {
            log::error!("Failed to dispatch like toggle: worker unavailable");
            if let Some(entry) = self.entry_mut(dream_id) {
                entry.like.rollback();
            }
        }
    }

    pub fn on_like_result(&mut self, dream_id: u64, result: Result<LikeOutcome, ApiError>) {
        let Some(entry) = self.entry_mut(dream_id) else {
            // The feed was reloaded while the toggle was in flight
            log::debug!("like result for dream {} no longer in feed", dream_id);
            return;
        };
        match result {
            Ok(outcome) => entry
                .like
                .reconcile(outcome.is_liked, Some(outcome.likes_count)),
            Err(e) => {
                log::error!("Like toggle failed for dream {}: {}", dream_id, e);
                entry.like.rollback();
            }
        }
    }

    /// Optimistic save flip for one dream
    pub fn toggle_save(&mut self, dream_id: u64) {
        let Some(entry) = self.entry_mut(dream_id) else {
            log::warn!("save toggle for unknown dream {}", dream_id);
            return;
        };
        if !entry.save.begin() {
            return;
        }

        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(ApiRequest::ToggleSave { dream_id }).is_ok());
        if !sent {
            log::error!("Failed to dispatch save toggle: worker unavailable");
            if let Some(entry) = self.entry_mut(dream_id) {
                entry.save.rollback();
            }
        }
    }

    pub fn on_save_result(&mut self, dream_id: u64, result: Result<SaveOutcome, ApiError>) {
        let Some(entry) = self.entry_mut(dream_id) else {
            log::debug!("save result for dream {} no longer in feed", dream_id);
            return;
        };
        match result {
            Ok(outcome) => entry.save.reconcile(outcome.is_saved, None),
            Err(e) => {
                log::error!("Save toggle failed for dream {}: {}", dream_id, e);
                entry.save.rollback();
            }
        }
    }

    /// Delete one's own dream. Not optimistic: the entry only disappears on
    /// confirmation, the button just locks meanwhile.
    pub fn delete(&mut self, dream_id: u64) {
        let Some(entry) = self.entry_mut(dream_id) else {
            return;
        };
        if entry.deleting {
            return;
        }
        entry.deleting = true;

        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(ApiRequest::DeleteDream { dream_id }).is_ok());
        if !sent {
            log::error!("Failed to dispatch delete: worker unavailable");
            if let Some(entry) = self.entry_mut(dream_id) {
                entry.deleting = false;
            }
        }
    }

    pub fn on_delete_result(&mut self, dream_id: u64, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.entries.retain(|e| e.post.id != dream_id);
            }
            Err(e) => {
                log::error!("Error deleting dream {}: {}", dream_id, e);
                if let Some(entry) = self.entry_mut(dream_id) {
                    entry.deleting = false;
                }
            }
        }
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "feed_state_tests.rs"]
mod feed_state_tests;
