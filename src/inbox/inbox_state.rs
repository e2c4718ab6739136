use std::sync::mpsc::Sender;

use crate::api::client::ApiError;
use crate::api::types::{ApiRequest, InboxNotification};
use crate::toggle::ToggleState;

/// One notification with its optimistic read flag
#[derive(Debug)]
pub struct InboxEntry {
    pub note: InboxNotification,
    read: ToggleState,
}

impl InboxEntry {
    fn new(note: InboxNotification) -> Self {
        let read = ToggleState::new(note.is_read);
        Self { note, read }
    }

    pub fn is_read(&self) -> bool {
        self.read.flag()
    }
}

/// Notification inbox state
#[derive(Debug)]
pub struct InboxState {
    entries: Vec<InboxEntry>,
    loading: bool,
    /// Ids that were unread when mark-all was dispatched, kept for rollback
    mark_all_snapshot: Option<Vec<u64>>,
    request_tx: Option<Sender<ApiRequest>>,
}

impl InboxState {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            loading: false,
            mark_all_snapshot: None,
            request_tx: None,
        }
    }

    pub fn set_request_channel(&mut self, request_tx: Sender<ApiRequest>) {
        self.request_tx = Some(request_tx);
    }

    pub fn entries(&self) -> &[InboxEntry] {
        &self.entries
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_read()).count()
    }

    fn entry_mut(&mut self, notification_id: u64) -> Option<&mut InboxEntry> {
        self.entries
            .iter_mut()
            .find(|e| e.note.id == notification_id)
    }

    pub fn load(&mut self) {
        self.loading = true;
        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(ApiRequest::FetchInbox).is_ok());
        if !sent {
            log::error!("Failed to request inbox: worker unavailable");
            self.loading = false;
        }
    }

    pub fn on_inbox(&mut self, result: Result<Vec<InboxNotification>, ApiError>) {
        match result {
            Ok(notes) => {
                self.entries = notes.into_iter().map(InboxEntry::new).collect();
            }
            Err(e) => {
                log::error!("Error loading inbox: {}", e);
            }
        }
        self.loading = false;
    }

    /// Optimistically mark one notification read
    pub fn mark_read(&mut self, notification_id: u64) {
        let Some(entry) = self.entry_mut(notification_id) else {
            return;
        };
        if entry.read.flag() || !entry.read.begin() {
            return;
        }

        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(ApiRequest::MarkRead { notification_id }).is_ok());
        if !sent {
            log::error!("Failed to dispatch mark-read: worker unavailable");
            if let Some(entry) = self.entry_mut(notification_id) {
                entry.read.rollback();
            }
        }
    }

    pub fn on_mark_read_result(&mut self, notification_id: u64, result: Result<(), ApiError>) {
        let Some(entry) = self.entry_mut(notification_id) else {
            log::debug!("mark-read result for unknown notification {}", notification_id);
            return;
        };
        match result {
            Ok(()) => entry.read.confirm(),
            Err(e) => {
                log::error!("Mark-read failed for {}: {}", notification_id, e);
                entry.read.rollback();
            }
        }
    }

    /// Optimistically mark everything read. The set of entries that were
    /// unread is remembered so a failure restores exactly those.
    pub fn mark_all_read(&mut self) {
        if self.mark_all_snapshot.is_some() {
            log::debug!("mark-all already pending");
            return;
        }

        let unread: Vec<u64> = self
            .entries
            .iter()
            .filter(|e| !e.is_read())
            .map(|e| e.note.id)
            .collect();
        if unread.is_empty() {
            return;
        }

        for id in &unread {
            if let Some(entry) = self.entry_mut(*id) {
                entry.read.hydrate(true, None);
            }
        }
        self.mark_all_snapshot = Some(unread);

        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(ApiRequest::MarkAllRead).is_ok());
        if !sent {
            log::error!("Failed to dispatch mark-all-read: worker unavailable");
            self.rollback_mark_all();
        }
    }

    pub fn on_mark_all_result(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.mark_all_snapshot = None;
            }
            Err(e) => {
                log::error!("Mark-all-read failed: {}", e);
                self.rollback_mark_all();
            }
        }
    }

    fn rollback_mark_all(&mut self) {
        if let Some(unread) = self.mark_all_snapshot.take() {
            for id in unread {
                if let Some(entry) = self.entry_mut(id) {
                    entry.read.hydrate(false, None);
                }
            }
        }
    }
}

impl Default for InboxState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "inbox_state_tests.rs"]
mod inbox_state_tests;
