use std::time::Instant;

use crate::api::client::ApiError;
use crate::api::types::{SearchResults, SearchScope};
use crate::config::SearchConfig;

use super::debouncer::Debouncer;

/// A query ready to go on the wire, produced when the debounce fires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDispatch {
    pub query: String,
    pub scope: SearchScope,
    pub limit: u32,
    /// Sequence number recorded as "latest"; the response echoes it back
    pub request_id: u64,
}

/// Debounced, race-safe search state for one UI surface.
///
/// The input text is recorded on every keystroke so the UI echoes it with no
/// delay; the network only sees at most one query per pause in typing. A
/// monotonically increasing sequence number identifies the newest dispatched
/// query, and only the response carrying that number may update the visible
/// results - anything else arrives too late and is dropped on the floor.
#[derive(Debug)]
pub struct SearchState {
    scope: SearchScope,
    limit: u32,
    min_query_len: usize,
    query: String,
    debouncer: Debouncer,
    /// Sequence counter; advanced on every dispatch and on sub-threshold
    /// clears so superseded responses can be recognized
    seq: u64,
    /// Sequence number of the in-flight request, if any
    latest: Option<u64>,
    results: SearchResults,
    loading: bool,
}

impl SearchState {
    pub fn new(scope: SearchScope, config: &SearchConfig) -> Self {
        Self {
            scope,
            limit: config.limit,
            min_query_len: config.min_query_len,
            query: String::new(),
            debouncer: Debouncer::new(std::time::Duration::from_millis(config.debounce_ms)),
            seq: 0,
            latest: None,
            results: SearchResults::default(),
            loading: false,
        }
    }

    /// Override the per-request result limit (the invite picker wants a
    /// handful, not a page)
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Record a keystroke.
    ///
    /// Always supersedes any scheduled dispatch. Below the minimum query
    /// length the surface goes quiet immediately: results and the loading
    /// indicator clear, and the sequence counter advances so a still-in-
    /// flight response lands stale.
    pub fn on_input(&mut self, text: &str, now: Instant) {
        self.query = text.to_string();
        self.debouncer.cancel();

        if self.query.chars().count() < self.min_query_len {
            self.results = SearchResults::default();
            self.loading = false;
            self.seq = self.seq.wrapping_add(1);
            self.latest = None;
            return;
        }

        self.debouncer.schedule_execution_at(now);
    }

    /// Fire the dispatch if the quiet period has elapsed.
    ///
    /// Called from the session tick. Increments the sequence counter,
    /// records it as latest, and turns the loading indicator on.
    pub fn poll_dispatch(&mut self, now: Instant) -> Option<SearchDispatch> {
        if !self.debouncer.should_execute_at(now) {
            return None;
        }
        self.debouncer.mark_executed();

        self.seq = self.seq.wrapping_add(1);
        self.latest = Some(self.seq);
        self.loading = true;

        Some(SearchDispatch {
            query: self.query.clone(),
            scope: self.scope,
            limit: self.limit,
            request_id: self.seq,
        })
    }

    /// Apply a response if it is still the latest; discard it silently
    /// otherwise. Loading clears only for the latest response, so a stale
    /// completion never blanks the indicator of a newer in-flight query.
    pub fn on_response(&mut self, request_id: u64, result: Result<SearchResults, ApiError>) {
        if self.latest != Some(request_id) {
            log::debug!("discarding superseded search response (seq {})", request_id);
            return;
        }

        match result {
            Ok(results) => {
                self.results = results;
            }
            Err(e) => {
                log::error!("search failed: {}", e);
                self.results = SearchResults::default();
            }
        }
        self.loading = false;
        self.latest = None;
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
