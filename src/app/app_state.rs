use std::sync::mpsc::{self, Receiver, Sender};

use crate::api::client::ApiClient;
use crate::api::types::{ApiRequest, ApiResponse, SearchScope};
use crate::api::worker;
use crate::community::CommunityState;
use crate::config::Config;
use crate::error::SomniaError;
use crate::feed::FeedState;
use crate::inbox::InboxState;
use crate::notice::NoticeState;
use crate::profile::ProfileState;
use crate::search::SearchState;
use crate::suggestions::SuggestionsState;

/// The session aggregate.
///
/// Owns every page state, the single shared suggestion cache, and the
/// channels to the API worker. The embedding UI reads the page states,
/// calls their action methods, and drives `tick` from its event loop.
pub struct App {
    pub config: Config,
    pub feed: FeedState,
    pub profile: ProfileState,
    pub community: CommunityState,
    pub inbox: InboxState,
    /// Single instance per session; every suggestion surface reads this one
    pub suggestions: SuggestionsState,
    /// Global search page
    pub search: SearchState,
    pub notice: NoticeState,
    pub(super) request_tx: Sender<ApiRequest>,
    pub(super) response_rx: Receiver<ApiResponse>,
    /// Set once the worker's response channel disconnects
    pub(super) worker_down: bool,
}

impl App {
    /// Create the session and spawn the API worker.
    pub fn new(config: Config) -> Result<Self, SomniaError> {
        let client = ApiClient::from_config(&config)
            .map_err(|e| SomniaError::NotConfigured(e.to_string()))?;

        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        worker::spawn_worker(client, request_rx, response_tx);

        Ok(Self::with_channels(config, request_tx, response_rx))
    }

    /// Wire a session over explicit channels.
    ///
    /// `new` uses this with the worker's channels; tests use it with a
    /// scripted peer on the other end.
    pub fn with_channels(
        config: Config,
        request_tx: Sender<ApiRequest>,
        response_rx: Receiver<ApiResponse>,
    ) -> Self {
        let mut feed = FeedState::new();
        feed.set_request_channel(request_tx.clone());

        let mut profile = ProfileState::new();
        profile.set_request_channel(request_tx.clone());

        let mut community = CommunityState::new(&config.search);
        community.set_request_channel(request_tx.clone());

        let mut inbox = InboxState::new();
        inbox.set_request_channel(request_tx.clone());

        let mut suggestions = SuggestionsState::new();
        suggestions.set_request_channel(request_tx.clone());

        let search = SearchState::new(SearchScope::All, &config.search);

        let authenticated = config.is_authenticated();
        let mut app = Self {
            config,
            feed,
            profile,
            community,
            inbox,
            suggestions,
            search,
            notice: NoticeState::new(),
            request_tx,
            response_rx,
            worker_down: false,
        };
        // The one suggestion fetch of the session happens at construction
        app.suggestions.start(authenticated);
        app
    }
}
