//! HTTP client for the platform API
//!
//! Thin wrapper over reqwest: builds URLs from the configured base, attaches
//! the bearer token when present, and maps transport/status/decode failures
//! into the `ApiError` taxonomy. All methods are unary request/response;
//! nothing here is cancelled mid-flight.

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use crate::config::Config;

use super::types::{
    CommunityView, DreamPost, FeedTab, FollowOutcome, FollowStatus, InboxNotification,
    LikeOutcome, ProfileView, SaveOutcome, SearchResults, SearchScope, UserSummary,
};

/// Errors that can occur during API operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The client is missing required configuration
    #[error("API not configured: {message}")]
    NotConfigured { message: String },

    /// The operation requires an auth credential and none is present
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Network error during the request
    #[error("Network error: {message}")]
    Network { message: String },

    /// The server answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to decode the response body
    #[error("Parse error: {message}")]
    Parse { message: String },
}

/// Client for the Somnia platform API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client from configuration
    ///
    /// Fails when no base URL is configured; a missing auth token is fine
    /// (the session just stays unauthenticated).
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let base_url = config
            .api
            .base_url
            .as_ref()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| ApiError::NotConfigured {
                message: "Missing base_url. Add 'base_url' in the [api] section of ~/.config/somnia/config.toml".to_string(),
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .build()
            .map_err(|e| ApiError::NotConfigured {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: config
                .auth
                .token
                .as_ref()
                .filter(|t| !t.trim().is_empty())
                .cloned(),
        })
    }

    /// Whether this client carries an auth credential
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = builder.send().await.map_err(|e| ApiError::Network {
            message: e.to_string(),
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Pull the server's error message out of the body when there is one
        let message = match response.text().await {
            Ok(body) if !body.is_empty() => body,
            _ => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = self.send(builder).await?;
        response.json::<T>().await.map_err(|e| ApiError::Parse {
            message: e.to_string(),
        })
    }

    async fn unit(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.send(builder).await.map(|_| ())
    }

    pub async fn fetch_feed(
        &self,
        tab: FeedTab,
        community_id: Option<u64>,
    ) -> Result<Vec<DreamPost>, ApiError> {
        let mut builder = self
            .request(Method::GET, "/api/dreams/")
            .query(&[("tab", tab.as_param())]);
        if let Some(id) = community_id {
            builder = builder.query(&[("community_id", id)]);
        }
        self.json(builder).await
    }

    pub async fn toggle_like(&self, dream_id: u64) -> Result<LikeOutcome, ApiError> {
        self.json(self.request(Method::POST, &format!("/api/dreams/{}/like/", dream_id)))
            .await
    }

    pub async fn toggle_save(&self, dream_id: u64) -> Result<SaveOutcome, ApiError> {
        self.json(self.request(Method::POST, &format!("/api/dreams/{}/save/", dream_id)))
            .await
    }

    pub async fn delete_dream(&self, dream_id: u64) -> Result<(), ApiError> {
        self.unit(self.request(Method::DELETE, &format!("/api/dreams/{}/", dream_id)))
            .await
    }

    pub async fn fetch_profile(&self, user_id: u64) -> Result<ProfileView, ApiError> {
        self.json(self.request(Method::GET, &format!("/api/users/{}/", user_id)))
            .await
    }

    pub async fn follow(&self, user_id: u64) -> Result<FollowOutcome, ApiError> {
        self.json(self.request(Method::POST, &format!("/api/users/{}/follow/", user_id)))
            .await
    }

    /// Unfollow answers an empty body; the outcome is synthesized
    pub async fn unfollow(&self, user_id: u64) -> Result<FollowOutcome, ApiError> {
        self.unit(self.request(Method::DELETE, &format!("/api/users/{}/follow/", user_id)))
            .await?;
        Ok(FollowOutcome {
            status: FollowStatus::NotFollowing,
        })
    }

    pub async fn block(&self, user_id: u64) -> Result<(), ApiError> {
        self.unit(self.request(Method::POST, &format!("/api/users/{}/block/", user_id)))
            .await
    }

    pub async fn unblock(&self, user_id: u64) -> Result<(), ApiError> {
        self.unit(self.request(Method::DELETE, &format!("/api/users/{}/block/", user_id)))
            .await
    }

    pub async fn mute(&self, user_id: u64) -> Result<(), ApiError> {
        self.unit(self.request(Method::POST, &format!("/api/users/{}/mute/", user_id)))
            .await
    }

    pub async fn unmute(&self, user_id: u64) -> Result<(), ApiError> {
        self.unit(self.request(Method::DELETE, &format!("/api/users/{}/mute/", user_id)))
            .await
    }

    /// Suggested users require a credential; the session never calls this
    /// unauthenticated, but the guard keeps the invariant local too.
    pub async fn suggested_users(&self) -> Result<Vec<UserSummary>, ApiError> {
        if self.token.is_none() {
            return Err(ApiError::NotAuthenticated);
        }
        self.json(self.request(Method::GET, "/api/users/suggested/"))
            .await
    }

    pub async fn fetch_community(&self, community_id: u64) -> Result<CommunityView, ApiError> {
        self.json(self.request(Method::GET, &format!("/api/communities/{}/", community_id)))
            .await
    }

    pub async fn join_community(&self, community_id: u64) -> Result<(), ApiError> {
        self.unit(self.request(
            Method::POST,
            &format!("/api/communities/{}/join/", community_id),
        ))
        .await
    }

    pub async fn fetch_inbox(&self) -> Result<Vec<InboxNotification>, ApiError> {
        self.json(self.request(Method::GET, "/api/notifications/"))
            .await
    }

    pub async fn mark_notification_read(&self, notification_id: u64) -> Result<(), ApiError> {
        self.unit(self.request(
            Method::PATCH,
            &format!("/api/notifications/{}/read/", notification_id),
        ))
        .await
    }

    pub async fn mark_all_notifications_read(&self) -> Result<(), ApiError> {
        self.unit(self.request(Method::PATCH, "/api/notifications/read_all/"))
            .await
    }

    pub async fn search(
        &self,
        query: &str,
        scope: SearchScope,
        limit: u32,
    ) -> Result<SearchResults, ApiError> {
        #[derive(serde::Deserialize)]
        struct SearchEnvelope {
            results: SearchResults,
        }

        let builder = self.request(Method::GET, "/api/search/").query(&[
            ("q", query.to_string()),
            ("type", scope.as_param().to_string()),
            ("limit", limit.to_string()),
        ]);
        self.json::<SearchEnvelope>(builder).await.map(|e| e.results)
    }
}
