// Configuration type definitions

use serde::Deserialize;

/// Default request timeout in seconds
fn default_timeout_secs() -> u64 {
    10
}

/// API configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the platform API, e.g. "https://api.somnia.example"
    pub base_url: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Auth configuration section
///
/// The presence of a token is what makes a session authenticated.
/// Unauthenticated sessions still browse public content but never request
/// personalized data such as follow suggestions.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuthConfig {
    /// Bearer token attached to every API request when present
    pub token: Option<String>,
}

/// Default quiet period before a search query is dispatched
fn default_debounce_ms() -> u64 {
    300
}

/// Default minimum query length before any search is attempted
fn default_min_query_len() -> usize {
    2
}

/// Default result limit per search request
fn default_limit() -> u32 {
    20
}

/// Search configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Quiet period in milliseconds between the last keystroke and dispatch
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Queries shorter than this are never dispatched
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    /// Maximum number of results requested per category
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            debounce_ms: default_debounce_ms(),
            min_query_len: default_min_query_len(),
            limit: default_limit(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Whether the session has an auth credential
    pub fn is_authenticated(&self) -> bool {
        self.auth
            .token
            .as_ref()
            .is_some_and(|t| !t.trim().is_empty())
    }
}
