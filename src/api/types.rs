//! Wire models and worker message types
//!
//! The serde structs mirror the platform's JSON payloads. `ApiRequest` and
//! `ApiResponse` are the messages exchanged with the API worker thread;
//! every response carries the identifiers the session needs to route it and
//! to recognize stale completions.

use serde::{Deserialize, Serialize};

use super::client::ApiError;

/// A user as it appears in suggestion lists and search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: u64,
    pub username: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

/// A dream post as returned by the feed endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DreamPost {
    pub id: u64,
    pub author: UserSummary,
    pub title: Option<String>,
    pub body: String,
    #[serde(default)]
    pub dream_kind: Option<String>,
    pub created_at: String,
    pub likes_count: i64,
    pub is_liked: bool,
    pub is_saved: bool,
}

/// Authoritative outcome of a like toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeOutcome {
    pub is_liked: bool,
    pub likes_count: i64,
}

/// Authoritative outcome of a save toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOutcome {
    pub is_saved: bool,
}

/// Relationship state reported by the follow endpoint
///
/// Private accounts answer a follow with `Requested` instead of `Following`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowStatus {
    Following,
    Requested,
    NotFollowing,
}

/// Authoritative outcome of a follow or unfollow call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowOutcome {
    pub status: FollowStatus,
}

/// A user profile as returned by the user endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileView {
    pub user: UserSummary,
    #[serde(default)]
    pub bio: Option<String>,
    pub follower_count: i64,
    pub following_count: i64,
    pub is_following: bool,
    #[serde(default)]
    pub follow_requested: bool,
    #[serde(default)]
    pub is_blocked: bool,
    #[serde(default)]
    pub is_muted: bool,
    #[serde(default)]
    pub is_private: bool,
}

/// A community as returned by the community endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityView {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub member_count: i64,
    pub is_member: bool,
    #[serde(default)]
    pub is_moderator: bool,
}

/// A hashtag hit in search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagHit {
    pub tag: String,
    pub post_count: i64,
}

/// Per-category search results with counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchResults {
    #[serde(default)]
    pub dreams: Vec<DreamPost>,
    #[serde(default)]
    pub users: Vec<UserSummary>,
    #[serde(default)]
    pub hashtags: Vec<HashtagHit>,
    #[serde(default)]
    pub counts: SearchCounts,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.dreams.is_empty() && self.users.is_empty() && self.hashtags.is_empty()
    }
}

/// Result counts per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SearchCounts {
    pub dreams: i64,
    pub users: i64,
    pub hashtags: i64,
}

/// An entry in the notification inbox
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboxNotification {
    pub id: u64,
    pub actor: UserSummary,
    pub kind: String,
    pub text: String,
    pub created_at: String,
    pub is_read: bool,
}

/// Which category a search query targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    All,
    Dreams,
    Users,
    Hashtags,
}

impl SearchScope {
    /// Value of the `type` query parameter
    pub fn as_param(self) -> &'static str {
        match self {
            SearchScope::All => "all",
            SearchScope::Dreams => "dreams",
            SearchScope::Users => "users",
            SearchScope::Hashtags => "hashtags",
        }
    }
}

/// Which UI surface issued a search request
///
/// Lets the session route a tagged response back to the surface that owns
/// the matching sequence counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSurface {
    Global,
    CommunityInvite,
}

/// Which surface issued a follow toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowOrigin {
    Suggestions,
    Profile,
}

/// Feed tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedTab {
    Following,
    ForYou,
    Mine,
}

impl FeedTab {
    /// Value of the `tab` query parameter
    pub fn as_param(self) -> &'static str {
        match self {
            FeedTab::Following => "following",
            FeedTab::ForYou => "foryou",
            FeedTab::Mine => "mine",
        }
    }
}

/// Requests sent to the API worker thread
#[derive(Debug)]
pub enum ApiRequest {
    FetchFeed {
        tab: FeedTab,
        community_id: Option<u64>,
    },
    ToggleLike {
        dream_id: u64,
    },
    ToggleSave {
        dream_id: u64,
    },
    DeleteDream {
        dream_id: u64,
    },
    FetchProfile {
        user_id: u64,
    },
    /// Follow (`follow == true`) or unfollow a user
    SetFollow {
        origin: FollowOrigin,
        user_id: u64,
        follow: bool,
    },
    SetBlock {
        user_id: u64,
        block: bool,
    },
    SetMute {
        user_id: u64,
        mute: bool,
    },
    FetchSuggestions,
    FetchCommunity {
        community_id: u64,
    },
    JoinCommunity {
        community_id: u64,
    },
    FetchInbox,
    MarkRead {
        notification_id: u64,
    },
    MarkAllRead,
    Search {
        surface: SearchSurface,
        query: String,
        scope: SearchScope,
        limit: u32,
        /// Sequence number captured at dispatch, echoed back in the response
        request_id: u64,
    },
}

/// Responses received from the API worker thread
#[derive(Debug)]
pub enum ApiResponse {
    Feed {
        result: Result<Vec<DreamPost>, ApiError>,
    },
    Like {
        dream_id: u64,
        result: Result<LikeOutcome, ApiError>,
    },
    Save {
        dream_id: u64,
        result: Result<SaveOutcome, ApiError>,
    },
    DreamDeleted {
        dream_id: u64,
        result: Result<(), ApiError>,
    },
    Profile {
        result: Result<ProfileView, ApiError>,
    },
    Follow {
        origin: FollowOrigin,
        user_id: u64,
        result: Result<FollowOutcome, ApiError>,
    },
    Block {
        user_id: u64,
        result: Result<(), ApiError>,
    },
    Mute {
        user_id: u64,
        result: Result<(), ApiError>,
    },
    Suggestions {
        result: Result<Vec<UserSummary>, ApiError>,
    },
    Community {
        result: Result<CommunityView, ApiError>,
    },
    Joined {
        community_id: u64,
        result: Result<(), ApiError>,
    },
    Inbox {
        result: Result<Vec<InboxNotification>, ApiError>,
    },
    MarkedRead {
        notification_id: u64,
        result: Result<(), ApiError>,
    },
    MarkedAllRead {
        result: Result<(), ApiError>,
    },
    Search {
        surface: SearchSurface,
        request_id: u64,
        result: Result<SearchResults, ApiError>,
    },
}
