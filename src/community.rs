//! Community module
//!
//! A community page: optimistic membership join (member count rides along)
//! and the moderator invite picker, which is its own debounced race-safe
//! search over the users scope.

mod community_state;

pub use community_state::CommunityState;
