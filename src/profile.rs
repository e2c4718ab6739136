//! Profile module
//!
//! The user profile page: follow (with follower count), block, and mute,
//! each an optimistic toggle against the relationship endpoints. Private
//! accounts answer a follow with "requested", which is not a follow.

mod profile_state;

pub use profile_state::ProfileState;
