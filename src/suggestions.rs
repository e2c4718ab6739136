//! Suggestions module
//!
//! The "users you might follow" cache: fetched once per session and shared
//! by every surface that renders suggestions, so the list is never fetched
//! per consumer. Holds its own optimistic follow toggle over a locally
//! tracked followed-set.

mod suggestions_state;

pub use suggestions_state::SuggestionsState;
