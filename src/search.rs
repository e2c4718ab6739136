//! Search module
//!
//! Debounced, race-safe incremental search. Each UI surface that searches
//! (the global search page, the moderator invite picker) owns its own
//! `SearchState`; the session forwards dispatches to the API worker and
//! routes tagged responses back.

pub mod debouncer;
mod search_state;

pub use debouncer::Debouncer;
pub use search_state::{SearchDispatch, SearchState};
