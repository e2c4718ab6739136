//! Feed module
//!
//! The dream feed page: tabbed fetch plus per-dream like and save toggles.
//! Like carries the likes count with it; save is a bare flag.

mod feed_state;

pub use feed_state::{FeedEntry, FeedState};
