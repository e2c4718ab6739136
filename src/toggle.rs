//! Optimistic toggle module
//!
//! One state machine used by every binary user action that wants instant
//! feedback: like, save, follow, block, mute, community join. The flag (and
//! its dependent counter, when there is one) flips before the network round
//! trip, then either reconciles with the server's answer or rolls back to
//! the exact pre-toggle values.

mod toggle_state;

pub use toggle_state::ToggleState;
