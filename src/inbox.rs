//! Inbox module
//!
//! The notification inbox: mark-one-read and mark-all-read as optimistic
//! updates, with the unread count derived from the entries.

mod inbox_state;

pub use inbox_state::{InboxEntry, InboxState};
