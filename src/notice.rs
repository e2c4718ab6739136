//! Notice module
//!
//! Transient session notices surfaced to whatever renders the session:
//! config warnings, transport breakdowns. Toggle failures never come through
//! here - they revert silently.

mod notice_state;

pub use notice_state::{Notice, NoticeLevel, NoticeState};
