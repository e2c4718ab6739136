//! API module for somnia
//!
//! Everything that touches the network: wire models, the HTTP client, the
//! request/response message enums, and the worker thread that executes
//! requests off the session thread.

pub mod client;
pub mod types;
pub mod worker;

pub use client::{ApiClient, ApiError};
pub use types::{ApiRequest, ApiResponse};
