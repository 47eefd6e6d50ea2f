//! API clients for the extraction and user listing services.

pub mod client;
pub mod types;

pub use client::DouyinApi;
pub use types::{ApiEnvelope, MediaKind, UserInfo, UserWorksPage, WorkInfo, WorkMedia, WorkRef};

/// Initial cursor for user listing pagination.
pub const FIRST_PAGE_CURSOR: &str = "0";
