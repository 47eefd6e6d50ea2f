//! Configuration module for the douyin-downloader.
//!
//! API endpoints come from the environment (`DOUYIN_MEDIA_API`,
//! `DOUYIN_USER_API`) or CLI flags and live in an explicit [`Config`] struct
//! that is passed to the clients at construction.

pub mod loader;
pub mod validation;

pub use loader::{normalize_api_base, Config};
pub use validation::validate_config;
