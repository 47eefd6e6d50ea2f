//! Douyin Downloader - download Douyin works through an extraction API
//!
//! This library resolves Douyin share links (short or canonical) into media
//! metadata via an externally hosted extraction API, then downloads the
//! resulting media into a structured local directory tree.
//!
//! # Features
//!
//! - Download a single work (video, image set or animated-image set)
//! - Download every work of a user profile, with cursor pagination
//! - Skips files that already exist on disk
//! - Partial-failure tolerant batch mode
//!
//! # Example
//!
//! ```no_run
//! use douyin_downloader::{BatchState, Config, DouyinApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.media_api = Some("https://extract.example.com".to_string());
//!
//!     let api = DouyinApi::new(&config)?;
//!     let mut state = BatchState::default();
//!     douyin_downloader::download::download_work(
//!         &api,
//!         &config,
//!         &mut state,
//!         "https://v.douyin.com/y2JACyhjdK8/",
//!         None,
//!     )
//!     .await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;
pub mod resolver;

// Re-exports for convenience
pub use api::DouyinApi;
pub use config::Config;
pub use download::{download_user_works, download_work, BatchContext, BatchState};
pub use error::{Error, Result};
pub use resolver::TargetMode;
