//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{normalize_api_base, Config};

/// Douyin downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "douyin-downloader",
    version,
    about = "Download Douyin videos, image sets and whole user profiles",
    long_about = "A CLI tool that resolves Douyin share links through an extraction API\n\
                  and downloads the media into a structured directory tree.\n\n\
                  Pass a share link for a single work, or a user profile URL to\n\
                  download every work of that user."
)]
pub struct Args {
    /// Share URL or user profile URL.
    pub url: String,

    /// Base URL of the media extraction API.
    #[arg(long = "media-api", env = "DOUYIN_MEDIA_API")]
    pub media_api: Option<String>,

    /// Base URL of the user listing API.
    #[arg(long = "user-api", env = "DOUYIN_USER_API")]
    pub user_api: Option<String>,

    /// Base directory for downloads.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Hide download progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(base) = &self.media_api {
            config.media_api = Some(normalize_api_base(base));
        }

        if let Some(base) = &self.user_api {
            config.user_api = Some(normalize_api_base(base));
        }

        if let Some(dir) = &self.download_directory {
            config.download_directory = dir.clone();
        }

        if self.quiet {
            config.show_downloads = false;
            config.show_skipped_downloads = false;
        }
    }
}
