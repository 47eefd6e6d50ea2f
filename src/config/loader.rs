//! Configuration structure and defaults.

use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure.
///
/// Built from defaults plus CLI/environment overrides; there is no
/// module-level global state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the media extraction API (`DOUYIN_MEDIA_API`).
    pub media_api: Option<String>,

    /// Base URL of the user listing API (`DOUYIN_USER_API`).
    /// Only required for user-profile downloads.
    pub user_api: Option<String>,

    /// Base directory for downloads.
    pub download_directory: PathBuf,

    /// Timeout for single-work extraction requests.
    pub media_api_timeout: Duration,

    /// Timeout for user listing requests. The upstream service crawls the
    /// profile on demand, so responses can take minutes.
    pub user_api_timeout: Duration,

    /// Timeout for a single media file download.
    pub file_download_timeout: Duration,

    /// Referer header sent with media file downloads.
    pub referer: String,

    /// Browser user agent string.
    pub user_agent: String,

    /// Whether to show download progress.
    pub show_downloads: bool,

    /// Whether to log skipped (already existing) files.
    pub show_skipped_downloads: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            media_api: None,
            user_api: None,
            download_directory: PathBuf::from("downloads"),
            media_api_timeout: Duration::from_secs(30),
            user_api_timeout: Duration::from_secs(300),
            file_download_timeout: Duration::from_secs(120),
            referer: default_referer(),
            user_agent: default_user_agent(),
            show_downloads: true,
            show_skipped_downloads: true,
        }
    }
}

fn default_referer() -> String {
    "https://www.douyin.com".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36".to_string()
}

/// Normalize an API base URL by stripping any trailing slashes.
pub fn normalize_api_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
