//! API response type definitions.

use serde::Deserialize;

/// Generic API response envelope.
///
/// Both services wrap their payload as `{ "code": 0, "message": ..., "data": ... }`
/// with a non-zero code signalling an upstream failure.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

/// Kind of a single media entry within a work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Video,
    Image,
    AnimatedImage,
    #[serde(other)]
    Unknown,
}

/// A single downloadable entry of a work.
///
/// Animated images carry both renditions: a still/animated image URL and an
/// mp4 video URL.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkMedia {
    #[serde(rename = "type")]
    pub media_type: MediaKind,
    pub video_url: Option<String>,
    pub image_url: Option<String>,
}

/// Media descriptor for one work, as returned by the extraction API.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(rename = "type", default)]
    pub work_type: String,
    #[serde(default)]
    pub items: Vec<WorkMedia>,
}

/// Profile metadata from the user listing API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub nickname: String,
    pub uid: Option<String>,
    pub signature: Option<String>,
}

/// Reference to one work inside a user listing page.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkRef {
    #[serde(default)]
    pub share_url: String,
    #[serde(default)]
    pub desc: String,
    #[serde(rename = "type", default)]
    pub work_type: String,
    #[serde(default)]
    pub aweme_id: String,
}

/// One page of a user's works.
#[derive(Debug, Deserialize)]
pub struct UserWorksPage {
    #[serde(default)]
    pub user: UserInfo,
    #[serde(default)]
    pub works: Vec<WorkRef>,
    pub works_count: Option<u64>,
    /// Cursor for the next page; absent on the last page.
    pub cursor: Option<String>,
}
