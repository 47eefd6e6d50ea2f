//! Share link classification.
//!
//! Decides whether an input URL names a single work or a whole user profile
//! by pattern matching the URL shape. No network access happens here.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// User profile URLs: `https://www.douyin.com/user/<sec_uid>`.
static USER_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:www\.)?douyin\.com/user/[A-Za-z0-9_-]+")
        .expect("Invalid user URL regex")
});

/// Short share links: `https://v.douyin.com/<code>/`.
static SHORT_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://v\.douyin\.com/[A-Za-z0-9]+/?$").expect("Invalid short URL regex")
});

/// Canonical work links: `https://www.douyin.com/video/<id>` or `/note/<id>`.
static WORK_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:www\.)?douyin\.com/(?:video|note)/\d+")
        .expect("Invalid work URL regex")
});

/// What an input URL refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    /// A single work (video, image set or animated-image set).
    Single,
    /// A user profile whose works are to be enumerated.
    User,
}

/// Classify an input URL into a [`TargetMode`].
///
/// Supports the following URL formats:
/// - `https://v.douyin.com/<code>/` (short share link)
/// - `https://www.douyin.com/video/<id>`
/// - `https://www.douyin.com/note/<id>`
/// - `https://www.douyin.com/user/<sec_uid>`
///
/// Anything else is rejected with [`Error::InvalidUrl`].
pub fn classify(url: &str) -> Result<TargetMode> {
    let trimmed = url.trim();

    if USER_URL_REGEX.is_match(trimmed) {
        return Ok(TargetMode::User);
    }

    if SHORT_URL_REGEX.is_match(trimmed) || WORK_URL_REGEX.is_match(trimmed) {
        return Ok(TargetMode::Single);
    }

    Err(Error::InvalidUrl(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_url_is_single() {
        assert_eq!(
            classify("https://v.douyin.com/y2JACyhjdK8/").unwrap(),
            TargetMode::Single
        );
        assert_eq!(
            classify("https://v.douyin.com/y2JACyhjdK8").unwrap(),
            TargetMode::Single
        );
    }

    #[test]
    fn test_video_url_is_single() {
        assert_eq!(
            classify("https://www.douyin.com/video/7606413230298820595").unwrap(),
            TargetMode::Single
        );
    }

    #[test]
    fn test_note_url_is_single() {
        assert_eq!(
            classify("https://www.douyin.com/note/7606955181091438309").unwrap(),
            TargetMode::Single
        );
    }

    #[test]
    fn test_user_url_is_user() {
        let url = "https://www.douyin.com/user/MS4wLjABAAAAZnqWV7JEd23idoozs6TTJVcU8nP0pj_GWUAwGIm6fSkXtMYy-hrT3z61X8WMB1tJ";
        assert_eq!(classify(url).unwrap(), TargetMode::User);
    }

    #[test]
    fn test_user_url_without_www() {
        assert_eq!(
            classify("https://douyin.com/user/MS4wLjABAAAA").unwrap(),
            TargetMode::User
        );
    }

    #[test]
    fn test_unrecognized_url() {
        assert!(matches!(
            classify("https://example.com/video/123"),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(classify("not a url"), Err(Error::InvalidUrl(_))));
        assert!(matches!(
            classify("https://www.douyin.com/discover"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(
            classify("  https://v.douyin.com/abc123/  ").unwrap(),
            TargetMode::Single
        );
    }
}
