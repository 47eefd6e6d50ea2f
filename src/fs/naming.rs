//! Filename generation and sanitization.

use url::Url;

/// File extensions recognized in media URL paths, checked in order.
const KNOWN_EXTENSIONS: &[&str] = &[".webp", ".jpeg", ".jpg", ".png", ".gif", ".mp4", ".heic"];

/// Sanitize a title or author for use as a single path component.
///
/// Strips characters that are invalid on common filesystems along with
/// control characters, then trims leading/trailing dots and spaces. Falls
/// back to `untitled` when nothing remains, so the result is never empty
/// and never a path traversal.
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|&c| {
            !matches!(c, '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|') && !c.is_control()
        })
        .collect();

    let trimmed = cleaned.trim_matches(|c| c == '.' || c == ' ');

    if trimmed.is_empty() {
        "untitled".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Guess a file extension (with dot) from a media URL path.
///
/// Falls back to `default` when the path carries no recognized extension
/// or the URL does not parse.
pub fn guess_extension<'a>(url: &str, default: &'a str) -> &'a str {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_ascii_lowercase(),
        Err(_) => url.to_ascii_lowercase(),
    };

    for ext in KNOWN_EXTENSIONS {
        if path.contains(ext) {
            return ext;
        }
    }

    default
}
