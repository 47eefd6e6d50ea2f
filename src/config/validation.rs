//! Configuration validation.

use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the configuration before any network calls are made.
///
/// The media API is always required; the user API is validated only when
/// present, since it is needed for user-profile downloads alone.
pub fn validate_config(config: &Config) -> Result<()> {
    match config.media_api.as_deref() {
        None => {
            return Err(Error::MissingConfig(
                "media extraction API (set DOUYIN_MEDIA_API or pass --media-api)".to_string(),
            ))
        }
        Some(base) => validate_api_base("media_api", base)?,
    }

    if let Some(base) = config.user_api.as_deref() {
        validate_api_base("user_api", base)?;
    }

    Ok(())
}

/// Check that an API base URL parses and uses http(s).
fn validate_api_base(field: &str, base: &str) -> Result<()> {
    let url = Url::parse(base).map_err(|e| Error::ConfigValidation {
        field: field.to_string(),
        message: format!("'{}' is not a valid URL: {}", base, e),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("unsupported URL scheme '{}'", url.scheme()),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_media_api() {
        let config = Config::default();
        assert!(matches!(
            validate_config(&config),
            Err(Error::MissingConfig(_))
        ));
    }

    #[test]
    fn test_valid_media_api() {
        let mut config = Config::default();
        config.media_api = Some("https://api.example.com".to_string());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_scheme() {
        let mut config = Config::default();
        config.media_api = Some("ftp://api.example.com".to_string());
        assert!(matches!(
            validate_config(&config),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_malformed_user_api() {
        let mut config = Config::default();
        config.media_api = Some("https://api.example.com".to_string());
        config.user_api = Some("not a url".to_string());
        assert!(validate_config(&config).is_err());
    }
}
