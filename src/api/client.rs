//! HTTP client for the extraction and user listing APIs.

use std::time::Duration;

use reqwest::{header, Client, Response};

use crate::api::types::{ApiEnvelope, UserWorksPage, WorkInfo};
use crate::config::Config;
use crate::error::{Error, Result};

/// Client for the externally hosted extraction services.
///
/// Holds one reqwest client plus the endpoint configuration; all requests
/// are sequential.
pub struct DouyinApi {
    client: Client,
    media_api: String,
    user_api: Option<String>,
    referer: String,
    media_api_timeout: Duration,
    user_api_timeout: Duration,
    file_download_timeout: Duration,
}

impl DouyinApi {
    /// Create a new API client from the configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        let media_api = config
            .media_api
            .clone()
            .ok_or_else(|| Error::MissingConfig("DOUYIN_MEDIA_API".to_string()))?;

        Ok(Self {
            client,
            media_api,
            user_api: config.user_api.clone(),
            referer: config.referer.clone(),
            media_api_timeout: config.media_api_timeout,
            user_api_timeout: config.user_api_timeout,
            file_download_timeout: config.file_download_timeout,
        })
    }

    /// Resolve a share URL into a media descriptor.
    pub async fn get_work(&self, share_url: &str) -> Result<WorkInfo> {
        let url = format!("{}/", self.media_api);
        tracing::debug!("GET {} (url={})", url, share_url);

        let response = self
            .client
            .get(&url)
            .query(&[("url", share_url)])
            .timeout(self.media_api_timeout)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("Extraction response status: {}", status);

        if !status.is_success() {
            return Err(Error::Extraction(format!(
                "HTTP {}: {}",
                status,
                snippet(&text)
            )));
        }

        let envelope: ApiEnvelope<WorkInfo> = serde_json::from_str(&text).map_err(|e| {
            Error::Extraction(format!(
                "Failed to parse extraction response: {} - Response: {}",
                e,
                snippet(&text)
            ))
        })?;

        if envelope.code != 0 {
            return Err(Error::Extraction(
                envelope.message.unwrap_or_else(|| "unknown".to_string()),
            ));
        }

        envelope
            .data
            .ok_or_else(|| Error::Extraction("response carries no data".to_string()))
    }

    /// Fetch one page of a user's works.
    ///
    /// Pass [`crate::api::FIRST_PAGE_CURSOR`] for the first page and the
    /// cursor from the previous page afterwards.
    pub async fn get_user_page(&self, user_url: &str, cursor: &str) -> Result<UserWorksPage> {
        let base = self
            .user_api
            .as_deref()
            .ok_or_else(|| Error::MissingConfig("DOUYIN_USER_API".to_string()))?;

        let url = format!("{}/", base);
        tracing::debug!("GET {} (url={}, cursor={})", url, user_url, cursor);

        let response = self
            .client
            .get(&url)
            .query(&[("url", user_url), ("cursor", cursor)])
            .timeout(self.user_api_timeout)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("User listing response status: {}", status);

        if !status.is_success() {
            return Err(Error::Api(format!("HTTP {}: {}", status, snippet(&text))));
        }

        let envelope: ApiEnvelope<UserWorksPage> = serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse user listing: {} - Response: {}",
                e,
                snippet(&text)
            ))
        })?;

        if envelope.code != 0 {
            return Err(Error::Api(
                envelope.message.unwrap_or_else(|| "unknown".to_string()),
            ));
        }

        envelope
            .data
            .ok_or_else(|| Error::Api("response carries no data".to_string()))
    }

    /// Start a media file download, returning the streaming response.
    ///
    /// Media CDNs require the Referer header.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .header(header::REFERER, &self.referer)
            .timeout(self.file_download_timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download file: HTTP {}",
                response.status()
            )));
        }

        Ok(response)
    }
}

/// First characters of a response body for error messages, on a char boundary.
fn snippet(text: &str) -> &str {
    match text.char_indices().nth(300) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
