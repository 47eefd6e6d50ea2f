//! Media file downloading.

use std::path::Path;

use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::DouyinApi;
use crate::config::Config;
use crate::error::{Error, Result};

/// Minimum file size to show a progress bar (10 MB).
const PROGRESS_THRESHOLD: u64 = 10 * 1024 * 1024;

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    Downloaded,
    SkippedExisting,
}

/// Stream a media URL to `dest`, creating parent directories as needed.
///
/// A destination that already exists is skipped. On failure the partially
/// written file is removed before the error is returned.
pub async fn download_file_to(
    api: &DouyinApi,
    config: &Config,
    url: &str,
    dest: &Path,
) -> Result<DownloadOutcome> {
    if dest.exists() {
        if config.show_skipped_downloads {
            tracing::info!("Already exists, skipping: {}", dest.display());
        }
        return Ok(DownloadOutcome::SkippedExisting);
    }

    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let response = api.download_file(url).await?;

    match stream_to_file(config, response, dest).await {
        Ok(()) => {
            if config.show_downloads {
                tracing::info!("Downloaded: {}", dest.display());
            }
            Ok(DownloadOutcome::Downloaded)
        }
        Err(e) => {
            // Do not leave a truncated file behind.
            let _ = tokio::fs::remove_file(dest).await;
            Err(e)
        }
    }
}

/// Write the response body to disk, with a progress bar for large files.
async fn stream_to_file(config: &Config, response: reqwest::Response, dest: &Path) -> Result<()> {
    let content_length = response.content_length();
    let show_progress = config.show_downloads
        && content_length
            .map(|l| l > PROGRESS_THRESHOLD)
            .unwrap_or(false);

    let progress = if show_progress {
        let pb = ProgressBar::new(content_length.unwrap_or(0));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut file = File::create(dest).await?;
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;

        if let Some(ref pb) = progress {
            pb.set_position(downloaded);
        }
    }

    file.flush().await?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(())
}
