//! Single work download logic.

use crate::api::{DouyinApi, MediaKind};
use crate::config::Config;
use crate::download::media::{download_file_to, DownloadOutcome};
use crate::download::state::{BatchContext, BatchState};
use crate::error::{Error, Result};
use crate::fs::{guess_extension, sanitize_filename, work_paths};
use crate::output::print_work_header;

/// Resolve a share URL and download every media entry of the work.
///
/// Outside batch mode a lone video lands in the misc folder as
/// `<author>-<title>.mp4`; anything with multiple entries goes into its own
/// directory with numbered files. In batch mode `batch` supplies the base
/// directory and index prefix.
pub async fn download_work(
    api: &DouyinApi,
    config: &Config,
    state: &mut BatchState,
    share_url: &str,
    batch: Option<&BatchContext>,
) -> Result<()> {
    print_work_header(share_url);

    let work = api.get_work(share_url).await?;

    let title = sanitize_filename(&work.title);
    let author = if work.author.trim().is_empty() {
        "unknown".to_string()
    } else {
        sanitize_filename(&work.author)
    };

    if work.items.is_empty() {
        return Err(Error::Extraction(format!(
            "no downloadable media in work: {}",
            share_url
        )));
    }

    tracing::info!(
        "Work '{}' by {} ({}, {} file(s))",
        title,
        author,
        work.work_type,
        work.items.len()
    );

    let paths = work_paths(config, &author, &title, batch);

    // A lone video is stored as a single file, not a directory.
    if work.items.len() == 1 && work.items[0].media_type == MediaKind::Video {
        let video_url = work.items[0]
            .video_url
            .as_deref()
            .ok_or_else(|| Error::Extraction("video entry without video_url".to_string()))?;

        let outcome = download_file_to(api, config, video_url, &paths.solo_video).await?;
        record(state, outcome, true);
        return Ok(());
    }

    for (idx, item) in work.items.iter().enumerate() {
        let n = idx + 1;
        tracing::debug!("[{}/{}] {:?}", n, work.items.len(), item.media_type);

        match item.media_type {
            MediaKind::Video => {
                if let Some(url) = item.video_url.as_deref() {
                    let dest = paths.set_dir.join(format!("{}.mp4", n));
                    let outcome = download_file_to(api, config, url, &dest).await?;
                    record(state, outcome, true);
                }
            }
            MediaKind::Image => {
                if let Some(url) = item.image_url.as_deref() {
                    let ext = guess_extension(url, ".jpeg");
                    let dest = paths.set_dir.join(format!("{}{}", n, ext));
                    let outcome = download_file_to(api, config, url, &dest).await?;
                    record(state, outcome, false);
                }
            }
            MediaKind::AnimatedImage => {
                // Animated images ship both a webp and an mp4 rendition.
                if let Some(url) = item.image_url.as_deref() {
                    let ext = guess_extension(url, ".webp");
                    let dest = paths.set_dir.join(format!("{}{}", n, ext));
                    let outcome = download_file_to(api, config, url, &dest).await?;
                    record(state, outcome, false);
                }
                if let Some(url) = item.video_url.as_deref() {
                    let dest = paths.set_dir.join(format!("{}.mp4", n));
                    let outcome = download_file_to(api, config, url, &dest).await?;
                    record(state, outcome, true);
                }
            }
            MediaKind::Unknown => {
                tracing::warn!("Unknown media type in item {}, skipping", n);
            }
        }
    }

    Ok(())
}

fn record(state: &mut BatchState, outcome: DownloadOutcome, is_video: bool) {
    match outcome {
        DownloadOutcome::Downloaded if is_video => state.increment_vid(),
        DownloadOutcome::Downloaded => state.increment_pic(),
        DownloadOutcome::SkippedExisting => state.increment_skipped(),
    }
}
