//! Path and directory layout.
//!
//! Layout:
//! - single video, no batch: `downloads/杂/<author>-<title>.mp4`
//! - multi-media set, no batch: `downloads/<author>/<title>/<n>.<ext>`
//! - user batch: `downloads/<nickname>/<idx> <title>[...]`

use std::path::PathBuf;

use crate::config::Config;
use crate::download::BatchContext;

/// Folder for loose single-work downloads.
pub const MISC_FOLDER: &str = "杂";

/// Destination paths for one work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkPaths {
    /// File path used when the work is exactly one video.
    pub solo_video: PathBuf,
    /// Directory used when the work has multiple media entries.
    pub set_dir: PathBuf,
}

/// Compute the destination paths for a work.
///
/// `author` and `title` must already be sanitized. In batch mode the paths
/// live under the batch base directory and carry the work's index prefix so
/// same-titled works do not collide.
pub fn work_paths(
    config: &Config,
    author: &str,
    title: &str,
    batch: Option<&BatchContext>,
) -> WorkPaths {
    match batch {
        Some(ctx) => {
            let name = format!("{}{}", ctx.index_prefix, title);
            WorkPaths {
                solo_video: ctx.base_dir.join(format!("{}.mp4", name)),
                set_dir: ctx.base_dir.join(name),
            }
        }
        None => WorkPaths {
            solo_video: config
                .download_directory
                .join(MISC_FOLDER)
                .join(format!("{}-{}.mp4", author, title)),
            set_dir: config.download_directory.join(author).join(title),
        },
    }
}

/// Base directory for a user's batch download.
pub fn user_dir(config: &Config, nickname: &str) -> PathBuf {
    config.download_directory.join(nickname)
}
