//! User profile batch download logic.

use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;

use crate::api::{DouyinApi, FIRST_PAGE_CURSOR};
use crate::config::Config;
use crate::download::single::download_work;
use crate::download::state::{BatchContext, BatchState};
use crate::error::{Error, Result};
use crate::fs::{sanitize_filename, user_dir};
use crate::output::{print_batch_stats, print_user_summary};

/// Download every work of a user profile.
///
/// Pages through the listing API and runs the single-work path per work.
/// Per-work failures are logged and skipped; only a failing listing call
/// aborts the batch.
pub async fn download_user_works(
    api: &DouyinApi,
    config: &Config,
    state: &mut BatchState,
    user_url: &str,
) -> Result<()> {
    tracing::info!(
        "Fetching user works list (may take up to {}s)...",
        config.user_api_timeout.as_secs()
    );

    let mut page = api.get_user_page(user_url, FIRST_PAGE_CURSOR).await?;

    let nickname = if page.user.nickname.trim().is_empty() {
        "unknown_user".to_string()
    } else {
        sanitize_filename(&page.user.nickname)
    };
    print_user_summary(&nickname, &page.user, page.works_count);

    let base_dir = user_dir(config, &nickname);
    let mut idx: u64 = 0;

    loop {
        for work in &page.works {
            idx += 1;

            // Pace requests between works.
            if idx > 1 {
                let delay_ms = rand::thread_rng().gen_range(400..900);
                sleep(Duration::from_millis(delay_ms)).await;
            }

            tracing::info!(
                "Work [{}] ({}) {} {}",
                idx,
                work.work_type,
                work.aweme_id,
                truncate_desc(&work.desc)
            );

            if work.share_url.is_empty() {
                tracing::warn!("Work [{}] has no share_url, skipping", idx);
                state.mark_work_failed();
                continue;
            }

            let ctx = BatchContext {
                base_dir: base_dir.clone(),
                index_prefix: format!("{} ", idx),
            };

            match download_work(api, config, state, &work.share_url, Some(&ctx)).await {
                Ok(()) => state.mark_work_succeeded(),
                Err(e) => {
                    tracing::warn!("Failed to process work [{}]: {}", idx, e);
                    state.mark_work_failed();
                }
            }
        }

        match page.cursor.take() {
            Some(next) => page = api.get_user_page(user_url, &next).await?,
            None => break,
        }
    }

    if idx == 0 {
        return Err(Error::Api(format!("user has no works: {}", user_url)));
    }

    print_batch_stats(state, &base_dir);

    Ok(())
}

/// First 40 characters of a work description.
fn truncate_desc(desc: &str) -> String {
    desc.chars().take(40).collect()
}
