//! Statistics reporting.

use std::path::Path;

use console::style;

use crate::download::BatchState;

/// Print statistics at the end of a user batch.
pub fn print_batch_stats(state: &BatchState, dir: &Path) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Batch complete:").bold());
    println!(
        "  Works:    {} ok, {} failed, {} total",
        style(state.works_succeeded).green(),
        style(state.works_failed).red(),
        state.total_works()
    );
    println!("  Videos:   {}", state.vid_count);
    println!("  Pictures: {}", state.pic_count);
    println!("  Skipped:  {} (already present)", state.skipped_count);
    println!("  Saved to: {}", dir.display());
    println!("{}", style("═".repeat(50)).dim());
}

/// Print a one-line summary for a single-work run.
pub fn print_run_stats(state: &BatchState) {
    println!(
        "Downloaded: {} video(s), {} picture(s) ({} skipped)",
        style(state.vid_count).green(),
        style(state.pic_count).green(),
        style(state.skipped_count).yellow()
    );
}
