//! Download state tracking.

use std::path::PathBuf;

/// Placement of a work inside a user batch.
#[derive(Debug, Clone)]
pub struct BatchContext {
    /// Directory the work's files go under (`downloads/<nickname>`).
    pub base_dir: PathBuf,
    /// Index prefix (`"3 "`) so same-titled works do not collide.
    pub index_prefix: String,
}

/// Counters for one run, single or batch.
#[derive(Debug, Default)]
pub struct BatchState {
    pub works_succeeded: u64,
    pub works_failed: u64,
    pub vid_count: u64,
    pub pic_count: u64,
    pub skipped_count: u64,
}

impl BatchState {
    /// Mark a work as fully processed.
    pub fn mark_work_succeeded(&mut self) {
        self.works_succeeded += 1;
    }

    /// Mark a work as failed or skipped.
    pub fn mark_work_failed(&mut self) {
        self.works_failed += 1;
    }

    /// Increment the video file count.
    pub fn increment_vid(&mut self) {
        self.vid_count += 1;
    }

    /// Increment the picture file count.
    pub fn increment_pic(&mut self) {
        self.pic_count += 1;
    }

    /// Increment the skipped (already existing) file count.
    pub fn increment_skipped(&mut self) {
        self.skipped_count += 1;
    }

    /// Total files downloaded this run.
    pub fn total_downloaded(&self) -> u64 {
        self.vid_count + self.pic_count
    }

    /// Total works seen this run.
    pub fn total_works(&self) -> u64 {
        self.works_succeeded + self.works_failed
    }
}
