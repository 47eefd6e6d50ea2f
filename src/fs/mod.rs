//! File system utilities.
//!
//! Handles filename sanitization and the download directory layout.

pub mod naming;
pub mod paths;

pub use naming::{guess_extension, sanitize_filename};
pub use paths::{user_dir, work_paths, WorkPaths, MISC_FOLDER};
