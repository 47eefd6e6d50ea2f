//! Download orchestration.
//!
//! Single-work and user-batch download flows plus the low-level streaming
//! file download.

pub mod media;
pub mod single;
pub mod state;
pub mod user;

pub use media::{download_file_to, DownloadOutcome};
pub use single::download_work;
pub use state::{BatchContext, BatchState};
pub use user::download_user_works;
