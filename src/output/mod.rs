//! Console output utilities.

pub mod console;
pub mod stats;

pub use console::{
    print_banner, print_config_summary, print_error, print_user_summary, print_work_header,
};
pub use stats::{print_batch_stats, print_run_stats};
