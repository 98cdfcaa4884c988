//! CLI command handlers, one per file.

mod check;
mod completions;
mod normalize;

pub use check::{run_check, CheckOptions, EXIT_OK};
pub use completions::run_completions;
pub use normalize::run_normalize;
