//! CLI command handlers, one per file.

mod completions;
mod plan;
mod resolve;
mod run;

pub use completions::run_completions;
pub use plan::run_plan;
pub use resolve::run_resolve;
pub use run::run_mirror;
