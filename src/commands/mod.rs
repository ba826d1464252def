//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod average;
pub mod family;
pub mod models;
pub mod report;
pub mod utils;

// Re-export main command functions
pub use average::execute_average;
pub use family::execute_family;
pub use models::{AverageArgs, FamilyArgs, ReportArgs};
pub use report::execute_report;
pub use utils::{display_version, load_averaged_runs};
