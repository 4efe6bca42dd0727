//! CLI command implementations.
//!
//! Commands orchestrate the parser, aggregator and output writers.

pub mod report;

// Re-export main command functions
pub use report::{execute_report, run_report, validate_args, ReportArgs};
