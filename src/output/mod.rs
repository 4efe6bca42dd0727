//! Output writers for coverage results.
//!
//! This module handles:
//! - Console lines (`<bucket>: NN.NN%` and the total line)
//! - Raw per-bucket report files (`<bucket> <statements> <covered>`)

pub mod console;
pub mod report;

// Re-export main functions
pub use console::{bucket_lines, total_line, write_console};
pub use report::{report_lines, validate_report_path, write_report};
