//! Utility modules for configuration, error handling, and argument handling.

pub mod args;
pub mod config;
pub mod error;

// Re-export commonly used error types for convenience
pub use error::{ConfigError, FilterError, ParseError, ReportError};
