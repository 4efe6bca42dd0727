//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors detected while validating startup configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("-out requires -grouping")]
    OutWithoutGrouping,

    #[error("-profile is required")]
    MissingProfile,
}

/// Errors that can occur while parsing a cover profile
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("bad mode line: {0}")]
    BadModeLine(String),

    #[error("line {line:?} doesn't match expected format: {reason}")]
    MalformedLine { line: String, reason: String },

    #[error("inconsistent NumStmt: changed from {previous} to {current}")]
    InconsistentStatements { previous: u64, current: u64 },
}

/// Errors that can occur while scanning a file for the generated marker
///
/// Failing to open the file is not an error; see `is_generated`.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while writing the raw bucket report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("open {}: file already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("open {}: {source}", .path.display())]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
