//! Covertool
//!
//! Aggregate statement coverage from Go cover profiles, excluding
//! generated files and optionally grouping results by a path pattern.
//!
//! This crate provides the core implementation for the
//! `covertool` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! go test -coverprofile=cover.out ./...
//! covertool -profile cover.out -grouping 'pkg/([^/]*)/'
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
