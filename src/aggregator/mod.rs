//! Aggregation of cover profiles into statement coverage buckets.
//!
//! This module turns parsed profiles into:
//! - A total bucket across every non-generated file
//! - Optional per-group buckets keyed by a grouping pattern
//! - Percentages formatted for display

pub mod bucket;
pub mod coverage;
pub mod generated;
pub mod grouping;

// Re-export main types and functions
pub use bucket::Bucket;
pub use coverage::{aggregate, AggregateOptions, Coverage};
pub use generated::is_generated;
pub use grouping::Grouping;
