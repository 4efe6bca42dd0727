//! Cover profile parsing and schema definitions.
//!
//! This module handles:
//! - Reading the `mode:` header
//! - Parsing per-block records
//! - Merging duplicate blocks and ordering profiles by file name

pub mod profile;
pub mod schema;

// Re-export main types
pub use profile::{parse_profiles, parse_profiles_from_reader};
pub use schema::{CoverMode, Profile, ProfileBlock};
