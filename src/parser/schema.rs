//! Data types produced by the cover profile parser.

use std::fmt;

/// Counting mode declared in the profile header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverMode {
    /// Each block records whether it ran (0 or 1)
    Set,
    /// Each block records how many times it ran
    Count,
    /// Like `Count`, but safe for concurrent tests
    Atomic,
    /// Any other mode string, kept verbatim
    Other(String),
}

impl CoverMode {
    /// Parse the text after `mode: `
    pub fn from_header(mode: &str) -> Self {
        match mode {
            "set" => CoverMode::Set,
            "count" => CoverMode::Count,
            "atomic" => CoverMode::Atomic,
            other => CoverMode::Other(other.to_string()),
        }
    }
}

impl fmt::Display for CoverMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverMode::Set => f.write_str("set"),
            CoverMode::Count => f.write_str("count"),
            CoverMode::Atomic => f.write_str("atomic"),
            CoverMode::Other(s) => f.write_str(s),
        }
    }
}

/// A contiguous source region and how often it was executed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileBlock {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,

    /// Number of statements in the region
    pub num_stmt: u64,

    /// Execution count (0/1 in `set` mode)
    pub count: u64,
}

impl ProfileBlock {
    /// Whether two blocks cover exactly the same source region
    pub fn same_region(&self, other: &ProfileBlock) -> bool {
        self.start_line == other.start_line
            && self.start_col == other.start_col
            && self.end_line == other.end_line
            && self.end_col == other.end_col
    }
}

/// All blocks recorded for one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// File name as written in the profile (usually an import path)
    pub file_name: String,

    pub mode: CoverMode,

    /// Blocks ordered by start position, one per distinct region
    pub blocks: Vec<ProfileBlock>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trips_through_display() {
        for mode in ["set", "count", "atomic", "custom"] {
            assert_eq!(CoverMode::from_header(mode).to_string(), mode);
        }
        assert_eq!(CoverMode::from_header("custom"), CoverMode::Other("custom".to_string()));
    }
}
