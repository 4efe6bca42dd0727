//! Classify profile file names into named groups.

use crate::utils::config::FALLBACK_BUCKET;
use crate::utils::error::ConfigError;
use regex::Regex;

/// A compiled grouping pattern
///
/// The first capture group of a match names the bucket, e.g. `foo/([^/]*)/`
/// puts `foo/bar/x.go` in bucket `bar`.
#[derive(Debug, Clone)]
pub struct Grouping {
    pattern: Regex,
}

impl Grouping {
    /// Compile a grouping pattern
    ///
    /// # Errors
    /// * `ConfigError::InvalidPattern` - the pattern is not a valid regex
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Compile an optional pattern, `None` disabling grouping
    pub fn from_option(pattern: Option<&str>) -> Result<Option<Self>, ConfigError> {
        pattern.map(Self::new).transpose()
    }

    /// Bucket name for `file_name`
    ///
    /// Falls back to `other` when the pattern does not match or has no
    /// first capture group that participated in the match.
    pub fn classify<'a>(&self, file_name: &'a str) -> &'a str {
        self.pattern
            .captures(file_name)
            .and_then(|caps| caps.get(1))
            .map_or(FALLBACK_BUCKET, |m| m.as_str())
    }

    /// The pattern as written on the command line
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}
