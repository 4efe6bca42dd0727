//! Configuration and constants for the CLI.

/// Only files with this extension are checked for the generated marker
pub const SOURCE_EXTENSION: &str = ".go";

/// A generated marker only counts on lines starting with this
pub const COMMENT_MARKER: &str = "//";

/// Marker phrase written by code generators
pub const GENERATED_MARKER: &str = "DO NOT EDIT";

/// Bucket used when the grouping pattern does not match a path
pub const FALLBACK_BUCKET: &str = "other";

/// Root for resolving profile file names
pub const DEFAULT_BASE_DIR: &str = ".";

/// Header line prefix of a cover profile
pub const MODE_PREFIX: &str = "mode: ";

// Long flags that may be spelled with a single dash, Go style
pub const LONG_FLAGS: &[&str] = &[
    "profile",
    "base",
    "trace",
    "grouping",
    "out",
    "keep-generated",
    "verbose",
    "help",
    "version",
];
