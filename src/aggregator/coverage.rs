//! Accumulate profile blocks into the total and per-group buckets.

use super::bucket::Bucket;
use super::generated::is_generated;
use super::grouping::Grouping;
use crate::parser::Profile;
use crate::utils::config::DEFAULT_BASE_DIR;
use crate::utils::error::FilterError;
use log::debug;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// How profiles are filtered and grouped
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    /// Directory profile file names are resolved against
    pub base_dir: PathBuf,

    /// Skip files carrying the generated marker
    pub filter_generated: bool,

    /// Group files into buckets, `None` for total only
    pub grouping: Option<Grouping>,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            filter_generated: true,
            grouping: None,
        }
    }
}

/// Finalized result of one aggregation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coverage {
    /// Every counted statement
    pub total: Bucket,

    /// Per-group buckets, empty when grouping is disabled
    pub buckets: BTreeMap<String, Bucket>,

    /// Number of files counted
    pub files_added: usize,

    /// Number of generated files skipped
    pub files_skipped: usize,
}

/// Aggregate profiles into coverage buckets
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `profiles` - Parsed profiles, one per source file
/// * `options` - Filtering and grouping settings
/// * `trace` - Receives `Added <file>` / `Skipping <file>` progress events
///
/// # Errors
/// * `FilterError::Read` - a candidate file failed while being scanned
pub fn aggregate<F>(
    profiles: &[Profile],
    options: &AggregateOptions,
    mut trace: F,
) -> Result<Coverage, FilterError>
where
    F: FnMut(&str),
{
    debug!("Aggregating {} profiles", profiles.len());

    let mut coverage = Coverage::default();

    for profile in profiles {
        if options.filter_generated && is_generated(&options.base_dir.join(&profile.file_name))? {
            trace(&format!("Skipping {}", profile.file_name));
            coverage.files_skipped += 1;
            continue;
        }

        // Buckets only exist once a block lands in them
        let mut group = match &options.grouping {
            Some(grouping) if !profile.blocks.is_empty() => Some(
                coverage
                    .buckets
                    .entry(grouping.classify(&profile.file_name).to_string())
                    .or_default(),
            ),
            _ => None,
        };

        for block in &profile.blocks {
            coverage.total.add(block);
            if let Some(bucket) = group.as_deref_mut() {
                bucket.add(block);
            }
        }

        trace(&format!("Added {}", profile.file_name));
        coverage.files_added += 1;
    }

    debug!(
        "Aggregated {} files ({} generated skipped) into {} buckets",
        coverage.files_added,
        coverage.files_skipped,
        coverage.buckets.len()
    );

    Ok(coverage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{CoverMode, ProfileBlock};

    fn profile(file_name: &str, blocks: &[(u64, u64)]) -> Profile {
        Profile {
            file_name: file_name.to_string(),
            mode: CoverMode::Set,
            blocks: blocks
                .iter()
                .enumerate()
                .map(|(i, &(num_stmt, count))| ProfileBlock {
                    start_line: i as u32 + 1,
                    start_col: 1,
                    end_line: i as u32 + 1,
                    end_col: 20,
                    num_stmt,
                    count,
                })
                .collect(),
        }
    }

    #[test]
    fn test_total_without_grouping() {
        let profiles = vec![profile("a.go", &[(10, 5)]), profile("b.go", &[(4, 0)])];
        let options = AggregateOptions {
            filter_generated: false,
            ..Default::default()
        };

        let coverage = aggregate(&profiles, &options, |_| {}).unwrap();

        assert_eq!(coverage.total, Bucket { statements: 14, covered: 10 });
        assert!(coverage.buckets.is_empty());
        assert_eq!(coverage.files_added, 2);
    }

    #[test]
    fn test_grouped_buckets() {
        let profiles = vec![
            profile("foo/bar/x.go", &[(2, 1), (3, 0)]),
            profile("foo/baz/y.go", &[(5, 1)]),
            profile("other/z.go", &[(1, 0)]),
        ];
        let options = AggregateOptions {
            filter_generated: false,
            grouping: Some(Grouping::new("foo/([^/]*)/").unwrap()),
            ..Default::default()
        };

        let coverage = aggregate(&profiles, &options, |_| {}).unwrap();

        assert_eq!(coverage.buckets.len(), 3);
        assert_eq!(coverage.buckets["bar"], Bucket { statements: 5, covered: 2 });
        assert_eq!(coverage.buckets["baz"], Bucket { statements: 5, covered: 5 });
        assert_eq!(coverage.buckets["other"], Bucket { statements: 1, covered: 0 });
        assert_eq!(coverage.total, Bucket { statements: 11, covered: 7 });
    }

    #[test]
    fn test_trace_events() {
        let profiles = vec![profile("a.go", &[(1, 1)]), profile("b.go", &[])];
        let options = AggregateOptions {
            filter_generated: false,
            ..Default::default()
        };

        let mut events = Vec::new();
        aggregate(&profiles, &options, |s| events.push(s.to_string())).unwrap();

        assert_eq!(events, vec!["Added a.go", "Added b.go"]);
    }

    #[test]
    fn test_file_without_blocks_creates_no_bucket() {
        let profiles = vec![profile("foo/empty/x.go", &[])];
        let options = AggregateOptions {
            filter_generated: false,
            grouping: Some(Grouping::new("foo/([^/]*)/").unwrap()),
            ..Default::default()
        };

        let coverage = aggregate(&profiles, &options, |_| {}).unwrap();

        assert!(coverage.buckets.is_empty());
        assert_eq!(coverage.total.cover_pct(), "0.00%");
        assert_eq!(coverage.files_added, 1);
    }
}
