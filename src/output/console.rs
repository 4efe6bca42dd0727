//! Console rendering of coverage percentages.

use crate::aggregator::{Bucket, Coverage};
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Render one `<bucket>: NN.NN%` line per bucket
///
/// Lines are sorted by their full text, percentage included, not by
/// bucket name alone: `a-b: ...` sorts before `a: ...`.
pub fn bucket_lines(buckets: &BTreeMap<String, Bucket>) -> Vec<String> {
    let mut lines: Vec<String> = buckets
        .iter()
        .map(|(name, bucket)| format!("{}: {}", name, bucket.cover_pct()))
        .collect();
    lines.sort();
    lines
}

/// Render the final `total: (statements) NN.NN%` line
pub fn total_line(total: &Bucket) -> String {
    format!("total: (statements) {}", total.cover_pct())
}

/// Write bucket lines (when `with_buckets`) followed by the total line
pub fn write_console(
    writer: &mut impl Write,
    coverage: &Coverage,
    with_buckets: bool,
) -> io::Result<()> {
    if with_buckets {
        for line in bucket_lines(&coverage.buckets) {
            writeln!(writer, "{}", line)?;
        }
    }
    writeln!(writer, "{}", total_line(&coverage.total))
}
