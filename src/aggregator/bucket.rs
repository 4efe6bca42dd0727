//! Statement counters for the total and for each group.

use crate::parser::ProfileBlock;

/// Accumulated statement counts
///
/// `covered <= statements` holds for every bucket built through `add`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bucket {
    /// Statements seen
    pub statements: u64,

    /// Statements in blocks that ran at least once
    pub covered: u64,
}

impl Bucket {
    /// Count a block's statements, as covered if it ever ran
    ///
    /// Counters saturate at `u64::MAX` instead of wrapping.
    pub fn add(&mut self, block: &ProfileBlock) {
        self.statements = self.statements.saturating_add(block.num_stmt);
        if block.count > 0 {
            self.covered = self.covered.saturating_add(block.num_stmt);
        }
    }

    /// Coverage as a ratio in `[0, 100]`, zero for an empty bucket
    pub fn percentage(&self) -> f64 {
        if self.statements == 0 {
            0.0
        } else {
            (self.covered as f64 / self.statements as f64) * 100.0
        }
    }

    /// Coverage formatted like `71.43%`
    pub fn cover_pct(&self) -> String {
        if self.statements == 0 {
            return "0.00%".to_string();
        }
        format!("{:.2}%", self.percentage())
    }
}
