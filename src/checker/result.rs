use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::score::{Aggregate, WarnChar, is_comment_poor};

/// Outcome of grading one file against its formatted version.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub path: PathBuf,
    /// Inserted plus deleted lines between the original and styled text.
    pub changed_lines: usize,
    pub diff_count: f64,
    /// Counted lines of the styled text.
    pub line_count: usize,
    pub score: f64,
    /// 1.0 when the checker cannot count comments.
    pub comment_ratio: f64,
    pub rendered_diff: String,
    pub warn_chars: BTreeSet<WarnChar>,
}

impl CheckResult {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn is_comment_poor(&self) -> bool {
        is_comment_poor(self.comment_ratio)
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.changed_lines == 0
    }

    /// This file's contribution to the batch score.
    #[must_use]
    pub const fn aggregate(&self) -> Aggregate {
        Aggregate::new(self.changed_lines, self.line_count)
    }
}
