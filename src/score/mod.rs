//! Reduces edit scripts to scores, comment ratios and whitespace warnings.

use std::collections::BTreeSet;
use std::iter::Sum;

use crate::diff::{EditScript, LineDiff, SourceUnit, Tag};
use crate::error::{Result, StyleError};

/// Files whose comment ratio falls below this are flagged as comment-poor.
pub const COMMENT_MIN: f64 = 0.10;

pub const NEWLINE_ESCAPE: &str = "\\n";
pub const TAB_ESCAPE: &str = "\\t";

/// Visible two-character token for a whitespace character that would
/// otherwise vanish inside an inserted or deleted run.
#[must_use]
pub const fn whitespace_escape(c: char) -> Option<&'static str> {
    match c {
        '\n' => Some(NEWLINE_ESCAPE),
        '\t' => Some(TAB_ESCAPE),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Inserted plus deleted lines.
    pub changed_lines: usize,
    /// Half of `changed_lines`: a substituted line counts once.
    pub diff_count: f64,
    pub score: f64,
}

pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Scores `unit` against the number of lines counted in its styled text.
    ///
    /// # Errors
    /// Returns [`StyleError::EmptyFile`] when `styled_lines` is zero.
    pub fn score(unit: &SourceUnit, styled_lines: usize) -> Result<Score> {
        if styled_lines == 0 {
            return Err(StyleError::EmptyFile);
        }
        let changed_lines = Self::changed_lines(&unit.original, &unit.styled);
        let diff_count = half(changed_lines);
        Ok(Score {
            changed_lines,
            diff_count,
            score: clamp_score(diff_count, styled_lines),
        })
    }

    /// Lines inserted plus lines deleted between `original` and `styled`.
    #[must_use]
    pub fn changed_lines(original: &str, styled: &str) -> usize {
        let line_diff = LineDiff::new(original, styled, true);
        line_diff.inserted() + line_diff.deleted()
    }
}

#[allow(clippy::cast_precision_loss)]
fn half(changed_lines: usize) -> f64 {
    changed_lines as f64 / 2.0
}

#[allow(clippy::cast_precision_loss)]
fn clamp_score(diff_count: f64, lines: usize) -> f64 {
    (1.0 - diff_count / lines as f64).max(0.0)
}

/// Fraction of counted lines that are comments.
///
/// An unknown comment count is treated as a ratio of 1.0 so it never warns.
///
/// # Errors
/// Returns [`StyleError::EmptyFile`] when a known count meets zero lines.
#[allow(clippy::cast_precision_loss)]
pub fn comment_ratio(comments: Option<usize>, lines: usize) -> Result<f64> {
    match comments {
        None => Ok(1.0),
        Some(_) if lines == 0 => Err(StyleError::EmptyFile),
        Some(count) => Ok(count as f64 / lines as f64),
    }
}

#[must_use]
pub fn is_comment_poor(ratio: f64) -> bool {
    ratio < COMMENT_MIN
}

/// A whitespace character that was inserted or deleted, e.g. `('+', "\\n")`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WarnChar {
    pub tag: Tag,
    pub escape: &'static str,
}

/// Every tab or newline inside an `Insert`/`Delete` run, sorted.
#[must_use]
pub fn warn_chars(script: &EditScript) -> BTreeSet<WarnChar> {
    script
        .iter()
        .filter(|op| op.tag().is_change())
        .flat_map(|op| {
            op.run().chars().filter_map(move |c| {
                whitespace_escape(c).map(|escape| WarnChar {
                    tag: op.tag(),
                    escape,
                })
            })
        })
        .collect()
}

/// Running `(diffs, lines)` totals across files.
///
/// Stored as whole changed lines so merging is exact and order independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aggregate {
    pub changed_lines: usize,
    pub total_lines: usize,
}

impl Aggregate {
    #[must_use]
    pub const fn new(changed_lines: usize, total_lines: usize) -> Self {
        Self {
            changed_lines,
            total_lines,
        }
    }

    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            changed_lines: self.changed_lines + other.changed_lines,
            total_lines: self.total_lines + other.total_lines,
        }
    }

    #[must_use]
    pub fn total_diffs(&self) -> f64 {
        half(self.changed_lines)
    }

    /// `max(1 - diffs / lines, 0)`, or 0.0 when nothing was scored.
    #[must_use]
    pub fn score(&self) -> f64 {
        if self.total_lines == 0 {
            return 0.0;
        }
        clamp_score(self.total_diffs(), self.total_lines)
    }
}

impl Sum for Aggregate {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Self::merge)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
