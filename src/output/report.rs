use std::path::{Path, PathBuf};

use crate::checker::CheckResult;
use crate::error::StyleError;
use crate::score::Aggregate;

/// Per-file entry of a batch report.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Checked(CheckResult),
    /// The file could not be graded; holds the user-facing message.
    Failed(String),
}

impl FileReport {
    #[must_use]
    pub fn checked(result: CheckResult) -> Self {
        Self {
            path: result.path.clone(),
            outcome: FileOutcome::Checked(result),
        }
    }

    #[must_use]
    pub fn failed(path: impl Into<PathBuf>, error: &StyleError) -> Self {
        Self {
            path: path.into(),
            outcome: FileOutcome::Failed(error.to_string()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path as shown in reports, with forward slashes.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path.to_string_lossy().replace('\\', "/")
    }

    #[must_use]
    pub const fn result(&self) -> Option<&CheckResult> {
        match &self.outcome {
            FileOutcome::Checked(result) => Some(result),
            FileOutcome::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            FileOutcome::Checked(_) => None,
            FileOutcome::Failed(message) => Some(message),
        }
    }
}

/// Everything a report formatter needs about one run.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub version: &'static str,
    pub score: f64,
    pub files: Vec<FileReport>,
}

impl BatchReport {
    /// Builds the report and its overall score from per-file entries.
    /// Failed files do not contribute to the score.
    #[must_use]
    pub fn new(files: Vec<FileReport>) -> Self {
        let aggregate: Aggregate = files
            .iter()
            .filter_map(FileReport::result)
            .map(CheckResult::aggregate)
            .sum();

        Self {
            version: env!("CARGO_PKG_VERSION"),
            score: aggregate.score(),
            files,
        }
    }

    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.files.iter().filter(|f| f.result().is_some()).count()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.files.len() - self.checked_count()
    }
}
