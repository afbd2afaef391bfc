use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

use super::FileReport;

/// Progress bar for a batch check, showing the file currently being graded.
///
/// Drawn on stderr, and hidden for machine-readable modes or when stderr is
/// not a TTY.
#[derive(Clone)]
pub struct CheckProgress {
    progress_bar: ProgressBar,
    failed: Arc<AtomicU64>,
}

impl CheckProgress {
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty)
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} Checking [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")
                    .expect("valid template")
                    .progress_chars("█▓░"),
            );
            pb
        };

        Self {
            progress_bar,
            failed: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Shows `path` as the file being graded.
    pub fn start_file(&self, path: &Path) {
        self.progress_bar
            .set_message(path.display().to_string().replace('\\', "/"));
    }

    /// Counts a finished file. Safe to call from rayon workers.
    pub fn finish_file(&self, report: &FileReport) {
        if report.error().is_some() {
            self.failed.fetch_add(1, Ordering::Relaxed);
        }
        self.progress_bar.inc(1);
    }

    /// Clears the bar from the terminal and logs the tally.
    pub fn finish(&self) {
        let failed = self.failed.load(Ordering::Relaxed);
        log::debug!(
            "graded {} files, {failed} could not be checked",
            self.progress_bar.position()
        );
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
