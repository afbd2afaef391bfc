mod error_output;
mod html;
mod html_template;
mod json;
mod progress;
mod report;
mod text;

pub use error_output::ErrorOutput;
pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use progress::CheckProgress;
pub use report::{BatchReport, FileOutcome, FileReport};
pub use text::{ScoreFormatter, TextFormatter};

use crate::error::Result;
use crate::render::OutputMode;

/// Trait for turning a batch report into its final textual form.
pub trait OutputFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &BatchReport) -> Result<String>;
}

/// The report formatter for `mode`. Diff-printing modes share the ANSI report
/// and differ only in how each file's diff was rendered.
#[must_use]
pub fn formatter_for(mode: OutputMode) -> Box<dyn OutputFormatter> {
    match mode {
        OutputMode::Character | OutputMode::Split | OutputMode::Unified => {
            Box::new(TextFormatter::auto())
        }
        OutputMode::Score => Box::new(ScoreFormatter),
        OutputMode::Json => Box::new(JsonFormatter),
        OutputMode::Html => Box::new(HtmlFormatter::new()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
