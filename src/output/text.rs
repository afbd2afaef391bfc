use std::fmt::Write;
use std::io::IsTerminal;

use crate::checker::CheckResult;
use crate::diff::Tag;
use crate::error::Result;
use crate::render::ansi;
use crate::score::{TAB_ESCAPE, WarnChar};

use super::{BatchReport, FileOutcome, FileReport, OutputFormatter};

const SEPARATOR: &str = "────────────────────────────────────────";

/// Terminal report: one block per file followed by the overall score.
///
/// Rendered diffs are printed as they are; `use_colors` only controls the
/// report's own decoration.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub const fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Colors when stdout is a TTY and `NO_COLOR` is not set.
    #[must_use]
    pub fn auto() -> Self {
        Self::new(std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal())
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.use_colors {
            format!("{style}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn format_file(&self, file: &FileReport, output: &mut String) {
        writeln!(output, "{}", self.paint(ansi::CYAN, &file.display_name())).ok();
        match &file.outcome {
            FileOutcome::Failed(message) => {
                writeln!(output, "{}", self.paint(ansi::YELLOW, message)).ok();
            }
            FileOutcome::Checked(result) => self.format_result(result, output),
        }
    }

    fn format_result(&self, result: &CheckResult, output: &mut String) {
        if result.is_clean() {
            let mut line = self.paint(ansi::GREEN, "no style errors found");
            if result.is_comment_poor() {
                line.push_str(&self.paint(ansi::YELLOW, ", but consider adding more comments!"));
            }
            writeln!(output, "{line}").ok();
            return;
        }

        if !result.rendered_diff.is_empty() {
            writeln!(output, "{}", result.rendered_diff).ok();
            output.push('\n');
        }
        if result.is_comment_poor() {
            writeln!(
                output,
                "{}",
                self.paint(ansi::YELLOW, "Consider adding more comments!")
            )
            .ok();
        }
        for warn in &result.warn_chars {
            writeln!(output, "{}", self.warn_note(*warn)).ok();
        }
    }

    fn warn_note(&self, warn: WarnChar) -> String {
        let (highlight, verb) = match warn.tag {
            Tag::Delete => (ansi::ON_RED, "deleted"),
            _ => (ansi::ON_GREEN, "inserted"),
        };
        let what = if warn.escape == TAB_ESCAPE {
            "a tab"
        } else {
            "a newline"
        };
        format!(
            "Where {} is highlighted, {what} should be {verb}.",
            self.paint(highlight, warn.escape)
        )
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &BatchReport) -> Result<String> {
        let mut output = String::new();

        for file in &report.files {
            self.format_file(file, &mut output);
            writeln!(output, "{}", self.paint(ansi::DIM, SEPARATOR)).ok();
        }

        let score = format!("Score: {:.2}", report.score);
        writeln!(output, "{}", self.paint(ansi::BOLD, &score)).ok();

        Ok(output)
    }
}

/// Prints only the overall score.
pub struct ScoreFormatter;

impl OutputFormatter for ScoreFormatter {
    fn format(&self, report: &BatchReport) -> Result<String> {
        Ok(format!("{:.2}\n", report.score))
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
