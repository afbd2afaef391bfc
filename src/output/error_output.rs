//! Colored error output on stderr.
//!
//! Format: ✖ Error Type / × Detail / help: Suggestion

use std::error::Error as _;
use std::io::{IsTerminal, Write};

use crate::error::StyleError;
use crate::render::{OutputMode, ansi};

const UNEXPECTED_MESSAGE: &str =
    "style-guard ran into an unexpected error, run again with --verbose for details";

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates an error output formatter that auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            use_colors: Self::stderr_supports_color(),
        }
    }

    fn stderr_supports_color() -> bool {
        // https://no-color.org: presence of the variable disables color.
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Prints a run-aborting error. Errors without a user-facing message are
    /// reduced to a generic line unless `verbose` is set; `verbose` also adds
    /// the source chain.
    pub fn print_run_error(&self, error: &StyleError, verbose: bool) {
        let mut stderr = std::io::stderr().lock();
        self.write_run_error(&mut stderr, error, verbose);
    }

    /// Writes a run-aborting error to a writer (for testing).
    pub fn write_run_error<W: Write>(&self, w: &mut W, error: &StyleError, verbose: bool) {
        if !error.is_expected() && !verbose {
            self.write_error(w, "Error", UNEXPECTED_MESSAGE, &[], None);
            return;
        }

        let details = if verbose {
            source_chain(error)
        } else {
            Vec::new()
        };
        let suggestion = suggestion_for(error);
        self.write_error(
            w,
            error.error_type(),
            &error.to_string(),
            &details,
            suggestion.as_deref(),
        );
    }

    /// Writes error to a writer (for testing).
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        details: &[String],
        suggestion: Option<&str>,
    ) {
        // Write failures on stderr are discarded, there is nowhere left to report them.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        for d in details {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

fn source_chain(error: &StyleError) -> Vec<String> {
    let mut chain = Vec::new();
    let mut source = error.source();
    while let Some(cause) = source {
        chain.push(cause.to_string());
        source = cause.source();
    }
    chain
}

fn suggestion_for(error: &StyleError) -> Option<String> {
    match error {
        StyleError::InvalidOutputMode(_) => {
            let modes: Vec<_> = OutputMode::ALL.iter().map(|m| m.as_str()).collect();
            Some(format!("valid modes are: {}", modes.join(", ")))
        }
        StyleError::InvalidIgnorePattern { .. } => {
            Some("ignore patterns use shell wildcards, e.g. \"*/vendor/*\"".to_string())
        }
        StyleError::TomlParse(_) => Some(
            "allowed keys are [check] output, [check] ignore and [formatters]".to_string(),
        ),
        _ => None,
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
