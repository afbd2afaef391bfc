//! Per-file-type checkers and the pipeline that grades one file.

mod astyle;
mod builtin;
mod registry;
mod result;
mod source;

pub use astyle::{AstyleVersionGate, MIN_ASTYLE_VERSION, parse_version};
pub use builtin::{AstyleChecker, JavaScriptChecker, PythonChecker};
pub use registry::CheckerRegistry;
pub use result::CheckResult;
pub use source::{load_source, normalize_source};

use std::path::Path;

use crate::counter::count_non_blank_lines;
use crate::diff::{SourceUnit, diff};
use crate::error::{Result, StyleError};
use crate::formatter::{ContentSniffer, FormatterCommand};
use crate::render::Renderer;
use crate::score::{ScoreCalculator, comment_ratio, warn_chars};

/// A file type the grader understands: how to format it and how to count
/// its comments and lines.
pub trait StyleCheck: Send + Sync {
    /// Identifier used in configuration, e.g. `"c"` or `"python"`.
    fn name(&self) -> &str;

    /// Extensions without the leading dot.
    fn extensions(&self) -> &[&'static str];

    /// Substrings of a content-sniffer description that select this checker.
    fn magic_names(&self) -> &[&'static str] {
        &[]
    }

    fn command(&self) -> &FormatterCommand;

    fn set_command(&mut self, command: FormatterCommand);

    /// Returns `code` as the reference formatter would write it.
    ///
    /// # Errors
    /// Returns an error when the formatter is missing or fails.
    fn style(&self, code: &str) -> Result<String>;

    /// `None` when this checker does not know how to count comments.
    ///
    /// # Errors
    /// Returns [`StyleError::ParseFailure`] when the code cannot be tokenized.
    fn count_comments(&self, _code: &str) -> Result<Option<usize>> {
        Ok(None)
    }

    fn count_lines(&self, code: &str) -> usize {
        count_non_blank_lines(code)
    }
}

/// Grades the file at `path`: load, count comments, format, diff, score and
/// render with `renderer`.
///
/// # Errors
/// Any error ends this file only; see [`StyleError::is_file_level`].
pub fn check_file(
    path: &Path,
    registry: &CheckerRegistry,
    sniffer: &dyn ContentSniffer,
    renderer: Renderer,
) -> Result<CheckResult> {
    if !path.exists() {
        return Err(StyleError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let checker = registry.resolve(path, sniffer)?;
    let original = load_source(path)?;
    log::debug!("checking {} as {}", path.display(), checker.name());
    check_source(path, checker, original, renderer)
}

/// The pipeline of [`check_file`] on already loaded source.
///
/// # Errors
/// See [`check_file`].
pub fn check_source(
    path: &Path,
    checker: &dyn StyleCheck,
    original: String,
    renderer: Renderer,
) -> Result<CheckResult> {
    let comments = checker.count_comments(&original)?;
    let ratio = comment_ratio(comments, checker.count_lines(&original))?;

    let styled = checker.style(&original)?;
    let unit = SourceUnit::new(original, styled);
    let script = diff(&unit.original, &unit.styled);

    let line_count = checker.count_lines(&unit.styled);
    let score = ScoreCalculator::score(&unit, line_count)?;

    Ok(CheckResult {
        path: path.to_path_buf(),
        changed_lines: score.changed_lines,
        diff_count: score.diff_count,
        line_count,
        score: score.score,
        comment_ratio: ratio,
        rendered_diff: renderer.render(&unit, &script),
        warn_chars: warn_chars(&script),
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
