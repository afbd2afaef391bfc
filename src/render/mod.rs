//! Presentation strategies over one edit script.

mod char_diff;
mod markup;
mod split;
mod unified;

use std::fmt;
use std::str::FromStr;

use console::Term;

use crate::diff::{EditScript, SourceUnit};
use crate::error::StyleError;

pub use char_diff::CharDiff;
pub use markup::{AnsiMarkup, HtmlMarkup, Markup, ansi, escape_html, push_escaped_html};
pub use split::{SplitDiff, TAB_WIDTH, expand_tabs};
pub use unified::unified;

/// Columns assumed when no terminal is attached.
pub const FALLBACK_COLUMNS: usize = 80;

/// Report layout requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Character,
    Split,
    Unified,
    Score,
    Json,
    Html,
}

impl OutputMode {
    pub const ALL: [Self; 6] = [
        Self::Character,
        Self::Split,
        Self::Unified,
        Self::Score,
        Self::Json,
        Self::Html,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Split => "split",
            Self::Unified => "unified",
            Self::Score => "score",
            Self::Json => "json",
            Self::Html => "html",
        }
    }

    /// Renderer for the per-file diffs of this mode. JSON and HTML reports
    /// both embed the HTML character diff.
    #[must_use]
    pub fn renderer(self) -> Renderer {
        match self {
            Self::Character => Renderer::Character,
            Self::Split => Renderer::Split {
                width: terminal_width(),
            },
            Self::Unified => Renderer::Unified,
            Self::Score => Renderer::Score,
            Self::Json | Self::Html => Renderer::Html,
        }
    }

    /// Modes whose output is consumed by machines or written to a file.
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Score | Self::Json)
    }
}

impl FromStr for OutputMode {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| StyleError::InvalidOutputMode(s.to_string()))
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Width of the controlling terminal, trying stdout then stderr.
#[must_use]
pub fn terminal_width() -> usize {
    [Term::stdout(), Term::stderr()]
        .iter()
        .find_map(Term::size_checked)
        .map_or(FALLBACK_COLUMNS, |(_, columns)| usize::from(columns))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    Character,
    Split { width: usize },
    Unified,
    Html,
    Score,
}

impl Renderer {
    /// Lazily rendered output lines. A script without changes yields nothing.
    #[must_use]
    pub fn lines<'a>(
        &self,
        unit: &'a SourceUnit,
        script: &'a EditScript,
    ) -> Box<dyn Iterator<Item = String> + 'a> {
        if script.is_unchanged() {
            return Box::new(std::iter::empty());
        }
        match *self {
            Self::Character => Box::new(CharDiff::new(script, AnsiMarkup)),
            Self::Html => Box::new(CharDiff::new(script, HtmlMarkup)),
            Self::Split { width } => Box::new(SplitDiff::new(&unit.original, &unit.styled, width)),
            Self::Unified => Box::new(unified(&unit.original, &unit.styled)),
            Self::Score => Box::new(std::iter::empty()),
        }
    }

    #[must_use]
    pub fn render(&self, unit: &SourceUnit, script: &EditScript) -> String {
        self.lines(unit, script).collect::<Vec<_>>().join("\n")
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
