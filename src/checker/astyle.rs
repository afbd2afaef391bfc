use std::sync::{LazyLock, OnceLock};

use regex::Regex;

use crate::error::{Result, StyleError};
use crate::formatter::{FormatterCommand, ProcessRunner};

pub const MIN_ASTYLE_VERSION: [u32; 3] = [3, 0, 1];

/// Cached outcome of `astyle --version`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum VersionCheck {
    Supported,
    Missing(String),
    Unsupported(String),
}

/// Verifies the installed astyle is recent enough, once per instance.
#[derive(Debug, Default)]
pub struct AstyleVersionGate {
    outcome: OnceLock<VersionCheck>,
}

impl AstyleVersionGate {
    /// # Errors
    /// - [`StyleError::Dependency`] when `program` is not installed.
    /// - [`StyleError::FormatterVersion`] when its version is too old or
    ///   cannot be determined.
    pub fn ensure(&self, program: &str) -> Result<()> {
        match self.outcome.get_or_init(|| query_version(program)) {
            VersionCheck::Supported => Ok(()),
            VersionCheck::Missing(name) => Err(StyleError::Dependency(name.clone())),
            VersionCheck::Unsupported(message) => Err(StyleError::FormatterVersion(message.clone())),
        }
    }
}

fn query_version(program: &str) -> VersionCheck {
    let command = FormatterCommand::new(program, ["--version"]);
    let text = match ProcessRunner::run(&command, None) {
        Ok(text) => text,
        Err(StyleError::Dependency(name)) => return VersionCheck::Missing(name),
        Err(err) => {
            log::debug!("`{command}` failed: {err}");
            return VersionCheck::Unsupported(UNKNOWN_VERSION.to_string());
        }
    };
    check_version_text(&text)
}

const UNKNOWN_VERSION: &str = "could not determine astyle version";

fn check_version_text(text: &str) -> VersionCheck {
    let Some(version) = parse_version(text) else {
        return VersionCheck::Unsupported(UNKNOWN_VERSION.to_string());
    };
    log::debug!("found astyle {version:?}");
    if version.as_slice() < MIN_ASTYLE_VERSION.as_slice() {
        let found = version
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".");
        return VersionCheck::Unsupported(format!(
            "style-guard requires astyle version 3.0.1 or greater, but version {found} was found"
        ));
    }
    VersionCheck::Supported
}

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Artistic Style Version (\d[\d.]*)").expect("Invalid regex")
});

/// Extracts the dotted version from `Artistic Style Version 3.1`.
#[must_use]
pub fn parse_version(text: &str) -> Option<Vec<u32>> {
    let captured = VERSION_PATTERN.captures(text)?.get(1)?.as_str();
    captured
        .split('.')
        .filter(|part| !part.is_empty())
        .map(|part| part.parse().ok())
        .collect()
}

#[cfg(test)]
#[path = "astyle_tests.rs"]
mod tests;
