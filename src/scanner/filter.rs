use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, StyleError};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Drops paths matching any ignore pattern.
///
/// Patterns match the whole path string as discovered, and `*` also crosses
/// directory separators, so `*/build/*` ignores every file under any `build`
/// directory.
pub struct IgnoreFilter {
    ignore_patterns: GlobSet,
}

impl IgnoreFilter {
    /// # Errors
    /// Returns [`StyleError::InvalidIgnorePattern`] for the first pattern that
    /// does not parse.
    pub fn new(ignore_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in ignore_patterns {
            let glob = Glob::new(pattern).map_err(|e| StyleError::InvalidIgnorePattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let ignore_patterns = builder
            .build()
            .map_err(|e| StyleError::InvalidIgnorePattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self { ignore_patterns })
    }

    #[must_use]
    pub fn is_ignored(&self, path: &Path) -> bool {
        self.ignore_patterns.is_match(path)
    }
}

impl FileFilter for IgnoreFilter {
    fn should_include(&self, path: &Path) -> bool {
        !self.is_ignored(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
