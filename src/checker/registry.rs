use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{Result, StyleError};
use crate::formatter::{ContentSniffer, FormatterCommand};

use super::StyleCheck;
use super::builtin::{AstyleChecker, JavaScriptChecker, PythonChecker};

/// Maps extensions and content-sniff substrings to checkers.
pub struct CheckerRegistry {
    checkers: Vec<Box<dyn StyleCheck>>,
    extension_map: HashMap<String, usize>,
    /// Keeps first-registration order so the earliest matching name wins.
    magic_map: IndexMap<String, usize>,
}

impl CheckerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            checkers: Vec::new(),
            extension_map: HashMap::new(),
            magic_map: IndexMap::new(),
        }
    }

    pub fn register(&mut self, checker: Box<dyn StyleCheck>) {
        let idx = self.checkers.len();
        for ext in checker.extensions() {
            self.extension_map.insert((*ext).to_string(), idx);
        }
        for name in checker.magic_names() {
            self.magic_map.entry((*name).to_string()).or_insert(idx);
        }
        self.checkers.push(checker);
    }

    /// Built-in checkers with formatter commands replaced per checker name.
    ///
    /// # Errors
    /// Returns [`StyleError::Config`] for an unknown checker name or an empty
    /// command.
    pub fn with_formatters(overrides: &IndexMap<String, Vec<String>>) -> Result<Self> {
        let mut registry = Self::default();
        for (name, argv) in overrides {
            let command = FormatterCommand::from_argv(argv)?;
            let checker = registry
                .checkers
                .iter_mut()
                .find(|checker| checker.name() == name)
                .ok_or_else(|| {
                    StyleError::Config(format!("unknown checker \"{name}\" in [formatters]"))
                })?;
            log::debug!("formatter for {name} overridden with `{command}`");
            checker.set_command(command);
        }
        Ok(registry)
    }

    /// Picks the checker for `path`, by extension first and by sniffed
    /// content otherwise.
    ///
    /// # Errors
    /// Returns [`StyleError::UnknownType`] when neither matches.
    pub fn resolve(&self, path: &Path, sniffer: &dyn ContentSniffer) -> Result<&dyn StyleCheck> {
        if let Some(idx) = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.extension_map.get(ext))
        {
            return Ok(self.checkers[*idx].as_ref());
        }

        let description = sniffer.sniff(path);
        log::debug!("sniffed {}: {description:?}", path.display());
        self.magic_map
            .iter()
            .find(|(name, _)| description.contains(name.as_str()))
            .map(|(_, &idx)| self.checkers[idx].as_ref())
            .ok_or_else(|| StyleError::UnknownType {
                path: path.to_path_buf(),
            })
    }

    /// Every registered extension, sorted.
    #[must_use]
    pub fn extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<&str> = self.extension_map.keys().map(String::as_str).collect();
        extensions.sort_unstable();
        extensions
    }
}

impl Default for CheckerRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(AstyleChecker::c()));
        registry.register(Box::new(PythonChecker::default()));
        registry.register(Box::new(JavaScriptChecker::default()));
        registry.register(Box::new(AstyleChecker::java()));
        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
