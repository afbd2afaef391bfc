use std::path::{Path, PathBuf};

use crate::error::{Result, StyleError};

use super::Config;

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location, or defaults when there
    /// is no config file.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

pub const LOCAL_CONFIG_NAME: &str = ".style-guard.toml";

/// Filesystem access used by the loader.
pub trait FileSystem {
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// # Errors
    /// Returns an error if the working directory is unavailable.
    fn current_dir(&self) -> std::io::Result<PathBuf>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// Loads `.style-guard.toml` from the working directory.
#[derive(Debug, Default)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn parse_config(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        match self.local_config_path() {
            Some(path) if self.fs.exists(&path) => self.load_from_path(&path),
            _ => {
                log::debug!("no {LOCAL_CONFIG_NAME} found, using defaults");
                Ok(Config::default())
            }
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        log::debug!("loading config from {}", path.display());
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| StyleError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse_config(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
