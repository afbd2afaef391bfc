use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("file \"{}\" not found", path.display())]
    NotFound { path: PathBuf },

    #[error("file does not seem to contain text, skipping...")]
    Unreadable { path: PathBuf },

    #[error("file is empty")]
    EmptyFile,

    #[error("unknown file type \"{}\", skipping...", path.display())]
    UnknownType { path: PathBuf },

    #[error("style-guard requires {0}, but it does not seem to be installed")]
    Dependency(String),

    #[error("failed to stylecheck code")]
    FormatterFailure {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    #[error("{0}")]
    FormatterVersion(String),

    #[error("failed to parse code, check for syntax errors!")]
    ParseFailure,

    #[error("failed to parse ignore pattern: {pattern}")]
    InvalidIgnorePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("invalid output type \"{0}\"")]
    InvalidOutputMode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl StyleError {
    /// Short category label used as the heading of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::NotFound { .. } | Self::Unreadable { .. } | Self::FileRead { .. } => "File",
            Self::EmptyFile | Self::ParseFailure => "Source",
            Self::UnknownType { .. } => "Type",
            Self::Dependency(_) | Self::FormatterVersion(_) => "Dependency",
            Self::FormatterFailure { .. } => "Formatter",
            Self::InvalidIgnorePattern { .. } | Self::InvalidOutputMode(_) | Self::Config(_) => {
                "Config"
            }
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "Config",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// Whether this error belongs to a single file and should be recorded in
    /// that file's report entry instead of aborting the run.
    #[must_use]
    pub const fn is_file_level(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::Unreadable { .. }
                | Self::EmptyFile
                | Self::UnknownType { .. }
                | Self::Dependency(_)
                | Self::FormatterFailure { .. }
                | Self::FormatterVersion(_)
                | Self::ParseFailure
                | Self::FileRead { .. }
        )
    }

    /// Whether this is one of the typed errors with a user-facing message.
    ///
    /// Everything else is reported through a generic message unless verbose
    /// output was requested.
    #[must_use]
    pub const fn is_expected(&self) -> bool {
        self.is_file_level()
            || matches!(
                self,
                Self::InvalidIgnorePattern { .. }
                    | Self::InvalidOutputMode(_)
                    | Self::Config(_)
                    | Self::TomlParse(_)
            )
    }
}

pub type Result<T> = std::result::Result<T, StyleError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
