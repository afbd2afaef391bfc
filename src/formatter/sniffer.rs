use std::path::Path;

use super::{ExitPolicy, FormatterCommand, ProcessRunner};

/// Describes a file's content, e.g. `"C source, ASCII text"`.
pub trait ContentSniffer: Sync {
    /// Returns an empty string when nothing could be determined.
    fn sniff(&self, path: &Path) -> String;
}

/// Sniffs with `file --brief`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileCommandSniffer;

impl ContentSniffer for FileCommandSniffer {
    fn sniff(&self, path: &Path) -> String {
        let command = FormatterCommand::new(
            "file",
            ["--brief".to_string(), path.to_string_lossy().into_owned()],
        );
        match ProcessRunner::run_with(&command, None, ExitPolicy::AcceptAny) {
            Ok(description) => description.trim().to_string(),
            Err(err) => {
                log::debug!("could not sniff {}: {err}", path.display());
                String::new()
            }
        }
    }
}
