use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, StyleError};

/// Reads `path` as text with trailing whitespace stripped from every line.
///
/// Lines are re-joined with `\n` and non-empty content always ends with a
/// newline, so a missing final newline is never reported as a difference.
///
/// # Errors
/// - [`StyleError::NotFound`] when the file does not exist.
/// - [`StyleError::Unreadable`] when its bytes are not UTF-8.
/// - [`StyleError::FileRead`] for any other read failure.
pub fn load_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            StyleError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            StyleError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let text = String::from_utf8(bytes).map_err(|_| StyleError::Unreadable {
        path: path.to_path_buf(),
    })?;

    Ok(normalize_source(&text))
}

#[must_use]
pub fn normalize_source(text: &str) -> String {
    let mut code = text.lines().map(str::trim_end).collect::<Vec<_>>().join("\n");
    if !code.is_empty() && !code.ends_with('\n') {
        code.push('\n');
    }
    code
}
