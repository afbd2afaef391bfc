#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the style-guard binary.
#[macro_export]
macro_rules! style_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("style-guard"))
    };
}

/// Formatter that spaces out every `=`, so `x=1` becomes `x = 1`.
pub const SPACING_FORMATTER: &str = "sed -e 's/ *= */ = /g'";

/// Formatter that returns its input unchanged.
pub const IDENTITY_FORMATTER: &str = "cat";

/// Formatter that always fails.
pub const FAILING_FORMATTER: &str = "cat >/dev/null\necho 'syntax error' >&2\nexit 3";

/// A temporary project directory: sources, config and fake formatters.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.style-guard.toml` in the project root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".style-guard.toml", content);
    }

    /// Creates an executable `sh` script under `bin/` and returns its path.
    #[cfg(unix)]
    pub fn create_formatter(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let relative = format!("bin/{name}");
        self.create_file(&relative, &format!("#!/bin/sh\n{body}\n"));
        let path = self.dir.path().join(relative);
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make formatter executable");
        path
    }

    /// Config routing the `python` checker through a script running `body`.
    #[cfg(unix)]
    pub fn use_python_formatter(&self, body: &str) {
        let script = self.create_formatter("fmt.sh", body);
        self.create_config(&format!(
            "[formatters]\npython = [{:?}]\n",
            script.display().to_string()
        ));
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
