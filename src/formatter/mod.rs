//! External processes: code formatters and the content sniffer.

mod sniffer;

use std::fmt;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

use crate::error::{Result, StyleError};

pub use sniffer::{ContentSniffer, FileCommandSniffer};

/// Program name plus arguments of an external tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterCommand {
    program: String,
    args: Vec<String>,
}

impl FormatterCommand {
    #[must_use]
    pub fn new<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a command from an argv list such as `["astyle", "--ascii"]`.
    ///
    /// # Errors
    /// Returns [`StyleError::Config`] when `argv` is empty.
    pub fn from_argv(argv: &[String]) -> Result<Self> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| StyleError::Config("formatter command must not be empty".to_string()))?;
        Ok(Self::new(program.clone(), args.iter().cloned()))
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for FormatterCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Whether a non-zero exit status is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitPolicy {
    RequireSuccess,
    AcceptAny,
}

pub struct ProcessRunner;

impl ProcessRunner {
    /// Runs `command` with `input` on stdin and returns its stdout.
    ///
    /// # Errors
    /// - [`StyleError::Dependency`] when the program is not installed.
    /// - [`StyleError::FormatterFailure`] when it exits unsuccessfully.
    /// - [`StyleError::Io`] for any other process error.
    pub fn run(command: &FormatterCommand, input: Option<&str>) -> Result<String> {
        Self::run_with(command, input, ExitPolicy::RequireSuccess)
    }

    /// Like [`ProcessRunner::run`] with an explicit exit policy.
    ///
    /// # Errors
    /// See [`ProcessRunner::run`].
    pub fn run_with(
        command: &FormatterCommand,
        input: Option<&str>,
        policy: ExitPolicy,
    ) -> Result<String> {
        log::debug!("running `{command}`");

        let mut child = Command::new(command.program())
            .args(command.args())
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| spawn_error(command, e))?;

        let stdin = child.stdin.take();
        let output = thread::scope(|scope| {
            if let (Some(mut stdin), Some(input)) = (stdin, input) {
                scope.spawn(move || {
                    // A child that exits without reading closes the pipe early.
                    if let Err(err) = stdin.write_all(input.as_bytes()) {
                        log::debug!("stdin of `{}` closed early: {err}", command.program());
                    }
                });
            }
            child.wait_with_output()
        })?;

        if policy == ExitPolicy::RequireSuccess && !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            log::debug!("`{command}` exited with {}: {stderr}", output.status);
            return Err(StyleError::FormatterFailure {
                command: command.to_string(),
                status: output.status.code(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn spawn_error(command: &FormatterCommand, err: io::Error) -> StyleError {
    if err.kind() == io::ErrorKind::NotFound {
        StyleError::Dependency(command.program().to_string())
    } else {
        StyleError::Io(err)
    }
}

#[cfg(all(test, unix))]
#[path = "mod_tests.rs"]
mod tests;
