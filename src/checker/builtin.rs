use std::path::Path;

use crate::counter::{CLikeComments, count_all_lines, count_python_comments};
use crate::error::Result;
use crate::formatter::{FormatterCommand, ProcessRunner};

use super::StyleCheck;
use super::astyle::AstyleVersionGate;

const ASTYLE_ARGS: [&str; 17] = [
    "--ascii",
    "--add-braces",
    "--break-one-line-headers",
    "--align-pointer=name",
    "--pad-comma",
    "--unpad-paren",
    "--pad-header",
    "--pad-oper",
    "--max-code-length=132",
    "--convert-tabs",
    "--indent=spaces=4",
    "--indent-continuation=1",
    "--indent-switches",
    "--lineend=linux",
    "--min-conditional-indent=1",
    "--options=none",
    "--style=allman",
];

const JAVA_ARGS: [&str; 2] = ["--mode=java", "--style=java"];

/// C-family checker formatted by astyle.
pub struct AstyleChecker {
    name: &'static str,
    extensions: &'static [&'static str],
    magic_names: &'static [&'static str],
    command: FormatterCommand,
    comments: CLikeComments,
    version_gate: AstyleVersionGate,
}

impl AstyleChecker {
    #[must_use]
    pub fn c() -> Self {
        Self {
            name: "c",
            extensions: &["c", "h", "cpp", "hpp"],
            magic_names: &["C source"],
            command: FormatterCommand::new("astyle", ASTYLE_ARGS),
            comments: CLikeComments::c(),
            version_gate: AstyleVersionGate::default(),
        }
    }

    /// Same options as C, with java mode and brace style appended.
    #[must_use]
    pub fn java() -> Self {
        Self {
            name: "java",
            extensions: &["java"],
            magic_names: &["Java source"],
            command: FormatterCommand::new("astyle", ASTYLE_ARGS.into_iter().chain(JAVA_ARGS)),
            comments: CLikeComments::c(),
            version_gate: AstyleVersionGate::default(),
        }
    }

    /// Only the real astyle binary gets its version checked; a replacement
    /// command configured by the user is trusted as is.
    fn runs_astyle(&self) -> bool {
        Path::new(self.command.program())
            .file_stem()
            .is_some_and(|stem| stem == "astyle")
    }
}

impl StyleCheck for AstyleChecker {
    fn name(&self) -> &str {
        self.name
    }

    fn extensions(&self) -> &[&'static str] {
        self.extensions
    }

    fn magic_names(&self) -> &[&'static str] {
        self.magic_names
    }

    fn command(&self) -> &FormatterCommand {
        &self.command
    }

    fn set_command(&mut self, command: FormatterCommand) {
        self.command = command;
    }

    fn style(&self, code: &str) -> Result<String> {
        if self.runs_astyle() {
            self.version_gate.ensure(self.command.program())?;
        }
        ProcessRunner::run(&self.command, Some(code))
    }

    fn count_comments(&self, code: &str) -> Result<Option<usize>> {
        Ok(Some(self.comments.count(code)))
    }
}

/// Python checker formatted by autopep8.
///
/// Every line counts, blank ones included, since blank lines are part of
/// PEP 8 style.
pub struct PythonChecker {
    command: FormatterCommand,
}

impl Default for PythonChecker {
    fn default() -> Self {
        Self {
            command: FormatterCommand::new(
                "autopep8",
                ["--max-line-length", "132", "--ignore-local-config", "-"],
            ),
        }
    }
}

impl StyleCheck for PythonChecker {
    fn name(&self) -> &str {
        "python"
    }

    fn extensions(&self) -> &[&'static str] {
        &["py"]
    }

    fn magic_names(&self) -> &[&'static str] {
        &["Python script"]
    }

    fn command(&self) -> &FormatterCommand {
        &self.command
    }

    fn set_command(&mut self, command: FormatterCommand) {
        self.command = command;
    }

    fn style(&self, code: &str) -> Result<String> {
        ProcessRunner::run(&self.command, Some(code))
    }

    fn count_comments(&self, code: &str) -> Result<Option<usize>> {
        count_python_comments(code).map(Some)
    }

    fn count_lines(&self, code: &str) -> usize {
        count_all_lines(code)
    }
}

/// JavaScript checker formatted by js-beautify.
pub struct JavaScriptChecker {
    command: FormatterCommand,
    comments: CLikeComments,
}

impl Default for JavaScriptChecker {
    fn default() -> Self {
        Self {
            command: FormatterCommand::new("js-beautify", ["--stdin", "--end-with-newline"]),
            comments: CLikeComments::javascript(),
        }
    }
}

impl StyleCheck for JavaScriptChecker {
    fn name(&self) -> &str {
        "javascript"
    }

    fn extensions(&self) -> &[&'static str] {
        &["js"]
    }

    fn command(&self) -> &FormatterCommand {
        &self.command
    }

    fn set_command(&mut self, command: FormatterCommand) {
        self.command = command;
    }

    fn style(&self, code: &str) -> Result<String> {
        ProcessRunner::run(&self.command, Some(code))
    }

    fn count_comments(&self, code: &str) -> Result<Option<usize>> {
        Ok(Some(self.comments.count(code)))
    }
}

#[cfg(test)]
#[path = "builtin_tests.rs"]
mod tests;
