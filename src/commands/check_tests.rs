use std::fs;

use tempfile::TempDir;

use super::*;
use crate::checker::StyleCheck;
use crate::error::StyleError;
use crate::formatter::FormatterCommand;
use crate::output::FileOutcome;

/// Upper-cases its input, without spawning a process.
struct ShoutChecker {
    command: FormatterCommand,
}

impl StyleCheck for ShoutChecker {
    fn name(&self) -> &str {
        "shout"
    }

    fn extensions(&self) -> &[&'static str] {
        &["sh0"]
    }

    fn magic_names(&self) -> &[&'static str] {
        &["shouting text"]
    }

    fn command(&self) -> &FormatterCommand {
        &self.command
    }

    fn set_command(&mut self, command: FormatterCommand) {
        self.command = command;
    }

    fn style(&self, code: &str) -> Result<String> {
        Ok(code.to_uppercase())
    }
}

struct FixedSniffer(&'static str);

impl ContentSniffer for FixedSniffer {
    fn sniff(&self, _path: &Path) -> String {
        self.0.to_string()
    }
}

fn registry() -> CheckerRegistry {
    let mut registry = CheckerRegistry::new();
    registry.register(Box::new(ShoutChecker {
        command: FormatterCommand::new("shout", Vec::<String>::new()),
    }));
    registry
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[test]
fn output_mode_prefers_command_line() {
    let mode = resolve_output_mode(Some(OutputMode::Json), Some("unified")).unwrap();
    assert_eq!(mode, OutputMode::Json);
}

#[test]
fn output_mode_falls_back_to_config_then_default() {
    assert_eq!(
        resolve_output_mode(None, Some("split")).unwrap(),
        OutputMode::Split
    );
    assert_eq!(
        resolve_output_mode(None, None).unwrap(),
        OutputMode::Character
    );
}

#[test]
fn invalid_configured_mode_is_rejected() {
    let err = resolve_output_mode(None, Some("fancy")).unwrap_err();
    assert!(matches!(err, StyleError::InvalidOutputMode(ref m) if m == "fancy"));
}

#[test]
fn ignore_sources_in_priority_order() {
    let cli = strings(&["*.min.js"]);
    let config = strings(&["*/vendor/*"]);

    assert_eq!(resolve_ignore(&cli, &config, Some("*.h")), cli);
    assert_eq!(resolve_ignore(&[], &config, Some("*.h")), config);
    assert_eq!(
        resolve_ignore(&[], &[], Some(" *.h, ,build/*")),
        strings(&["*.h", "build/*"])
    );
    assert!(resolve_ignore(&[], &[], None).is_empty());
}

#[test]
fn no_config_skips_loading() {
    let config = load_config(Some(Path::new("/definitely/missing.toml")), true).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn missing_explicit_config_is_an_error() {
    let err = load_config(Some(Path::new("/definitely/missing.toml")), false).unwrap_err();
    assert!(err.is_expected());
}

#[test]
fn check_files_keeps_order_and_isolates_failures() {
    let dir = TempDir::new().unwrap();
    let clean = dir.path().join("clean.sh0");
    let dirty = dir.path().join("dirty.sh0");
    let empty = dir.path().join("empty.sh0");
    let unknown = dir.path().join("notes.txt");
    fs::write(&clean, "ABC\nDEF\n").unwrap();
    fs::write(&dirty, "abc\nDEF\n").unwrap();
    fs::write(&empty, "").unwrap();
    fs::write(&unknown, "hello\n").unwrap();
    let files = vec![
        clean.clone(),
        dirty.clone(),
        empty,
        unknown.clone(),
        dir.path().join("gone.sh0"),
    ];

    let report = check_files(&files, &registry(), &FixedSniffer(""), OutputMode::Score);

    let paths: Vec<_> = report.files.iter().map(|f| f.path.clone()).collect();
    assert_eq!(paths, files);

    assert!(report.files[0].result().unwrap().is_clean());
    let dirty_result = report.files[1].result().unwrap();
    assert_eq!(dirty_result.changed_lines, 2);
    assert!(dirty_result.rendered_diff.is_empty());
    assert_eq!(report.files[2].error(), Some("file is empty"));
    assert_eq!(
        report.files[3].error(),
        Some(format!("unknown file type \"{}\", skipping...", unknown.display()).as_str())
    );
    assert!(matches!(report.files[4].outcome, FileOutcome::Failed(ref m) if m.contains("not found")));

    // Four checked lines with one changed line pair: 1 - 1/4.
    assert!((report.score - 0.75).abs() < 1e-9);
}

#[test]
fn sniffed_type_selects_checker() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("LOUD");
    fs::write(&script, "HEY\n").unwrap();

    let report = check_files(
        &[script],
        &registry(),
        &FixedSniffer("shouting text, ASCII"),
        OutputMode::Json,
    );

    assert!(report.files[0].result().unwrap().is_clean());
    assert!((report.score - 1.0).abs() < f64::EPSILON);
}

#[test]
fn check_files_renders_for_the_mode() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("a.sh0");
    fs::write(&file, "a\n").unwrap();

    let report = check_files(&[file], &registry(), &FixedSniffer(""), OutputMode::Json);
    let diff = &report.files[0].result().unwrap().rendered_diff;

    assert!(diff.starts_with("<pre>"));
    assert!(diff.contains("<del>a</del><ins>A</ins>"));
}

#[test]
fn html_report_is_kept_on_disk() {
    let path = write_html_report("<html></html>").unwrap();

    assert_eq!(path.extension().unwrap(), "html");
    assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
    fs::remove_file(path).unwrap();
}
