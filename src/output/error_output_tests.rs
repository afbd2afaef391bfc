use std::path::PathBuf;

use super::*;

fn write_run_error(error: &StyleError, verbose: bool) -> String {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(false).write_run_error(&mut buf, error, verbose);
    String::from_utf8(buf).unwrap()
}

#[test]
fn error_without_colors_basic() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(false).write_error(&mut buf, "Config", "bad value", &[], None);

    assert_eq!(String::from_utf8(buf).unwrap(), "✖ Config: bad value\n");
}

#[test]
fn error_with_colors_uses_ansi() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(true).write_error(
        &mut buf,
        "Config",
        "bad value",
        &["cause".to_string()],
        Some("fix it"),
    );
    let result = String::from_utf8(buf).unwrap();

    assert!(result.starts_with("\x1b[1m\x1b[31m✖ Config:\x1b[0m bad value\n"));
    assert!(result.contains("\x1b[2m× cause\x1b[0m"));
    assert!(result.contains("\x1b[36mhelp:\x1b[0m fix it"));
}

#[test]
fn invalid_output_mode_lists_modes() {
    let result = write_run_error(&StyleError::InvalidOutputMode("fancy".to_string()), false);

    assert_eq!(
        result,
        "✖ Config: invalid output type \"fancy\"\n  \
         help: valid modes are: character, split, unified, score, json, html\n"
    );
}

#[test]
fn unexpected_error_is_generic_unless_verbose() {
    let error = StyleError::Io(std::io::Error::other("disk on fire"));

    let quiet = write_run_error(&error, false);
    assert!(quiet.contains("unexpected error"));
    assert!(!quiet.contains("disk on fire"));

    let verbose = write_run_error(&error, true);
    assert!(verbose.starts_with("✖ IO: IO error: disk on fire\n"));
}

#[test]
fn verbose_prints_source_chain() {
    let error = StyleError::FileRead {
        path: PathBuf::from("cfg.toml"),
        source: std::io::Error::other("permission denied"),
    };

    let result = write_run_error(&error, true);
    assert!(result.contains("✖ File: Failed to read file: cfg.toml\n"));
    assert!(result.contains("  × permission denied\n"));
}
