use std::fs;

use tempfile::TempDir;

use super::*;

/// Formats by inserting spaces around `=`, without spawning a process.
struct SpacingChecker {
    command: FormatterCommand,
    comments: Option<usize>,
}

impl SpacingChecker {
    fn new() -> Self {
        Self {
            command: FormatterCommand::new("spacing", Vec::<String>::new()),
            comments: Some(1),
        }
    }
}

impl StyleCheck for SpacingChecker {
    fn name(&self) -> &str {
        "spacing"
    }

    fn extensions(&self) -> &[&'static str] {
        &["sp"]
    }

    fn command(&self) -> &FormatterCommand {
        &self.command
    }

    fn set_command(&mut self, command: FormatterCommand) {
        self.command = command;
    }

    fn style(&self, code: &str) -> Result<String> {
        Ok(code.replace(" = ", "=").replace('=', " = "))
    }

    fn count_comments(&self, _code: &str) -> Result<Option<usize>> {
        Ok(self.comments)
    }
}

fn check(code: &str, renderer: Renderer) -> Result<CheckResult> {
    check_source(
        Path::new("demo.sp"),
        &SpacingChecker::new(),
        normalize_source(code),
        renderer,
    )
}

#[test]
fn clean_source_scores_one() {
    let result = check("a = 1\nb = 2\n", Renderer::Character).unwrap();

    assert!(result.is_clean());
    assert!((result.score - 1.0).abs() < f64::EPSILON);
    assert_eq!(result.rendered_diff, "");
    assert!(result.warn_chars.is_empty());
    assert_eq!(result.line_count, 2);
}

#[test]
fn unstyled_line_lowers_score() {
    let result = check("a=1\nb = 2\nc = 3\nd = 4\n", Renderer::Unified).unwrap();

    assert_eq!(result.changed_lines, 2);
    assert!((result.diff_count - 1.0).abs() < f64::EPSILON);
    assert!((result.score - 0.75).abs() < f64::EPSILON);
    assert!(result.rendered_diff.contains("- a=1"));
    assert!(result.rendered_diff.contains("+ a = 1"));
}

#[test]
fn comment_ratio_comes_from_original_lines() {
    let result = check("a = 1\nb = 2\nc = 3\nd = 4\n", Renderer::Score).unwrap();

    assert!((result.comment_ratio - 0.25).abs() < f64::EPSILON);
    assert!(!result.is_comment_poor());
}

#[test]
fn unknown_comment_count_never_warns() {
    let mut checker = SpacingChecker::new();
    checker.comments = None;

    let result = check_source(
        Path::new("demo.sp"),
        &checker,
        "a = 1\n".to_string(),
        Renderer::Score,
    )
    .unwrap();

    assert!((result.comment_ratio - 1.0).abs() < f64::EPSILON);
}

#[test]
fn empty_source_is_empty_file() {
    let err = check("", Renderer::Character).unwrap_err();
    assert_eq!(err.to_string(), "file is empty");
}

#[test]
fn aggregate_reflects_changed_and_counted_lines() {
    let result = check("a=1\nb = 2\n", Renderer::Score).unwrap();
    assert_eq!(result.aggregate(), crate::score::Aggregate::new(2, 2));
}

#[test]
fn normalize_strips_trailing_whitespace_and_adds_newline() {
    assert_eq!(normalize_source("a  \r\nb\t\nc"), "a\nb\nc\n");
    assert_eq!(normalize_source("a\n\n"), "a\n");
    assert_eq!(normalize_source(""), "");
    assert_eq!(normalize_source("   \n"), "");
}

#[test]
fn load_source_reads_and_normalizes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("x.c");
    fs::write(&path, "int x;   \nint y;").unwrap();

    assert_eq!(load_source(&path).unwrap(), "int x;\nint y;\n");
}

#[test]
fn load_source_rejects_binary() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blob.c");
    fs::write(&path, [0xff, 0xfe, 0x00, 0x81]).unwrap();

    let err = load_source(&path).unwrap_err();
    assert_eq!(err.to_string(), "file does not seem to contain text, skipping...");
}

#[test]
fn missing_file_is_not_found() {
    let registry = CheckerRegistry::default();
    let sniffer = crate::formatter::FileCommandSniffer;

    let err = check_file(
        Path::new("no/such/file.c"),
        &registry,
        &sniffer,
        Renderer::Score,
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "file \"no/such/file.c\" not found");
}

#[test]
fn unknown_extension_is_unknown_type() {
    struct BlankSniffer;
    impl ContentSniffer for BlankSniffer {
        fn sniff(&self, _path: &Path) -> String {
            String::new()
        }
    }

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "hello\n").unwrap();

    let err = check_file(&path, &CheckerRegistry::default(), &BlankSniffer, Renderer::Score)
        .unwrap_err();

    assert!(matches!(err, StyleError::UnknownType { path: ref p } if *p == path));
}
