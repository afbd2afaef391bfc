use super::*;

fn sh(script: &str) -> FormatterCommand {
    FormatterCommand::new("sh", ["-c", script])
}

fn cat() -> FormatterCommand {
    FormatterCommand::new("cat", Vec::<String>::new())
}

#[test]
fn run_pipes_input_through_stdout() {
    let output = ProcessRunner::run(&cat(), Some("int x;\n")).unwrap();
    assert_eq!(output, "int x;\n");
}

#[test]
fn run_without_input_reads_nothing() {
    let output = ProcessRunner::run(&sh("echo hello"), None).unwrap();
    assert_eq!(output, "hello\n");
}

#[test]
fn large_input_does_not_deadlock() {
    let input = "x".repeat(4 * 1024 * 1024);
    let output = ProcessRunner::run(&cat(), Some(input.as_str())).unwrap();
    assert_eq!(output.len(), input.len());
}

#[test]
fn missing_program_is_a_dependency_error() {
    let command = FormatterCommand::new("style-guard-no-such-formatter", ["--version"]);
    let err = ProcessRunner::run(&command, None).unwrap_err();

    assert!(matches!(err, StyleError::Dependency(ref name) if name == "style-guard-no-such-formatter"));
}

#[test]
fn non_zero_exit_is_a_formatter_failure() {
    let err = ProcessRunner::run(&sh("echo broken >&2; exit 3"), Some("code\n")).unwrap_err();

    match err {
        StyleError::FormatterFailure {
            status, stderr, ..
        } => {
            assert_eq!(status, Some(3));
            assert_eq!(stderr, "broken");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn accept_any_exit_returns_stdout() {
    let output = ProcessRunner::run_with(&sh("echo partial; exit 1"), None, ExitPolicy::AcceptAny)
        .unwrap();
    assert_eq!(output, "partial\n");
}

#[test]
fn child_that_ignores_stdin_still_succeeds() {
    let input = "y".repeat(1024 * 1024);
    let output = ProcessRunner::run(&sh("echo done"), Some(input.as_str())).unwrap();
    assert_eq!(output, "done\n");
}

#[test]
fn command_from_argv_splits_program() {
    let argv = vec!["astyle".to_string(), "--ascii".to_string()];
    let command = FormatterCommand::from_argv(&argv).unwrap();

    assert_eq!(command.program(), "astyle");
    assert_eq!(command.args(), ["--ascii"]);
    assert_eq!(command.to_string(), "astyle --ascii");
}

#[test]
fn command_from_empty_argv_is_config_error() {
    assert!(matches!(
        FormatterCommand::from_argv(&[]),
        Err(StyleError::Config(_))
    ));
}

#[test]
fn sniffer_output_is_trimmed() {
    let sniffed = FileCommandSniffer.sniff(std::path::Path::new("/definitely/not/here.xyz"));
    assert_eq!(sniffed, sniffed.trim());
}
