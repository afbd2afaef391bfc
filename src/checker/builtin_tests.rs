use super::*;

fn sh(script: &str) -> FormatterCommand {
    FormatterCommand::new("sh", ["-c", script])
}

#[test]
fn c_checker_uses_allman_astyle_options() {
    let checker = AstyleChecker::c();

    assert_eq!(checker.command().program(), "astyle");
    assert!(checker.command().args().iter().any(|arg| arg == "--style=allman"));
    assert!(checker.runs_astyle());
}

#[test]
fn java_checker_appends_java_mode() {
    let checker = AstyleChecker::java();
    let args = checker.command().args();

    assert_eq!(args[args.len() - 2..], ["--mode=java", "--style=java"]);
}

#[test]
fn c_checker_counts_comments_and_non_blank_lines() {
    let checker = AstyleChecker::c();
    let code = "// header\nint x;\n\n/* a */ int y;\n";

    assert_eq!(checker.count_comments(code).unwrap(), Some(2));
    assert_eq!(checker.count_lines(code), 3);
}

#[test]
fn python_checker_counts_every_line() {
    let checker = PythonChecker::default();
    let code = "import os\n\n\nx = 1  # one\n";

    assert_eq!(checker.count_lines(code), 4);
    assert_eq!(checker.count_comments(code).unwrap(), Some(1));
}

#[test]
fn python_checker_reports_parse_failures() {
    let checker = PythonChecker::default();
    assert!(checker.count_comments("s = '''open\n").is_err());
}

#[cfg(unix)]
#[test]
fn replacement_command_skips_astyle_version_check() {
    let mut checker = AstyleChecker::c();
    checker.set_command(sh("sed 's/x=1/x = 1/'"));

    assert!(!checker.runs_astyle());
    assert_eq!(checker.style("int x=1;\n").unwrap(), "int x = 1;\n");
}

#[cfg(unix)]
#[test]
fn javascript_checker_pipes_through_formatter() {
    let mut checker = JavaScriptChecker::default();
    checker.set_command(FormatterCommand::new("cat", Vec::<String>::new()));

    assert_eq!(checker.style("let a = 1;\n").unwrap(), "let a = 1;\n");
}

#[cfg(unix)]
#[test]
fn failing_formatter_is_reported() {
    let mut checker = PythonChecker::default();
    checker.set_command(sh("exit 1"));

    let err = checker.style("x = 1\n").unwrap_err();
    assert_eq!(err.to_string(), "failed to stylecheck code");
}
