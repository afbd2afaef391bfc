mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn extensions_are_printed_as_json() {
    style_guard!()
        .arg("--extensions")
        .assert()
        .success()
        .stdout("[\"c\",\"cpp\",\"h\",\"hpp\",\"java\",\"js\",\"py\"]\n");
}

#[test]
fn version_flag() {
    style_guard!()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "style-guard {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn unknown_output_mode_exits_with_config_error() {
    style_guard!()
        .args(["-o", "fancy"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid output type \"fancy\""));
}

#[test]
fn unknown_configured_mode_exits_before_checking() {
    let fixture = TestFixture::new();
    fixture.create_config("[check]\noutput = \"fancy\"\n");
    fixture.create_file("a.c", "int x;\n");

    style_guard!()
        .current_dir(fixture.path())
        .arg("a.c")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "✖ Config: invalid output type \"fancy\"",
        ))
        .stderr(predicate::str::contains("valid modes are: character, split"));
}

#[test]
fn invalid_ignore_pattern_exits_with_config_error() {
    let fixture = TestFixture::new();

    style_guard!()
        .current_dir(fixture.path())
        .args(["-i", "[", "-o", "score"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to parse ignore pattern: ["));
}

#[test]
fn unknown_config_key_exits_with_config_error() {
    let fixture = TestFixture::new();
    fixture.create_config("[check]\ncolour = true\n");

    style_guard!()
        .current_dir(fixture.path())
        .args(["-o", "score"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("✖ Config"));
}

#[test]
fn unknown_checker_in_formatters_exits_with_config_error() {
    let fixture = TestFixture::new();
    fixture.create_config("[formatters]\nrust = [\"rustfmt\"]\n");

    style_guard!()
        .current_dir(fixture.path())
        .args(["-o", "score"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "unknown checker \"rust\" in [formatters]",
        ));
}

#[test]
fn no_config_ignores_broken_config() {
    let fixture = TestFixture::new();
    fixture.create_config("not toml at all [");

    style_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "-o", "score", "."])
        .env("STYLE_GUARD_IGNORE", "*.toml")
        .assert()
        .success()
        .stdout("0.00\n");
}

#[test]
fn missing_explicit_config_exits_with_config_error() {
    let fixture = TestFixture::new();

    style_guard!()
        .current_dir(fixture.path())
        .args(["-c", "nope.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read file: nope.toml"));
}

#[test]
fn empty_directory_scores_zero() {
    let fixture = TestFixture::new();

    style_guard!()
        .current_dir(fixture.path())
        .args(["-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"files\": []"))
        .stdout(predicate::str::contains("\"score\": 0.0"));
}
