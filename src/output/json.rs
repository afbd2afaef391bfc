use serde::Serialize;

use crate::checker::CheckResult;
use crate::error::Result;

use super::{BatchReport, FileOutcome, FileReport, OutputFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    version: &'a str,
    score: f64,
    files: Vec<JsonFile<'a>>,
}

/// Each entry carries either the five result keys or `error`.
#[derive(Serialize)]
#[serde(untagged)]
enum JsonFile<'a> {
    Checked {
        name: String,
        score: f64,
        comments: bool,
        diff: &'a str,
        warn_chars: Vec<(char, &'static str)>,
        loc: usize,
    },
    Failed {
        name: String,
        error: &'a str,
    },
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &BatchReport) -> Result<String> {
        let output = JsonOutput {
            version: report.version,
            score: report.score,
            files: report.files.iter().map(convert_file).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_file(file: &FileReport) -> JsonFile<'_> {
    let name = file.display_name();
    match &file.outcome {
        FileOutcome::Checked(result) => convert_result(name, result),
        FileOutcome::Failed(error) => JsonFile::Failed { name, error },
    }
}

fn convert_result(name: String, result: &CheckResult) -> JsonFile<'_> {
    JsonFile::Checked {
        name,
        score: result.score,
        comments: result.is_comment_poor(),
        diff: &result.rendered_diff,
        warn_chars: result
            .warn_chars
            .iter()
            .map(|w| (w.tag.symbol(), w.escape))
            .collect(),
        loc: result.line_count,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
