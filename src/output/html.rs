use std::fmt::Write;

use crate::checker::CheckResult;
use crate::diff::Tag;
use crate::error::Result;
use crate::render::escape_html;
use crate::score::TAB_ESCAPE;

use super::html_template::{HTML_FOOTER, HTML_HEADER};
use super::{BatchReport, FileOutcome, FileReport, OutputFormatter};

/// Standalone HTML document embedding each file's HTML diff.
#[derive(Debug, Default)]
pub struct HtmlFormatter;

impl HtmlFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn status_class(file: &FileReport) -> &'static str {
        match &file.outcome {
            FileOutcome::Failed(_) => "error",
            FileOutcome::Checked(result) if result.is_clean() => "clean",
            FileOutcome::Checked(_) => "warning",
        }
    }

    fn status_text(class: &str) -> &'static str {
        match class {
            "clean" => "✓ Clean",
            "warning" => "⚠ Style issues",
            _ => "✗ Error",
        }
    }

    fn write_summary(output: &mut String, report: &BatchReport) {
        let clean = report
            .files
            .iter()
            .filter_map(FileReport::result)
            .filter(|r| r.is_clean())
            .count();
        let issues = report.checked_count() - clean;
        let cards = [
            ("score", format!("{:.2}", report.score), "Score"),
            ("", report.files.len().to_string(), "Total Files"),
            ("clean", clean.to_string(), "Clean"),
            ("warning", issues.to_string(), "Style Issues"),
            ("error", report.failed_count().to_string(), "Errors"),
        ];

        output.push_str("        <div class=\"summary-grid\">\n");
        for (class, value, label) in cards {
            writeln!(
                output,
                r#"            <div class="summary-card {class}">
                <span class="value">{value}</span>
                <span class="label">{label}</span>
            </div>"#
            )
            .ok();
        }
        output.push_str("        </div>\n");
    }

    fn write_filter_controls(output: &mut String) {
        output.push_str(
            r#"        <div class="filter-controls">
            <button class="filter-btn active" data-filter="all">All</button>
            <button class="filter-btn" data-filter="issues">Issues</button>
        </div>
"#,
        );
    }

    fn write_file(output: &mut String, file: &FileReport) {
        let class = Self::status_class(file);
        let name = escape_html(&file.display_name());

        writeln!(
            output,
            r#"        <section class="file" data-status="{class}">
            <div class="file-header">
                <span class="file-path">{name}</span>
                <span class="status {class}">{}</span>
            </div>
            <div class="file-body">"#,
            Self::status_text(class)
        )
        .ok();

        match &file.outcome {
            FileOutcome::Failed(message) => {
                writeln!(
                    output,
                    r#"                <p class="message">{}</p>"#,
                    escape_html(message)
                )
                .ok();
            }
            FileOutcome::Checked(result) => Self::write_result(output, result),
        }

        output.push_str("            </div>\n        </section>\n");
    }

    fn write_result(output: &mut String, result: &CheckResult) {
        if result.is_clean() {
            output.push_str("                <p>No style errors found.</p>\n");
        } else {
            output.push_str(&result.rendered_diff);
            output.push('\n');
        }
        if result.is_comment_poor() {
            output.push_str("                <p class=\"note\">Consider adding more comments!</p>\n");
        }
        for warn in &result.warn_chars {
            let (element, verb) = match warn.tag {
                Tag::Delete => ("del", "deleted"),
                _ => ("ins", "inserted"),
            };
            let what = if warn.escape == TAB_ESCAPE {
                "a tab"
            } else {
                "a newline"
            };
            writeln!(
                output,
                r#"                <p class="note">Where <{element}>{}</{element}> is highlighted, {what} should be {verb}.</p>"#,
                warn.escape
            )
            .ok();
        }
        writeln!(
            output,
            r#"                <p class="note">score {:.2} · {} lines</p>"#,
            result.score, result.line_count
        )
        .ok();
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format(&self, report: &BatchReport) -> Result<String> {
        let mut output = String::from(HTML_HEADER);

        Self::write_summary(&mut output, report);
        if report.files.is_empty() {
            output.push_str("        <div class=\"no-results\">No files checked.</div>\n");
        } else {
            Self::write_filter_controls(&mut output);
            for file in &report.files {
                Self::write_file(&mut output, file);
            }
        }
        output.push_str(HTML_FOOTER);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
