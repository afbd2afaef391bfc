use crate::diff::{Tag, diff_lines};

use super::markup::ansi;

/// Line listing in `ndiff` layout: two-space indent for unchanged lines,
/// bold red `- ` and bold green `+ ` prefixes for removed and added lines.
pub fn unified<'a>(original: &'a str, styled: &'a str) -> impl Iterator<Item = String> + 'a {
    diff_lines(original, styled, false)
        .into_iter()
        .map(|edit| match edit.tag {
            Tag::Equal => format!("  {}", edit.line),
            Tag::Delete => colored(ansi::RED, edit.tag, edit.line),
            Tag::Insert => colored(ansi::GREEN, edit.tag, edit.line),
        })
}

fn colored(color: &str, tag: Tag, line: &str) -> String {
    format!("{}{color}{} {line}{}", ansi::BOLD, tag.symbol(), ansi::RESET)
}
