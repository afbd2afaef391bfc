use std::slice;
use std::str::Chars;

use crate::diff::{EditOp, EditScript, Tag};
use crate::score::{NEWLINE_ESCAPE, TAB_ESCAPE};

use super::markup::Markup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Prefix,
    Body,
    Suffix,
    Done,
}

/// Lazily renders an edit script one output line at a time, marking every
/// run boundary with `M`.
///
/// Changed newlines and tabs are shown as `\n`/`\t` tokens. A deleted
/// newline does not break the output line, so the deletion stays visible
/// next to the text it joined.
pub struct CharDiff<'a, M> {
    markup: M,
    ops: slice::Iter<'a, EditOp>,
    current: Option<(Tag, Chars<'a>)>,
    tag: Option<Tag>,
    line: String,
    stage: Stage,
}

impl<'a, M: Markup> CharDiff<'a, M> {
    #[must_use]
    pub fn new(script: &'a EditScript, markup: M) -> Self {
        Self {
            markup,
            ops: script.iter(),
            current: None,
            tag: None,
            line: String::new(),
            stage: Stage::Prefix,
        }
    }

    fn next_char(&mut self) -> Option<(Tag, char)> {
        loop {
            if let Some((tag, chars)) = &mut self.current
                && let Some(c) = chars.next()
            {
                return Some((*tag, c));
            }
            let op = self.ops.next()?;
            self.current = Some((op.tag(), op.run().chars()));
        }
    }

    fn switch_to(&mut self, tag: Option<Tag>) {
        if tag != self.tag {
            let marker = self.markup.transition(self.tag, tag);
            self.line.push_str(&marker);
            self.tag = tag;
        }
    }

    fn push_marker(&mut self, from: Tag, to: Tag) {
        let marker = self.markup.transition(Some(from), Some(to));
        self.line.push_str(&marker);
    }

    fn next_line(&mut self) -> Option<String> {
        loop {
            let next = self.next_char();
            self.switch_to(next.map(|(tag, _)| tag));

            let Some((tag, c)) = next else {
                let last = std::mem::take(&mut self.line);
                return self.markup.has_content(&last).then_some(last);
            };

            match c {
                '\n' => {
                    if tag.is_change() {
                        self.markup.push_text(&mut self.line, NEWLINE_ESCAPE);
                        self.push_marker(tag, Tag::Equal);
                    }
                    let finished = (tag != Tag::Delete).then(|| std::mem::take(&mut self.line));
                    self.push_marker(Tag::Equal, tag);
                    if finished.is_some() {
                        return finished;
                    }
                }
                '\t' if tag.is_change() => self.markup.push_text(&mut self.line, TAB_ESCAPE),
                _ => {
                    let mut buf = [0; 4];
                    self.markup.push_text(&mut self.line, c.encode_utf8(&mut buf));
                }
            }
        }
    }
}

impl<M: Markup> Iterator for CharDiff<'_, M> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            match self.stage {
                Stage::Prefix => {
                    self.stage = Stage::Body;
                    if let Some(prefix) = self.markup.prefix() {
                        return Some(prefix.to_string());
                    }
                }
                Stage::Body => {
                    if let Some(line) = self.next_line() {
                        return Some(line);
                    }
                    self.stage = Stage::Suffix;
                }
                Stage::Suffix => {
                    self.stage = Stage::Done;
                    if let Some(suffix) = self.markup.suffix() {
                        return Some(suffix.to_string());
                    }
                }
                Stage::Done => return None,
            }
        }
    }
}

#[cfg(test)]
#[path = "char_diff_tests.rs"]
mod tests;
