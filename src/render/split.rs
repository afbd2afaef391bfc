use std::vec;

use crate::diff::{LineDiff, OpKind, Opcode, Tag, diff};

use super::markup::{AnsiMarkup, ansi};

pub const TAB_WIDTH: usize = 8;
const GUTTER: &str = "  ";

/// Expands tabs to the next multiple of [`TAB_WIDTH`] columns.
#[must_use]
pub fn expand_tabs(line: &str) -> String {
    let mut expanded = String::with_capacity(line.len());
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let pad = TAB_WIDTH - column % TAB_WIDTH;
            expanded.extend(std::iter::repeat_n(' ', pad));
            column += pad;
        } else {
            expanded.push(c);
            column += 1;
        }
    }
    expanded
}

/// One side of a row, truncated to a fixed number of columns.
struct Cell {
    text: String,
    used: usize,
    width: usize,
}

impl Cell {
    const fn new(width: usize) -> Self {
        Self {
            text: String::new(),
            used: 0,
            width,
        }
    }

    fn whole(line: &str, tag: Tag, width: usize) -> Self {
        let mut cell = Self::new(width);
        cell.push(line, tag);
        cell
    }

    fn push(&mut self, run: &str, tag: Tag) {
        let shown: String = run.chars().take(self.width - self.used).collect();
        if shown.is_empty() {
            return;
        }
        self.used += shown.chars().count();
        if tag.is_change() {
            self.text.push_str(AnsiMarkup::background(Some(tag)));
            self.text.push_str(&shown);
            self.text.push_str(ansi::RESET);
        } else {
            self.text.push_str(&shown);
        }
    }

    fn padded(mut self) -> String {
        self.text
            .extend(std::iter::repeat_n(' ', self.width - self.used));
        self.text
    }
}

/// Side-by-side rows: original on the left, styled on the right.
///
/// Replaced line pairs are highlighted character by character; lines with no
/// counterpart are highlighted whole.
pub struct SplitDiff {
    old: Vec<String>,
    new: Vec<String>,
    opcodes: vec::IntoIter<Opcode>,
    current: Option<(Opcode, usize)>,
    column_width: usize,
}

impl SplitDiff {
    #[must_use]
    pub fn new(original: &str, styled: &str, terminal_width: usize) -> Self {
        let line_diff = LineDiff::new(original, styled, false);
        let old = line_diff.old_lines().iter().map(|l| expand_tabs(l)).collect();
        let new = line_diff.new_lines().iter().map(|l| expand_tabs(l)).collect();
        Self {
            old,
            new,
            opcodes: line_diff.opcodes().to_vec().into_iter(),
            current: None,
            column_width: (terminal_width.saturating_sub(GUTTER.len()) / 2).max(1),
        }
    }

    fn row(&self, op: &Opcode, index: usize) -> String {
        let width = self.column_width;
        let old = (index < op.a.len()).then(|| self.old[op.a.start + index].as_str());
        let new = (index < op.b.len()).then(|| self.new[op.b.start + index].as_str());

        let (left, right) = match (op.kind, old, new) {
            (OpKind::Equal, Some(old), Some(new)) => {
                (Cell::whole(old, Tag::Equal, width), Cell::whole(new, Tag::Equal, width))
            }
            (_, Some(old), Some(new)) => Self::paired(old, new, width),
            (_, Some(old), None) => (Cell::whole(old, Tag::Delete, width), Cell::new(width)),
            (_, None, Some(new)) => (Cell::new(width), Cell::whole(new, Tag::Insert, width)),
            (_, None, None) => (Cell::new(width), Cell::new(width)),
        };

        let mut row = left.padded();
        row.push_str(GUTTER);
        row.push_str(&right.text);
        row.truncate(row.trim_end().len());
        row
    }

    fn paired(old: &str, new: &str, width: usize) -> (Cell, Cell) {
        let mut left = Cell::new(width);
        let mut right = Cell::new(width);
        for op in &diff(old, new) {
            match op.tag() {
                Tag::Equal => {
                    left.push(op.run(), Tag::Equal);
                    right.push(op.run(), Tag::Equal);
                }
                Tag::Delete => left.push(op.run(), Tag::Delete),
                Tag::Insert => right.push(op.run(), Tag::Insert),
            }
        }
        (left, right)
    }
}

impl Iterator for SplitDiff {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some((op, row)) = &mut self.current
                && *row < op.a.len().max(op.b.len())
            {
                let index = *row;
                *row += 1;
                let op = op.clone();
                return Some(self.row(&op, index));
            }
            self.current = Some((self.opcodes.next()?, 0));
        }
    }
}

#[cfg(test)]
#[path = "split_tests.rs"]
mod tests;
