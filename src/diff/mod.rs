//! Longest-matching-block diffing over characters, and line diffing for
//! scores and line-oriented views.

mod matcher;
mod script;

use similar::{Algorithm, DiffTag, TextDiff};

pub use matcher::{Match, OpKind, Opcode, SequenceMatcher};
pub use script::{EditOp, EditScript, SourceUnit, Tag};

/// Character-level edit script turning `original` into `styled`.
///
/// Replaced ranges become a `Delete` run followed by an `Insert` run. Equal
/// inputs yield a single `Equal` op; two empty inputs yield an empty script.
#[must_use]
pub fn diff(original: &str, styled: &str) -> EditScript {
    let old: Vec<char> = original.chars().collect();
    let new: Vec<char> = styled.chars().collect();
    let old_bounds = char_boundaries(original);
    let new_bounds = char_boundaries(styled);

    let mut script = EditScript::new();
    for op in SequenceMatcher::new(&old, &new).opcodes() {
        let removed = &original[old_bounds[op.a.start]..old_bounds[op.a.end]];
        let added = &styled[new_bounds[op.b.start]..new_bounds[op.b.end]];
        if op.kind == OpKind::Equal {
            script.push(Tag::Equal, removed);
        } else {
            script.push(Tag::Delete, removed);
            script.push(Tag::Insert, added);
        }
    }
    script
}

/// Byte offset of every char plus the end of the string.
fn char_boundaries(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(text.len()))
        .collect()
}

/// Splits after every `\n`. Without `keep_ends` only that `\n` is removed, so
/// a `\r` before it stays part of the line in both modes.
#[must_use]
pub fn split_lines(text: &str, keep_ends: bool) -> Vec<&str> {
    text.split_inclusive('\n')
        .map(|line| {
            if keep_ends {
                line
            } else {
                line.strip_suffix('\n').unwrap_or(line)
            }
        })
        .collect()
}

/// One line of a line-level edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineEdit<'a> {
    pub tag: Tag,
    pub line: &'a str,
}

/// Line-granularity diff between two texts.
#[derive(Debug, Clone)]
pub struct LineDiff<'a> {
    old: Vec<&'a str>,
    new: Vec<&'a str>,
    opcodes: Vec<Opcode>,
}

impl<'a> LineDiff<'a> {
    #[must_use]
    pub fn new(original: &'a str, styled: &'a str, keep_ends: bool) -> Self {
        let old = split_lines(original, keep_ends);
        let new = split_lines(styled, keep_ends);
        let opcodes = line_opcodes(&old, &new);
        Self { old, new, opcodes }
    }

    #[must_use]
    pub fn old_lines(&self) -> &[&'a str] {
        &self.old
    }

    #[must_use]
    pub fn new_lines(&self) -> &[&'a str] {
        &self.new
    }

    #[must_use]
    pub fn opcodes(&self) -> &[Opcode] {
        &self.opcodes
    }

    /// Flattens the opcodes into per-line edits, deletions before insertions.
    #[must_use]
    pub fn edits(&self) -> Vec<LineEdit<'a>> {
        let mut edits = Vec::with_capacity(self.old.len().max(self.new.len()));
        for op in &self.opcodes {
            if op.kind == OpKind::Equal {
                edits.extend(self.old[op.a.clone()].iter().map(|&line| LineEdit {
                    tag: Tag::Equal,
                    line,
                }));
                continue;
            }
            edits.extend(self.old[op.a.clone()].iter().map(|&line| LineEdit {
                tag: Tag::Delete,
                line,
            }));
            edits.extend(self.new[op.b.clone()].iter().map(|&line| LineEdit {
                tag: Tag::Insert,
                line,
            }));
        }
        edits
    }

    /// Number of lines deleted from the original.
    #[must_use]
    pub fn deleted(&self) -> usize {
        self.opcodes
            .iter()
            .filter(|op| op.kind != OpKind::Equal)
            .map(|op| op.a.len())
            .sum()
    }

    /// Number of lines inserted into the styled text.
    #[must_use]
    pub fn inserted(&self) -> usize {
        self.opcodes
            .iter()
            .filter(|op| op.kind != OpKind::Equal)
            .map(|op| op.b.len())
            .sum()
    }
}

/// Myers line diff with adjacent changes folded into one opcode, so deletions
/// always precede insertions within a changed region.
fn line_opcodes(old: &[&str], new: &[&str]) -> Vec<Opcode> {
    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_slices(old, new);

    let mut opcodes: Vec<Opcode> = Vec::new();
    for op in diff.ops() {
        let (tag, a, b) = op.as_tag_tuple();
        if tag == DiffTag::Equal {
            opcodes.push(Opcode {
                kind: OpKind::Equal,
                a,
                b,
            });
            continue;
        }
        if let Some(last) = opcodes.last_mut()
            && last.kind != OpKind::Equal
        {
            last.a.end = a.end;
            last.b.end = b.end;
            last.kind = OpKind::for_change(&last.a, &last.b);
            continue;
        }
        opcodes.push(Opcode {
            kind: OpKind::for_change(&a, &b),
            a,
            b,
        });
    }
    opcodes
}

/// Line-level edits between `original` and `styled`.
#[must_use]
pub fn diff_lines<'a>(original: &'a str, styled: &'a str, keep_ends: bool) -> Vec<LineEdit<'a>> {
    LineDiff::new(original, styled, keep_ends).edits()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
