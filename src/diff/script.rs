use std::fmt;

/// Edit tag of a run.
///
/// Variant order follows the tag symbols (` ` < `+` < `-`) so sorted
/// collections of tags read the same as their symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    Equal,
    Insert,
    Delete,
}

impl Tag {
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Equal => ' ',
            Self::Insert => '+',
            Self::Delete => '-',
        }
    }

    #[must_use]
    pub const fn is_change(self) -> bool {
        !matches!(self, Self::Equal)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A maximal run of characters sharing one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    Equal(String),
    Insert(String),
    Delete(String),
}

impl EditOp {
    #[must_use]
    pub fn new(tag: Tag, run: String) -> Self {
        match tag {
            Tag::Equal => Self::Equal(run),
            Tag::Insert => Self::Insert(run),
            Tag::Delete => Self::Delete(run),
        }
    }

    #[must_use]
    pub const fn tag(&self) -> Tag {
        match self {
            Self::Equal(_) => Tag::Equal,
            Self::Insert(_) => Tag::Insert,
            Self::Delete(_) => Tag::Delete,
        }
    }

    #[must_use]
    pub fn run(&self) -> &str {
        match self {
            Self::Equal(run) | Self::Insert(run) | Self::Delete(run) => run,
        }
    }

    fn run_mut(&mut self) -> &mut String {
        match self {
            Self::Equal(run) | Self::Insert(run) | Self::Delete(run) => run,
        }
    }
}

/// Ordered edit runs from an original text to its styled version.
///
/// Adjacent ops never share a tag and no op is empty: [`EditScript::push`]
/// extends the last run instead of starting a new one with the same tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditScript {
    ops: Vec<EditOp>,
}

impl EditScript {
    #[must_use]
    pub const fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn push(&mut self, tag: Tag, run: &str) {
        if run.is_empty() {
            return;
        }
        if let Some(last) = self.ops.last_mut()
            && last.tag() == tag
        {
            last.run_mut().push_str(run);
            return;
        }
        self.ops.push(EditOp::new(tag, run.to_string()));
    }

    #[must_use]
    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EditOp> {
        self.ops.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// True when the script contains no insertions or deletions.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.ops.iter().all(|op| op.tag() == Tag::Equal)
    }

    /// Rebuilds the original text from the `Equal` and `Delete` runs.
    #[must_use]
    pub fn original(&self) -> String {
        self.collect_runs(Tag::Delete)
    }

    /// Rebuilds the styled text from the `Equal` and `Insert` runs.
    #[must_use]
    pub fn styled(&self) -> String {
        self.collect_runs(Tag::Insert)
    }

    fn collect_runs(&self, side: Tag) -> String {
        self.ops
            .iter()
            .filter(|op| op.tag() == Tag::Equal || op.tag() == side)
            .map(EditOp::run)
            .collect()
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a EditOp;
    type IntoIter = std::slice::Iter<'a, EditOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

/// An original text paired with its reference-styled version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub original: String,
    pub styled: String,
}

impl SourceUnit {
    #[must_use]
    pub const fn new(original: String, styled: String) -> Self {
        Self { original, styled }
    }
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
