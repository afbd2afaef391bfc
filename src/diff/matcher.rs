use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Range;

/// A common block: `a[a..a + len] == b[b..b + len]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub a: usize,
    pub b: usize,
    pub len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Equal,
    Replace,
    Delete,
    Insert,
}

impl OpKind {
    /// Kind of a non-equal opcode covering `a` and `b`.
    #[must_use]
    pub const fn for_change(a: &Range<usize>, b: &Range<usize>) -> Self {
        match (a.start < a.end, b.start < b.end) {
            (true, false) => Self::Delete,
            (false, true) => Self::Insert,
            _ => Self::Replace,
        }
    }
}

/// Describes how to turn `a[self.a]` into `b[self.b]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opcode {
    pub kind: OpKind,
    pub a: Range<usize>,
    pub b: Range<usize>,
}

/// Ratcliff/Obershelp sequence matcher.
///
/// Repeatedly takes the longest contiguous block common to both sequences and
/// recurses into the unmatched ranges on either side of it. Among blocks of
/// equal length the one starting earliest in `a` wins, then the one starting
/// earliest in `b`, which makes the result fully deterministic. No junk
/// heuristic is applied: every element may anchor a block.
///
/// Elements are interned to dense ids up front; each longest-block query
/// builds a suffix automaton over the `b` range and streams the `a` range
/// through it, so one query is linear in the two range lengths.
pub struct SequenceMatcher {
    a: Vec<usize>,
    b: Vec<usize>,
    alphabet: usize,
}

impl SequenceMatcher {
    #[must_use]
    pub fn new<T: Eq + Hash>(a: &[T], b: &[T]) -> Self {
        let mut ids: HashMap<&T, usize> = HashMap::new();
        let b = intern(&mut ids, b);
        let a = intern(&mut ids, a);
        Self {
            a,
            b,
            alphabet: ids.len(),
        }
    }

    /// Longest block common to `a[a_range]` and `b[b_range]`.
    ///
    /// Returns a zero-length match positioned at the range starts when the
    /// ranges share nothing.
    #[must_use]
    pub fn find_longest_match(&self, a_range: Range<usize>, b_range: Range<usize>) -> Match {
        let mut automaton = SuffixAutomaton::new(self.alphabet);
        self.longest_match_with(&mut automaton, a_range, b_range)
    }

    fn longest_match_with(
        &self,
        automaton: &mut SuffixAutomaton,
        a_range: Range<usize>,
        b_range: Range<usize>,
    ) -> Match {
        let mut best = Match {
            a: a_range.start,
            b: b_range.start,
            len: 0,
        };
        if a_range.is_empty() || b_range.is_empty() {
            return best;
        }
        automaton.build(&self.b[b_range.clone()], b_range.start);

        // `len` is the longest suffix of a[..=i] occurring in the b range,
        // `state` the automaton state holding it.
        let (mut state, mut len) = (ROOT, 0);
        for i in a_range {
            let symbol = self.a[i];
            loop {
                if let Some(target) = automaton.next(state, symbol) {
                    state = target;
                    len += 1;
                    break;
                }
                if state == ROOT {
                    len = 0;
                    break;
                }
                state = automaton.link[state];
                len = automaton.len[state];
            }
            // Strictly longer only: ties keep the earliest end in `a`, and the
            // first end in `b` of that substring is its earliest occurrence.
            if len > best.len {
                best = Match {
                    a: i + 1 - len,
                    b: automaton.first_end[state] + 1 - len,
                    len,
                };
            }
        }

        best
    }

    /// All matching blocks in ascending order, adjacent blocks merged.
    ///
    /// The list always ends with the sentinel `Match { a: len(a), b: len(b), len: 0 }`.
    #[must_use]
    pub fn matching_blocks(&self) -> Vec<Match> {
        let (la, lb) = (self.a.len(), self.b.len());
        let mut automaton = SuffixAutomaton::new(self.alphabet);
        let mut queue = vec![(0..la, 0..lb)];
        let mut blocks = Vec::new();

        while let Some((a_range, b_range)) = queue.pop() {
            let found = self.longest_match_with(&mut automaton, a_range.clone(), b_range.clone());
            if found.len == 0 {
                continue;
            }
            if a_range.start < found.a && b_range.start < found.b {
                queue.push((a_range.start..found.a, b_range.start..found.b));
            }
            let (a_end, b_end) = (found.a + found.len, found.b + found.len);
            if a_end < a_range.end && b_end < b_range.end {
                queue.push((a_end..a_range.end, b_end..b_range.end));
            }
            blocks.push(found);
        }
        blocks.sort_unstable_by_key(|m| (m.a, m.b));

        let mut merged: Vec<Match> = Vec::with_capacity(blocks.len() + 1);
        for block in blocks {
            let extends_last = merged
                .last()
                .is_some_and(|last| last.a + last.len == block.a && last.b + last.len == block.b);
            if extends_last {
                if let Some(last) = merged.last_mut() {
                    last.len += block.len;
                }
            } else {
                merged.push(block);
            }
        }
        merged.push(Match {
            a: la,
            b: lb,
            len: 0,
        });
        merged
    }

    #[must_use]
    pub fn opcodes(&self) -> Vec<Opcode> {
        let (mut i, mut j) = (0, 0);
        let mut opcodes = Vec::new();

        for block in self.matching_blocks() {
            if i < block.a || j < block.b {
                let (a, b) = (i..block.a, j..block.b);
                opcodes.push(Opcode {
                    kind: OpKind::for_change(&a, &b),
                    a,
                    b,
                });
            }
            i = block.a + block.len;
            j = block.b + block.len;
            if block.len > 0 {
                opcodes.push(Opcode {
                    kind: OpKind::Equal,
                    a: block.a..i,
                    b: block.b..j,
                });
            }
        }

        opcodes
    }
}

fn intern<'a, T: Eq + Hash>(ids: &mut HashMap<&'a T, usize>, items: &'a [T]) -> Vec<usize> {
    items
        .iter()
        .map(|item| {
            let next = ids.len();
            *ids.entry(item).or_insert(next)
        })
        .collect()
}

const ROOT: usize = 0;
const NONE: usize = usize::MAX;

#[derive(Debug, Clone, Copy)]
struct Edge {
    symbol: usize,
    target: usize,
    next: usize,
}

/// Suffix automaton over one slice of interned symbols.
///
/// The root keeps a dense transition table; every other state keeps its
/// transitions as a linked list in the shared `edges` arena. Buffers are
/// reused across builds.
struct SuffixAutomaton {
    len: Vec<usize>,
    link: Vec<usize>,
    /// Absolute position in `b` where a state's substrings first end.
    first_end: Vec<usize>,
    head: Vec<usize>,
    edges: Vec<Edge>,
    root: Vec<usize>,
}

impl SuffixAutomaton {
    fn new(alphabet: usize) -> Self {
        Self {
            len: Vec::new(),
            link: Vec::new(),
            first_end: Vec::new(),
            head: Vec::new(),
            edges: Vec::new(),
            root: vec![NONE; alphabet],
        }
    }

    fn build(&mut self, symbols: &[usize], offset: usize) {
        self.len.clear();
        self.link.clear();
        self.first_end.clear();
        self.head.clear();
        self.edges.clear();
        self.root.fill(NONE);
        self.add_state(0, NONE, 0);

        let mut last = ROOT;
        for (pos, &symbol) in symbols.iter().enumerate() {
            let cur = self.add_state(self.len[last] + 1, ROOT, offset + pos);

            let mut p = last;
            let mut existing = None;
            while p != NONE {
                if let Some(q) = self.next(p, symbol) {
                    existing = Some(q);
                    break;
                }
                self.set_next(p, symbol, cur);
                p = self.link[p];
            }

            if let Some(q) = existing {
                if self.len[p] + 1 == self.len[q] {
                    self.link[cur] = q;
                } else {
                    let clone = self.add_state(self.len[p] + 1, self.link[q], self.first_end[q]);
                    self.copy_edges(q, clone);
                    while p != NONE && self.next(p, symbol) == Some(q) {
                        self.set_next(p, symbol, clone);
                        p = self.link[p];
                    }
                    self.link[q] = clone;
                    self.link[cur] = clone;
                }
            }
            last = cur;
        }
    }

    fn add_state(&mut self, len: usize, link: usize, first_end: usize) -> usize {
        self.len.push(len);
        self.link.push(link);
        self.first_end.push(first_end);
        self.head.push(NONE);
        self.len.len() - 1
    }

    fn next(&self, state: usize, symbol: usize) -> Option<usize> {
        if state == ROOT {
            return Some(self.root[symbol]).filter(|&target| target != NONE);
        }
        let mut edge = self.head[state];
        while edge != NONE {
            let Edge {
                symbol: label,
                target,
                next,
            } = self.edges[edge];
            if label == symbol {
                return Some(target);
            }
            edge = next;
        }
        None
    }

    fn set_next(&mut self, state: usize, symbol: usize, target: usize) {
        if state == ROOT {
            self.root[symbol] = target;
            return;
        }
        let mut edge = self.head[state];
        while edge != NONE {
            if self.edges[edge].symbol == symbol {
                self.edges[edge].target = target;
                return;
            }
            edge = self.edges[edge].next;
        }
        self.push_edge(state, symbol, target);
    }

    fn copy_edges(&mut self, from: usize, to: usize) {
        let mut edge = self.head[from];
        while edge != NONE {
            let Edge {
                symbol,
                target,
                next,
            } = self.edges[edge];
            self.push_edge(to, symbol, target);
            edge = next;
        }
    }

    fn push_edge(&mut self, state: usize, symbol: usize, target: usize) {
        self.edges.push(Edge {
            symbol,
            target,
            next: self.head[state],
        });
        self.head[state] = self.edges.len() - 1;
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
