use crate::error::{Result, StyleError};

const STRING_PREFIXES: [&str; 8] = ["r", "u", "b", "f", "br", "rb", "fr", "rf"];

/// A triple-quoted string still open at the end of a line.
#[derive(Debug, Clone, Copy)]
struct OpenString {
    quote: &'static str,
    docstring: bool,
}

/// Counts `#` comments and docstrings in Python source.
///
/// A docstring is a string that opens the module or is the first token of a
/// newly indented block.
#[derive(Debug)]
struct PythonScanner {
    comments: usize,
    indents: Vec<usize>,
    after_indent: bool,
    open_string: Option<OpenString>,
    depth: usize,
    continued: bool,
}

impl Default for PythonScanner {
    fn default() -> Self {
        Self {
            comments: 0,
            indents: vec![0],
            after_indent: true,
            open_string: None,
            depth: 0,
            continued: false,
        }
    }
}

impl PythonScanner {
    fn line(&mut self, line: &str) {
        let line = line.trim_end_matches(['\n', '\r']);
        let continued = std::mem::take(&mut self.continued);

        let start = if let Some(open) = self.open_string {
            match find_close(line, 0, open.quote) {
                Some(end) => {
                    self.open_string = None;
                    self.close_string(open.docstring);
                    end
                }
                None => return,
            }
        } else if self.depth == 0 && !continued {
            let body = line.trim_start_matches([' ', '\t', '\x0c']);
            if body.is_empty() || body.starts_with('#') {
                self.comments += usize::from(body.starts_with('#'));
                self.after_indent = false;
                return;
            }
            self.indent(indentation(line));
            line.len() - body.len()
        } else {
            0
        };

        self.tokens(line, start);

        if self.open_string.is_none() && self.depth == 0 && !self.continued {
            self.after_indent = false;
        }
    }

    fn indent(&mut self, column: usize) {
        let top = self.indents.last().copied().unwrap_or(0);
        if column > top {
            self.indents.push(column);
            self.after_indent = true;
        } else if column < top {
            while self.indents.last().is_some_and(|&level| level > column) {
                self.indents.pop();
            }
            self.after_indent = false;
        }
    }

    fn close_string(&mut self, docstring: bool) {
        self.comments += usize::from(docstring);
        self.after_indent = false;
    }

    fn tokens(&mut self, line: &str, mut pos: usize) {
        while let Some(c) = line[pos..].chars().next() {
            match c {
                ' ' | '\t' | '\x0c' => pos += 1,
                '#' => {
                    self.comments += 1;
                    self.after_indent = false;
                    return;
                }
                '\\' if line[pos + 1..].trim().is_empty() => {
                    self.continued = true;
                    return;
                }
                '"' | '\'' => match self.string(line, pos) {
                    Some(end) => pos = end,
                    None => return,
                },
                '(' | '[' | '{' => {
                    self.depth += 1;
                    self.after_indent = false;
                    pos += 1;
                }
                ')' | ']' | '}' => {
                    self.depth = self.depth.saturating_sub(1);
                    self.after_indent = false;
                    pos += 1;
                }
                c if c.is_alphanumeric() || c == '_' => {
                    let word_len = line[pos..]
                        .find(|ch: char| !(ch.is_alphanumeric() || ch == '_'))
                        .unwrap_or(line.len() - pos);
                    let word = &line[pos..pos + word_len];
                    let next = line[pos + word_len..].chars().next();
                    if matches!(next, Some('"' | '\''))
                        && STRING_PREFIXES.contains(&word.to_ascii_lowercase().as_str())
                    {
                        match self.string(line, pos + word_len) {
                            Some(end) => pos = end,
                            None => return,
                        }
                    } else {
                        self.after_indent = false;
                        pos += word_len;
                    }
                }
                other => {
                    self.after_indent = false;
                    pos += other.len_utf8();
                }
            }
        }
    }

    /// Consumes the string starting at `quote_pos`, returning the byte offset
    /// after it, or `None` when it runs past the end of the line.
    fn string(&mut self, line: &str, quote_pos: usize) -> Option<usize> {
        let docstring = self.after_indent;
        let quote = if line[quote_pos..].starts_with("\"\"\"") {
            "\"\"\""
        } else if line[quote_pos..].starts_with("'''") {
            "'''"
        } else if line[quote_pos..].starts_with('"') {
            "\""
        } else {
            "'"
        };

        let Some(end) = find_close(line, quote_pos + quote.len(), quote) else {
            if quote.len() == 3 {
                self.open_string = Some(OpenString { quote, docstring });
            } else {
                self.after_indent = false;
            }
            return None;
        };
        self.close_string(docstring);
        Some(end)
    }

    fn finish(self) -> Result<usize> {
        if self.open_string.is_some() || self.depth > 0 {
            return Err(StyleError::ParseFailure);
        }
        Ok(self.comments)
    }
}

/// Byte offset just past the first unescaped `quote` at or after `from`.
fn find_close(line: &str, from: usize, quote: &str) -> Option<usize> {
    let mut chars = line[from..].char_indices();
    while let Some((offset, c)) = chars.next() {
        if c == '\\' {
            chars.next();
            continue;
        }
        if line[from + offset..].starts_with(quote) {
            return Some(from + offset + quote.len());
        }
    }
    None
}

fn indentation(line: &str) -> usize {
    let mut column = 0;
    for c in line.chars() {
        match c {
            ' ' => column += 1,
            '\t' => column = (column / 8 + 1) * 8,
            '\x0c' => column = 0,
            _ => break,
        }
    }
    column
}

/// Number of comments plus docstrings in `code`.
///
/// # Errors
/// Returns [`StyleError::ParseFailure`] when a triple-quoted string or a
/// bracket is still open at the end of the file.
pub fn count_python_comments(code: &str) -> Result<usize> {
    let mut scanner = PythonScanner::default();
    for line in code.split_inclusive('\n') {
        scanner.line(line);
    }
    scanner.finish()
}

#[cfg(test)]
#[path = "python_tests.rs"]
mod tests;
