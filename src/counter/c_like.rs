use regex::Regex;

const C_LITERALS: &str = r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\\n])*'"#;

const JS_LITERALS: &str = concat!(
    r#""(?:\\.|[^"\\\n])*""#,
    r"|'(?:\\.|[^'\\\n])*'",
    r"|`(?:\\.|[^`\\])*`",
    r"|/(?:\\.|[^/\\\n*])(?:\\.|[^/\\\n])*/",
);

const COMMENTS: &str = r"/\*.*?\*/|//[^\n]*";

/// Counts `/* */` and `//` comments, skipping anything inside literals.
///
/// Literals and comments share one leftmost-first pattern, so a `//` inside
/// a string is consumed by the string match before it can start a comment.
pub struct CLikeComments {
    pattern: Regex,
}

impl CLikeComments {
    /// C, C++ and Java: string and character literals.
    #[must_use]
    pub fn c() -> Self {
        Self::with_literals(C_LITERALS)
    }

    /// JavaScript: single, double and template strings plus regex literals.
    #[must_use]
    pub fn javascript() -> Self {
        Self::with_literals(JS_LITERALS)
    }

    fn with_literals(literals: &str) -> Self {
        Self {
            pattern: Regex::new(&format!("(?s)(?:{literals})|(?P<comment>{COMMENTS})"))
                .expect("Invalid regex"),
        }
    }

    #[must_use]
    pub fn count(&self, code: &str) -> usize {
        self.pattern
            .captures_iter(code)
            .filter(|caps| caps.name("comment").is_some())
            .count()
    }
}

#[cfg(test)]
#[path = "c_like_tests.rs"]
mod tests;
