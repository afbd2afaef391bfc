//! Comment and line counters used for the comment ratio and the score.

mod c_like;
mod python;

pub use c_like::CLikeComments;
pub use python::count_python_comments;

/// Lines with at least one non-whitespace character.
#[must_use]
pub fn count_non_blank_lines(code: &str) -> usize {
    code.lines().filter(|line| !line.trim().is_empty()).count()
}

/// Every line, blank or not.
#[must_use]
pub fn count_all_lines(code: &str) -> usize {
    code.lines().count()
}
