use std::path::Path;

use super::*;

fn filter(patterns: &[&str]) -> IgnoreFilter {
    let patterns: Vec<String> = patterns.iter().map(ToString::to_string).collect();
    IgnoreFilter::new(&patterns).unwrap()
}

#[test]
fn no_patterns_include_everything() {
    let filter = filter(&[]);

    assert!(filter.should_include(Path::new("src/main.c")));
    assert!(filter.should_include(Path::new(".hidden.py")));
}

#[test]
fn pattern_matches_the_whole_path() {
    let filter = filter(&["*.min.js"]);

    assert!(filter.is_ignored(Path::new("static/app.min.js")));
    assert!(!filter.is_ignored(Path::new("static/app.js")));
}

#[test]
fn star_crosses_separators() {
    let filter = filter(&["*/vendor/*"]);

    assert!(filter.is_ignored(Path::new("./lib/vendor/deep/x.c")));
    assert!(!filter.is_ignored(Path::new("vendor.c")));
}

#[test]
fn any_pattern_ignores() {
    let filter = filter(&["*.h", "build/*"]);

    assert!(filter.is_ignored(Path::new("a/b.h")));
    assert!(filter.is_ignored(Path::new("build/out.c")));
    assert!(filter.should_include(Path::new("src/out.c")));
}

#[test]
fn character_classes_are_supported() {
    let filter = filter(&["test_[0-9].py"]);

    assert!(filter.is_ignored(Path::new("test_1.py")));
    assert!(!filter.is_ignored(Path::new("test_a.py")));
}

#[test]
fn first_invalid_pattern_is_reported() {
    let patterns = vec!["*.c".to_string(), "{unclosed".to_string()];
    let err = IgnoreFilter::new(&patterns).err().unwrap();

    assert!(matches!(err, StyleError::InvalidIgnorePattern { ref pattern, .. } if pattern == "{unclosed"));
}
