use super::*;

#[test]
fn push_merges_runs_with_the_same_tag() {
    let mut script = EditScript::new();
    script.push(Tag::Equal, "ab");
    script.push(Tag::Equal, "c");
    script.push(Tag::Insert, "x");
    script.push(Tag::Insert, "y");

    assert_eq!(
        script.ops(),
        &[
            EditOp::Equal("abc".to_string()),
            EditOp::Insert("xy".to_string())
        ]
    );
}

#[test]
fn push_ignores_empty_runs() {
    let mut script = EditScript::new();
    script.push(Tag::Delete, "");

    assert!(script.is_empty());
    assert!(script.is_unchanged());
}

#[test]
fn original_and_styled_rebuild_their_sides() {
    let mut script = EditScript::new();
    script.push(Tag::Equal, "int ");
    script.push(Tag::Delete, "x=1");
    script.push(Tag::Insert, "x = 1");
    script.push(Tag::Equal, ";\n");

    assert_eq!(script.original(), "int x=1;\n");
    assert_eq!(script.styled(), "int x = 1;\n");
    assert!(!script.is_unchanged());
}

#[test]
fn tag_symbols_and_order() {
    assert_eq!(Tag::Equal.symbol(), ' ');
    assert_eq!(Tag::Insert.symbol(), '+');
    assert_eq!(Tag::Delete.symbol(), '-');
    assert!(Tag::Insert < Tag::Delete);
    assert_eq!(Tag::Delete.to_string(), "-");
}

#[test]
fn edit_op_accessors() {
    let op = EditOp::new(Tag::Delete, "\t".to_string());
    assert_eq!(op.tag(), Tag::Delete);
    assert_eq!(op.run(), "\t");
}
