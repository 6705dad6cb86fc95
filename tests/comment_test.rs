mod common;
use common::*;
use srpn::mach::Runtime;

#[test]
fn test_comment_spanning_two_lines() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, &["1 2 + # start of"]), "");
    assert_eq!(exec(&mut r, &["comment #  d"]), "3\n");
}

#[test]
fn test_comment_spanning_many_lines() {
    let mut r = Runtime::default();
    assert_eq!(
        exec(&mut r, &["#", "1 2 3", "d = +", "more text", "# 5 d"]),
        "5\n"
    );
    assert!(r.state().comment.text.is_empty());
}

#[test]
fn test_inline_comment_is_skipped() {
    assert_eq!(exec_fresh(&["4 # ignore 9 9 # d"]), "4\n");
    assert_eq!(exec_fresh(&["# x # 1 # y # 2 d"]), "1\n2\n");
}

#[test]
fn test_trailing_marker_opens_comment() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, &["7 #", "8 d", "# d"]), "7\n");
    assert!(!r.state().comment.open);
}

#[test]
fn test_hash_without_spaces_is_unrecognised() {
    assert_eq!(
        exec_fresh(&["1#2"]),
        "Unrecognised operator or operand \"#\".\n"
    );
}
