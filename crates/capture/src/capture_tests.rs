// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn test_absent_and_empty_are_distinct() {
    assert_ne!(Capture::Absent, Capture::Present(String::new()));
    assert!(Capture::Absent.is_absent());
    assert!(!Capture::Present(String::new()).is_absent());
}

#[rstest]
#[case(Capture::Absent, "the program provided no output")]
#[case(Capture::Present(String::new()), "(empty)")]
#[case(Capture::Present("3".to_string()), "3")]
#[case(Capture::Present("a\nb".to_string()), "a\nb")]
fn test_display(#[case] capture: Capture, #[case] expected: &str) {
    assert_eq!(capture.to_string(), expected);
}

#[test]
fn test_push_line_replaces_placeholder() {
    let mut capture = Capture::Absent;
    capture.push_line("first");
    assert_eq!(capture.as_text(), Some("first"));

    capture.push_line("second");
    assert_eq!(capture.as_text(), Some("first\nsecond"));
}

#[test]
fn test_push_empty_line_is_present() {
    let mut capture = Capture::Absent;
    capture.push_line("");
    assert_eq!(capture, Capture::Present(String::new()));
}

#[test]
fn test_from_option() {
    assert_eq!(Capture::from(None), Capture::Absent);
    assert_eq!(
        Capture::from(Some("x".to_string())),
        Capture::Present("x".to_string())
    );
}

#[test]
fn test_serialize_tags() {
    let absent = serde_json::to_value(Capture::Absent).unwrap();
    assert_eq!(absent, serde_json::json!({ "type": "absent" }));

    let present = serde_json::to_value(Capture::Present("hi".to_string())).unwrap();
    assert_eq!(present, serde_json::json!({ "type": "present", "text": "hi" }));
}

proptest! {
    #[test]
    fn pushed_lines_join_with_newline(lines in proptest::collection::vec("[a-z ]{0,10}", 1..8)) {
        let mut capture = Capture::Absent;
        for line in &lines {
            capture.push_line(line);
        }
        let joined = lines.join("\n");
        prop_assert_eq!(capture.as_text(), Some(joined.as_str()));
    }
}
