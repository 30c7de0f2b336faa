mod common;

use common::content_bytes;
use textcanon::{normalize, normalize_str};

#[test]
fn test_documented_cases() {
    let cases = [
        ("", ""),
        ("   ", ""),
        ("a", "a"),
        ("  hello   world  ", "hello world"),
        ("a\tb\n\nc", "a b c"),
        ("x\\y", "x y"),
        ("no-trail ", "no-trail"),
    ];
    for (input, expected) in cases {
        assert_eq!(normalize_str(input), expected, "input: {input:?}");
    }
}

/// Backslash is part of the whitespace class, so escape-looking sequences
/// are split rather than preserved.
#[test]
fn test_backslash_splits_words() {
    assert_eq!(normalize_str("a\\\\\\b"), "a b");
    assert_eq!(normalize_str("\\leading"), "leading");
    assert_eq!(normalize_str("trailing\\"), "trailing");
}

/// Golden test: sample fixture against its expected normalized output.
#[test]
fn test_golden_sample() {
    let input = std::fs::read("tests/fixtures/sample.txt").unwrap();
    let expected = include_bytes!("fixtures/expected/sample.txt.normalized");
    assert_eq!(normalize(&input), expected.to_vec());
}

#[test]
fn test_sample_properties() {
    let input = std::fs::read("tests/fixtures/sample.txt").unwrap();
    let out = normalize(&input);
    assert!(out.len() <= input.len());
    assert_eq!(content_bytes(&out), content_bytes(&input));
    assert_eq!(normalize(&out), out);
}

#[test]
fn test_blank_fixture_is_empty() {
    let input = std::fs::read("tests/fixtures/blank.txt").unwrap();
    assert!(normalize(&input).is_empty());
}

#[test]
fn test_concurrent_calls_agree() {
    let input = std::fs::read("tests/fixtures/sample.txt").unwrap();
    let expected = normalize(&input);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8).map(|_| s.spawn(|| normalize(&input))).collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
