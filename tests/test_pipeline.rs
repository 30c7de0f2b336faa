use textcanon::{CanonError, PipelineOptions, WarningCode, canonicize_bytes, canonicize_file};

fn opts() -> PipelineOptions {
    PipelineOptions::default()
}

#[test]
fn test_canonicize_bytes_full_chain() {
    let (out, warnings) = canonicize_bytes(
        b"  Born 1756;\tdied  1791.\0 ",
        &[
            "strip-null",
            "strip-numbers",
            "strip-punctuation",
            "unify-case",
            "normalize-whitespace",
        ],
        &opts(),
    )
    .unwrap();
    assert_eq!(out, b"born 0 died 0");
    assert!(warnings.is_empty());
}

#[test]
fn test_canonicize_bytes_empty_chain_is_identity() {
    let names: [&str; 0] = [];
    let (out, _) = canonicize_bytes(b" keep  me ", &names, &opts()).unwrap();
    assert_eq!(out, b" keep  me ");
}

#[test]
fn test_canonicize_bytes_unknown_name_warns() {
    let (out, warnings) =
        canonicize_bytes(b"A  B", &["no-such", "normalize-whitespace"], &opts()).unwrap();
    assert_eq!(out, b"A B");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].code, WarningCode::UnknownCanonicizer);
}

#[test]
fn test_canonicize_bytes_unknown_name_strict() {
    let result = canonicize_bytes(b"A", &["no-such"], &PipelineOptions { strict: true });
    assert!(matches!(result, Err(CanonError::UnknownCanonicizer { .. })));
}

#[test]
fn test_canonicize_file_sample() {
    let (out, _) = canonicize_file(
        "tests/fixtures/sample.txt",
        &["normalize-whitespace"],
        &opts(),
    )
    .unwrap();
    let expected = include_bytes!("fixtures/expected/sample.txt.normalized");
    assert_eq!(out, expected.to_vec());
}

#[test]
fn test_canonicize_file_missing_is_io_error() {
    let result = canonicize_file(
        "tests/fixtures/does_not_exist.txt",
        &["normalize-whitespace"],
        &opts(),
    );
    assert!(matches!(result, Err(CanonError::Io(_))));
}

#[test]
fn test_separator_then_normalize() {
    let (out, _) = canonicize_bytes(
        b"wait...what?",
        &["punctuation-separator", "normalize-whitespace"],
        &opts(),
    )
    .unwrap();
    assert_eq!(out, b"wait . . . what ?");
}
