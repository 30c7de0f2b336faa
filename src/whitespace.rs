//! Single-pass whitespace normalizer.
//!
//! Runs of whitespace-class bytes collapse to one space, leading runs are
//! dropped entirely, and one trailing space is trimmed. The whitespace class
//! is a fixed single-byte set that, unusually, includes the backslash.

/// Returns true for CR, LF, TAB, VT, FF, space, and backslash.
///
/// Backslash is classified as whitespace on purpose, so `x\y` normalizes to
/// `x y`. Multi-byte Unicode spaces are not recognized.
#[inline]
pub fn is_whitespace_class(byte: u8) -> bool {
    matches!(byte, b'\r' | b'\n' | b'\t' | 0x0B | 0x0C | b' ' | b'\\')
}

/// Normalize whitespace in `input`, returning a newly allocated buffer.
///
/// The result never starts or ends with a space, never holds two adjacent
/// spaces, and is never longer than `input`.
pub fn normalize(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    normalize_into(input, &mut out);
    out
}

/// Normalize whitespace in `input`, appending the result to `out`.
///
/// Bytes already in `out` are left untouched and do not affect the result.
pub fn normalize_into(input: &[u8], out: &mut Vec<u8>) {
    let start = out.len();
    // Starting as if a space was just seen drops leading whitespace.
    let mut last = b' ';

    for &byte in input {
        let ws = is_whitespace_class(byte);
        if ws && is_whitespace_class(last) {
            continue;
        }
        out.push(if ws { b' ' } else { byte });
        last = byte;
    }

    // Nothing written means nothing to trim.
    if out.len() > start && out.last() == Some(&b' ') {
        out.pop();
    }
}

/// Normalize whitespace in a UTF-8 string.
///
/// Whitespace-class bytes are all ASCII, so removing or replacing them never
/// splits a multi-byte sequence and the output is valid UTF-8.
pub fn normalize_str(text: &str) -> String {
    crate::canonicizer::bytes_to_string(normalize(text.as_bytes()))
}
