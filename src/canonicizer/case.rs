use crate::canonicizer::Canonicizer;

/// Lowercases ASCII letters. Other bytes pass through.
pub struct UnifyCase;

impl Canonicizer for UnifyCase {
    fn name(&self) -> &'static str {
        "unify-case"
    }

    fn display_name(&self) -> &'static str {
        "Unify Case"
    }

    fn description(&self) -> &'static str {
        "Converts all text to lower case."
    }

    fn process(&self, input: &[u8]) -> Vec<u8> {
        input.to_ascii_lowercase()
    }
}

/// Lowercases a capital `I` that stands alone as a word.
///
/// A word byte is an ASCII letter, digit, or `_`, or any byte >= 0x80 so
/// that `I` next to a multi-byte letter is left alone.
pub struct SmashI;

#[inline]
fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte >= 0x80
}

impl Canonicizer for SmashI {
    fn name(&self) -> &'static str {
        "smash-i"
    }

    fn display_name(&self) -> &'static str {
        "Smash I"
    }

    fn description(&self) -> &'static str {
        "Replace capital I as a word to lowercase i."
    }

    fn process(&self, input: &[u8]) -> Vec<u8> {
        let mut out = input.to_vec();
        for (i, &b) in input.iter().enumerate() {
            if b != b'I' {
                continue;
            }
            let before = i.checked_sub(1).map(|j| input[j]);
            let after = input.get(i + 1).copied();
            if !before.is_some_and(is_word_byte) && !after.is_some_and(is_word_byte) {
                out[i] = b'i';
            }
        }
        out
    }
}
