use crate::canonicizer::{Canonicizer, is_punctuation};

/// Removes punctuation bytes (`` ,.?!"'`;:-()&$ ``).
pub struct StripPunctuation;

impl Canonicizer for StripPunctuation {
    fn name(&self) -> &'static str {
        "strip-punctuation"
    }

    fn display_name(&self) -> &'static str {
        "Strip Punctuation"
    }

    fn description(&self) -> &'static str {
        "Strip all punctuation characters (,.?!\"'`;:-()&$) from the text."
    }

    fn process(&self, input: &[u8]) -> Vec<u8> {
        input
            .iter()
            .copied()
            .filter(|&b| !is_punctuation(b))
            .collect()
    }
}

/// Surrounds every punctuation byte with spaces.
///
/// Usually followed by [`super::NormalizeWhitespace`] to collapse the
/// doubled spaces this introduces.
pub struct PunctuationSeparator;

impl Canonicizer for PunctuationSeparator {
    fn name(&self) -> &'static str {
        "punctuation-separator"
    }

    fn display_name(&self) -> &'static str {
        "Punctuation Separator"
    }

    fn description(&self) -> &'static str {
        "Adds whitespaces before and after punctuations."
    }

    fn process(&self, input: &[u8]) -> Vec<u8> {
        let extra = input.iter().filter(|&&b| is_punctuation(b)).count() * 2;
        let mut out = Vec::with_capacity(input.len() + extra);
        for &b in input {
            if is_punctuation(b) {
                out.extend_from_slice(&[b' ', b, b' ']);
            } else {
                out.push(b);
            }
        }
        out
    }
}

/// Keeps only spaces and punctuation.
pub struct StripAlphanumeric;

impl Canonicizer for StripAlphanumeric {
    fn name(&self) -> &'static str {
        "strip-alphanumeric"
    }

    fn display_name(&self) -> &'static str {
        "Strip Alpha-numeric"
    }

    fn description(&self) -> &'static str {
        "Strips all non-whitespace, non-punctuation marks, leaving only spaces and punctuation."
    }

    fn process(&self, input: &[u8]) -> Vec<u8> {
        input
            .iter()
            .copied()
            .filter(|&b| b == b' ' || is_punctuation(b))
            .collect()
    }
}
