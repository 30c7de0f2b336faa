use crate::canonicizer::Canonicizer;

/// Collapses whitespace runs to one space and trims both ends.
///
/// See [`crate::whitespace`] for the exact whitespace class, which includes
/// the backslash.
pub struct NormalizeWhitespace;

impl Canonicizer for NormalizeWhitespace {
    fn name(&self) -> &'static str {
        "normalize-whitespace"
    }

    fn display_name(&self) -> &'static str {
        "Normalize Whitespace"
    }

    fn description(&self) -> &'static str {
        "Converts runs of whitespace (CR, LF, tab, VT, FF, space, backslash) to a single space."
    }

    fn process(&self, input: &[u8]) -> Vec<u8> {
        crate::whitespace::normalize(input)
    }

    fn process_str(&self, text: &str) -> String {
        crate::whitespace::normalize_str(text)
    }
}
