use crate::canonicizer::Canonicizer;

/// Removes every 0x00 byte.
pub struct StripNullCharacters;

impl Canonicizer for StripNullCharacters {
    fn name(&self) -> &'static str {
        "strip-null"
    }

    fn display_name(&self) -> &'static str {
        "Strip Null Characters"
    }

    fn description(&self) -> &'static str {
        "Strips all 0x00 from the text."
    }

    fn process(&self, input: &[u8]) -> Vec<u8> {
        input.iter().copied().filter(|&b| b != 0).collect()
    }
}
