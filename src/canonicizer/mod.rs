pub mod case;
pub mod nulls;
pub mod numbers;
pub mod punctuation;
pub mod tabs;
pub mod whitespace;

pub use case::{SmashI, UnifyCase};
pub use nulls::StripNullCharacters;
pub use numbers::StripNumbers;
pub use punctuation::{PunctuationSeparator, StripAlphanumeric, StripPunctuation};
pub use tabs::StripTabs;
pub use whitespace::NormalizeWhitespace;

/// Trait implemented by each byte-level text canonicizer.
///
/// Canonicizers are pure: the same input always yields the same output and
/// no state is kept between calls.
pub trait Canonicizer: Send + Sync {
    /// Stable registry key (e.g., `"normalize-whitespace"`).
    fn name(&self) -> &'static str;

    /// Human-readable name.
    fn display_name(&self) -> &'static str;

    /// One-line description of what the canonicizer does.
    fn description(&self) -> &'static str;

    /// Transform `input` into a newly allocated buffer.
    fn process(&self, input: &[u8]) -> Vec<u8>;

    /// Transform a UTF-8 string.
    ///
    /// Canonicizers only drop, replace, or insert ASCII bytes, so a valid
    /// UTF-8 input stays valid.
    fn process_str(&self, text: &str) -> String {
        bytes_to_string(self.process(text.as_bytes()))
    }
}

/// Bytes that count as punctuation for the punctuation canonicizers.
pub(crate) const PUNCTUATION: &[u8] = b",.?!\"'`;:-()&$";

#[inline]
pub(crate) fn is_punctuation(byte: u8) -> bool {
    PUNCTUATION.contains(&byte)
}

pub(crate) fn bytes_to_string(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}
