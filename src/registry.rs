use crate::canonicizer::{
    Canonicizer, NormalizeWhitespace, PunctuationSeparator, SmashI, StripAlphanumeric,
    StripNullCharacters, StripNumbers, StripPunctuation, StripTabs, UnifyCase,
};

const NAMES: &[&str] = &[
    "normalize-whitespace",
    "unify-case",
    "strip-punctuation",
    "punctuation-separator",
    "strip-alphanumeric",
    "strip-numbers",
    "strip-null",
    "strip-tabs",
    "smash-i",
];

/// Registry keys of every built-in canonicizer, in a fixed order.
pub fn available() -> &'static [&'static str] {
    NAMES
}

/// Look up a canonicizer by registry key.
///
/// Matching ignores ASCII case and surrounding whitespace, and treats `_`
/// the same as `-`, so `"Normalize_Whitespace"` finds `normalize-whitespace`.
pub fn lookup(name: &str) -> Option<Box<dyn Canonicizer>> {
    let key = name.trim().to_ascii_lowercase().replace('_', "-");
    let canonicizer: Box<dyn Canonicizer> = match key.as_str() {
        "normalize-whitespace" => Box::new(NormalizeWhitespace),
        "unify-case" => Box::new(UnifyCase),
        "strip-punctuation" => Box::new(StripPunctuation),
        "punctuation-separator" => Box::new(PunctuationSeparator),
        "strip-alphanumeric" => Box::new(StripAlphanumeric),
        "strip-numbers" => Box::new(StripNumbers),
        "strip-null" => Box::new(StripNullCharacters),
        "strip-tabs" => Box::new(StripTabs),
        "smash-i" => Box::new(SmashI),
        _ => return None,
    };
    Some(canonicizer)
}
