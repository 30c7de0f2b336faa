use crate::canonicizer::Canonicizer;

/// Removes every tab byte.
pub struct StripTabs;

impl Canonicizer for StripTabs {
    fn name(&self) -> &'static str {
        "strip-tabs"
    }

    fn display_name(&self) -> &'static str {
        "Strip Tabs"
    }

    fn description(&self) -> &'static str {
        "Strip tab characters \"\\t\"."
    }

    fn process(&self, input: &[u8]) -> Vec<u8> {
        input.iter().copied().filter(|&b| b != b'\t').collect()
    }
}
