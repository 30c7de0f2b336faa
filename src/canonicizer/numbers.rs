use crate::canonicizer::Canonicizer;

/// Replaces each maximal run of ASCII digits with a single `0`.
pub struct StripNumbers;

impl Canonicizer for StripNumbers {
    fn name(&self) -> &'static str {
        "strip-numbers"
    }

    fn display_name(&self) -> &'static str {
        "Strip Numbers"
    }

    fn description(&self) -> &'static str {
        "Converts each simple digit string to a single 0."
    }

    fn process(&self, input: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(input.len());
        let mut in_digits = false;
        for &b in input {
            if b.is_ascii_digit() {
                if !in_digits {
                    out.push(b'0');
                }
                in_digits = true;
            } else {
                out.push(b);
                in_digits = false;
            }
        }
        out
    }
}
