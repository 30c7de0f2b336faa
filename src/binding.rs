//! Host-agnostic boundary adapter.
//!
//! Host surfaces (`wasm`, `python`) convert their native values into a
//! [`HostArg`] and call into this module. Type checking happens here, before
//! any canonicizer runs, so the core stays infallible and testable without a
//! host runtime.

use crate::error::CanonError;
use crate::pipeline::{Pipeline, PipelineOptions};

/// Module name the host imports.
pub const MODULE_NAME: &str = "c_cc_0";

/// Docstring attached to the host module.
pub const MODULE_DOC: &str = "Canonicizers implemented natively";

/// Name of the whitespace normalization callable inside [`MODULE_NAME`].
pub const FUNCTION_NAME: &str = "normalize_ws_process_single";

/// Docstring attached to [`FUNCTION_NAME`].
pub const FUNCTION_DOC: &str = "Normalize whitespace (text)";

/// A single argument as received from a host runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostArg<'a> {
    Text(&'a str),
    Other { type_name: String },
}

impl<'a> From<&'a str> for HostArg<'a> {
    fn from(text: &'a str) -> Self {
        HostArg::Text(text)
    }
}

/// Require a text argument.
pub fn expect_text(arg: HostArg<'_>) -> Result<&str, CanonError> {
    match arg {
        HostArg::Text(text) => Ok(text),
        HostArg::Other { type_name } => Err(CanonError::ArgumentType {
            expected: "str",
            found: type_name,
        }),
    }
}

/// Entry point behind the host's `normalize_ws_process_single`.
pub fn normalize_ws_process_single(arg: HostArg<'_>) -> Result<String, CanonError> {
    let text = expect_text(arg)?;
    Ok(crate::whitespace::normalize_str(text))
}

/// Entry point behind the host's `canonicize`: run the named canonicizers
/// over a text argument.
pub fn canonicize<S: AsRef<str>>(
    arg: HostArg<'_>,
    names: &[S],
    options: &PipelineOptions,
) -> Result<String, CanonError> {
    let text = expect_text(arg)?;
    let (pipeline, _warnings) = Pipeline::from_names(names, options)?;
    Ok(pipeline.process_str(text))
}
