pub mod binding;
pub mod canonicizer;
pub mod error;
pub mod pipeline;
#[cfg(feature = "python")]
pub mod python;
pub mod registry;
#[cfg(feature = "wasm")]
pub mod wasm;
pub mod whitespace;

pub use canonicizer::Canonicizer;
pub use error::CanonError;
pub use pipeline::{Pipeline, PipelineOptions, PipelineWarning, WarningCode};
pub use whitespace::{is_whitespace_class, normalize, normalize_into, normalize_str};

/// Run the named canonicizers, in order, over `data`.
///
/// Unknown names are skipped with a warning unless `options.strict` is set.
pub fn canonicize_bytes<S: AsRef<str>>(
    data: &[u8],
    names: &[S],
    options: &PipelineOptions,
) -> Result<(Vec<u8>, Vec<PipelineWarning>), CanonError> {
    let (pipeline, warnings) = Pipeline::from_names(names, options)?;
    Ok((pipeline.process(data), warnings))
}

/// Read a file and run the named canonicizers over its bytes.
pub fn canonicize_file<S: AsRef<str>>(
    path: impl AsRef<std::path::Path>,
    names: &[S],
    options: &PipelineOptions,
) -> Result<(Vec<u8>, Vec<PipelineWarning>), CanonError> {
    let data = std::fs::read(path.as_ref())?;
    canonicize_bytes(&data, names, options)
}
