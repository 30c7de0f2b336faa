use crate::canonicizer::{Canonicizer, bytes_to_string};
use crate::error::CanonError;
use crate::registry;

/// Categories for recoverable pipeline-building warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningCode {
    UnknownCanonicizer,
}

/// A recoverable issue encountered while building a pipeline.
#[derive(Debug, Clone)]
pub struct PipelineWarning {
    pub code: WarningCode,
    pub message: String,
}

/// Options controlling how a pipeline is built.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// If true, an unknown canonicizer name is an error instead of a warning.
    pub strict: bool,
}

/// An ordered chain of canonicizers applied one after another.
///
/// An empty pipeline returns its input unchanged.
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Canonicizer>>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.names())
            .finish()
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pipeline from registry keys, in order.
    ///
    /// Unknown names fail the build when `options.strict` is set; otherwise
    /// they are skipped and reported as warnings.
    pub fn from_names<S: AsRef<str>>(
        names: &[S],
        options: &PipelineOptions,
    ) -> Result<(Self, Vec<PipelineWarning>), CanonError> {
        let mut pipeline = Self::new();
        let mut warnings = Vec::new();

        for name in names {
            let name = name.as_ref();
            match registry::lookup(name) {
                Some(c) => pipeline.push(c),
                None if options.strict => {
                    return Err(CanonError::UnknownCanonicizer {
                        name: name.to_string(),
                    });
                }
                None => {
                    tracing::debug!(name, "skipping unknown canonicizer");
                    warnings.push(PipelineWarning {
                        code: WarningCode::UnknownCanonicizer,
                        message: format!("unknown canonicizer: {name}"),
                    });
                }
            }
        }

        Ok((pipeline, warnings))
    }

    /// Append a stage.
    pub fn push(&mut self, canonicizer: Box<dyn Canonicizer>) {
        self.stages.push(canonicizer);
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Registry keys of the stages, in application order.
    pub fn names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|c| c.name()).collect()
    }

    /// Run every stage over `input`.
    pub fn process(&self, input: &[u8]) -> Vec<u8> {
        let mut data = input.to_vec();
        for stage in &self.stages {
            let before = data.len();
            data = stage.process(&data);
            tracing::debug!(
                stage = stage.name(),
                before,
                after = data.len(),
                "applied canonicizer"
            );
        }
        data
    }

    /// Run every stage over a UTF-8 string.
    pub fn process_str(&self, text: &str) -> String {
        bytes_to_string(self.process(text.as_bytes()))
    }
}
