/// Errors that can occur while building a pipeline or crossing a host boundary.
///
/// Normalizing and canonicizing bytes never fails; only name resolution,
/// argument conversion, and I/O do.
#[derive(Debug, thiserror::Error)]
pub enum CanonError {
    #[error("unknown canonicizer: {name}")]
    UnknownCanonicizer { name: String },

    #[error("argument type mismatch: expected {expected}, found {found}")]
    ArgumentType {
        expected: &'static str,
        found: String,
    },

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
