//! Crate error type.

use thiserror::Error;

/// Errors surfaced by constructors, mesh generation, and file output.
#[derive(Error, Debug)]
pub enum SdfError {
    /// A caller-supplied parameter is out of its valid domain.
    ///
    /// Raised eagerly, before any evaluation or meshing work starts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The output file could not be created or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A shape tree could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SdfError {
    /// Shorthand for an [`SdfError::InvalidArgument`] with a formatted message.
    pub(crate) fn argument(message: impl Into<String>) -> Self {
        SdfError::InvalidArgument(message.into())
    }
}
