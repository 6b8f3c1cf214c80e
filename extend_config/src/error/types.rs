//! Primary error enum for merge and loading flows.

use std::path::PathBuf;

use thiserror::Error;

use crate::ValueKind;

/// Errors that can occur while merging or loading mappings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtendError {
    /// A merge input was not a mapping.
    #[error("merge input {index} must be a mapping, found {found}")]
    InvalidInputType {
        /// Zero-based position of the offending input.
        index: usize,
        /// Kind of value that was supplied instead.
        found: ValueKind,
    },

    /// Error originating from a configuration file.
    #[error("configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying read or parse error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The merged mapping could not be converted into the requested type.
    #[error("failed to deserialise merged mapping: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// A value could not be serialised into a mapping.
    #[error("failed to serialise value into a mapping: {0}")]
    Serialize(#[source] serde_json::Error),
}
