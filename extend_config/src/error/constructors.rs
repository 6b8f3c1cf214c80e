//! Constructors for `ExtendError`.

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use super::ExtendError;
use crate::ValueKind;

impl ExtendError {
    /// Construct an [`ExtendError::InvalidInputType`].
    ///
    /// # Examples
    ///
    /// ```
    /// use extend_config::{ExtendError, ValueKind};
    ///
    /// let err = ExtendError::invalid_input(2, ValueKind::Sequence);
    /// assert_eq!(err.to_string(), "merge input 2 must be a mapping, found sequence");
    /// ```
    #[must_use]
    pub const fn invalid_input(index: usize, found: ValueKind) -> Self {
        Self::InvalidInputType { index, found }
    }

    /// Construct an [`ExtendError::InvalidInputType`] wrapped in an [`Arc`].
    #[must_use]
    pub fn invalid_input_arc(index: usize, found: ValueKind) -> Arc<Self> {
        Arc::new(Self::invalid_input(index, found))
    }

    /// Construct an [`ExtendError::File`] for `path`.
    #[must_use]
    pub fn file(path: &Path, source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::File {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    /// Construct an [`ExtendError::File`] wrapped in an [`Arc`].
    #[must_use]
    pub fn file_arc(path: &Path, source: impl Into<Box<dyn Error + Send + Sync>>) -> Arc<Self> {
        Arc::new(Self::file(path, source))
    }

    /// Construct an [`ExtendError::Serialize`].
    #[must_use]
    pub const fn serialize(source: serde_json::Error) -> Self {
        Self::Serialize(source)
    }

    /// The offending input position when this is an
    /// [`ExtendError::InvalidInputType`].
    #[must_use]
    pub const fn invalid_index(&self) -> Option<usize> {
        match self {
            Self::InvalidInputType { index, .. } => Some(*index),
            _ => None,
        }
    }
}
