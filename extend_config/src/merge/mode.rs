//! Merge depth selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether colliding mappings are combined or replaced.
///
/// `MergeMode` deserialises from the lowercase names `"shallow"` and `"deep"`
/// so callers can read it from their own configuration.
///
/// ```rust
/// use extend_config::MergeMode;
///
/// assert_eq!(MergeMode::from(true), MergeMode::Deep);
/// assert!(!MergeMode::default().is_deep());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMode {
    /// Any colliding value, mappings included, is replaced by the later one.
    #[default]
    Shallow,
    /// Colliding mappings are merged recursively.
    Deep,
}

impl MergeMode {
    /// Builds a mode from the conventional `deep` flag.
    #[must_use]
    pub const fn from_deep(deep: bool) -> Self {
        if deep { Self::Deep } else { Self::Shallow }
    }

    /// Returns `true` for [`MergeMode::Deep`].
    #[must_use]
    pub const fn is_deep(self) -> bool {
        matches!(self, Self::Deep)
    }

    /// Lowercase name matching the serialised form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shallow => "shallow",
            Self::Deep => "deep",
        }
    }
}

impl From<bool> for MergeMode {
    fn from(deep: bool) -> Self {
        Self::from_deep(deep)
    }
}

impl From<MergeMode> for bool {
    fn from(mode: MergeMode) -> Self {
        mode.is_deep()
    }
}

impl fmt::Display for MergeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
