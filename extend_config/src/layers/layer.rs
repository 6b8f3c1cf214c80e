//! Layer metadata and payloads.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};

use crate::Mapping;

/// Where a layer's values came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum LayerSource {
    /// Built-in defaults.
    Defaults,
    /// Values loaded from a configuration file.
    File,
    /// Overrides supplied by the caller at initialisation time.
    Options,
}

impl fmt::Display for LayerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Defaults => "defaults",
            Self::File => "file",
            Self::Options => "options",
        })
    }
}

/// One labelled merge input.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    source: LayerSource,
    mapping: Mapping,
    path: Option<Utf8PathBuf>,
}

impl Layer {
    /// Construct a layer holding default values.
    #[must_use]
    pub const fn defaults(mapping: Mapping) -> Self {
        Self {
            source: LayerSource::Defaults,
            mapping,
            path: None,
        }
    }

    /// Construct a layer loaded from a configuration file.
    #[must_use]
    pub const fn file(mapping: Mapping, path: Option<Utf8PathBuf>) -> Self {
        Self {
            source: LayerSource::File,
            mapping,
            path,
        }
    }

    /// Construct a layer of caller-supplied overrides.
    #[must_use]
    pub const fn options(mapping: Mapping) -> Self {
        Self {
            source: LayerSource::Options,
            mapping,
            path: None,
        }
    }

    /// Returns where the layer came from.
    #[must_use]
    pub const fn source(&self) -> LayerSource {
        self.source
    }

    /// Returns the originating path for file layers.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        self.path.as_deref()
    }

    /// Borrow the layer's values.
    #[must_use]
    pub const fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    /// Consume the layer, returning its values.
    #[must_use]
    pub fn into_mapping(self) -> Mapping {
        self.mapping
    }
}
