//! Document format detection.

use std::path::Path;

/// Syntax of a configuration document.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Format {
    /// JSON documents (`.json`).
    Json,
    /// TOML documents (`.toml`, and the fallback for unknown extensions).
    Toml,
}

impl Format {
    /// Select a format from the extension of `path`, case-insensitively.
    ///
    /// Paths without a recognised extension are treated as TOML.
    ///
    /// ```rust
    /// use extend_config::Format;
    /// use std::path::Path;
    ///
    /// assert_eq!(Format::from_path(Path::new("app.JSON")), Format::Json);
    /// assert_eq!(Format::from_path(Path::new("app.toml")), Format::Toml);
    /// assert_eq!(Format::from_path(Path::new(".apprc")), Format::Toml);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}
