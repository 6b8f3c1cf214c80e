//! Loading mapping documents from disk.

use std::path::Path;

use tracing::debug;

use super::{Format, parse_mapping};
use crate::{ExtendError, ExtendResult, Mapping};

/// Load a mapping from `path`, selecting the parser from its extension.
///
/// Returns `Ok(None)` when `path` does not name a file, so optional
/// configuration files can be skipped without special casing.
///
/// # Errors
///
/// Returns [`ExtendError::File`] when the file cannot be read or parsed, and
/// [`ExtendError::InvalidInputType`] when its root is not a mapping.
///
/// # Examples
///
/// ```rust,no_run
/// use extend_config::load_mapping;
/// use std::path::Path;
///
/// # fn run() -> extend_config::ExtendResult<()> {
/// if let Some(overrides) = load_mapping(Path::new("app.toml"))? {
///     assert!(overrides.contains_key("bread"));
/// }
/// # Ok(())
/// # }
/// ```
pub fn load_mapping(path: &Path) -> ExtendResult<Option<Mapping>> {
    if !path.is_file() {
        debug!(path = %path.display(), "no configuration file present");
        return Ok(None);
    }
    let data = std::fs::read_to_string(path).map_err(|e| ExtendError::file_arc(path, e))?;
    let format = Format::from_path(path);
    let map = parse_mapping(format, &data, path)?;
    debug!(path = %path.display(), ?format, keys = map.len(), "loaded configuration file");
    Ok(Some(map))
}
