//! Format-specific parsing of mapping documents.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use super::Format;
use crate::{ExtendError, ExtendResult, Mapping, ValueKind};

/// Parse `data` as a mapping document in `format`.
///
/// `origin` names the document in error messages; it is not read.
///
/// # Errors
///
/// Returns [`ExtendError::File`] when `data` is not valid for `format` or
/// when TOML is requested without the `toml` feature, and
/// [`ExtendError::InvalidInputType`] when the document root is not a
/// mapping.
///
/// # Examples
///
/// ```rust
/// use extend_config::{Format, parse_mapping};
/// use serde_json::json;
/// use std::path::Path;
///
/// let map = parse_mapping(Format::Json, r#"{"bread": "rye"}"#, Path::new("inline.json"))?;
/// assert_eq!(map.get("bread"), Some(&json!("rye")));
/// # Ok::<_, std::sync::Arc<extend_config::ExtendError>>(())
/// ```
pub fn parse_mapping(format: Format, data: &str, origin: &Path) -> ExtendResult<Mapping> {
    let value = match format {
        Format::Json => {
            serde_json::from_str::<Value>(data).map_err(|e| ExtendError::file_arc(origin, e))?
        }
        Format::Toml => parse_toml(data, origin)?,
    };
    match value {
        Value::Object(map) => Ok(map),
        other => {
            let found = ValueKind::of(&other);
            warn!(
                path = %origin.display(),
                found = %found,
                "configuration document root is not a mapping"
            );
            Err(Arc::new(ExtendError::invalid_input(0, found)))
        }
    }
}

#[cfg(feature = "toml")]
fn parse_toml(data: &str, origin: &Path) -> ExtendResult<Value> {
    toml::from_str::<Value>(data).map_err(|e| ExtendError::file_arc(origin, e))
}

#[cfg(not(feature = "toml"))]
fn parse_toml(_data: &str, origin: &Path) -> ExtendResult<Value> {
    Err(ExtendError::file_arc(
        origin,
        std::io::Error::other(
            "toml feature disabled: enable the 'toml' feature to support this file format",
        ),
    ))
}
