//! Shallow and deep merging of JSON mappings.
//!
//! The crate combines an ordered sequence of [`Mapping`] inputs into a single
//! newly allocated mapping. Later inputs take precedence on key collisions.
//! In [`MergeMode::Deep`] colliding mappings are merged recursively, while
//! sequences, nulls and scalars are always replaced wholesale.
//!
//! ```rust
//! use extend_config::{MergeMode, merge};
//! use serde_json::json;
//!
//! let defaults = json!({"bread": "wheat", "fillings": {"turkey": true}});
//! let options = json!({"fillings": {"mayo": true}});
//! let (Some(defaults), Some(options)) = (defaults.as_object(), options.as_object()) else {
//!     unreachable!("literals are objects");
//! };
//!
//! let settings = merge(MergeMode::Deep, [defaults, options]);
//! assert_eq!(
//!     serde_json::Value::Object(settings),
//!     json!({"bread": "wheat", "fillings": {"turkey": true, "mayo": true}})
//! );
//! ```
//!
//! Beyond the core merger the crate offers a dynamic entry point for untyped
//! values ([`merge_values`]), typed settings helpers ([`extend_defaults`]), an
//! ordered [`LayerStack`], in-place component [`State`] updates, and loaders
//! that read mappings from JSON or TOML documents.

mod dynamic;
mod error;
pub mod file;
mod kind;
pub mod layers;
mod merge;
mod result_ext;
mod settings;
mod state;

pub use dynamic::{as_mapping, merge_into_value, merge_values};
pub use error::ExtendError;
pub use file::{Format, load_mapping, parse_mapping};
pub use kind::ValueKind;
pub use layers::{Layer, LayerSource, LayerStack};
pub use merge::{MergeMode, deep_merge, merge, shallow_merge};
pub use result_ext::ExtendResultExt;
pub use settings::{extend_defaults, from_mapping, to_mapping};
pub use state::State;

/// String-keyed JSON object used for every merge input and result.
pub type Mapping = serde_json::Map<String, serde_json::Value>;

/// Result type used throughout the crate.
///
/// Errors are shared behind an [`std::sync::Arc`] so they can be cloned into
/// several reports without losing their source chain.
pub type ExtendResult<T> = std::result::Result<T, std::sync::Arc<ExtendError>>;
