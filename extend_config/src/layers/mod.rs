//! Ordered stacks of merge inputs.
//!
//! A [`LayerStack`] records where each input came from (defaults, a file, or
//! caller-supplied options) and resolves them, in push order, through
//! [`crate::merge`]. The resolved mapping can be deserialised straight into a
//! settings struct.
//!
//! # Example
//!
//! ```rust
//! use extend_config::{LayerStack, MergeMode};
//! use serde::Deserialize;
//! use serde_json::json;
//!
//! #[derive(Debug, Deserialize)]
//! struct Sandwich {
//!     turkey: bool,
//!     mayo: bool,
//!     bread: String,
//! }
//!
//! let mut stack = LayerStack::new();
//! stack.push_value(json!({"turkey": true, "mayo": false, "bread": "wheat"}))?;
//! stack.push_value(json!({"mayo": true}))?;
//!
//! let sandwich: Sandwich = stack.extract(MergeMode::Shallow)?;
//! assert!(sandwich.turkey && sandwich.mayo);
//! assert_eq!(sandwich.bread, "wheat");
//! # Ok::<_, std::sync::Arc<extend_config::ExtendError>>(())
//! ```

mod layer;
mod stack;

pub use layer::{Layer, LayerSource};
pub use stack::LayerStack;
