//! Extensions for mapping errors to `ExtendResult` concisely.
//!
//! These helpers replace repeated `.map_err(|e| Arc::new(e.into()))` calls
//! when converting external error types into the crate's
//! `ExtendResult<T>` alias (`Result<T, Arc<ExtendError>>`).
//!
//! # Examples
//!
//! ```
//! use extend_config::{ExtendResult, ExtendResultExt};
//!
//! fn decode(text: &str) -> ExtendResult<serde_json::Value> {
//!     // serde_json::Error implements Into<ExtendError>
//!     serde_json::from_str(text).into_extend()
//! }
//!
//! assert!(decode("{").is_err());
//! ```

use std::sync::Arc;

use crate::{ExtendError, ExtendResult};

/// Generic extension for mapping any `Result<T, E>` with
/// `E: Into<ExtendError>` into an `ExtendResult<T>`.
pub trait ExtendResultExt<T, E> {
    /// Convert `Result<T, E>` into `ExtendResult<T>` using `Into<ExtendError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<ExtendError>`.
    fn into_extend(self) -> ExtendResult<T>;
}

impl<T, E> ExtendResultExt<T, E> for Result<T, E>
where
    E: Into<ExtendError>,
{
    fn into_extend(self) -> ExtendResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
