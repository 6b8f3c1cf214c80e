//! Conversions from external error types into `ExtendError`.

use super::ExtendError;

/// JSON failures surfacing through `?` are decoding failures; serialisation
/// sites use [`ExtendError::serialize`] explicitly.
impl From<serde_json::Error> for ExtendError {
    fn from(e: serde_json::Error) -> Self {
        Self::Deserialize(e)
    }
}

