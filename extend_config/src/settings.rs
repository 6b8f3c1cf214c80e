//! Typed settings built from defaults and caller overrides.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    ExtendError, ExtendResult, ExtendResultExt, LayerStack, Mapping, MergeMode, ValueKind,
};

/// Serialise `value` into a mapping.
///
/// # Errors
///
/// Returns [`ExtendError::Serialize`] when serialisation fails and
/// [`ExtendError::InvalidInputType`] when `value` does not serialise to a
/// mapping.
pub fn to_mapping<T: Serialize + ?Sized>(value: &T) -> ExtendResult<Mapping> {
    let serialised = serde_json::to_value(value).map_err(ExtendError::serialize)?;
    match serialised {
        Value::Object(map) => Ok(map),
        other => Err(ExtendError::invalid_input_arc(0, ValueKind::of(&other))),
    }
}

/// Deserialise a merged mapping into `T`.
///
/// # Errors
///
/// Returns [`ExtendError::Deserialize`] when the mapping does not match `T`.
pub fn from_mapping<T: DeserializeOwned>(mapping: Mapping) -> ExtendResult<T> {
    serde_json::from_value(Value::Object(mapping)).into_extend()
}

/// Combine typed `defaults` with optional caller `options`.
///
/// `None` behaves like an empty override, so the defaults come back
/// unchanged.
///
/// # Errors
///
/// Returns an [`ExtendError`] when `defaults` does not serialise to a
/// mapping or the merged mapping no longer deserialises into `T`.
///
/// # Examples
///
/// ```rust
/// use extend_config::{MergeMode, extend_defaults};
/// use serde::{Deserialize, Serialize};
/// use serde_json::json;
///
/// #[derive(Debug, Deserialize, Serialize, PartialEq)]
/// struct Plugin {
///     turkey: bool,
///     mayo: bool,
///     bread: String,
/// }
///
/// let defaults = Plugin { turkey: true, mayo: false, bread: "wheat".into() };
/// let options = json!({"mayo": true});
///
/// let settings = extend_defaults(&defaults, options.as_object(), MergeMode::Shallow)?;
/// assert!(settings.mayo);
/// assert_eq!(settings.bread, "wheat");
///
/// let untouched = extend_defaults(&defaults, None, MergeMode::Shallow)?;
/// assert_eq!(untouched, defaults);
/// # Ok::<_, std::sync::Arc<extend_config::ExtendError>>(())
/// ```
pub fn extend_defaults<T>(
    defaults: &T,
    options: Option<&Mapping>,
    mode: MergeMode,
) -> ExtendResult<T>
where
    T: Serialize + DeserializeOwned,
{
    let mut stack = LayerStack::with_capacity(2);
    stack.push_defaults(to_mapping(defaults)?);
    if let Some(overrides) = options {
        stack.push_options(overrides.clone());
    }
    stack.extract(mode)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::{extend_defaults, from_mapping, to_mapping};
    use crate::{ExtendError, MergeMode, ValueKind};

    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    struct Retry {
        attempts: u8,
        backoff_ms: u32,
    }

    #[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
    struct Client {
        endpoint: String,
        retry: Retry,
        tags: Vec<String>,
    }

    fn defaults() -> Client {
        Client {
            endpoint: "https://localhost".to_owned(),
            retry: Retry {
                attempts: 3,
                backoff_ms: 100,
            },
            tags: vec!["base".to_owned()],
        }
    }

    #[test]
    fn deep_mode_overrides_nested_field() {
        let options = json!({"retry": {"attempts": 5}, "tags": ["edge"]});
        let merged = extend_defaults(&defaults(), options.as_object(), MergeMode::Deep).ok();
        assert_eq!(
            merged,
            Some(Client {
                endpoint: "https://localhost".to_owned(),
                retry: Retry {
                    attempts: 5,
                    backoff_ms: 100,
                },
                tags: vec!["edge".to_owned()],
            })
        );
    }

    #[test]
    fn shallow_mode_needs_complete_nested_override() {
        let options = json!({"retry": {"attempts": 5}});
        let Err(err) = extend_defaults(&defaults(), options.as_object(), MergeMode::Shallow) else {
            panic!("partial nested override must not deserialise in shallow mode");
        };
        assert!(matches!(&*err, ExtendError::Deserialize(_)), "got {err:?}");
    }

    #[rstest]
    #[case(MergeMode::Shallow)]
    #[case(MergeMode::Deep)]
    fn absent_options_keep_defaults(#[case] mode: MergeMode) {
        assert_eq!(extend_defaults(&defaults(), None, mode).ok(), Some(defaults()));
    }

    #[test]
    fn to_mapping_rejects_non_objects() {
        let Err(err) = to_mapping(&[1_u8, 2]) else {
            panic!("arrays do not serialise to mappings");
        };
        assert!(
            matches!(
                &*err,
                ExtendError::InvalidInputType {
                    index: 0,
                    found: ValueKind::Sequence
                }
            ),
            "got {err:?}"
        );
    }

    #[test]
    fn mapping_round_trips_through_struct() {
        let mapping = to_mapping(&defaults()).ok();
        let restored = mapping.and_then(|m| from_mapping::<Client>(m).ok());
        assert_eq!(restored, Some(defaults()));
    }
}
