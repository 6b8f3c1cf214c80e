//! Merging of untyped JSON values.
//!
//! [`crate::merge`] only accepts mappings, so misuse is a compile error. Values
//! arriving from deserialised documents are not known to be mappings until
//! inspected; this module performs that inspection and fails fast on the
//! first input that is not a mapping.

use serde_json::Value;

use crate::{ExtendError, ExtendResult, Mapping, MergeMode, ValueKind, merge};

/// Borrow `value` as a mapping, reporting `index` when it is not one.
///
/// # Errors
///
/// Returns [`ExtendError::InvalidInputType`] when `value` is a sequence, null
/// or scalar.
pub fn as_mapping(index: usize, value: &Value) -> ExtendResult<&Mapping> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ExtendError::invalid_input_arc(index, ValueKind::of(other))),
    }
}

/// Merge untyped `inputs` after checking that each one is a mapping.
///
/// Every input is validated before any merging starts, so a failure never
/// leaves a partial result behind.
///
/// # Errors
///
/// Returns [`ExtendError::InvalidInputType`] naming the first non-mapping
/// input.
///
/// # Examples
///
/// ```rust
/// use extend_config::{ExtendError, MergeMode, ValueKind, merge_values};
/// use serde_json::json;
///
/// let merged = merge_values(MergeMode::Deep, &[json!({"a": {"x": 1}}), json!({"a": {"y": 2}})])?;
/// assert_eq!(merged.get("a"), Some(&json!({"x": 1, "y": 2})));
///
/// let err = merge_values(false, &[json!({}), json!([1])]).unwrap_err();
/// assert!(matches!(
///     *err,
///     ExtendError::InvalidInputType { index: 1, found: ValueKind::Sequence }
/// ));
/// # Ok::<_, std::sync::Arc<ExtendError>>(())
/// ```
pub fn merge_values<'a, M, I>(mode: M, inputs: I) -> ExtendResult<Mapping>
where
    M: Into<MergeMode>,
    I: IntoIterator<Item = &'a Value>,
{
    let mappings = inputs
        .into_iter()
        .enumerate()
        .map(|(index, value)| as_mapping(index, value))
        .collect::<ExtendResult<Vec<_>>>()?;
    Ok(merge(mode, mappings))
}

/// Like [`merge_values`] but returns the result as a [`Value::Object`].
///
/// # Errors
///
/// Returns [`ExtendError::InvalidInputType`] naming the first non-mapping
/// input.
pub fn merge_into_value<'a, M, I>(mode: M, inputs: I) -> ExtendResult<Value>
where
    M: Into<MergeMode>,
    I: IntoIterator<Item = &'a Value>,
{
    merge_values(mode, inputs).map(Value::Object)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::{as_mapping, merge_into_value, merge_values};
    use crate::{ExtendError, MergeMode, ValueKind};

    #[rstest]
    #[case::null_first(vec![Value::Null, json!({})], 0, ValueKind::Null)]
    #[case::number_second(vec![json!({}), json!(3)], 1, ValueKind::Number)]
    #[case::string_last(vec![json!({}), json!({}), json!("x")], 2, ValueKind::String)]
    #[case::first_offender_wins(vec![json!({}), json!([]), json!(true)], 1, ValueKind::Sequence)]
    fn rejects_non_mapping_inputs(
        #[case] inputs: Vec<Value>,
        #[case] index: usize,
        #[case] found: ValueKind,
    ) {
        let Err(err) = merge_values(MergeMode::Deep, &inputs) else {
            panic!("expected rejection of {inputs:?}");
        };
        match &*err {
            ExtendError::InvalidInputType {
                index: got_index,
                found: got_found,
            } => {
                assert_eq!(*got_index, index);
                assert_eq!(*got_found, found);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn merges_valid_values() {
        let inputs = [json!({"a": 1, "b": [1]}), json!({"b": [2]})];
        let merged = merge_into_value(true, &inputs).ok();
        assert_eq!(merged, Some(json!({"a": 1, "b": [2]})));
    }

    #[test]
    fn empty_value_list_is_empty_mapping() {
        let inputs: [Value; 0] = [];
        let merged = merge_values(MergeMode::Shallow, &inputs).ok();
        assert_eq!(merged.map(|m| m.len()), Some(0));
    }

    #[test]
    fn as_mapping_borrows_objects() {
        let value = json!({"k": "v"});
        let map = as_mapping(0, &value).ok();
        assert_eq!(map.and_then(|m| m.get("k")), Some(&json!("v")));
    }
}
