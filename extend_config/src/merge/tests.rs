//! Unit tests for the merge fold.

use rstest::rstest;
use serde_json::{Value, json};

use super::{MergeMode, apply, deep_merge, merge, shallow_merge};
use crate::Mapping;

fn object(value: Value) -> Mapping {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be an object, got {other}"),
    }
}

#[test]
fn no_inputs_yield_empty_mapping() {
    let inputs: [&Mapping; 0] = [];
    assert!(merge(MergeMode::Deep, inputs).is_empty());
    assert!(shallow_merge(Vec::<&Mapping>::new()).is_empty());
}

#[test]
fn empty_input_yields_empty_mapping() {
    let empty = Mapping::new();
    assert!(shallow_merge([&empty]).is_empty());
}

#[rstest]
#[case::shallow(MergeMode::Shallow)]
#[case::deep(MergeMode::Deep)]
fn single_input_is_copied(#[case] mode: MergeMode) {
    let input = object(json!({"a": 1, "nested": {"x": [1, 2]}}));
    let result = merge(mode, [&input]);
    assert_eq!(result, input);
}

#[test]
fn shallow_replaces_nested_mapping() {
    let first = object(json!({"a": {"x": 1}}));
    let second = object(json!({"a": {"y": 2}}));
    let result = shallow_merge([&first, &second]);
    assert_eq!(Value::Object(result), json!({"a": {"y": 2}}));
}

#[test]
fn deep_combines_nested_mapping() {
    let first = object(json!({"a": {"x": 1}}));
    let second = object(json!({"a": {"y": 2}}));
    let result = deep_merge([&first, &second]);
    assert_eq!(Value::Object(result), json!({"a": {"x": 1, "y": 2}}));
}

#[test]
fn deep_recurses_through_several_levels() {
    let first = object(json!({"a": {"b": {"c": 1, "keep": true}}}));
    let second = object(json!({"a": {"b": {"c": 2}, "sibling": 3}}));
    let result = deep_merge([&first, &second]);
    assert_eq!(
        Value::Object(result),
        json!({"a": {"b": {"c": 2, "keep": true}, "sibling": 3}})
    );
}

#[rstest]
#[case::sequence_over_mapping(json!({"a": {"x": 1}}), json!({"a": [1]}), json!({"a": [1]}))]
#[case::mapping_over_sequence(json!({"a": [1]}), json!({"a": {"x": 1}}), json!({"a": {"x": 1}}))]
#[case::null_over_mapping(json!({"a": {"x": 1}}), json!({"a": null}), json!({"a": null}))]
#[case::mapping_over_null(json!({"a": null}), json!({"a": {"x": 1}}), json!({"a": {"x": 1}}))]
#[case::scalar_over_mapping(json!({"a": {"x": 1}}), json!({"a": "s"}), json!({"a": "s"}))]
#[case::mapping_over_scalar(json!({"a": 7}), json!({"a": {"x": 1}}), json!({"a": {"x": 1}}))]
#[case::sequences_replace(json!({"a": [1, 2]}), json!({"a": [3]}), json!({"a": [3]}))]
fn deep_mode_only_merges_mapping_pairs(
    #[case] first: Value,
    #[case] second: Value,
    #[case] expected: Value,
) {
    let (left, right) = (object(first), object(second));
    let result = deep_merge([&left, &right]);
    assert_eq!(Value::Object(result), expected);
}

#[test]
fn bool_flag_selects_mode() {
    let first = object(json!({"a": {"x": 1}}));
    let second = object(json!({"a": {"y": 2}}));
    assert_eq!(merge(true, [&first, &second]), deep_merge([&first, &second]));
    assert_eq!(
        merge(false, [&first, &second]),
        shallow_merge([&first, &second])
    );
}

#[test]
fn apply_extends_existing_target() {
    let mut target = object(json!({"a": {"x": 1}, "b": 1}));
    let input = object(json!({"a": {"y": 2}}));
    apply(&mut target, &input, MergeMode::Deep, 0);
    assert_eq!(Value::Object(target), json!({"a": {"x": 1, "y": 2}, "b": 1}));
}

#[rstest]
#[case(true, MergeMode::Deep)]
#[case(false, MergeMode::Shallow)]
fn mode_round_trips_through_bool(#[case] deep: bool, #[case] mode: MergeMode) {
    assert_eq!(MergeMode::from(deep), mode);
    assert_eq!(bool::from(mode), deep);
}

#[test]
fn mode_deserialises_from_lowercase_names() -> serde_json::Result<()> {
    let mode: MergeMode = serde_json::from_value(json!("deep"))?;
    assert_eq!(mode, MergeMode::Deep);
    assert_eq!(serde_json::to_value(MergeMode::Shallow)?, json!("shallow"));
    Ok(())
}
