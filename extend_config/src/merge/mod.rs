//! Shallow and deep mapping merges.
//!
//! Inputs are borrowed and never mutated. Every call allocates a fresh result;
//! values assigned wholesale are cloned out of the input that supplied them.

mod mode;

pub use mode::MergeMode;

use serde_json::Value;
use tracing::{debug, trace};

use crate::Mapping;

/// Merge `inputs` left to right into a new mapping.
///
/// For every key of every input, in order:
/// - in [`MergeMode::Deep`], when the accumulated value and the incoming value
///   are both mappings, their contents are merged recursively;
/// - otherwise the incoming value replaces whatever was stored under the key.
///
/// Sequences, nulls and scalars never merge, even in deep mode. Zero inputs
/// produce an empty mapping; a single input produces a copy of it.
///
/// # Examples
///
/// ```rust
/// use extend_config::{Mapping, MergeMode, merge};
/// use serde_json::{Value, json};
///
/// fn object(value: Value) -> Mapping {
///     match value {
///         Value::Object(map) => map,
///         _ => Mapping::new(),
///     }
/// }
///
/// let base = object(json!({"a": 0, "b": {"w": 52, "p": 100}, "c": 97}));
/// let second = object(json!({"b": {"p": 200}, "d": 100}));
/// let third = object(json!({"a": "yum"}));
///
/// let deep = merge(MergeMode::Deep, [&base, &second, &third]);
/// assert_eq!(
///     Value::Object(deep),
///     json!({"a": "yum", "b": {"w": 52, "p": 200}, "c": 97, "d": 100})
/// );
///
/// let shallow = merge(false, [&base, &second]);
/// assert_eq!(shallow.get("b"), Some(&json!({"p": 200})));
/// ```
#[must_use]
pub fn merge<'a, M, I>(mode: M, inputs: I) -> Mapping
where
    M: Into<MergeMode>,
    I: IntoIterator<Item = &'a Mapping>,
{
    let selected = mode.into();
    let mut result = Mapping::new();
    let mut count = 0_usize;
    for input in inputs {
        apply(&mut result, input, selected, 0);
        count += 1;
    }
    debug!(
        mode = %selected,
        inputs = count,
        keys = result.len(),
        "merged mappings"
    );
    result
}

/// Shorthand for [`merge`] in [`MergeMode::Deep`].
#[must_use]
pub fn deep_merge<'a, I>(inputs: I) -> Mapping
where
    I: IntoIterator<Item = &'a Mapping>,
{
    merge(MergeMode::Deep, inputs)
}

/// Shorthand for [`merge`] in [`MergeMode::Shallow`].
#[must_use]
pub fn shallow_merge<'a, I>(inputs: I) -> Mapping
where
    I: IntoIterator<Item = &'a Mapping>,
{
    merge(MergeMode::Shallow, inputs)
}

/// Fold `input` into `target`.
///
/// `target` is always owned by the result under construction, so recursing
/// into it in place is equivalent to merging the two nested mappings into a
/// new one and storing that.
pub(crate) fn apply(target: &mut Mapping, input: &Mapping, mode: MergeMode, depth: usize) {
    for (key, incoming) in input {
        if mode.is_deep()
            && let (Some(Value::Object(existing)), Value::Object(nested)) =
                (target.get_mut(key), incoming)
        {
            trace!(key = %key, depth, "merging nested mapping");
            apply(existing, nested, mode, depth + 1);
            continue;
        }
        target.insert(key.clone(), incoming.clone());
    }
}

#[cfg(test)]
mod tests;
