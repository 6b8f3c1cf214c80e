//! Mutable component state updated by shallow assignment.

use serde_json::Value;
use tracing::debug;

use crate::Mapping;

/// State mapping owned by a component.
///
/// Unlike [`crate::merge`], [`State::set_state`] updates the stored mapping in
/// place; it is always shallow.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct State {
    inner: Mapping,
}

impl State {
    /// Wrap an initial state mapping.
    #[must_use]
    pub const fn new(initial: Mapping) -> Self {
        Self { inner: initial }
    }

    /// Look up a single property.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    /// Borrow the whole state.
    #[must_use]
    pub const fn as_map(&self) -> &Mapping {
        &self.inner
    }

    /// Consume the state, returning its mapping.
    #[must_use]
    pub fn into_inner(self) -> Mapping {
        self.inner
    }

    /// Assign every property of `props` into the state.
    ///
    /// Nested mappings replace what was stored, exactly as in a shallow
    /// [`crate::merge`]. Returns the keys whose stored value changed, in the
    /// order `props` yields them; an empty list means re-rendering can be
    /// skipped.
    ///
    /// ```rust
    /// use extend_config::State;
    /// use serde_json::{Map, json};
    ///
    /// let mut state = State::default();
    /// let props = json!({"count": 1, "label": "clicks"});
    /// let changed = state.set_state(props.as_object().unwrap_or(&Map::new()));
    /// assert_eq!(changed, ["count", "label"]);
    ///
    /// let again = json!({"count": 1});
    /// assert!(state.set_state(again.as_object().unwrap_or(&Map::new())).is_empty());
    /// ```
    pub fn set_state(&mut self, props: &Mapping) -> Vec<String> {
        let mut changed = Vec::new();
        for (key, value) in props {
            if self.inner.get(key) != Some(value) {
                self.inner.insert(key.clone(), value.clone());
                changed.push(key.clone());
            }
        }
        debug!(
            props = props.len(),
            changed = changed.len(),
            "updated component state"
        );
        changed
    }
}

impl From<Mapping> for State {
    fn from(initial: Mapping) -> Self {
        Self::new(initial)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::State;
    use crate::{Mapping, shallow_merge};

    fn object(value: Value) -> Mapping {
        match value {
            Value::Object(map) => map,
            other => panic!("fixture must be an object, got {other}"),
        }
    }

    #[test]
    fn reports_only_changed_keys() {
        let mut state = State::new(object(json!({"count": 1, "open": false})));
        let changed = state.set_state(&object(json!({"count": 1, "open": true, "new": null})));
        assert_eq!(changed, ["new", "open"]);
        assert_eq!(state.get("open"), Some(&json!(true)));
        assert_eq!(state.get("new"), Some(&Value::Null));
    }

    #[test]
    fn matches_shallow_merge() {
        let initial = object(json!({"panel": {"width": 10, "height": 5}, "title": "a"}));
        let props = object(json!({"panel": {"width": 20}}));
        let expected = shallow_merge([&initial, &props]);

        let mut state = State::from(initial);
        state.set_state(&props);
        assert_eq!(state.into_inner(), expected);
    }

    #[test]
    fn empty_props_change_nothing() {
        let mut state = State::new(object(json!({"a": 1})));
        assert!(state.set_state(&Mapping::new()).is_empty());
        assert_eq!(state.as_map(), &object(json!({"a": 1})));
    }
}
