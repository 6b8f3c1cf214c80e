//! Layer accumulation and resolution.

use camino::{Utf8Path, Utf8PathBuf};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::Layer;
use crate::{
    ExtendError, ExtendResult, Mapping, MergeMode, ValueKind, file::load_mapping, from_mapping,
    merge,
};

/// Builder that accumulates [`Layer`] values in precedence order.
///
/// Layers pushed later take precedence over those pushed earlier.
#[derive(Clone, Debug, Default)]
pub struct LayerStack {
    layers: Vec<Layer>,
}

impl LayerStack {
    /// Create an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Create a stack with preallocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            layers: Vec::with_capacity(capacity),
        }
    }

    /// Push a defaults layer.
    pub fn push_defaults(&mut self, mapping: Mapping) {
        self.push_layer(Layer::defaults(mapping));
    }

    /// Push a configuration file layer.
    pub fn push_file(&mut self, mapping: Mapping, path: Option<Utf8PathBuf>) {
        self.push_layer(Layer::file(mapping, path));
    }

    /// Push a layer of caller-supplied overrides.
    pub fn push_options(&mut self, mapping: Mapping) {
        self.push_layer(Layer::options(mapping));
    }

    /// Push an arbitrary layer.
    pub fn push_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Push an untyped options value.
    ///
    /// # Errors
    ///
    /// Returns [`ExtendError::InvalidInputType`] when `value` is not a
    /// mapping. The reported index is the position the layer would have
    /// taken, and the stack is left unchanged.
    pub fn push_value(&mut self, value: Value) -> ExtendResult<()> {
        match value {
            Value::Object(map) => {
                self.push_options(map);
                Ok(())
            }
            other => Err(ExtendError::invalid_input_arc(
                self.layers.len(),
                ValueKind::of(&other),
            )),
        }
    }

    /// Load `path` and push it as a file layer when it exists.
    ///
    /// Returns whether a layer was pushed.
    ///
    /// # Errors
    ///
    /// Propagates read, parse and root-kind failures from
    /// [`crate::load_mapping`].
    pub fn push_file_from(&mut self, path: &Utf8Path) -> ExtendResult<bool> {
        let Some(mapping) = load_mapping(path.as_std_path())? else {
            return Ok(false);
        };
        self.push_file(mapping, Some(path.to_path_buf()));
        Ok(true)
    }

    /// Number of layers pushed so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether no layers have been pushed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Borrow the accumulated layers in push order.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Merge every layer, in push order, into a new mapping.
    #[must_use]
    pub fn resolve(&self, mode: MergeMode) -> Mapping {
        debug!(layers = self.layers.len(), mode = %mode, "resolving layer stack");
        merge(mode, self.layers.iter().map(Layer::mapping))
    }

    /// Resolve the stack and deserialise the result into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtendError::Deserialize`] when the resolved mapping does not
    /// match `T`.
    pub fn extract<T: DeserializeOwned>(&self, mode: MergeMode) -> ExtendResult<T> {
        from_mapping(self.resolve(mode))
    }
}

impl IntoIterator for LayerStack {
    type Item = Layer;
    type IntoIter = std::vec::IntoIter<Layer>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.into_iter()
    }
}

impl Extend<Layer> for LayerStack {
    fn extend<I: IntoIterator<Item = Layer>>(&mut self, iter: I) {
        self.layers.extend(iter);
    }
}
