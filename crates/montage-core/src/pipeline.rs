//! Layers and pipelines.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{filter::FilterNode, source::ImageNode};

/// Output canvas dimensions in pixels.
///
/// A pipeline carries the canvas it was requested for so that the renderer
/// can resolve relative lengths later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(512, 512)
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A source paired with the filter applied to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerNode {
    source: ImageNode,
    filter: FilterNode,
}

impl LayerNode {
    pub fn new(source: ImageNode, filter: FilterNode) -> Self {
        Self { source, filter }
    }

    pub fn source(&self) -> &ImageNode {
        &self.source
    }

    pub fn filter(&self) -> &FilterNode {
        &self.filter
    }
}

impl fmt::Display for LayerNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.filter.name())
    }
}

/// An ordered, non-empty sequence of layers.
///
/// Layer order decides execution order and how [`ImageNode::Index`] and
/// [`ImageNode::Previous`] resolve. A pipeline is immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pipeline {
    layers: Vec<LayerNode>,
    canvas: Canvas,
}

impl Pipeline {
    /// Create a pipeline from its first layer and any following layers.
    pub fn new(first: LayerNode, rest: impl IntoIterator<Item = LayerNode>, canvas: Canvas) -> Self {
        let mut layers = vec![first];
        layers.extend(rest);
        Self { layers, canvas }
    }

    pub fn layers(&self) -> &[LayerNode] {
        &self.layers
    }

    /// The first layer. Always present.
    pub fn first(&self) -> &LayerNode {
        &self.layers[0]
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Always `false`; kept alongside [`Pipeline::len`].
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LayerNode> {
        self.layers.iter()
    }

    /// Canonical filter names of every layer, in order.
    pub fn filter_names(&self) -> Vec<&'static str> {
        self.layers.iter().map(|layer| layer.filter().name()).collect()
    }
}

impl<'a> IntoIterator for &'a Pipeline {
    type Item = &'a LayerNode;
    type IntoIter = std::slice::Iter<'a, LayerNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Pipeline {
    type Item = LayerNode;
    type IntoIter = std::vec::IntoIter<LayerNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.into_iter()
    }
}
