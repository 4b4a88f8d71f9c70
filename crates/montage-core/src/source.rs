//! Layer source references.

use std::fmt;

use serde::Serialize;

/// Where a layer takes its input image from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum ImageNode {
    /// A transparent placeholder.
    Empty,
    /// A relative or absolute path or URL. Only its lexical shape is checked.
    Url(String),
    /// The rendered output of the n-th layer (0-based) of the same pipeline.
    Index(usize),
    /// The output of the preceding layer, or the requested image for the
    /// first layer. Only produced for layers that name a filter and no source.
    Previous,
}

impl ImageNode {
    pub fn url(path: impl Into<String>) -> Self {
        Self::Url(path.into())
    }

    /// Returns `true` if this source refers to another layer of the pipeline.
    pub fn is_layer_reference(&self) -> bool {
        matches!(self, Self::Index(_) | Self::Previous)
    }
}

impl fmt::Display for ImageNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "_"),
            Self::Url(path) => write!(f, "{path}"),
            Self::Index(index) => write!(f, "${index}"),
            Self::Previous => write!(f, "<previous>"),
        }
    }
}
