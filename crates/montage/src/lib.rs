//! Montage - An expression language for composing images from layered filters.
//!
//! Montage expressions describe an image as a sequence of layers, each
//! combining a source image with a filter. This crate ties the parser and
//! the pipeline types together behind [`PipelineBuilder`].

pub mod config;

mod error;

pub use montage_core::{color, filter, font, layout, length, pipeline, source, text};
pub use montage_parser::grammar;

pub use error::MontageError;

use std::{fs, path::Path};

use log::{debug, info, trace};

use config::AppConfig;
use grammar::Grammar;
use pipeline::{Canvas, Pipeline};

/// Builder for parsing Montage expressions into pipelines.
///
/// # Examples
///
/// ```rust
/// use montage::{PipelineBuilder, config::{AppConfig, CanvasConfig}};
///
/// let config = AppConfig::new(CanvasConfig::new(1200, 630));
/// let builder = PipelineBuilder::new(config);
///
/// let pipeline = builder.parse("photo.jpg:cover(100%w, 100%h); blur()")
///     .expect("Failed to parse");
/// assert_eq!(pipeline.len(), 2);
///
/// // Or use default config
/// let builder = PipelineBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    config: AppConfig,
}

impl PipelineBuilder {
    /// Create a new pipeline builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including the canvas size
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The canvas expressions are parsed for.
    ///
    /// # Errors
    ///
    /// Returns `MontageError::Config` if the configured canvas is invalid.
    pub fn canvas(&self) -> Result<Canvas, MontageError> {
        self.config.canvas().to_canvas().map_err(MontageError::Config)
    }

    /// Parse an expression into a pipeline.
    ///
    /// # Arguments
    ///
    /// * `source` - Montage expression as a string
    ///
    /// # Errors
    ///
    /// Returns `MontageError` for syntax errors or an invalid canvas
    /// configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use montage::{PipelineBuilder, source::ImageNode};
    ///
    /// let builder = PipelineBuilder::default();
    /// let pipeline = builder.parse("_:blur()").expect("Failed to parse expression");
    /// assert_eq!(pipeline.first().source(), &ImageNode::Empty);
    /// ```
    pub fn parse(&self, source: &str) -> Result<Pipeline, MontageError> {
        let canvas = self.canvas()?;
        info!(canvas:%; "Parsing expression");

        let pipeline = montage_parser::parse(source, canvas)
            .map_err(|err| MontageError::new_parse_error(err, source))?;

        debug!(layers = pipeline.len(); "Pipeline parsed successfully");
        trace!(pipeline:?; "Parsed pipeline");

        Ok(pipeline)
    }

    /// Read an expression from `path` and parse it.
    ///
    /// Leading and trailing whitespace in the file is ignored.
    ///
    /// # Errors
    ///
    /// Returns `MontageError::Io` if the file cannot be read, otherwise the
    /// errors of [`PipelineBuilder::parse`].
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Pipeline, MontageError> {
        let path = path.as_ref();
        info!(path:? = path; "Reading expression");
        let source = fs::read_to_string(path)?;
        self.parse(source.trim())
    }

    /// The grammar of the expression language.
    pub fn grammar(&self) -> &'static Grammar {
        Grammar::get()
    }

    /// Returns the rule of a grammar production.
    ///
    /// # Errors
    ///
    /// Returns `MontageError::UnknownProduction` if the grammar has no
    /// production of that name.
    pub fn describe(&self, production: &str) -> Result<&'static str, MontageError> {
        self.grammar()
            .describe(production)
            .ok_or_else(|| MontageError::UnknownProduction(production.to_string()))
    }
}
