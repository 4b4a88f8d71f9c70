//! Configuration types for Montage.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`CanvasConfig`] - Dimensions of the canvas expressions are parsed for.
//!
//! # Example
//!
//! ```
//! # use montage::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().width(), 512);
//! assert!(config.canvas().to_canvas().is_ok());
//! ```

use serde::Deserialize;

use montage_core::pipeline::Canvas;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified canvas configuration.
    pub fn new(canvas: CanvasConfig) -> Self {
        Self { canvas }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns a copy of this configuration with the canvas replaced.
    pub fn with_canvas(mut self, canvas: CanvasConfig) -> Self {
        self.canvas = canvas;
        self
    }
}

/// Canvas dimensions in pixels.
///
/// Missing fields default to the corresponding dimension of
/// [`Canvas::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_width")]
    width: u32,

    #[serde(default = "default_height")]
    height: u32,
}

fn default_width() -> u32 {
    Canvas::default().width
}

fn default_height() -> u32 {
    Canvas::default().height
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl CanvasConfig {
    /// Creates a new [`CanvasConfig`].
    ///
    /// # Arguments
    ///
    /// * `width` - Canvas width in pixels.
    /// * `height` - Canvas height in pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns a copy with any given dimension replaced.
    pub fn with_overrides(self, width: Option<u32>, height: Option<u32>) -> Self {
        Self {
            width: width.unwrap_or(self.width),
            height: height.unwrap_or(self.height),
        }
    }

    /// Returns the configured [`Canvas`].
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn to_canvas(&self) -> Result<Canvas, String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Invalid canvas size in config: {}x{}",
                self.width, self.height
            ));
        }
        Ok(Canvas::new(self.width, self.height))
    }
}
