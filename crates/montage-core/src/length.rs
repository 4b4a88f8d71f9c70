//! Unit-tagged lengths.
//!
//! A [`Length`] is never resolved against concrete geometry here. The
//! renderer receives the unit kind untouched and decides what a percentage
//! means for the canvas it is drawing on.

use std::fmt;

use serde::Serialize;

use crate::color::unit_clamp;

/// A size whose unit is preserved until render time.
///
/// Percentage kinds always hold a value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Length {
    /// Absolute size in pixels.
    Pixels(i32),
    /// Fraction of the dimension the renderer applies it to.
    Percentage(f64),
    /// Fraction of the canvas width.
    PercentOfWidth(f64),
    /// Fraction of the canvas height.
    PercentOfHeight(f64),
}

impl Length {
    /// Create a percentage length, clamping the fraction into `[0, 1]`.
    pub fn percentage(fraction: f64) -> Self {
        Self::Percentage(unit_clamp(fraction))
    }

    /// Create a percent-of-width length, clamping the fraction into `[0, 1]`.
    pub fn percent_of_width(fraction: f64) -> Self {
        Self::PercentOfWidth(unit_clamp(fraction))
    }

    /// Create a percent-of-height length, clamping the fraction into `[0, 1]`.
    pub fn percent_of_height(fraction: f64) -> Self {
        Self::PercentOfHeight(unit_clamp(fraction))
    }

    /// Returns `true` for every kind except [`Length::Pixels`].
    pub fn is_relative(&self) -> bool {
        !matches!(self, Self::Pixels(_))
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::Pixels(0)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(px) => write!(f, "{px}px"),
            Self::Percentage(p) => write!(f, "{}%", p * 100.0),
            Self::PercentOfWidth(p) => write!(f, "{}%w", p * 100.0),
            Self::PercentOfHeight(p) => write!(f, "{}%h", p * 100.0),
        }
    }
}
