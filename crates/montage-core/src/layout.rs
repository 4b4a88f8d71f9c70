//! Alignment and positioning of drawn content.
//!
//! Positions are additive: a text placement may carry several
//! [`ImagePosition`] values whose offsets are summed into one [`Anchor`].
//! Relative and absolute offsets are kept apart because only the renderer
//! knows the canvas size that turns a percentage into pixels.

use std::fmt;

use serde::Serialize;

use crate::color::unit_clamp;

/// Horizontal alignment of content inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum HorizontalAlignment {
    Left,
    #[default]
    Center,
    Right,
}

impl fmt::Display for HorizontalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Center => write!(f, "center"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Vertical alignment of content inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum VerticalAlignment {
    Top,
    #[default]
    Center,
    Bottom,
}

impl fmt::Display for VerticalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Center => write!(f, "center"),
            Self::Bottom => write!(f, "bottom"),
        }
    }
}

/// A single anchor offset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub enum ImagePosition {
    /// No offset from the canvas center.
    #[default]
    Centered,
    /// Offset as fractions (`[0, 1]`) of the canvas width and height.
    CartesianRelative { dx: f64, dy: f64 },
    /// Offset in pixels.
    CartesianAbsolute { dx: i32, dy: i32 },
}

impl ImagePosition {
    /// Create a relative offset, clamping both fractions into `[0, 1]`.
    pub fn relative(dx: f64, dy: f64) -> Self {
        Self::CartesianRelative {
            dx: unit_clamp(dx),
            dy: unit_clamp(dy),
        }
    }

    pub fn absolute(dx: i32, dy: i32) -> Self {
        Self::CartesianAbsolute { dx, dy }
    }

    /// Sum a list of positions into a single unresolved anchor.
    ///
    /// An empty list yields the centered anchor.
    ///
    /// # Examples
    ///
    /// ```
    /// use montage_core::layout::ImagePosition;
    ///
    /// let anchor = ImagePosition::sum(&[
    ///     ImagePosition::relative(0.25, 0.0),
    ///     ImagePosition::absolute(10, -5),
    ///     ImagePosition::relative(0.25, 0.5),
    /// ]);
    /// assert_eq!(anchor.relative(), (0.5, 0.5));
    /// assert_eq!(anchor.absolute(), (10, -5));
    /// ```
    pub fn sum(positions: &[ImagePosition]) -> Anchor {
        positions
            .iter()
            .fold(Anchor::default(), |anchor, position| anchor.offset(*position))
    }
}

/// The combined offset of several [`ImagePosition`] values.
///
/// Relative components are plain sums and may exceed `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Anchor {
    relative: (f64, f64),
    absolute: (i32, i32),
}

impl Anchor {
    /// Returns the summed relative offset as `(dx, dy)` fractions.
    pub fn relative(&self) -> (f64, f64) {
        self.relative
    }

    /// Returns the summed absolute offset as `(dx, dy)` pixels.
    pub fn absolute(&self) -> (i32, i32) {
        self.absolute
    }

    /// Returns `true` if no offset has been accumulated.
    pub fn is_centered(&self) -> bool {
        self.relative == (0.0, 0.0) && self.absolute == (0, 0)
    }

    fn offset(self, position: ImagePosition) -> Self {
        match position {
            ImagePosition::Centered => self,
            ImagePosition::CartesianRelative { dx, dy } => Self {
                relative: (self.relative.0 + dx, self.relative.1 + dy),
                ..self
            },
            ImagePosition::CartesianAbsolute { dx, dy } => Self {
                absolute: (
                    self.absolute.0.saturating_add(dx),
                    self.absolute.1.saturating_add(dy),
                ),
                ..self
            },
        }
    }
}
