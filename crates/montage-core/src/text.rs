//! Text sizing constraints and drawing options.

use serde::Serialize;

use crate::{color::Color, length::Length};

/// How the renderer sizes drawn text.
///
/// Only the constraint is carried here; the actual font size is computed at
/// render time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub enum TextFit {
    /// Use the font size as given.
    #[default]
    FromContent,
    /// Shrink the font until the text fits `width`, never above `max_font_size`.
    WidthFitted { width: Length, max_font_size: Length },
    /// Shrink the font until the text fits the box, never above `max_font_size`.
    WidthAndHeightFitted {
        width: Length,
        height: Length,
        max_font_size: Length,
    },
}

/// A partial set of text drawing options.
///
/// Each field is independently optional. Options combine with
/// [`TextOptions::merge`], under which the empty value is the identity.
///
/// # Examples
///
/// ```
/// use montage_core::{color::Color, length::Length, text::TextOptions};
///
/// let options: TextOptions = [
///     TextOptions::with_background(Color::rgb(0.0, 0.0, 0.0)),
///     TextOptions::with_padding_top(Length::Pixels(10)),
/// ]
/// .into_iter()
/// .collect();
///
/// assert!(options.background().is_some());
/// assert_eq!(options.padding_top(), Some(Length::Pixels(10)));
/// assert!(options.padding_left().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TextOptions {
    background: Option<Color>,
    padding_top: Option<Length>,
    padding_right: Option<Length>,
    padding_bottom: Option<Length>,
    padding_left: Option<Length>,
}

impl TextOptions {
    /// The empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(color: Color) -> Self {
        Self {
            background: Some(color),
            ..Self::default()
        }
    }

    pub fn with_padding_top(length: Length) -> Self {
        Self {
            padding_top: Some(length),
            ..Self::default()
        }
    }

    pub fn with_padding_right(length: Length) -> Self {
        Self {
            padding_right: Some(length),
            ..Self::default()
        }
    }

    pub fn with_padding_bottom(length: Length) -> Self {
        Self {
            padding_bottom: Some(length),
            ..Self::default()
        }
    }

    pub fn with_padding_left(length: Length) -> Self {
        Self {
            padding_left: Some(length),
            ..Self::default()
        }
    }

    /// Combine two option sets field by field.
    ///
    /// A field set in either operand is set in the result. When both set the
    /// same field, `other` wins.
    pub fn merge(self, other: Self) -> Self {
        Self {
            background: other.background.or(self.background),
            padding_top: other.padding_top.or(self.padding_top),
            padding_right: other.padding_right.or(self.padding_right),
            padding_bottom: other.padding_bottom.or(self.padding_bottom),
            padding_left: other.padding_left.or(self.padding_left),
        }
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn padding_top(&self) -> Option<Length> {
        self.padding_top
    }

    pub fn padding_right(&self) -> Option<Length> {
        self.padding_right
    }

    pub fn padding_bottom(&self) -> Option<Length> {
        self.padding_bottom
    }

    pub fn padding_left(&self) -> Option<Length> {
        self.padding_left
    }
}

impl FromIterator<TextOptions> for TextOptions {
    fn from_iter<I: IntoIterator<Item = TextOptions>>(iter: I) -> Self {
        iter.into_iter().fold(TextOptions::new(), TextOptions::merge)
    }
}
