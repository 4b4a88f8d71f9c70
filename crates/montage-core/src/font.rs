//! Font definitions for text filters.
//!
//! A font is either pixel-sized ([`PixelFont`]) or sized relative to the
//! canvas ([`PercentFont`]). Both carry a family name and a [`FontStyle`]
//! bitmask.

use std::ops::Add;

use serde::Serialize;

use crate::color::unit_clamp;

/// Family used when an expression does not name one explicitly.
pub const DEFAULT_FAMILY: &str = "Helvetica";

/// Pixel size used when a pixel font omits its size.
pub const DEFAULT_PIXEL_SIZE: i32 = 12;

/// Fractional size used when a percent font omits its size.
pub const DEFAULT_PERCENT_SIZE: f64 = 1.0;

/// Style bitmask: `normal = 0`, `bold = 1`, `italic = 2`.
///
/// Styles compose by addition and saturate at [`FontStyle::BOLD_ITALIC`].
/// Repeating a keyword still adds its value, so `bold + bold` is `italic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct FontStyle(u8);

impl FontStyle {
    pub const NORMAL: FontStyle = FontStyle(0);
    pub const BOLD: FontStyle = FontStyle(1);
    pub const ITALIC: FontStyle = FontStyle(2);
    pub const BOLD_ITALIC: FontStyle = FontStyle(3);

    /// Returns the raw bitmask value in `0..=3`.
    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_bold(self) -> bool {
        self.0 & Self::BOLD.0 != 0
    }

    pub fn is_italic(self) -> bool {
        self.0 & Self::ITALIC.0 != 0
    }
}

impl Add for FontStyle {
    type Output = FontStyle;

    fn add(self, rhs: Self) -> Self::Output {
        FontStyle(self.0.saturating_add(rhs.0).min(Self::BOLD_ITALIC.0))
    }
}

impl std::iter::Sum for FontStyle {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(FontStyle::NORMAL, Add::add)
    }
}

/// A font sized in pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PixelFont {
    family: String,
    size: i32,
    style: FontStyle,
}

impl PixelFont {
    pub fn new(family: impl Into<String>, size: i32, style: FontStyle) -> Self {
        Self {
            family: family.into(),
            size,
            style,
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }
}

impl Default for PixelFont {
    fn default() -> Self {
        Self::new(DEFAULT_FAMILY, DEFAULT_PIXEL_SIZE, FontStyle::NORMAL)
    }
}

/// A font sized as a fraction (`[0, 1]`) of the text box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentFont {
    family: String,
    size: f64,
    style: FontStyle,
}

impl PercentFont {
    /// Create a percent font, clamping `size` into `[0, 1]`.
    pub fn new(family: impl Into<String>, size: f64, style: FontStyle) -> Self {
        Self {
            family: family.into(),
            size: unit_clamp(size),
            style,
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }
}

impl Default for PercentFont {
    fn default() -> Self {
        Self::new(DEFAULT_FAMILY, DEFAULT_PERCENT_SIZE, FontStyle::NORMAL)
    }
}

/// Either kind of font.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Font {
    Pixels(PixelFont),
    Percent(PercentFont),
}

impl Font {
    pub fn family(&self) -> &str {
        match self {
            Font::Pixels(font) => font.family(),
            Font::Percent(font) => font.family(),
        }
    }

    pub fn style(&self) -> FontStyle {
        match self {
            Font::Pixels(font) => font.style(),
            Font::Percent(font) => font.style(),
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::Pixels(PixelFont::default())
    }
}

impl From<PixelFont> for Font {
    fn from(font: PixelFont) -> Self {
        Self::Pixels(font)
    }
}

impl From<PercentFont> for Font {
    fn from(font: PercentFont) -> Self {
        Self::Percent(font)
    }
}
