//! Filter nodes.
//!
//! [`FilterNode`] is the closed set of operations a layer can apply. Every
//! variant has a [`FilterKind`] whose canonical name is stable: renderers and
//! caches key on it, so a name never changes once assigned.

use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

use crate::{
    color::{Color, ColorStop},
    font::{Font, PercentFont, PixelFont},
    layout::{Anchor, HorizontalAlignment, ImagePosition, VerticalAlignment},
    length::Length,
    source::ImageNode,
    text::{TextFit, TextOptions},
};

/// A linear gradient whose stops are sorted ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearGradient {
    angle: f64,
    stops: Vec<ColorStop>,
}

impl LinearGradient {
    /// Minimum number of stops a gradient needs.
    pub const MIN_STOPS: usize = 2;

    /// Create a gradient at `angle` degrees.
    ///
    /// Returns `None` if fewer than [`Self::MIN_STOPS`] stops are given.
    /// Stops are sorted by position; stops at equal positions keep their
    /// relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// use montage_core::{color::{Color, ColorStop}, filter::LinearGradient};
    ///
    /// let black = Color::rgb(0.0, 0.0, 0.0);
    /// let white = Color::rgb(1.0, 1.0, 1.0);
    /// let gradient = LinearGradient::new(
    ///     0.0,
    ///     vec![ColorStop::new(black, 1.0), ColorStop::new(white, 0.0)],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(gradient.colors().collect::<Vec<_>>(), vec![white, black]);
    /// assert!(LinearGradient::new(0.0, vec![ColorStop::new(black, 0.5)]).is_none());
    /// ```
    pub fn new(angle: f64, mut stops: Vec<ColorStop>) -> Option<Self> {
        if stops.len() < Self::MIN_STOPS {
            return None;
        }
        stops.sort_by(|a, b| a.stop().total_cmp(&b.stop()));
        Some(Self { angle, stops })
    }

    /// Returns the angle in degrees, in `[0, 360)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Iterates over the stop colors in stop order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.stops.iter().map(ColorStop::color)
    }

    /// Iterates over the stop positions in ascending order.
    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        self.stops.iter().map(ColorStop::stop)
    }
}

/// Text drawn at an explicit placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedText {
    pub text: String,
    pub font: Font,
    pub color: Color,
    pub positions: Vec<ImagePosition>,
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
    pub fit: TextFit,
    pub options: TextOptions,
}

impl PositionedText {
    /// The summed placement of all positions.
    pub fn anchor(&self) -> Anchor {
        ImagePosition::sum(&self.positions)
    }
}

/// A filled rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FillRect {
    pub color: Color,
    pub x: Length,
    pub y: Length,
    pub width: Length,
    pub height: Length,
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
}

/// Padding on four sides, in the order top, right, bottom, left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Insets<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> Insets<T> {
    pub fn uniform(value: T) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// One operation applied by a layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub enum FilterNode {
    #[default]
    Noop,
    LinearGradient(LinearGradient),
    Blur,
    /// Box blur radius in pixels.
    BoxBlur(i32),
    /// Box blur radius as a fraction of the image size.
    BoxBlurPercent(f64),
    Colorize(Color),
    /// Scale by a fraction in `[0, 1]`.
    Scale(f64),
    /// Zoom into the center by a fraction in `[0, 1]`.
    Zoom(f64),
    ScaleTo {
        width: Length,
        height: Length,
    },
    Text {
        text: String,
        font: PixelFont,
        color: Color,
    },
    TextPercent {
        text: String,
        font: PercentFont,
        color: Color,
    },
    /// Tile the sources. Layout is decided by the renderer.
    Grid(Vec<ImageNode>),
    TextPositioned(Box<PositionedText>),
    Pad(Insets<i32>),
    PadPercent(Insets<f64>),
    RoundCorners(i32),
    RoundCornersPercent(f64),
    Overlay {
        source: ImageNode,
        fit: bool,
    },
    /// Draw `overlay` through the alpha channel of `mask`.
    Mask {
        overlay: ImageNode,
        mask: ImageNode,
    },
    Cover {
        width: Length,
        height: Length,
    },
    Fit {
        width: Length,
        height: Length,
    },
    Frame {
        width: Length,
        color: Color,
    },
    FillRect(FillRect),
}

impl FilterNode {
    pub fn kind(&self) -> FilterKind {
        match self {
            Self::Noop => FilterKind::Noop,
            Self::LinearGradient(_) => FilterKind::LinearGradient,
            Self::Blur => FilterKind::Blur,
            Self::BoxBlur(_) => FilterKind::BoxBlur,
            Self::BoxBlurPercent(_) => FilterKind::BoxBlurPercent,
            Self::Colorize(_) => FilterKind::Colorize,
            Self::Scale(_) => FilterKind::Scale,
            Self::Zoom(_) => FilterKind::Zoom,
            Self::ScaleTo { .. } => FilterKind::ScaleTo,
            Self::Text { .. } => FilterKind::Text,
            Self::TextPercent { .. } => FilterKind::TextPercent,
            Self::Grid(_) => FilterKind::Grid,
            Self::TextPositioned(_) => FilterKind::TextPositioned,
            Self::Pad(_) => FilterKind::Pad,
            Self::PadPercent(_) => FilterKind::PadPercent,
            Self::RoundCorners(_) => FilterKind::RoundCorners,
            Self::RoundCornersPercent(_) => FilterKind::RoundCornersPercent,
            Self::Overlay { .. } => FilterKind::Overlay,
            Self::Mask { .. } => FilterKind::Mask,
            Self::Cover { .. } => FilterKind::Cover,
            Self::Fit { .. } => FilterKind::Fit,
            Self::Frame { .. } => FilterKind::Frame,
            Self::FillRect(_) => FilterKind::FillRect,
        }
    }

    /// The canonical name of this filter.
    pub fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Image sources this filter reads besides the layer's own source.
    pub fn sources(&self) -> Vec<&ImageNode> {
        match self {
            Self::Grid(sources) => sources.iter().collect(),
            Self::Overlay { source, .. } => vec![source],
            Self::Mask { overlay, mask } => vec![overlay, mask],
            _ => Vec::new(),
        }
    }
}

/// The discriminant of a [`FilterNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FilterKind {
    Noop,
    LinearGradient,
    Blur,
    BoxBlur,
    BoxBlurPercent,
    Colorize,
    Scale,
    Zoom,
    ScaleTo,
    Text,
    TextPercent,
    Grid,
    TextPositioned,
    Pad,
    PadPercent,
    RoundCorners,
    RoundCornersPercent,
    Overlay,
    Mask,
    Cover,
    Fit,
    Frame,
    FillRect,
}

impl FilterKind {
    /// Every filter kind, in declaration order.
    pub const ALL: [FilterKind; 23] = [
        Self::Noop,
        Self::LinearGradient,
        Self::Blur,
        Self::BoxBlur,
        Self::BoxBlurPercent,
        Self::Colorize,
        Self::Scale,
        Self::Zoom,
        Self::ScaleTo,
        Self::Text,
        Self::TextPercent,
        Self::Grid,
        Self::TextPositioned,
        Self::Pad,
        Self::PadPercent,
        Self::RoundCorners,
        Self::RoundCornersPercent,
        Self::Overlay,
        Self::Mask,
        Self::Cover,
        Self::Fit,
        Self::Frame,
        Self::FillRect,
    ];

    /// Returns the canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::LinearGradient => "lineargradient",
            Self::Blur => "blur",
            Self::BoxBlur => "boxblur",
            Self::BoxBlurPercent => "boxblurpercent",
            Self::Colorize => "colorize",
            Self::Scale => "scale",
            Self::Zoom => "zoom",
            Self::ScaleTo => "scaleto",
            Self::Text => "text",
            Self::TextPercent => "textpercent",
            Self::Grid => "grid",
            Self::TextPositioned => "textpositioned",
            Self::Pad => "pad",
            Self::PadPercent => "padpercent",
            Self::RoundCorners => "roundcorners",
            Self::RoundCornersPercent => "roundcornerspercent",
            Self::Overlay => "overlay",
            Self::Mask => "mask",
            Self::Cover => "cover",
            Self::Fit => "fit",
            Self::Frame => "frame",
            Self::FillRect => "fillrect",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a name is not a canonical filter name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter name `{0}`")]
pub struct UnknownFilter(pub String);

impl FromStr for FilterKind {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownFilter(s.to_string()))
    }
}
