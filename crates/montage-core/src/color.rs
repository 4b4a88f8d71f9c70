//! Color handling for Montage pipelines
//!
//! This module provides the [`Color`] type, an RGBA value whose channels are
//! always within `[0, 1]`. Colors are built from one of four notations
//! (`rgba`, `rgb`, `hsla`, `hsl`) and every constructor clamps its inputs
//! first, so an out-of-range color cannot be represented.

use serde::Serialize;

/// Maximum hue in degrees accepted by the HSL constructors.
pub const MAX_HUE_DEGREES: f64 = 360.0;

/// A saturated RGBA color with each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

impl Color {
    /// Create a color from red, green, blue and alpha channels.
    ///
    /// Each channel is clamped into `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use montage_core::color::Color;
    ///
    /// let color = Color::rgba(1.5, 0.5, -0.25, 0.75);
    /// assert_eq!(color.components(), [1.0, 0.5, 0.0, 0.75]);
    /// ```
    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red: unit_clamp(red),
            green: unit_clamp(green),
            blue: unit_clamp(blue),
            alpha: unit_clamp(alpha),
        }
    }

    /// Create an opaque color from red, green and blue channels.
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Create a color from hue (degrees), saturation, lightness and alpha.
    ///
    /// The hue is clamped into `[0, 360]`, the other inputs into `[0, 1]`,
    /// before conversion to RGB.
    ///
    /// # Examples
    ///
    /// ```
    /// use montage_core::color::Color;
    ///
    /// let red = Color::hsla(0.0, 1.0, 0.5, 1.0);
    /// assert_eq!(red.components(), [1.0, 0.0, 0.0, 1.0]);
    /// ```
    pub fn hsla(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        let hue = clamp(hue, 0.0, MAX_HUE_DEGREES) / MAX_HUE_DEGREES;
        let saturation = unit_clamp(saturation);
        let lightness = unit_clamp(lightness);

        if saturation == 0.0 {
            return Self::rgba(lightness, lightness, lightness, alpha);
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        Self::rgba(
            hue_to_rgb(p, q, hue + 1.0 / 3.0),
            hue_to_rgb(p, q, hue),
            hue_to_rgb(p, q, hue - 1.0 / 3.0),
            alpha,
        )
    }

    /// Create an opaque color from hue (degrees), saturation and lightness.
    pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self::hsla(hue, saturation, lightness, 1.0)
    }

    pub fn red(&self) -> f64 {
        self.red
    }

    pub fn green(&self) -> f64 {
        self.green
    }

    pub fn blue(&self) -> f64 {
        self.blue
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the channels as `[red, green, blue, alpha]`.
    pub fn components(&self) -> [f64; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl From<Color> for color::AlphaColor<color::Srgb> {
    fn from(value: Color) -> Self {
        color::AlphaColor::new([
            value.red as f32,
            value.green as f32,
            value.blue as f32,
            value.alpha as f32,
        ])
    }
}

/// A color positioned along a gradient axis.
///
/// The stop is a fraction of the gradient length in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorStop {
    color: Color,
    stop: f64,
}

impl ColorStop {
    /// Create a color stop, clamping `stop` into `[0, 1]`.
    pub fn new(color: Color, stop: f64) -> Self {
        Self {
            color,
            stop: unit_clamp(stop),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn stop(&self) -> f64 {
        self.stop
    }
}

/// Map one channel of the HSL color wheel to RGB.
fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Clamp that maps NaN to the lower bound.
fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

pub(crate) fn unit_clamp(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn assert_rgb(color: Color, expected: [f64; 3]) {
        assert_approx_eq!(f64, color.red(), expected[0], epsilon = 1e-9);
        assert_approx_eq!(f64, color.green(), expected[1], epsilon = 1e-9);
        assert_approx_eq!(f64, color.blue(), expected[2], epsilon = 1e-9);
    }

    #[test]
    fn test_rgb_is_opaque() {
        let color = Color::rgb(0.2, 0.4, 0.6);
        assert_eq!(color.components(), [0.2, 0.4, 0.6, 1.0]);
    }

    #[test]
    fn test_rgba_clamps_channels() {
        let color = Color::rgba(2.0, -1.0, 0.5, 7.0);
        assert_eq!(color.components(), [1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_hsl_achromatic() {
        assert_rgb(Color::hsl(0.0, 0.0, 0.5), [0.5, 0.5, 0.5]);
        assert_rgb(Color::hsl(200.0, 0.0, 1.0), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_hsl_primaries() {
        assert_rgb(Color::hsl(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]);
        assert_rgb(Color::hsl(120.0, 1.0, 0.5), [0.0, 1.0, 0.0]);
        assert_rgb(Color::hsl(240.0, 1.0, 0.5), [0.0, 0.0, 1.0]);
        assert_rgb(Color::hsl(360.0, 1.0, 0.5), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_hsl_light_branch() {
        // l >= 0.5 uses q = l + s - l*s
        assert_rgb(Color::hsl(60.0, 1.0, 0.75), [1.0, 1.0, 0.5]);
    }

    #[test]
    fn test_hsl_clamps_inputs() {
        assert_eq!(Color::hsl(720.0, 2.0, 0.5), Color::hsl(360.0, 1.0, 0.5));
        assert_eq!(Color::hsla(0.0, 0.0, 0.5, 3.0).alpha(), 1.0);
    }

    #[test]
    fn test_nan_clamps_to_lower_bound() {
        assert_eq!(Color::rgba(f64::NAN, 0.0, 0.0, 1.0).red(), 0.0);
    }

    #[test]
    fn test_color_stop_clamps() {
        let stop = ColorStop::new(Color::default(), 1.5);
        assert_eq!(stop.stop(), 1.0);
    }

    #[test]
    fn test_into_alpha_color() {
        let converted: color::AlphaColor<color::Srgb> = Color::rgba(1.0, 0.5, 0.0, 0.25).into();
        assert_eq!(converted.components, [1.0, 0.5, 0.0, 0.25]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::rgb(1.0, 0.0, 0.5).to_string(), "rgba(1, 0, 0.5, 1)");
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn channel_strategy() -> impl Strategy<Value = f64> {
        -10.0f64..10.0
    }

    fn check_channels_in_unit_range(color: Color) -> Result<(), TestCaseError> {
        for channel in color.components() {
            prop_assert!((0.0..=1.0).contains(&channel));
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn rgba_channels_are_saturated(
            r in channel_strategy(),
            g in channel_strategy(),
            b in channel_strategy(),
            a in channel_strategy(),
        ) {
            check_channels_in_unit_range(Color::rgba(r, g, b, a))?;
        }

        #[test]
        fn hsla_channels_are_saturated(
            h in -720.0f64..720.0,
            s in channel_strategy(),
            l in channel_strategy(),
            a in channel_strategy(),
        ) {
            check_channels_in_unit_range(Color::hsla(h, s, l, a))?;
        }
    }
}
