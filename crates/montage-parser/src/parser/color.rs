//! Color literals and gradient stops.

use winnow::{Parser as _, combinator::alt};

use montage_core::color::{Color, ColorStop};

use super::{
    IResult, Input, call, named, symbol, ws,
    value::{number, percent},
};

/// Parse `N` comma separated numbers.
fn channels<const N: usize>(input: &mut Input<'_>) -> IResult<[f64; N]> {
    let mut values = [0.0; N];
    for (i, value) in values.iter_mut().enumerate() {
        if i > 0 {
            symbol(',').parse_next(input)?;
        }
        *value = number(input)?;
    }
    Ok(values)
}

fn rgba(input: &mut Input<'_>) -> IResult<Color> {
    call(input, "rgba", "rgba", channels::<4>).map(|[r, g, b, a]| Color::rgba(r, g, b, a))
}

fn rgb(input: &mut Input<'_>) -> IResult<Color> {
    call(input, "rgb", "rgb", channels::<3>).map(|[r, g, b]| Color::rgb(r, g, b))
}

fn hsla(input: &mut Input<'_>) -> IResult<Color> {
    call(input, "hsla", "hsla", channels::<4>).map(|[h, s, l, a]| Color::hsla(h, s, l, a))
}

fn hsl(input: &mut Input<'_>) -> IResult<Color> {
    call(input, "hsl", "hsl", channels::<3>).map(|[h, s, l]| Color::hsl(h, s, l))
}

/// Parse a color literal. Inputs are clamped by the [`Color`] constructors.
pub(crate) fn color(input: &mut Input<'_>) -> IResult<Color> {
    named(input, "color", |input| alt((rgba, rgb, hsla, hsl)).parse_next(input))
}

/// Parse a color followed by its position along the gradient, e.g.
/// `rgb(1, 1, 1) 50%`.
pub(crate) fn color_stop(input: &mut Input<'_>) -> IResult<ColorStop> {
    named(input, "color_stop", |input| {
        let color = color(input)?;
        ws(input)?;
        let stop = percent(input)?;
        Ok(ColorStop::new(color, stop))
    })
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::parser::test_support::run;

    #[test]
    fn test_rgb_and_rgba() {
        assert_eq!(run(color, "rgb(0.2, 0.4, 0.6)"), Ok(Color::rgb(0.2, 0.4, 0.6)));
        assert_eq!(
            run(color, "rgba(1,0,0,0.5)"),
            Ok(Color::rgba(1.0, 0.0, 0.0, 0.5))
        );
    }

    #[test]
    fn test_channels_are_clamped() {
        let color = run(color, "rgba(3, 0, 0, 9)").unwrap();
        assert_eq!(color.components(), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_hsl_gray() {
        let color = run(color, "hsl(0, 0, 0.5)").unwrap();
        assert_eq!(color.components(), [0.5, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_hsl_red() {
        let color = run(color, "hsl(0,1,0.5)").unwrap();
        assert_approx_eq!(f64, color.red(), 1.0);
        assert_approx_eq!(f64, color.green(), 0.0);
        assert_approx_eq!(f64, color.blue(), 0.0);
    }

    #[test]
    fn test_hsla_alpha() {
        let color = run(color, "hsla(120, 1, 0.5, 0.25)").unwrap();
        assert_eq!(color.alpha(), 0.25);
    }

    #[test]
    fn test_wrong_arity_fails() {
        assert!(run(color, "rgb(1, 1)").is_err());
        assert!(run(color, "rgba(1, 1, 1)").is_err());
        assert!(run(color, "cmyk(0, 0, 0, 0)").is_err());
    }

    #[test]
    fn test_failure_points_at_bad_channel() {
        let failure = run(color, "rgb(1, 2, x)").unwrap_err().unwrap();
        assert_eq!(failure.production, "number");
        assert_eq!(failure.offset, 10);
    }

    #[test]
    fn test_color_stop() {
        let stop = run(color_stop, "rgb(0,0,0) 25%").unwrap();
        assert_eq!(stop.stop(), 0.25);
        assert_eq!(stop.color(), Color::rgb(0.0, 0.0, 0.0));

        let stop = run(color_stop, "rgb(0,0,0)100%").unwrap();
        assert_eq!(stop.stop(), 1.0);
    }
}
