//! Filter calls.
//!
//! Every filter is a call `name(arguments)`. The name is matched as a
//! keyword, so `scale` never matches the start of `scaleto`.

use winnow::{
    Parser as _,
    combinator::{alt, opt, preceded, repeat, separated, separated_pair},
};

use montage_core::{
    color::ColorStop,
    filter::{FillRect, FilterNode, Insets, LinearGradient, PositionedText},
    font::Font,
    length::Length,
};

use super::{
    IResult, Input, backtrack, call,
    color::{color, color_stop},
    composite::{
        font, horizontal_alignment, image_positions, length, text_fit, text_options,
        vertical_alignment,
    },
    keyword,
    layer::source,
    named, symbol,
    value::{boolean, degrees, percent, pixels, string},
};

fn noop(input: &mut Input<'_>) -> IResult<FilterNode> {
    call(input, "noop", "noop", |_| Ok(FilterNode::Noop))
}

fn linear(input: &mut Input<'_>) -> IResult<FilterNode> {
    call(input, "linear", "linear", |input| {
        let angle = degrees(input)?;
        let stops: Vec<ColorStop> =
            repeat(0.., preceded(symbol(','), color_stop)).parse_next(input)?;
        LinearGradient::new(angle, stops).ok_or_else(backtrack)
    })
    .map(FilterNode::LinearGradient)
}

fn blur(input: &mut Input<'_>) -> IResult<FilterNode> {
    call(input, "blur", "blur", |_| Ok(FilterNode::Blur))
}

fn boxblur(input: &mut Input<'_>) -> IResult<FilterNode> {
    call(input, "boxblur", "boxblur", |input| {
        alt((
            pixels.map(FilterNode::BoxBlur),
            percent.map(FilterNode::BoxBlurPercent),
        ))
        .parse_next(input)
    })
}

fn colorize(input: &mut Input<'_>) -> IResult<FilterNode> {
    call(input, "colorize", "colorize", color).map(FilterNode::Colorize)
}

/// Two comma separated lengths.
fn dimensions(input: &mut Input<'_>) -> IResult<(Length, Length)> {
    separated_pair(length, symbol(','), length).parse_next(input)
}

fn scaleto(input: &mut Input<'_>) -> IResult<FilterNode> {
    call(input, "scaleto", "scaleto", dimensions)
        .map(|(width, height)| FilterNode::ScaleTo { width, height })
}

fn scale(input: &mut Input<'_>) -> IResult<FilterNode> {
    call(input, "scale", "scale", percent).map(FilterNode::Scale)
}

fn zoom(input: &mut Input<'_>) -> IResult<FilterNode> {
    call(input, "zoom", "zoom", percent).map(FilterNode::Zoom)
}

fn text_positioned(input: &mut Input<'_>) -> IResult<FilterNode> {
    call(input, "textPositioned", "text_positioned", |input| {
        let text = string(input)?;
        symbol(',').parse_next(input)?;
        let font = font(input)?;
        symbol(',').parse_next(input)?;
        let color = color(input)?;
        symbol(',').parse_next(input)?;
        let positions = image_positions(input)?;
        symbol(',').parse_next(input)?;
        let horizontal = horizontal_alignment(input)?;
        symbol(',').parse_next(input)?;
        let vertical = vertical_alignment(input)?;
        symbol(',').parse_next(input)?;
        let fit = text_fit(input)?;
        let options = opt(preceded(symbol(','), text_options)).parse_next(input)?;

        Ok(PositionedText {
            text,
            font,
            color,
            positions,
            horizontal,
            vertical,
            fit,
            options: options.unwrap_or_default(),
        })
    })
    .map(|text| FilterNode::TextPositioned(Box::new(text)))
}

fn text(input: &mut Input<'_>) -> IResult<FilterNode> {
    call(input, "text", "text", |input| {
        let text = string(input)?;
        symbol(',').parse_next(input)?;
        let font = font(input)?;
        symbol(',').parse_next(input)?;
        let color = color(input)?;

        Ok(match font {
            Font::Pixels(font) => FilterNode::Text { text, font, color },
            Font::Percent(font) => FilterNode::TextPercent { text, font, color },
        })
    })
}

fn grid(input: &mut Input<'_>) -> IResult<FilterNode> {
    call(input, "grid", "grid", |input| {
        separated(0.., source, symbol(',')).parse_next(input)
    })
    .map(FilterNode::Grid)
}

/// One value for all sides, or four values in the order top, right, bottom,
/// left.
fn insets<'i, T: Copy>(
    input: &mut Input<'i>,
    value: fn(&mut Input<'i>) -> IResult<T>,
) -> IResult<Insets<T>> {
    let first = value(input)?;
    let rest = opt((
        symbol(','),
        value,
        symbol(','),
        value,
        symbol(','),
        value,
    ))
    .parse_next(input)?;

    Ok(match rest {
        Some((_, right, _, bottom, _, left)) => Insets {
            top: first,
            right,
            bottom,
            left,
        },
        None => Insets::uniform(first),
    })
}

fn pad_pixels(input: &mut Input<'_>) -> IResult<FilterNode> {
    insets(input, pixels).map(FilterNode::Pad)
}

fn pad_percent(input: &mut Input<'_>) -> IResult<FilterNode> {
    insets(input, percent).map(FilterNode::PadPercent)
}

fn pad(input: &mut Input<'_>) -> IResult<FilterNode> {
    call(input, "pad", "pad", |input| {
        alt((pad_pixels, pad_percent)).parse_next(input)
    })
}

fn round(input: &mut Input<'_>) -> IResult<FilterNode> {
    call(input, "round", "round", |input| {
        alt((
            pixels.map(FilterNode::RoundCorners),
            percent.map(FilterNode::RoundCornersPercent),
        ))
        .parse_next(input)
    })
}

fn overlay(input: &mut Input<'_>) -> IResult<FilterNode> {
    call(input, "overlay", "overlay", |input| {
        let source = source(input)?;
        let fit = opt(preceded(
            (symbol(','), keyword("fit"), symbol('=')),
            boolean,
        ))
        .parse_next(input)?;
        Ok(FilterNode::Overlay {
            source,
            fit: fit.unwrap_or(true),
        })
    })
}

fn mask(input: &mut Input<'_>) -> IResult<FilterNode> {
    call(input, "mask", "mask", |input| {
        separated_pair(source, symbol(','), source).parse_next(input)
    })
    .map(|(overlay, mask)| FilterNode::Mask { overlay, mask })
}

fn cover(input: &mut Input<'_>) -> IResult<FilterNode> {
    call(input, "cover", "cover", dimensions)
        .map(|(width, height)| FilterNode::Cover { width, height })
}

fn fit(input: &mut Input<'_>) -> IResult<FilterNode> {
    call(input, "fit", "fit", dimensions).map(|(width, height)| FilterNode::Fit { width, height })
}

fn frame(input: &mut Input<'_>) -> IResult<FilterNode> {
    call(input, "frame", "frame", |input| {
        separated_pair(length, symbol(','), color).parse_next(input)
    })
    .map(|(width, color)| FilterNode::Frame { width, color })
}

fn fillrect(input: &mut Input<'_>) -> IResult<FilterNode> {
    call(input, "fillrect", "fillrect", |input| {
        let color = color(input)?;
        symbol(',').parse_next(input)?;
        let (x, y) = dimensions(input)?;
        symbol(',').parse_next(input)?;
        let (width, height) = dimensions(input)?;
        symbol(',').parse_next(input)?;
        let horizontal = horizontal_alignment(input)?;
        symbol(',').parse_next(input)?;
        let vertical = vertical_alignment(input)?;

        Ok(FillRect {
            color,
            x,
            y,
            width,
            height,
            horizontal,
            vertical,
        })
    })
    .map(FilterNode::FillRect)
}

/// Parse any filter call.
pub(crate) fn filter(input: &mut Input<'_>) -> IResult<FilterNode> {
    named(input, "filter", |input| {
        alt((
            noop,
            linear,
            blur,
            boxblur,
            colorize,
            scaleto,
            scale,
            zoom,
            text_positioned,
            text,
            grid,
            pad,
            round,
            overlay,
            mask,
            cover,
            fit,
            frame,
            fillrect,
        ))
        .parse_next(input)
    })
}
