//! Fonts, lengths, alignment, positions, text fitting and text options.

use winnow::{
    Parser,
    combinator::{alt, delimited, opt, preceded, repeat, separated, separated_pair, terminated},
    error::{ContextError, ErrMode},
    token::literal,
};

use montage_core::{
    font::{DEFAULT_PIXEL_SIZE, Font, FontStyle, PercentFont, PixelFont},
    layout::{HorizontalAlignment, ImagePosition, VerticalAlignment},
    length::Length,
    text::{TextFit, TextOptions},
};

use super::{
    IResult, Input, call, keyword, named, symbol,
    color::color,
    value::{number, percent, pixels, string},
    ws,
};

fn font_style(input: &mut Input<'_>) -> IResult<FontStyle> {
    alt((
        keyword("normal").value(FontStyle::NORMAL),
        keyword("bold").value(FontStyle::BOLD),
        keyword("italic").value(FontStyle::ITALIC),
    ))
    .parse_next(input)
}

/// Zero or more style keywords, summed.
fn font_styles(input: &mut Input<'_>) -> IResult<FontStyle> {
    repeat(0.., terminated(font_style, ws))
        .fold(|| FontStyle::NORMAL, |style, next| style + next)
        .parse_next(input)
}

fn pixel_font(input: &mut Input<'_>) -> IResult<PixelFont> {
    named(input, "pixel_font", |input| {
        let style = font_styles(input)?;
        let size = opt(terminated(pixels, ws)).parse_next(input)?;
        let family = string(input)?;
        Ok(PixelFont::new(family, size.unwrap_or(DEFAULT_PIXEL_SIZE), style))
    })
}

fn percent_font(input: &mut Input<'_>) -> IResult<PercentFont> {
    named(input, "percent_font", |input| {
        let style = font_styles(input)?;
        let size = terminated(percent, ws).parse_next(input)?;
        let family = string(input)?;
        Ok(PercentFont::new(family, size, style))
    })
}

/// Parse a font such as `bold italic 14px "Helvetica"` or `50% "Arial"`.
pub(crate) fn font(input: &mut Input<'_>) -> IResult<Font> {
    named(input, "font", |input| {
        alt((pixel_font.map(Font::Pixels), percent_font.map(Font::Percent))).parse_next(input)
    })
}

/// Parse a length, trying the unit suffixes from most to least specific.
pub(crate) fn length(input: &mut Input<'_>) -> IResult<Length> {
    named(input, "length", |input| {
        alt((
            terminated(number, literal("%w")).map(|value| Length::percent_of_width(value / 100.0)),
            terminated(number, literal("%h")).map(|value| Length::percent_of_height(value / 100.0)),
            percent.map(Length::percentage),
            pixels.map(Length::Pixels),
        ))
        .parse_next(input)
    })
}

pub(crate) fn horizontal_alignment(input: &mut Input<'_>) -> IResult<HorizontalAlignment> {
    named(input, "horizontal_alignment", |input| {
        alt((
            keyword("left").value(HorizontalAlignment::Left),
            keyword("center").value(HorizontalAlignment::Center),
            keyword("right").value(HorizontalAlignment::Right),
        ))
        .parse_next(input)
    })
}

pub(crate) fn vertical_alignment(input: &mut Input<'_>) -> IResult<VerticalAlignment> {
    named(input, "vertical_alignment", |input| {
        alt((
            keyword("top").value(VerticalAlignment::Top),
            keyword("center").value(VerticalAlignment::Center),
            keyword("bottom").value(VerticalAlignment::Bottom),
        ))
        .parse_next(input)
    })
}

fn relative_position(input: &mut Input<'_>) -> IResult<ImagePosition> {
    call(input, "cartesian", "image_position", |input| {
        separated_pair(percent, symbol(','), percent).parse_next(input)
    })
    .map(|(dx, dy)| ImagePosition::relative(dx, dy))
}

fn absolute_position(input: &mut Input<'_>) -> IResult<ImagePosition> {
    call(input, "cartesian", "image_position", |input| {
        separated_pair(pixels, symbol(','), pixels).parse_next(input)
    })
    .map(|(dx, dy)| ImagePosition::absolute(dx, dy))
}

pub(crate) fn image_position(input: &mut Input<'_>) -> IResult<ImagePosition> {
    alt((
        keyword("centered").value(ImagePosition::Centered),
        relative_position,
        absolute_position,
    ))
    .parse_next(input)
}

fn position_list(input: &mut Input<'_>) -> IResult<Vec<ImagePosition>> {
    delimited(
        symbol('['),
        separated(1.., image_position, symbol(',')),
        symbol(']'),
    )
    .parse_next(input)
}

/// Parse one position or a bracketed list of positions.
pub(crate) fn image_positions(input: &mut Input<'_>) -> IResult<Vec<ImagePosition>> {
    named(input, "image_positions", |input| {
        alt((position_list, image_position.map(|position| vec![position]))).parse_next(input)
    })
}

fn width_and_height_fitted(input: &mut Input<'_>) -> IResult<TextFit> {
    call(input, "fittedBox", "text_fit", |input| {
        let width = length(input)?;
        symbol(',').parse_next(input)?;
        let height = length(input)?;
        symbol(',').parse_next(input)?;
        let max_font_size = length(input)?;
        Ok(TextFit::WidthAndHeightFitted {
            width,
            height,
            max_font_size,
        })
    })
}

fn width_fitted(input: &mut Input<'_>) -> IResult<TextFit> {
    call(input, "fitted", "text_fit", |input| {
        separated_pair(length, symbol(','), length).parse_next(input)
    })
    .map(|(width, max_font_size)| TextFit::WidthFitted {
        width,
        max_font_size,
    })
}

pub(crate) fn text_fit(input: &mut Input<'_>) -> IResult<TextFit> {
    alt((
        width_and_height_fitted,
        width_fitted,
        keyword("fromContent").value(TextFit::FromContent),
    ))
    .parse_next(input)
}

/// Parse `key=value` where `key` is a keyword.
fn option_key<'i>(key: &'static str) -> impl Parser<Input<'i>, (), ErrMode<ContextError>> {
    (keyword(key), symbol('=')).void()
}

fn text_option(input: &mut Input<'_>) -> IResult<TextOptions> {
    named(input, "text_option", |input| {
        alt((
            preceded(option_key("bgColor"), color).map(TextOptions::with_background),
            preceded(option_key("paddingTop"), length).map(TextOptions::with_padding_top),
            preceded(option_key("paddingRight"), length).map(TextOptions::with_padding_right),
            preceded(option_key("paddingBottom"), length).map(TextOptions::with_padding_bottom),
            preceded(option_key("paddingLeft"), length).map(TextOptions::with_padding_left),
        ))
        .parse_next(input)
    })
}

/// Parse `options=[key=value, ...]`, merging the entries in order.
pub(crate) fn text_options(input: &mut Input<'_>) -> IResult<TextOptions> {
    option_key("options").parse_next(input)?;
    named(input, "text_options", |input| {
        let entries: Vec<TextOptions> = delimited(
            symbol('['),
            separated(0.., text_option, symbol(',')),
            symbol(']'),
        )
        .parse_next(input)?;
        Ok(entries.into_iter().collect())
    })
}
