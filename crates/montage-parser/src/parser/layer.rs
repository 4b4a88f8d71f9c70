//! Sources, layers and the pipeline itself.

use winnow::{
    Parser as _,
    ascii::{alpha1, digit1},
    combinator::{alt, eof, not, opt, peek, preceded, repeat, terminated},
    token::{literal, one_of, take_while},
};

use montage_core::{
    filter::FilterNode,
    pipeline::{Canvas, LayerNode, Pipeline},
    source::ImageNode,
};

use super::{IResult, Input, filter::filter, named, symbol, value::string, ws};

fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ".-/_~%?&=+@!*'#".contains(c)
}

/// A bare path or URL such as `photos/a.jpg` or `https://example.com/a.png`.
fn path(input: &mut Input<'_>) -> IResult<String> {
    named(input, "path", |input| {
        (opt((alpha1, literal("://"))), take_while(1.., is_path_char))
            .take()
            .map(str::to_owned)
            .parse_next(input)
    })
}

fn empty(input: &mut Input<'_>) -> IResult<ImageNode> {
    terminated('_', not(one_of(is_path_char)))
        .value(ImageNode::Empty)
        .parse_next(input)
}

fn index(input: &mut Input<'_>) -> IResult<ImageNode> {
    preceded('$', digit1)
        .verify_map(|digits: &str| digits.parse().ok())
        .map(ImageNode::Index)
        .parse_next(input)
}

/// Parse an image source: `_`, `$n`, a quoted string or a bare path.
pub(crate) fn source(input: &mut Input<'_>) -> IResult<ImageNode> {
    named(input, "source", |input| {
        alt((empty, index, string.map(ImageNode::Url), path.map(ImageNode::Url)))
            .parse_next(input)
    })
}

/// Whitespace, then `;` or the end of input. Never consumed.
fn layer_end(input: &mut Input<'_>) -> IResult<()> {
    named(input, "layer_end", |input| {
        ws(input)?;
        alt((';'.void(), eof.void())).parse_next(input)
    })
}

fn source_with_filter(input: &mut Input<'_>) -> IResult<LayerNode> {
    let source = source(input)?;
    symbol(':').parse_next(input)?;
    let filter = filter(input)?;
    Ok(LayerNode::new(source, filter))
}

fn filter_only(input: &mut Input<'_>) -> IResult<LayerNode> {
    filter
        .map(|filter| LayerNode::new(ImageNode::Previous, filter))
        .parse_next(input)
}

fn source_only(input: &mut Input<'_>) -> IResult<LayerNode> {
    source
        .map(|source| LayerNode::new(source, FilterNode::Noop))
        .parse_next(input)
}

/// Parse one layer.
///
/// A layer is `source:filter`, a bare filter applied to the previous layer,
/// or a bare source passed through unchanged. Each form must be followed by
/// the end of the layer.
fn layer(input: &mut Input<'_>) -> IResult<LayerNode> {
    named(input, "layer", |input| {
        alt((
            terminated(source_with_filter, peek(layer_end)),
            terminated(filter_only, peek(layer_end)),
            terminated(source_only, peek(layer_end)),
        ))
        .parse_next(input)
    })
}

/// Parse a whole expression: layers separated by `;`.
pub(crate) fn pipeline(input: &mut Input<'_>, canvas: Canvas) -> IResult<Pipeline> {
    named(input, "pipeline", |input| {
        ws(input)?;
        let first = layer(input)?;
        let rest: Vec<LayerNode> = repeat(0.., preceded(symbol(';'), layer)).parse_next(input)?;
        ws(input)?;
        let end: IResult<&str> = eof.parse_next(input);
        end?;
        Ok(Pipeline::new(first, rest, canvas))
    })
}
