//! Expression-level properties checked through the public parser API.

use float_cmp::assert_approx_eq;
use proptest::prelude::*;

use montage_core::{
    color::Color,
    filter::{FilterKind, FilterNode},
    font::{FontStyle, PixelFont},
    length::Length,
    pipeline::{Canvas, Pipeline},
    source::ImageNode,
    text::TextOptions,
};
use montage_parser::parse;

fn parse_ok(source: &str) -> Pipeline {
    parse(source, Canvas::default()).unwrap_or_else(|err| panic!("{source}: {err}"))
}

fn only_filter(source: &str) -> FilterNode {
    parse_ok(source).first().filter().clone()
}

#[test]
fn percent_is_a_clamped_fraction() {
    assert_eq!(only_filter("scale(50%)"), FilterNode::Scale(0.5));
    assert_eq!(only_filter("scale(0%)"), FilterNode::Scale(0.0));
    assert_eq!(only_filter("scale(100%)"), FilterNode::Scale(1.0));
    assert_eq!(only_filter("scale(400%)"), FilterNode::Scale(1.0));
}

#[test]
fn hsl_converts_to_rgb() {
    let FilterNode::Colorize(gray) = only_filter("colorize(hsl(0,0,0.5))") else {
        panic!("expected colorize");
    };
    assert_eq!(gray.components(), [0.5, 0.5, 0.5, 1.0]);

    let FilterNode::Colorize(red) = only_filter("colorize(hsl(0,1,0.5))") else {
        panic!("expected colorize");
    };
    assert_approx_eq!(f64, red.red(), 1.0);
    assert_approx_eq!(f64, red.green(), 0.0);
    assert_approx_eq!(f64, red.blue(), 0.0);
}

#[test]
fn gradient_stops_are_sorted_and_counted() {
    let FilterNode::LinearGradient(gradient) =
        only_filter("linear(0deg, rgb(0,0,0)100%, rgb(1,1,1)0%)")
    else {
        panic!("expected gradient");
    };
    assert_eq!(gradient.positions().collect::<Vec<_>>(), vec![0.0, 1.0]);
    assert_eq!(
        gradient.colors().collect::<Vec<_>>(),
        vec![Color::rgb(1.0, 1.0, 1.0), Color::rgb(0.0, 0.0, 0.0)]
    );

    assert!(parse("linear(0deg, rgb(0,0,0)50%)", Canvas::default()).is_err());
}

#[test]
fn font_styles_are_summed() {
    assert_eq!(
        only_filter(r#"text("x", bold italic 14px "Helvetica", rgb(0,0,0))"#),
        FilterNode::Text {
            text: "x".to_string(),
            font: PixelFont::new("Helvetica", 14, FontStyle::BOLD_ITALIC),
            color: Color::rgb(0.0, 0.0, 0.0),
        }
    );
}

#[test]
fn layers_default_to_previous_source() {
    let pipeline = parse_ok("_:blur()");
    assert_eq!(pipeline.len(), 1);
    assert_eq!(pipeline.first().source(), &ImageNode::Empty);
    assert_eq!(pipeline.first().filter(), &FilterNode::Blur);

    let pipeline = parse_ok("img.jpg:scale(50%);round(10px)");
    assert_eq!(pipeline.len(), 2);
    assert_eq!(pipeline.layers()[1].source(), &ImageNode::Previous);
}

#[test]
fn canonical_names_are_stable() {
    let source = "noop(); blur(); boxblur(2%); pad(1px, 2px, 3px, 4px); round(3px)";
    let expected = vec!["noop", "blur", "boxblurpercent", "pad", "roundcorners"];

    assert_eq!(parse_ok(source).filter_names(), expected);
    assert_eq!(parse_ok(source).filter_names(), expected);

    for kind in FilterKind::ALL {
        assert_eq!(kind.as_str().parse::<FilterKind>(), Ok(kind));
    }
}

#[test]
fn text_options_merge_field_by_field() {
    let FilterNode::TextPositioned(text) = only_filter(
        r#"textPositioned("x", "Arial", rgb(0,0,0), centered, left, top, fromContent, options=[bgColor=rgb(0,0,0), paddingTop=10px])"#,
    ) else {
        panic!("expected positioned text");
    };

    let expected = TextOptions::with_background(Color::rgb(0.0, 0.0, 0.0))
        .merge(TextOptions::with_padding_top(Length::Pixels(10)));
    assert_eq!(text.options, expected);
    assert_eq!(text.options.merge(TextOptions::default()), expected);
    assert_eq!(TextOptions::default().merge(text.options), expected);
}

proptest! {
    #[test]
    fn scale_percent_round_trips_into_unit_range(p in 0u32..1000) {
        let FilterNode::Scale(fraction) = only_filter(&format!("scale({p}%)")) else {
            panic!("expected scale");
        };
        prop_assert_eq!(fraction, (f64::from(p) / 100.0).min(1.0));
    }

    #[test]
    fn pixel_pads_are_kept_verbatim(top in -500i32..500, right in -500i32..500) {
        let source = format!("pad({top}px, {right}px, 0px, 0px)");
        let FilterNode::Pad(insets) = only_filter(&source) else {
            panic!("expected pad");
        };
        prop_assert_eq!((insets.top, insets.right), (top, right));
    }
}
