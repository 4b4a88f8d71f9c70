//! Behaviour tests for whole expressions.
//!
//! These run complete expressions through [`crate::parse`] and check both the
//! pipelines produced and the errors reported for malformed input.

use montage_core::{
    color::Color,
    filter::FilterNode,
    pipeline::{Canvas, LayerNode, Pipeline},
    source::ImageNode,
};

use crate::error::{ErrorCode, ParseError};

/// Helper function to parse an expression with the default canvas
fn parse_source(source: &str) -> Result<Pipeline, ParseError> {
    crate::parse(source, Canvas::default())
}

/// Helper function to parse an expression and assert success
fn assert_parses_successfully(source: &str) -> Pipeline {
    match parse_source(source) {
        Ok(pipeline) => pipeline,
        Err(err) => panic!("Expected `{source}` to parse, but got error: {err}"),
    }
}

/// Helper function to parse an expression and assert failure
fn assert_parse_fails(source: &str) -> ParseError {
    match parse_source(source) {
        Ok(pipeline) => panic!("Expected `{source}` to fail, but got {pipeline:?}"),
        Err(err) => err,
    }
}

/// Helper to check where an error was reported
fn assert_error_at(source: &str, production: &str, offset: usize, code: ErrorCode) {
    let err = assert_parse_fails(source);
    assert_eq!(err.production(), production, "production for `{source}`");
    assert_eq!(err.offset(), offset, "offset for `{source}`");
    assert_eq!(err.diagnostic().code(), Some(code), "code for `{source}`");
    assert_eq!(err.remaining(), &source[offset..], "remaining for `{source}`");
}

mod basic_parsing_tests {
    use super::*;

    #[test]
    fn test_empty_source_with_filter() {
        let pipeline = assert_parses_successfully("_:blur()");
        assert_eq!(
            pipeline.layers(),
            &[LayerNode::new(ImageNode::Empty, FilterNode::Blur)]
        );
    }

    #[test]
    fn test_previous_layer_source() {
        let pipeline = assert_parses_successfully("img.jpg:scale(50%);round(10px)");

        assert_eq!(pipeline.len(), 2);
        assert_eq!(
            pipeline.layers()[0],
            LayerNode::new(ImageNode::url("img.jpg"), FilterNode::Scale(0.5))
        );
        assert_eq!(
            pipeline.layers()[1],
            LayerNode::new(ImageNode::Previous, FilterNode::RoundCorners(10))
        );
    }

    #[test]
    fn test_bare_source() {
        let pipeline = assert_parses_successfully("photos/cat.jpg");
        assert_eq!(
            pipeline.first(),
            &LayerNode::new(ImageNode::url("photos/cat.jpg"), FilterNode::Noop)
        );
    }

    #[test]
    fn test_layer_index_source() {
        let pipeline = assert_parses_successfully("a.png; b.png; $0:overlay($1)");
        assert_eq!(pipeline.layers()[2].source(), &ImageNode::Index(0));
        assert_eq!(
            pipeline.layers()[2].filter().sources(),
            vec![&ImageNode::Index(1)]
        );
    }

    #[test]
    fn test_multiline_expression() {
        let source = "
            background.jpg:cover(100%w, 100%h);
            blur();
            boxblur(3px)
        ";
        let pipeline = assert_parses_successfully(source);
        assert_eq!(pipeline.filter_names(), vec!["cover", "blur", "boxblur"]);
    }

    #[test]
    fn test_canvas_is_recorded() {
        let pipeline = crate::parse("a.jpg", Canvas::new(1200, 630)).unwrap();
        assert_eq!(pipeline.canvas(), Canvas::new(1200, 630));
    }

    #[test]
    fn test_parse_is_deterministic() {
        let source = r#"_:linear(45deg, rgb(1,0,0) 0%, rgb(0,0,1) 100%); text("Hi", "Arial", rgb(1,1,1))"#;
        assert_eq!(parse_source(source), parse_source(source));
    }
}

mod source_tests {
    use super::*;

    #[test]
    fn test_url_with_scheme() {
        let pipeline = assert_parses_successfully("https://example.com/img/a.png:blur()");
        assert_eq!(
            pipeline.first().source(),
            &ImageNode::url("https://example.com/img/a.png")
        );
    }

    #[test]
    fn test_quoted_url_with_port() {
        let pipeline = assert_parses_successfully(r#""http://localhost:8080/a.png":blur()"#);
        assert_eq!(
            pipeline.first().source(),
            &ImageNode::url("http://localhost:8080/a.png")
        );
    }

    #[test]
    fn test_unquoted_url_with_port_fails() {
        assert_parse_fails("http://localhost:8080/a.png:blur()");
    }
}

mod filter_tests {
    use super::*;

    #[test]
    fn test_gradient_stops_are_ordered() {
        let pipeline = assert_parses_successfully("linear(0deg, rgb(0,0,0)100%, rgb(1,1,1)0%)");
        let FilterNode::LinearGradient(gradient) = pipeline.first().filter() else {
            panic!("expected a gradient");
        };

        let white = Color::rgb(1.0, 1.0, 1.0);
        let black = Color::rgb(0.0, 0.0, 0.0);
        assert_eq!(gradient.positions().collect::<Vec<_>>(), vec![0.0, 1.0]);
        assert_eq!(gradient.colors().collect::<Vec<_>>(), vec![white, black]);
    }

    #[test]
    fn test_gradient_with_one_stop_fails() {
        assert_parse_fails("linear(0deg, rgb(0,0,0)50%)");
    }

    #[test]
    fn test_longer_keywords_win() {
        let pipeline = assert_parses_successfully(
            r#"scaleto(10px, 10px); scale(10%); textPositioned("a", "Arial", rgb(0,0,0), centered, left, top, fromContent); text("a", "Arial", rgb(0,0,0))"#,
        );
        assert_eq!(
            pipeline.filter_names(),
            vec!["scaleto", "scale", "textpositioned", "text"]
        );
    }

    #[test]
    fn test_realistic_composition() {
        let source = r#"
            photo.jpg:cover(100%w, 100%h);
            _:fillrect(rgba(0,0,0,0.5), 0px, 0px, 100%w, 20%h, center, bottom);
            textPositioned("Summer Sale", bold 10% "Helvetica", rgb(1,1,1), [centered, cartesian(0px, 40px)], center, bottom, fitted(80%w, 64px), options=[paddingLeft=8px, paddingRight=8px]);
            logo.png:round(50%);
            $2:overlay($3, fit=false);
            frame(4px, hsl(210, 0.5, 0.4))
        "#;
        let pipeline = assert_parses_successfully(source);

        assert_eq!(
            pipeline.filter_names(),
            vec![
                "cover",
                "fillrect",
                "textpositioned",
                "roundcornerspercent",
                "overlay",
                "frame",
            ]
        );
        assert_eq!(pipeline.layers()[2].source(), &ImageNode::Previous);
    }
}

mod error_reporting_tests {
    use super::*;

    #[test]
    fn test_error_points_inside_filter_argument() {
        assert_error_at("img.jpg:scale(x)", "number", 14, ErrorCode::E100);

        let err = assert_parse_fails("img.jpg:scale(x)");
        assert_eq!(err.to_string(), "error[E100]: expected number");
        assert_eq!(
            err.diagnostic().help(),
            Some("number ::= digit+ ('.' digit+)?")
        );
    }

    #[test]
    fn test_unknown_filter_after_source() {
        assert_error_at("img.jpg:sharpen(2px)", "filter", 8, ErrorCode::E100);
    }

    #[test]
    fn test_trailing_input() {
        assert_error_at("blur()x", "layer_end", 6, ErrorCode::E101);
        assert_error_at("a.jpg:blur() junk", "layer_end", 13, ErrorCode::E101);
    }

    #[test]
    fn test_bad_boolean_is_deepest() {
        assert_error_at("$0:overlay($1, fit=maybe)", "boolean", 19, ErrorCode::E100);
    }

    #[test]
    fn test_unterminated_string() {
        assert_error_at(r#"img.jpg:text("abc"#, "string", 13, ErrorCode::E001);
    }

    #[test]
    fn test_malformed_number_is_committed() {
        assert_error_at("scale(1.x%)", "number", 6, ErrorCode::E002);
    }

    #[test]
    fn test_overlong_angle_is_rejected() {
        let source = format!(
            "linear({}deg, rgb(0,0,0) 0%, rgb(1,1,1) 100%)",
            "9".repeat(400)
        );
        assert_error_at(&source, "number", 7, ErrorCode::E100);
    }

    #[test]
    fn test_empty_expression() {
        let err = assert_parse_fails("");
        assert_eq!(err.offset(), 0);
        assert_eq!(err.remaining(), "");
    }

    #[test]
    fn test_trailing_separator() {
        let err = assert_parse_fails("a.jpg;");
        assert_eq!(err.offset(), 6);
    }

    #[test]
    fn test_label_covers_offending_character() {
        let err = assert_parse_fails("img.jpg:scale(x)");
        let label = &err.diagnostic().labels()[0];
        assert_eq!(label.span().start(), 14);
        assert_eq!(label.span().len(), 1);
    }

    #[test]
    fn test_enclosing_call_is_labelled() {
        let err = assert_parse_fails("img.jpg:scale(x)");
        let labels = err.diagnostic().labels();
        assert_eq!(labels.len(), 2);
        assert!(labels[1].is_secondary());
        assert_eq!(labels[1].span().start(), 8);
        assert_eq!(labels[1].span().end(), 13);
        assert_eq!(labels[1].message(), "in this `scale` call");
    }

    #[test]
    fn test_innermost_call_is_labelled() {
        let source = "img.jpg:colorize(rgb(1, x, 0))";
        assert_error_at(source, "number", 24, ErrorCode::E100);

        let err = assert_parse_fails(source);
        let context = &err.diagnostic().labels()[1];
        assert_eq!(&source[context.span().start()..context.span().end()], "rgb");
    }

    #[test]
    fn test_failure_outside_calls_has_no_context() {
        let err = assert_parse_fails("img.jpg:sharpen(2px)");
        assert_eq!(err.diagnostic().labels().len(), 1);

        let err = assert_parse_fails("blur()x");
        assert!(err.diagnostic().labels().iter().all(|label| label.is_primary()));
    }
}

mod grammar_tests {
    use crate::grammar::Grammar;

    #[test]
    fn test_describe_known_production() {
        assert_eq!(crate::describe("pixels"), Some("integer 'px'"));
        assert_eq!(crate::describe("nothing"), None);
    }

    #[test]
    fn test_every_filter_alternative_has_a_rule() {
        let grammar = Grammar::get();
        let filter_rule = grammar.describe("filter").unwrap();
        for alternative in filter_rule.split(" | ") {
            assert!(grammar.contains(alternative), "missing rule for {alternative}");
        }
    }
}
