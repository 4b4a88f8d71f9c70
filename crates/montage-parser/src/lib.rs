//! Parser for the Montage image composition language.
//!
//! A Montage expression is a `;` separated list of layers. Each layer names
//! an image source, a filter, or both:
//!
//! ```text
//! photo.jpg:cover(100%w, 100%h); blur(); $0:overlay(logo.png, fit=false)
//! ```
//!
//! [`parse`] turns an expression into a [`Pipeline`]. Failures are reported
//! as a [`ParseError`] pointing at the furthest position the parser reached,
//! along with the rule of the production that failed there. The rules
//! themselves are available through [`grammar::Grammar`].
//!
//! # Example
//!
//! ```
//! use montage_core::{pipeline::Canvas, source::ImageNode};
//!
//! let pipeline = montage_parser::parse("img.jpg:scale(50%); round(10px)", Canvas::default())
//!     .unwrap();
//!
//! assert_eq!(pipeline.filter_names(), vec!["scale", "roundcorners"]);
//! assert_eq!(pipeline.layers()[1].source(), &ImageNode::Previous);
//! ```

pub mod error;
pub mod grammar;

mod parser;
mod span;

#[cfg(test)]
mod parser_tests;

pub use span::Span;

use log::{debug, trace};

use montage_core::pipeline::{Canvas, Pipeline};

use error::ParseError;

/// Parse `source` into a pipeline for a canvas of `canvas` dimensions.
///
/// The canvas is recorded on the pipeline. Lengths keep their units and are
/// never resolved against it here.
///
/// # Errors
///
/// Returns a [`ParseError`] when `source` is not a valid expression. A
/// lexical error such as an unterminated string is reported where it
/// occurred; otherwise the error points at the furthest failure.
pub fn parse(source: &str, canvas: Canvas) -> Result<Pipeline, ParseError> {
    debug!(len = source.len(), canvas:%; "Parsing expression");

    let pipeline = parser::build_pipeline(source, canvas).inspect_err(|err| {
        debug!(production = err.production(), offset = err.offset(); "Expression rejected");
    })?;

    debug!(layers = pipeline.len(); "Expression parsed");
    trace!(pipeline:?; "Parsed pipeline");

    Ok(pipeline)
}

/// Returns the rule of `production`, e.g. `"integer 'px'"` for `pixels`.
pub fn describe(production: &str) -> Option<&'static str> {
    grammar::Grammar::get().describe(production)
}
