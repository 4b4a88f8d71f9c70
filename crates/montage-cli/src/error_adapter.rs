//! Rendering of [`MontageError`] through miette.
//!
//! A parse error carries the expression it failed on, so its report shows
//! the offending snippet with the labels of the parser diagnostic. Every
//! other error is reported as a plain message with a `montage::` code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceCode, SourceSpan};

use montage::MontageError;
use montage_parser::{Span, error::Diagnostic};

/// A [`MontageError`] prepared for miette's report handlers.
#[derive(Debug)]
pub struct Report<'a> {
    err: &'a MontageError,
}

impl<'a> Report<'a> {
    pub fn new(err: &'a MontageError) -> Self {
        Self { err }
    }

    /// The parser diagnostic and its expression, for parse errors.
    fn parse_diagnostic(&self) -> Option<(&'a Diagnostic, &'a str)> {
        match self.err {
            MontageError::Parse { err, src } => Some((err.diagnostic(), src.as_str())),
            _ => None,
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parse_diagnostic() {
            Some((diag, _)) => f.write_str(diag.message()),
            None => fmt::Display::fmt(self.err, f),
        }
    }
}

impl std::error::Error for Report<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.err {
            MontageError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl MietteDiagnostic for Report<'_> {
    fn code<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        let code: Box<dyn fmt::Display + 'b> = match self.err {
            MontageError::Parse { err, .. } => Box::new(err.diagnostic().code()?),
            MontageError::Io(_) => Box::new("montage::io"),
            MontageError::Config(_) => Box::new("montage::config"),
            MontageError::UnknownProduction(_) => Box::new("montage::grammar"),
        };
        Some(code)
    }

    fn help<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        let help = match self.err {
            MontageError::Parse { err, .. } => err.diagnostic().help()?,
            MontageError::UnknownProduction(_) => "run `montage --grammar` to list every production",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self.err {
            MontageError::Parse { src, .. } => Some(src as &dyn SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let (diag, _) = self.parse_diagnostic()?;
        Some(Box::new(diag.labels().iter().map(|label| {
            let message = Some(label.message().to_string());
            let span = span_to_miette(label.span());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

fn span_to_miette(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}
