//! The ParseError type returned by a failed parse.

use thiserror::Error;

use crate::error::Diagnostic;

/// Error returned when an expression does not parse.
///
/// Carries the deepest named production that failed, the byte offset it
/// failed at and the input left unconsumed from there, along with the
/// [`Diagnostic`] describing the failure.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{diagnostic}")]
pub struct ParseError {
    diagnostic: Diagnostic,
    production: &'static str,
    offset: usize,
    remaining: String,
}

impl ParseError {
    pub fn new(
        diagnostic: Diagnostic,
        production: &'static str,
        offset: usize,
        remaining: impl Into<String>,
    ) -> Self {
        Self {
            diagnostic,
            production,
            offset,
            remaining: remaining.into(),
        }
    }

    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    /// Name of the grammar production that failed.
    pub fn production(&self) -> &'static str {
        self.production
    }

    /// Byte offset into the expression where the failure was detected.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The unconsumed input starting at [`ParseError::offset`].
    pub fn remaining(&self) -> &str {
        &self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_error_accessors() {
        let diag = Diagnostic::error("expected percent").with_code(ErrorCode::E100);
        let err = ParseError::new(diag, "percent", 6, "x%)");

        assert_eq!(err.production(), "percent");
        assert_eq!(err.offset(), 6);
        assert_eq!(err.remaining(), "x%)");
        assert_eq!(err.diagnostic().message(), "expected percent");
    }

    #[test]
    fn test_parse_error_display() {
        let diag = Diagnostic::error("expected layer").with_code(ErrorCode::E100);
        let err = ParseError::new(diag, "layer", 0, "");

        assert_eq!(err.to_string(), "error[E100]: expected layer");
    }
}
