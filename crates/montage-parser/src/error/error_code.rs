//! Error codes for the Montage diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Lexical errors (committed, no alternative is tried after them)
//! - `E1xx` - Grammar errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Lexical Errors (E0xx)
    // =========================================================================
    /// Unterminated string literal.
    ///
    /// A string was opened with a quote but never closed.
    E001,

    /// Malformed numeric literal.
    ///
    /// A decimal point was not followed by a digit, as in `1.` or `2.x`.
    E002,

    /// Invalid escape sequence.
    ///
    /// Only `\"` and `\\` are valid inside a string literal.
    E003,

    // =========================================================================
    // Grammar Errors (E1xx)
    // =========================================================================
    /// Unexpected input.
    ///
    /// No alternative of a production matched at this position.
    E100,

    /// Trailing input.
    ///
    /// A complete pipeline was parsed but input remains after it.
    E101,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unterminated string literal",
            ErrorCode::E002 => "malformed numeric literal",
            ErrorCode::E003 => "invalid escape sequence",
            ErrorCode::E100 => "unexpected input",
            ErrorCode::E101 => "trailing input",
        }
    }

    /// Returns `true` for lexical errors.
    pub fn is_lexical(&self) -> bool {
        matches!(self, ErrorCode::E001 | ErrorCode::E002 | ErrorCode::E003)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E101.to_string(), "E101");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E001.description(), "unterminated string literal");
        assert_eq!(ErrorCode::E002.description(), "malformed numeric literal");
        assert_eq!(ErrorCode::E100.description(), "unexpected input");
    }

    #[test]
    fn test_is_lexical() {
        assert!(ErrorCode::E003.is_lexical());
        assert!(!ErrorCode::E100.is_lexical());
    }
}
