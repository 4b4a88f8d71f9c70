//! Error and diagnostic system for the Montage parser.
//!
//! A failed parse produces a [`ParseError`] holding one [`Diagnostic`]: an
//! [`ErrorCode`], a message naming the grammar production that failed, a
//! primary [`Label`] pointing at the offending input and help text quoting
//! the production's rule.
//!
//! # Example
//!
//! ```
//! # use montage_parser::error::{Diagnostic, ErrorCode};
//! # use montage_parser::Span;
//!
//! let diag = Diagnostic::error("expected percent")
//!     .with_code(ErrorCode::E100)
//!     .with_label(Span::new(6..9), "unexpected input")
//!     .with_help("percent ::= number '%'");
//!
//! assert_eq!(diag.to_string(), "error[E100]: expected percent");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
