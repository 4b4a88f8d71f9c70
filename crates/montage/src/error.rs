//! Error types for Montage operations.
//!
//! This module provides the main error type [`MontageError`] which wraps
//! the error conditions that can occur while loading and parsing
//! expressions.

use std::io;

use thiserror::Error;

use montage_parser::error::ParseError;

/// The main error type for Montage operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the expression next to the [`ParseError`] so
/// that its byte spans can be rendered against the source.
#[derive(Debug, Error)]
pub enum MontageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown grammar production: {0}")]
    UnknownProduction(String),
}

impl MontageError {
    /// Create a new `Parse` error with the associated expression.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
