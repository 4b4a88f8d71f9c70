//! Recursive-descent parser for Montage expressions.
//!
//! The grammar is written with [`winnow`] combinators directly over the
//! expression text. Every alternation is an ordered choice with the most
//! specific alternative first.
//!
//! Failures are tracked per call in a [`Tracker`] threaded through the input
//! as winnow state. Each named production that fails records where it failed
//! and how deep it was nested, and the furthest (then deepest) failure
//! becomes the [`ParseError`]. Lexical errors are committed: they stop the
//! parse immediately and cannot be overridden by a later alternative. A
//! failure inside the arguments of a call such as `scale(...)` remembers the
//! call, which the error reports as context.
//!
//! Submodules follow the layering of the grammar:
//! [`value`] < [`color`] < [`composite`] < [`filter`] < [`layer`].

mod color;
mod composite;
mod filter;
mod layer;
mod value;

use std::cell::Cell;

use winnow::{
    Parser,
    ascii::multispace0,
    combinator::{delimited, not, terminated},
    error::{ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location, Stateful},
    token::{literal, one_of},
};

use montage_core::pipeline::{Canvas, Pipeline};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError},
    grammar::Grammar,
    span::Span,
};

pub(crate) type Input<'i> = Stateful<LocatingSlice<&'i str>, &'i Tracker>;
pub(crate) type IResult<O> = ModalResult<O, ContextError>;

/// The keyword of the innermost call being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CallSite {
    pub(crate) name: &'static str,
    pub(crate) span: Span,
}

/// A failed named production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Failure {
    pub(crate) production: &'static str,
    pub(crate) offset: usize,
    pub(crate) depth: usize,
    pub(crate) code: ErrorCode,
    pub(crate) call: Option<CallSite>,
}

/// Per-parse failure bookkeeping.
#[derive(Debug, Default)]
pub(crate) struct Tracker {
    depth: Cell<usize>,
    call: Cell<Option<CallSite>>,
    furthest: Cell<Option<Failure>>,
    committed: Cell<bool>,
}

impl Tracker {
    /// Keep `failure` if it is further along than the current best, or as far
    /// along but more deeply nested.
    fn record(&self, failure: Failure) {
        if self.committed.get() {
            return;
        }
        let replace = match self.furthest.get() {
            None => true,
            Some(best) => {
                failure.offset > best.offset
                    || (failure.offset == best.offset && failure.depth > best.depth)
            }
        };
        if replace {
            self.furthest.set(Some(failure));
        }
    }

    /// Keep `failure` unconditionally and ignore everything recorded after it.
    fn commit(&self, failure: Failure) {
        if !self.committed.replace(true) {
            self.furthest.set(Some(failure));
        }
    }

    pub(crate) fn furthest(&self) -> Option<Failure> {
        self.furthest.get()
    }
}

/// Run `parser` as the named grammar production `production`.
///
/// A backtracking failure is recorded in the tracker at the position the
/// input was left at. Committed failures pass through untouched.
pub(crate) fn named<'i, O>(
    input: &mut Input<'i>,
    production: &'static str,
    parser: impl FnOnce(&mut Input<'i>) -> IResult<O>,
) -> IResult<O> {
    debug_assert!(
        Grammar::get().contains(production),
        "production `{production}` has no grammar rule"
    );

    let tracker = input.state;
    let depth = tracker.depth.get() + 1;
    tracker.depth.set(depth);
    let result = parser(input);
    tracker.depth.set(depth - 1);

    if let Err(ErrMode::Backtrack(_)) = &result {
        tracker.record(Failure {
            production,
            offset: input.current_token_start(),
            depth,
            code: ErrorCode::E100,
            call: tracker.call.get(),
        });
    }
    result
}

/// Commit a lexical error for `production` starting at `offset`.
pub(crate) fn lexical_error(
    input: &Input<'_>,
    production: &'static str,
    offset: usize,
    code: ErrorCode,
) -> ErrMode<ContextError> {
    input.state.commit(Failure {
        production,
        offset,
        depth: input.state.depth.get(),
        code,
        call: input.state.call.get(),
    });
    ErrMode::Cut(ContextError::new())
}

/// A plain backtracking failure.
pub(crate) fn backtrack() -> ErrMode<ContextError> {
    ErrMode::Backtrack(ContextError::new())
}

/// Skip optional whitespace.
pub(crate) fn ws(input: &mut Input<'_>) -> IResult<()> {
    multispace0.void().parse_next(input)
}

/// Punctuation surrounded by optional whitespace.
pub(crate) fn symbol<'i>(c: char) -> impl Parser<Input<'i>, (), ErrMode<ContextError>> {
    delimited(ws, c, ws).void()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A keyword that is not the prefix of a longer word.
pub(crate) fn keyword<'i>(word: &'static str) -> impl Parser<Input<'i>, (), ErrMode<ContextError>> {
    terminated(literal(word), not(one_of(is_word_char))).void()
}

/// A call `name(arguments)` parsed as production `production`.
///
/// The keyword is matched outside the production, so only a call whose name
/// matched can record a failure. Failures recorded while the call is parsed
/// carry its [`CallSite`].
pub(crate) fn call<'i, O>(
    input: &mut Input<'i>,
    name: &'static str,
    production: &'static str,
    mut arguments: impl FnMut(&mut Input<'i>) -> IResult<O>,
) -> IResult<O> {
    let start = input.current_token_start();
    keyword(name).parse_next(input)?;
    let site = CallSite {
        name,
        span: Span::new(start..input.current_token_start()),
    };

    let tracker = input.state;
    let enclosing = tracker.call.replace(Some(site));
    let result = named(input, production, |input| {
        symbol('(').parse_next(input)?;
        let value = arguments(input)?;
        symbol(')').parse_next(input)?;
        Ok(value)
    });
    tracker.call.set(enclosing);
    result
}

/// Convert the recorded failure into a [`ParseError`].
fn convert_error(failure: Failure, source: &str) -> ParseError {
    let offset = failure.offset.min(source.len());
    let remaining = source.get(offset..).unwrap_or_default();
    let width = remaining.chars().next().map_or(0, char::len_utf8);
    let span = Span::new(offset..offset + width);

    let code = match failure.code {
        ErrorCode::E100 if failure.production == "layer_end" => ErrorCode::E101,
        code => code,
    };

    let message = match code {
        ErrorCode::E100 => format!("expected {}", failure.production),
        ErrorCode::E101 => "unexpected input after layer".to_string(),
        _ => format!("{} in {}", code.description(), failure.production),
    };

    let help = match code {
        ErrorCode::E001 => "add a closing `\"`".to_string(),
        ErrorCode::E002 => "add digits after the decimal point".to_string(),
        ErrorCode::E003 => "only `\\\"` and `\\\\` may follow a backslash".to_string(),
        _ => match Grammar::get().describe(failure.production) {
            Some(rule) => format!("{} ::= {rule}", failure.production),
            None => "check the expression syntax".to_string(),
        },
    };

    let mut diagnostic = Diagnostic::error(message)
        .with_code(code)
        .with_label(span, code.description());
    if let Some(site) = failure.call {
        diagnostic =
            diagnostic.with_secondary_label(site.span, format!("in this `{}` call", site.name));
    }
    let diagnostic = diagnostic.with_help(help);

    ParseError::new(diagnostic, failure.production, offset, remaining)
}

/// Parse `source` into a pipeline for `canvas`.
pub(crate) fn build_pipeline(source: &str, canvas: Canvas) -> Result<Pipeline, ParseError> {
    let tracker = Tracker::default();
    let mut input = Stateful {
        input: LocatingSlice::new(source),
        state: &tracker,
    };

    match layer::pipeline(&mut input, canvas) {
        Ok(pipeline) => Ok(pipeline),
        Err(_) => {
            let failure = tracker.furthest().unwrap_or(Failure {
                production: "pipeline",
                offset: 0,
                depth: 0,
                code: ErrorCode::E100,
                call: None,
            });
            Err(convert_error(failure, source))
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use winnow::stream::Stream;

    use super::*;

    /// Run a single production over `source`, requiring it to consume
    /// everything.
    pub(crate) fn run<O>(
        parser: impl FnOnce(&mut Input<'_>) -> IResult<O>,
        source: &str,
    ) -> Result<O, Option<Failure>> {
        let tracker = Tracker::default();
        let mut input = Stateful {
            input: LocatingSlice::new(source),
            state: &tracker,
        };
        match parser(&mut input) {
            Ok(value) if input.eof_offset() == 0 => Ok(value),
            Ok(_) => Err(tracker.furthest()),
            Err(_) => Err(tracker.furthest()),
        }
    }
}
