//! Scalar values: numbers, angles, percentages, pixels, booleans and strings.

use winnow::{
    Parser as _,
    ascii::digit1,
    combinator::{alt, opt, terminated},
    stream::{Location, Stream},
    token::{any, literal, one_of},
};

use super::{IResult, Input, keyword, lexical_error, named};
use crate::error::ErrorCode;

/// Parse a non-negative decimal: `digit+ ('.' digit+)?`.
///
/// A decimal point without digits after it is a committed lexical error.
/// Literals too long to be represented as a finite `f64` do not match.
pub(crate) fn number(input: &mut Input<'_>) -> IResult<f64> {
    named(input, "number", |input| {
        let checkpoint = input.checkpoint();
        let start = input.current_token_start();
        let text: IResult<&str> = (digit1, opt(('.', opt(digit1)))).take().parse_next(input);
        let text = text?;

        if text.ends_with('.') {
            return Err(lexical_error(input, "number", start, ErrorCode::E002));
        }

        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => {
                input.reset(&checkpoint);
                Err(super::backtrack())
            }
        }
    })
}

/// Parse an optionally signed 32-bit integer.
pub(crate) fn integer(input: &mut Input<'_>) -> IResult<i32> {
    named(input, "integer", |input| {
        (opt(one_of(['+', '-'])), digit1)
            .take()
            .verify_map(|text: &str| text.parse::<i32>().ok())
            .parse_next(input)
    })
}

/// Parse an angle in degrees, normalized into `[0, 360)`.
pub(crate) fn degrees(input: &mut Input<'_>) -> IResult<f64> {
    named(input, "degrees", |input| {
        terminated(number, literal("deg"))
            .map(|value| value % 360.0)
            .parse_next(input)
    })
}

/// Parse a percentage as a fraction clamped into `[0, 1]`.
pub(crate) fn percent(input: &mut Input<'_>) -> IResult<f64> {
    named(input, "percent", |input| {
        terminated(number, '%')
            .map(|value| (value / 100.0).clamp(0.0, 1.0))
            .parse_next(input)
    })
}

/// Parse a pixel count such as `10px` or `-4px`.
pub(crate) fn pixels(input: &mut Input<'_>) -> IResult<i32> {
    named(input, "pixels", |input| {
        terminated(integer, literal("px")).parse_next(input)
    })
}

pub(crate) fn boolean(input: &mut Input<'_>) -> IResult<bool> {
    named(input, "boolean", |input| {
        alt((keyword("true").value(true), keyword("false").value(false))).parse_next(input)
    })
}

fn next_char(input: &mut Input<'_>) -> IResult<char> {
    any.parse_next(input)
}

/// Parse a double-quoted string, returning its unescaped contents.
///
/// `\"` and `\\` are the only escapes. A missing closing quote or any other
/// escape is a committed lexical error.
pub(crate) fn string(input: &mut Input<'_>) -> IResult<String> {
    named(input, "string", |input| {
        let start = input.current_token_start();
        let quote: IResult<char> = '"'.parse_next(input);
        quote?;

        let mut value = String::new();
        loop {
            match next_char(input) {
                Ok('"') => return Ok(value),
                Ok('\\') => {
                    let escape = input.current_token_start() - 1;
                    match next_char(input) {
                        Ok(c @ ('"' | '\\')) => value.push(c),
                        Ok(_) => {
                            return Err(lexical_error(input, "string", escape, ErrorCode::E003));
                        }
                        Err(_) => {
                            return Err(lexical_error(input, "string", start, ErrorCode::E001));
                        }
                    }
                }
                Ok(c) => value.push(c),
                Err(_) => return Err(lexical_error(input, "string", start, ErrorCode::E001)),
            }
        }
    })
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::parser::test_support::run;

    proptest! {
        #[test]
        fn percent_in_range_is_divided(p in 0u32..=100) {
            let parsed = run(percent, &format!("{p}%")).unwrap();
            prop_assert_eq!(parsed, f64::from(p) / 100.0);
        }

        #[test]
        fn percent_out_of_range_is_clamped(p in 101u32..100_000) {
            prop_assert_eq!(run(percent, &format!("{p}%")), Ok(1.0));
        }

        #[test]
        fn fractional_percent_stays_in_unit_range(whole in 0u32..1000, fraction in 0u32..1000) {
            let parsed = run(percent, &format!("{whole}.{fraction}%")).unwrap();
            prop_assert!((0.0..=1.0).contains(&parsed));
        }
    }
}
