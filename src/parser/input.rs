//! Permissive parsers for the page's input fields.
//!
//! Both parsers read the longest valid prefix and ignore whatever follows,
//! so `"42px"` reads as 42 and `"abc"` reads as nothing.

use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt};
use winnow::token::one_of;
use winnow::{ModalResult, Parser};

fn parse_sign<'s>(input: &mut &'s str) -> ModalResult<Option<char>> {
    opt(one_of(['+', '-'])).parse_next(input)
}

fn parse_exponent<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    (one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)
        .take()
        .parse_next(input)
}

/// `1`, `1.`, `1.5`, `.5`, each with an optional exponent
fn parse_decimal_literal<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    alt((
        (digit1, opt(('.', digit0)), opt(parse_exponent)).take(),
        ('.', digit1, opt(parse_exponent)).take(),
    ))
    .parse_next(input)
}

fn parse_float_prefix<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    (parse_sign, alt(("Infinity", parse_decimal_literal)))
        .take()
        .parse_next(input)
}

fn parse_int_prefix<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    (parse_sign, digit1).take().parse_next(input)
}

/// Read a float the way a browser's `parseFloat` does
///
/// # Examples
/// ```
/// use locale_number_guide::parser::parse_float;
///
/// assert_eq!(parse_float("  12.5kg"), Some(12.5));
/// assert_eq!(parse_float("kg"), None);
/// ```
pub fn parse_float(raw: &str) -> Option<f64> {
    let mut input = raw.trim_start();
    let text = parse_float_prefix.parse_next(&mut input).ok()?;
    text.parse::<f64>().ok()
}

/// Read a base-10 integer the way a browser's `parseInt` does
///
/// Values beyond the `i64` range saturate.
pub fn parse_int(raw: &str) -> Option<i64> {
    let mut input = raw.trim_start();
    let text = parse_int_prefix.parse_next(&mut input).ok()?;
    match text.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) if text.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}
