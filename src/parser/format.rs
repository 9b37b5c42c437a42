use winnow::Parser;
use winnow::token::literal;

use crate::parser::sections::{build_subpattern, parse_subpattern_tokens};
use crate::types::*;

/// Parse a CLDR number pattern
///
/// This is the main public API entry point of this module. It accepts a pattern such as
/// `#,##0.###` or `¤#,##0.00;(¤#,##0.00)` and returns the parsed NumberPattern structure.
///
/// # Arguments
/// * `input_str` - The pattern string to parse
///
/// # Returns
/// * `Result<NumberPattern, String>` - The parsing result, or an error message
///
/// # Examples
/// ```
/// use locale_number_guide::parser::parse_number_pattern;
///
/// let pattern = parse_number_pattern("#,##0.00").unwrap();
/// assert_eq!(pattern.positive.primary_grouping, 3);
/// assert_eq!(pattern.positive.max_fraction_digits, 2);
/// ```
pub fn parse_number_pattern(input_str: &str) -> Result<NumberPattern, String> {
    let mut input = input_str;

    let make_err_msg = |e, remaining: &str| -> String {
        format!("Parse error: {e:?} at remaining input '{remaining}'")
    };

    let positive_tokens = parse_subpattern_tokens
        .parse_next(&mut input)
        .map_err(|e| make_err_msg(e, input))?;

    let mut negative_tokens = None;
    if input.starts_with(';') {
        literal(";")
            .parse_next(&mut input)
            .map_err(|e| make_err_msg(e, input))?;
        negative_tokens = Some(
            parse_subpattern_tokens
                .parse_next(&mut input)
                .map_err(|e| make_err_msg(e, input))?,
        );
    }

    if !input.is_empty() {
        return Err(format!(
            "Too many sub-patterns or trailing characters: '{input}'"
        ));
    }

    let positive = build_subpattern(&positive_tokens)?;
    let negative = match negative_tokens {
        Some(tokens) => Some(build_subpattern(&tokens)?),
        None => None,
    };

    Ok(NumberPattern { positive, negative })
}
