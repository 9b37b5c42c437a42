use winnow::combinator::{alt, delimited};
use winnow::token::{none_of, take_till};
use winnow::{ModalResult, Parser};

use crate::types::*;

// Digit placeholders
pub fn parse_digit_or_zero(input: &mut &str) -> ModalResult<PatternToken> {
    '0'.value(PatternToken::DigitOrZero).parse_next(input)
}

pub fn parse_digit_if_needed(input: &mut &str) -> ModalResult<PatternToken> {
    '#'.value(PatternToken::DigitIfNeeded).parse_next(input)
}

// Separators
pub fn parse_grouping_separator(input: &mut &str) -> ModalResult<PatternToken> {
    ','.value(PatternToken::GroupingSeparator).parse_next(input)
}

pub fn parse_decimal_point(input: &mut &str) -> ModalResult<PatternToken> {
    '.'.value(PatternToken::DecimalPoint).parse_next(input)
}

// Symbol placeholders
pub fn parse_currency_sign(input: &mut &str) -> ModalResult<PatternToken> {
    '¤'.value(PatternToken::CurrencySign).parse_next(input)
}

pub fn parse_percent_sign(input: &mut &str) -> ModalResult<PatternToken> {
    '%'.value(PatternToken::PercentSign).parse_next(input)
}

pub fn parse_minus_sign(input: &mut &str) -> ModalResult<PatternToken> {
    '-'.value(PatternToken::MinusSign).parse_next(input)
}

/// `''` stands for a single apostrophe, `'...'` for quoted literal text
pub fn parse_quoted_text(input: &mut &str) -> ModalResult<PatternToken> {
    alt((
        "''".value(PatternToken::Literal('\'')),
        delimited('\'', take_till(1.., '\''), '\'')
            .map(|text: &str| PatternToken::QuotedText(text.to_string())),
    ))
    .parse_next(input)
}

/// Any other character is copied verbatim, except the sub-pattern separator
pub fn parse_literal_passthrough(input: &mut &str) -> ModalResult<PatternToken> {
    none_of([';', '\''])
        .map(PatternToken::Literal)
        .parse_next(input)
}

/// Parse a single token of a number pattern
pub fn parse_pattern_token(input: &mut &str) -> ModalResult<PatternToken> {
    alt((
        parse_digit_or_zero,
        parse_digit_if_needed,
        parse_grouping_separator,
        parse_decimal_point,
        parse_currency_sign,
        parse_percent_sign,
        parse_minus_sign,
        parse_quoted_text,
        parse_literal_passthrough,
    ))
    .parse_next(input)
}
