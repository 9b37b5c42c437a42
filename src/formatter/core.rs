use crate::formatter::digits::Decimal;
use crate::types::{AffixToken, LocaleSettings, NumberPattern, SubPattern};

/// Digit and grouping choices after options and pattern defaults are merged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct DigitOptions {
    pub min_integer_digits: usize,
    pub min_fraction_digits: usize,
    pub max_fraction_digits: usize,
    pub use_grouping: bool,
}

/// Format a value with a parsed pattern, already resolved digit options and locale symbols
pub(super) fn format_with_pattern(
    value: f64,
    pattern: &NumberPattern,
    digits: &DigitOptions,
    currency_symbol: Option<&str>,
    locale: &LocaleSettings,
) -> String {
    if value.is_nan() {
        return locale.nan_symbol.clone();
    }

    let body = if value.is_infinite() {
        locale.infinity_symbol.clone()
    } else {
        format_digits(value, &pattern.positive, digits, locale)
    };

    // -0 keeps its sign
    let is_negative = value.is_sign_negative();
    let mut result = String::new();

    match (&pattern.negative, is_negative) {
        (Some(negative), true) => {
            write_affix(&mut result, &negative.prefix, currency_symbol, locale, AffixSide::Prefix);
            result.push_str(&body);
            write_affix(&mut result, &negative.suffix, currency_symbol, locale, AffixSide::Suffix);
        }
        (None, true) => {
            result.push_str(&locale.minus_sign);
            write_positive(&mut result, &pattern.positive, &body, currency_symbol, locale);
        }
        (_, false) => write_positive(&mut result, &pattern.positive, &body, currency_symbol, locale),
    }

    result
}

fn write_positive(
    result: &mut String,
    positive: &SubPattern,
    body: &str,
    currency_symbol: Option<&str>,
    locale: &LocaleSettings,
) {
    write_affix(result, &positive.prefix, currency_symbol, locale, AffixSide::Prefix);
    result.push_str(body);
    write_affix(result, &positive.suffix, currency_symbol, locale, AffixSide::Suffix);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AffixSide {
    Prefix,
    Suffix,
}

fn write_affix(
    result: &mut String,
    affix: &[AffixToken],
    currency_symbol: Option<&str>,
    locale: &LocaleSettings,
    side: AffixSide,
) {
    let last_idx = affix.len().saturating_sub(1);
    for (idx, token) in affix.iter().enumerate() {
        match token {
            AffixToken::Literal(text) => result.push_str(text),
            AffixToken::PercentSign => result.push_str(&locale.percent_sign),
            AffixToken::MinusSign => result.push_str(&locale.minus_sign),
            AffixToken::CurrencySign => {
                let symbol = currency_symbol.unwrap_or_default();
                // A letter touching the digits gets a no-break space, "XYZ 1.00" and "1.00 XYZ"
                match side {
                    AffixSide::Prefix => {
                        result.push_str(symbol);
                        if idx == last_idx && symbol.chars().last().is_some_and(char::is_alphabetic) {
                            result.push('\u{A0}');
                        }
                    }
                    AffixSide::Suffix => {
                        if idx == 0 && symbol.chars().next().is_some_and(char::is_alphabetic) {
                            result.push('\u{A0}');
                        }
                        result.push_str(symbol);
                    }
                }
            }
        }
    }
}

/// Digits of `|value|` with separators, in the locale numbering system
fn format_digits(
    value: f64,
    subpattern: &SubPattern,
    digits: &DigitOptions,
    locale: &LocaleSettings,
) -> String {
    let mut decimal = Decimal::from_f64(value);
    decimal.round_to_fraction(digits.max_fraction_digits);

    let integer = decimal.integer_string(digits.min_integer_digits);
    let fraction = decimal.fraction_string(digits.min_fraction_digits);

    let mut result = if digits.use_grouping {
        group_integer(
            &integer,
            subpattern.primary_grouping,
            subpattern.secondary_grouping,
            locale.min_grouping_digits,
            &locale.group_separator,
        )
    } else {
        integer
    };

    if !fraction.is_empty() {
        result.push_str(&locale.decimal_separator);
        result.push_str(&fraction);
    }

    if locale.zero_digit == '0' {
        result
    } else {
        result.chars().map(|c| locale.localize_digit(c)).collect()
    }
}

/// Insert group separators into a string of ASCII digits
///
/// `primary` is the size of the rightmost group, `secondary` the size of all
/// others (3 and 2 for `#,##,##0`). Nothing is inserted unless at least
/// `min_grouping` digits precede the first separator.
fn group_integer(
    integer: &str,
    primary: usize,
    secondary: usize,
    min_grouping: usize,
    separator: &str,
) -> String {
    if primary == 0 || integer.len() < primary + min_grouping {
        return integer.to_string();
    }
    let secondary = if secondary == 0 { primary } else { secondary };

    let (mut rest, tail) = integer.split_at(integer.len() - primary);
    let mut groups = vec![tail];
    while rest.len() > secondary {
        let (head, group) = rest.split_at(rest.len() - secondary);
        groups.push(group);
        rest = head;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    groups.join(separator)
}
