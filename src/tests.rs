use crate::parser::*;
use crate::types::*;

#[test]
fn test_simple_decimal_pattern() {
    let result = parse_number_pattern("#,##0.###").unwrap();
    let positive = &result.positive;
    assert!(positive.prefix.is_empty());
    assert!(positive.suffix.is_empty());
    assert_eq!(positive.primary_grouping, 3);
    assert_eq!(positive.secondary_grouping, 3);
    assert_eq!(positive.min_integer_digits, 1);
    assert_eq!(positive.min_fraction_digits, 0);
    assert_eq!(positive.max_fraction_digits, 3);
    assert!(result.negative.is_none());
}

#[test]
fn test_ungrouped_pattern() {
    let result = parse_number_pattern("00.0#").unwrap();
    assert_eq!(result.positive.primary_grouping, 0);
    assert_eq!(result.positive.min_integer_digits, 2);
    assert_eq!(result.positive.min_fraction_digits, 1);
    assert_eq!(result.positive.max_fraction_digits, 2);
}

#[test]
fn test_indian_grouping() {
    let result = parse_number_pattern("#,##,##0.###").unwrap();
    assert_eq!(result.positive.primary_grouping, 3);
    assert_eq!(result.positive.secondary_grouping, 2);
}

#[test]
fn test_currency_prefix_and_suffix() {
    let prefix = parse_number_pattern("¤#,##0.00").unwrap();
    assert_eq!(prefix.positive.prefix, vec![AffixToken::CurrencySign]);
    assert_eq!(prefix.positive.min_fraction_digits, 2);
    assert_eq!(prefix.positive.max_fraction_digits, 2);

    let suffix = parse_number_pattern("#,##0.00\u{A0}¤").unwrap();
    assert!(suffix.positive.prefix.is_empty());
    assert_eq!(
        suffix.positive.suffix,
        vec![
            AffixToken::Literal("\u{A0}".to_string()),
            AffixToken::CurrencySign
        ]
    );
}

#[test]
fn test_explicit_negative_subpattern() {
    let result = parse_number_pattern("¤#,##0.00;(¤#,##0.00)").unwrap();
    let negative = result.negative.unwrap();
    assert_eq!(
        negative.prefix,
        vec![
            AffixToken::Literal("(".to_string()),
            AffixToken::CurrencySign
        ]
    );
    assert_eq!(negative.suffix, vec![AffixToken::Literal(")".to_string())]);

    let rtl = parse_number_pattern("\u{200F}#,##0.00\u{A0}¤;\u{200F}-#,##0.00\u{A0}¤").unwrap();
    assert_eq!(
        rtl.negative.unwrap().prefix,
        vec![
            AffixToken::Literal("\u{200F}".to_string()),
            AffixToken::MinusSign
        ]
    );
}

#[test]
fn test_quoted_literals() {
    let result = parse_number_pattern("'#'0' units'").unwrap();
    assert_eq!(result.positive.prefix, vec![AffixToken::Literal("#".to_string())]);
    assert_eq!(
        result.positive.suffix,
        vec![AffixToken::Literal(" units".to_string())]
    );

    let apostrophe = parse_number_pattern("0''").unwrap();
    assert_eq!(
        apostrophe.positive.suffix,
        vec![AffixToken::Literal("'".to_string())]
    );
}

#[test]
fn test_percent_pattern() {
    let result = parse_number_pattern("#,##0%").unwrap();
    assert_eq!(result.positive.suffix, vec![AffixToken::PercentSign]);
    assert_eq!(result.positive.max_fraction_digits, 0);
}

#[test]
fn test_invalid_patterns() {
    assert!(parse_number_pattern("").is_err());
    assert!(parse_number_pattern("abc").is_err());
    assert!(parse_number_pattern("0¤0").is_err());
    assert!(parse_number_pattern("0;").is_err());
    assert!(parse_number_pattern("0;0;0").is_err());
    assert!(parse_number_pattern("0'unterminated").is_err());
}
