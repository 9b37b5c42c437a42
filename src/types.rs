//! Type definitions for locale-aware number formatting
//!
//! This module defines the parsed form of CLDR number patterns, the options
//! a caller passes when formatting, and the per-locale settings resolved from
//! the embedded locale data.

use std::collections::HashMap;

/// Represents a single token parsed from a CLDR number pattern
#[derive(Debug, Clone, PartialEq)]
pub enum PatternToken {
    /// Mandatory digit (0)
    DigitOrZero,
    /// Optional digit (#)
    DigitIfNeeded,
    /// Grouping separator position (,)
    GroupingSeparator,
    /// Decimal separator position (.)
    DecimalPoint,
    /// Currency symbol placeholder (¤)
    CurrencySign,
    /// Percent sign placeholder (%)
    PercentSign,
    /// Localized minus sign placeholder (-)
    MinusSign,
    /// Literal character copied into the affix
    Literal(char),
    /// Quoted literal text, like 'text'
    QuotedText(String),
}

impl PatternToken {
    /// Checks if the token belongs to the numeric body of a pattern
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            PatternToken::DigitOrZero
                | PatternToken::DigitIfNeeded
                | PatternToken::GroupingSeparator
                | PatternToken::DecimalPoint
        )
    }
}

/// A piece of a prefix or suffix surrounding the digits
#[derive(Debug, Clone, PartialEq)]
pub enum AffixToken {
    /// Literal text
    Literal(String),
    /// Replaced with the currency symbol
    CurrencySign,
    /// Replaced with the locale percent sign
    PercentSign,
    /// Replaced with the locale minus sign
    MinusSign,
}

/// One side (positive or negative) of a number pattern
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubPattern {
    /// Tokens written before the digits
    pub prefix: Vec<AffixToken>,
    /// Tokens written after the digits
    pub suffix: Vec<AffixToken>,
    /// Size of the group closest to the decimal separator, 0 when ungrouped
    pub primary_grouping: usize,
    /// Size of every further group
    pub secondary_grouping: usize,
    /// Count of mandatory integer digits
    pub min_integer_digits: usize,
    /// Count of mandatory fraction digits
    pub min_fraction_digits: usize,
    /// Count of all fraction digit placeholders
    pub max_fraction_digits: usize,
}

/// A parsed CLDR number pattern such as `#,##0.00 ¤`
#[derive(Debug, Clone, PartialEq)]
pub struct NumberPattern {
    /// Pattern used for positive values (required)
    pub positive: SubPattern,
    /// Explicit pattern for negative values; only its affixes are used
    pub negative: Option<SubPattern>,
}

/// Formatting style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Plain decimal number
    #[default]
    Decimal,
    /// Monetary amount, requires a currency code
    Currency,
}

/// Options controlling how a number is rendered
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    pub style: Style,
    pub currency: Option<String>,
    pub minimum_fraction_digits: Option<u32>,
    pub maximum_fraction_digits: Option<u32>,
    pub use_grouping: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            style: Style::Decimal,
            currency: None,
            minimum_fraction_digits: None,
            maximum_fraction_digits: None,
            use_grouping: true,
        }
    }
}

impl FormatOptions {
    /// Default decimal formatting
    pub fn decimal() -> Self {
        Self::default()
    }

    /// Currency formatting in the given ISO 4217 code
    pub fn currency(code: impl Into<String>) -> Self {
        Self {
            style: Style::Currency,
            currency: Some(code.into()),
            ..Self::default()
        }
    }

    pub fn with_fraction_digits(mut self, minimum: u32, maximum: u32) -> Self {
        self.minimum_fraction_digits = Some(minimum);
        self.maximum_fraction_digits = Some(maximum);
        self
    }

    pub fn with_minimum_fraction_digits(mut self, minimum: u32) -> Self {
        self.minimum_fraction_digits = Some(minimum);
        self
    }

    pub fn with_maximum_fraction_digits(mut self, maximum: u32) -> Self {
        self.maximum_fraction_digits = Some(maximum);
        self
    }

    pub fn with_grouping(mut self, use_grouping: bool) -> Self {
        self.use_grouping = use_grouping;
        self
    }
}

/// Locale-specific symbols and patterns
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleSettings {
    /// Tag the settings were resolved for
    pub locale: String,
    pub decimal_separator: String,
    pub group_separator: String,
    pub minus_sign: String,
    pub percent_sign: String,
    /// Zero of the numbering system; the other digits follow it
    pub zero_digit: char,
    /// Digits required before the first grouping separator is shown
    pub min_grouping_digits: usize,
    pub decimal_pattern: String,
    pub currency_pattern: String,
    pub nan_symbol: String,
    pub infinity_symbol: String,
    /// Currency symbols keyed by upper-case ISO 4217 code
    pub currency_symbols: HashMap<String, String>,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            locale: "root".to_string(),
            decimal_separator: ".".to_string(),
            group_separator: ",".to_string(),
            minus_sign: "-".to_string(),
            percent_sign: "%".to_string(),
            zero_digit: '0',
            min_grouping_digits: 1,
            decimal_pattern: "#,##0.###".to_string(),
            currency_pattern: "¤#,##0.00".to_string(),
            nan_symbol: "NaN".to_string(),
            infinity_symbol: "∞".to_string(),
            currency_symbols: HashMap::new(),
        }
    }
}

impl LocaleSettings {
    /// Symbol for a currency code, or the code itself when the locale has none
    pub fn currency_symbol<'a>(&'a self, code: &'a str) -> &'a str {
        self.currency_symbols
            .get(code)
            .map(String::as_str)
            .unwrap_or(code)
    }

    /// Map an ASCII digit onto the locale numbering system
    pub fn localize_digit(&self, digit: char) -> char {
        match digit.to_digit(10) {
            Some(offset) => char::from_u32(self.zero_digit as u32 + offset).unwrap_or(digit),
            None => digit,
        }
    }
}
