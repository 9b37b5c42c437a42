//! Errors reported by the number formatter.

use thiserror::Error;

/// Failure to format a number with the requested locale and options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The locale argument is not a well-formed language tag.
    #[error("Incorrect locale information provided: {0}")]
    InvalidLocale(String),

    /// Currency style was requested without a currency code.
    #[error("Currency code is required with currency style.")]
    MissingCurrency,

    /// The currency code is not three ASCII letters.
    #[error("Invalid currency code : {0}")]
    InvalidCurrency(String),

    /// A fraction digit bound is outside 0..=100 or below its minimum.
    #[error("{option} value is out of range.")]
    FractionDigitsOutOfRange {
        /// Name of the offending option.
        option: &'static str,
        /// The rejected value.
        value: u32,
    },

    /// The locale data carries a pattern that does not parse.
    #[error("invalid number pattern: {0}")]
    InvalidPattern(String),
}

pub type Result<T> = std::result::Result<T, FormatError>;
