//! Number formatting module
//!
//! This module implements the locale-formatting capability the guide page
//! delegates to. Callers go through the [`NumberFormatter`] trait; the
//! bundled implementation is [`LocaleFormatter`], which mirrors the behavior
//! of ECMA-402 `Intl.NumberFormat` for the decimal and currency styles.

mod core;
mod digits;

pub use digits::js_number_string;

use tracing::{trace, warn};

use crate::error::{FormatError, Result};
use crate::locale::{canonicalize_tag, currency_digits, resolve_locale_settings};
use crate::parser::parse_number_pattern;
use crate::types::{FormatOptions, LocaleSettings, Style};

use self::core::{DigitOptions, format_with_pattern};

/// Largest fraction digit bound accepted in `FormatOptions`
pub const MAX_FRACTION_DIGITS: u32 = 100;

/// Locale used when no other default is configured
pub const FALLBACK_LOCALE: &str = "en-US";

/// A capability that renders numbers as locale-formatted text
pub trait NumberFormatter {
    /// Format `value` for `locale`, or for [`NumberFormatter::default_locale`] when `None`
    fn format(&self, value: f64, locale: Option<&str>, options: &FormatOptions)
    -> Result<String>;

    /// Locale used when `format` receives no explicit locale
    fn default_locale(&self) -> &str;
}

impl<T: NumberFormatter + ?Sized> NumberFormatter for &T {
    fn format(
        &self,
        value: f64,
        locale: Option<&str>,
        options: &FormatOptions,
    ) -> Result<String> {
        (**self).format(value, locale, options)
    }

    fn default_locale(&self) -> &str {
        (**self).default_locale()
    }
}

/// Formatter backed by the embedded locale data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFormatter {
    default_locale: String,
}

impl Default for LocaleFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleFormatter {
    /// Formatter whose default locale is `en-US`
    pub fn new() -> Self {
        Self {
            default_locale: FALLBACK_LOCALE.to_string(),
        }
    }

    /// Formatter whose default locale is `tag`; malformed tags keep `en-US`
    ///
    /// # Examples
    /// ```
    /// use locale_number_guide::formatter::{LocaleFormatter, NumberFormatter};
    /// use locale_number_guide::types::FormatOptions;
    ///
    /// let formatter = LocaleFormatter::with_default_locale("de-DE");
    /// let text = formatter.format(1234.56, None, &FormatOptions::decimal()).unwrap();
    /// assert_eq!(text, "1.234,56");
    /// ```
    pub fn with_default_locale(tag: &str) -> Self {
        match canonicalize_tag(tag) {
            Some(default_locale) => Self { default_locale },
            None => {
                warn!(tag, "ignoring malformed default locale");
                Self::new()
            }
        }
    }

    fn locale_settings(&self, locale: Option<&str>) -> Result<LocaleSettings> {
        let tag = match locale {
            Some(requested) => canonicalize_tag(requested)
                .ok_or_else(|| FormatError::InvalidLocale(requested.to_string()))?,
            None => self.default_locale.clone(),
        };
        Ok(resolve_locale_settings(&tag, &self.default_locale))
    }
}

impl NumberFormatter for LocaleFormatter {
    fn format(
        &self,
        value: f64,
        locale: Option<&str>,
        options: &FormatOptions,
    ) -> Result<String> {
        let settings = self.locale_settings(locale)?;
        let currency = resolve_currency(options)?;

        let pattern_str = match options.style {
            Style::Decimal => &settings.decimal_pattern,
            Style::Currency => &settings.currency_pattern,
        };
        let pattern = parse_number_pattern(pattern_str).map_err(FormatError::InvalidPattern)?;

        let (default_min, default_max) = match (options.style, currency.as_deref()) {
            (Style::Currency, Some(code)) => {
                let minor_units = currency_digits(code) as usize;
                (minor_units, minor_units)
            }
            _ => (
                pattern.positive.min_fraction_digits,
                pattern.positive.max_fraction_digits,
            ),
        };
        let (min_fraction_digits, max_fraction_digits) =
            resolve_fraction_digits(options, default_min, default_max)?;

        let digit_options = DigitOptions {
            min_integer_digits: pattern.positive.min_integer_digits.max(1),
            min_fraction_digits,
            max_fraction_digits,
            use_grouping: options.use_grouping,
        };

        let symbol = match (options.style, currency.as_deref()) {
            (Style::Currency, Some(code)) => Some(settings.currency_symbol(code)),
            _ => None,
        };

        let formatted = format_with_pattern(value, &pattern, &digit_options, symbol, &settings);
        trace!(value, locale = %settings.locale, %formatted, "formatted number");
        Ok(formatted)
    }

    fn default_locale(&self) -> &str {
        &self.default_locale
    }
}

/// Format a number for an explicit locale with the default `en-US` fallback
///
/// # Arguments
/// * `value` - The numeric value to format
/// * `locale` - Language tag such as `fr-FR`
/// * `options` - Style, currency and fraction digit options
///
/// # Examples
/// ```
/// use locale_number_guide::format_number;
/// use locale_number_guide::types::FormatOptions;
///
/// let result = format_number(1234567.89, "en-US", &FormatOptions::currency("USD"));
/// assert_eq!(result.unwrap(), "$1,234,567.89");
/// ```
pub fn format_number(value: f64, locale: &str, options: &FormatOptions) -> Result<String> {
    LocaleFormatter::new().format(value, Some(locale), options)
}

/// Validate the currency option; an absent code is only an error for the currency style
fn resolve_currency(options: &FormatOptions) -> Result<Option<String>> {
    let currency = match &options.currency {
        Some(code) => {
            if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(FormatError::InvalidCurrency(code.clone()));
            }
            Some(code.to_ascii_uppercase())
        }
        None => None,
    };
    if options.style == Style::Currency && currency.is_none() {
        return Err(FormatError::MissingCurrency);
    }
    Ok(currency)
}

/// Merge explicit fraction digit bounds with the style defaults
fn resolve_fraction_digits(
    options: &FormatOptions,
    default_min: usize,
    default_max: usize,
) -> Result<(usize, usize)> {
    let check = |option: &'static str, value: u32| -> Result<usize> {
        if value > MAX_FRACTION_DIGITS {
            Err(FormatError::FractionDigitsOutOfRange { option, value })
        } else {
            Ok(value as usize)
        }
    };

    let minimum = options
        .minimum_fraction_digits
        .map(|v| check("minimumFractionDigits", v))
        .transpose()?;
    let maximum = options
        .maximum_fraction_digits
        .map(|v| check("maximumFractionDigits", v))
        .transpose()?;

    match (minimum, maximum) {
        (None, None) => Ok((default_min, default_max)),
        (Some(min), None) => Ok((min, default_max.max(min))),
        (None, Some(max)) => Ok((default_min.min(max), max)),
        (Some(min), Some(max)) if min > max => Err(FormatError::FractionDigitsOutOfRange {
            option: "maximumFractionDigits",
            value: max as u32,
        }),
        (Some(min), Some(max)) => Ok((min, max)),
    }
}
