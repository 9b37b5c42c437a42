//! Locale support for number formatting
//!
//! This module loads the embedded locale data, validates language tags and
//! resolves a tag to the `LocaleSettings` used by the formatter. A tag is
//! resolved by walking its fallback chain (`ll-Ssss-RR → ll-Ssss → ll`) and
//! layering every entry found over the root entry.

use std::collections::HashMap;
use std::sync::OnceLock;

use thiserror::Error;
use tracing::{debug, error};

use crate::parser::parse_number_pattern;
use crate::types::LocaleSettings;

/// Error type for locale data operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// An error occurred while parsing locale data
    #[error("Error parsing locale data: {0}")]
    ParseError(String),
}

type Result<T> = std::result::Result<T, LocaleError>;

const ROOT: &str = "root";

/// Values a single locale entry sets on top of its parent
#[derive(Debug, Clone, Default)]
struct LocaleOverrides {
    decimal: Option<String>,
    group: Option<String>,
    minus: Option<String>,
    percent: Option<String>,
    zero_digit: Option<char>,
    min_grouping_digits: Option<usize>,
    decimal_pattern: Option<String>,
    currency_pattern: Option<String>,
    nan: Option<String>,
    infinity: Option<String>,
    currency_symbols: HashMap<String, String>,
}

impl LocaleOverrides {
    fn apply_to(&self, settings: &mut LocaleSettings) {
        if let Some(decimal) = &self.decimal {
            settings.decimal_separator = decimal.clone();
        }
        if let Some(group) = &self.group {
            settings.group_separator = group.clone();
        }
        if let Some(minus) = &self.minus {
            settings.minus_sign = minus.clone();
        }
        if let Some(percent) = &self.percent {
            settings.percent_sign = percent.clone();
        }
        if let Some(zero) = self.zero_digit {
            settings.zero_digit = zero;
        }
        if let Some(min_grouping) = self.min_grouping_digits {
            settings.min_grouping_digits = min_grouping;
        }
        if let Some(pattern) = &self.decimal_pattern {
            settings.decimal_pattern = pattern.clone();
        }
        if let Some(pattern) = &self.currency_pattern {
            settings.currency_pattern = pattern.clone();
        }
        if let Some(nan) = &self.nan {
            settings.nan_symbol = nan.clone();
        }
        if let Some(infinity) = &self.infinity {
            settings.infinity_symbol = infinity.clone();
        }
        for (code, symbol) in &self.currency_symbols {
            settings
                .currency_symbols
                .insert(code.clone(), symbol.clone());
        }
    }
}

/// Represents a locale manager that provides access to locale-specific settings
pub struct LocaleManager {
    overrides: HashMap<String, LocaleOverrides>,
    currency_digits: HashMap<String, u32>,
    default_currency_digits: u32,
}

// Global singleton for locale settings
static LOCALE_MANAGER: OnceLock<LocaleManager> = OnceLock::new();

impl LocaleManager {
    /// Create a new locale manager with the embedded locale data
    fn new() -> Self {
        let mut manager = Self {
            overrides: HashMap::new(),
            currency_digits: HashMap::new(),
            default_currency_digits: 2,
        };

        // Root defaults from LocaleSettings::default still apply when this fails
        if let Err(e) = manager.load_embedded_data() {
            error!(error = %e, "failed to load embedded locale data");
        }
        debug!(
            locales = manager.overrides.len(),
            currencies = manager.currency_digits.len(),
            "loaded locale data"
        );

        manager
    }

    /// Load the embedded locale data from the TOML files
    fn load_embedded_data(&mut self) -> Result<()> {
        let locale_settings_toml = include_str!("locale/locale_settings.toml");
        self.parse_locale_settings(locale_settings_toml)?;

        let currency_data_toml = include_str!("locale/currency_data.toml");
        self.parse_currency_data(currency_data_toml)?;

        Ok(())
    }

    /// Parse the locale settings TOML data
    fn parse_locale_settings(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Root is not a table".to_string()))?;

        let mut overrides = HashMap::with_capacity(table.len());
        for (locale_id, value) in table {
            if locale_id != ROOT && canonicalize_tag(locale_id).as_deref() != Some(locale_id) {
                return Err(LocaleError::ParseError(format!(
                    "{locale_id} is not a canonical language tag"
                )));
            }
            let entry = parse_locale_overrides(value)
                .map_err(|e| LocaleError::ParseError(format!("{locale_id}: {e}")))?;
            overrides.insert(locale_id.to_string(), entry);
        }

        self.overrides = overrides;
        Ok(())
    }

    /// Parse the ISO 4217 minor unit table
    fn parse_currency_data(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let digits_table = parsed_toml
            .get("currency_digits")
            .and_then(|v| v.as_table())
            .ok_or_else(|| {
                LocaleError::ParseError("Missing [currency_digits] table".to_string())
            })?;

        for (code, value) in digits_table {
            let digits = value
                .as_integer()
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| {
                    LocaleError::ParseError(format!("Invalid minor unit for {code}"))
                })?;

            if code == "default" {
                self.default_currency_digits = digits;
            } else {
                self.currency_digits.insert(code.to_ascii_uppercase(), digits);
            }
        }

        Ok(())
    }

    /// Get the global locale manager instance
    fn get() -> &'static Self {
        LOCALE_MANAGER.get_or_init(Self::new)
    }

    /// The fallback chain of `tag`, if any link in it has data
    fn supported_chain(&self, tag: &str) -> Option<Vec<String>> {
        let chain = fallback_chain(tag);
        chain
            .iter()
            .any(|candidate| self.overrides.contains_key(candidate))
            .then_some(chain)
    }

    /// Layer root and every entry of `chain`, least specific first
    fn settings_for_chain(&self, chain: &[String]) -> LocaleSettings {
        let mut settings = LocaleSettings::default();
        if let Some(root) = self.overrides.get(ROOT) {
            root.apply_to(&mut settings);
        }
        for candidate in chain.iter().rev() {
            if let Some(entry) = self.overrides.get(candidate) {
                entry.apply_to(&mut settings);
            }
        }
        if let Some(tag) = chain.first() {
            settings.locale = tag.clone();
        }
        settings
    }

    fn resolve(&self, tag: &str, default_tag: &str) -> LocaleSettings {
        if let Some(chain) = self.supported_chain(tag) {
            return self.settings_for_chain(&chain);
        }
        debug!(tag, default_tag, "no locale data, using the default locale");
        let default_chain = self
            .supported_chain(default_tag)
            .unwrap_or_else(|| fallback_chain(default_tag));
        self.settings_for_chain(&default_chain)
    }
}

fn parse_locale_overrides(value: &toml::Value) -> Result<LocaleOverrides> {
    let table = value
        .as_table()
        .ok_or_else(|| LocaleError::ParseError("Locale setting is not a table".to_string()))?;

    let string_field = |key: &str| -> Result<Option<String>> {
        match table.get(key) {
            None => Ok(None),
            Some(v) => v
                .as_str()
                .map(|s| Some(s.to_string()))
                .ok_or_else(|| LocaleError::ParseError(format!("{key} is not a string"))),
        }
    };

    let mut overrides = LocaleOverrides {
        decimal: string_field("decimal")?,
        group: string_field("group")?,
        minus: string_field("minus")?,
        percent: string_field("percent")?,
        nan: string_field("nan")?,
        infinity: string_field("infinity")?,
        ..LocaleOverrides::default()
    };

    if let Some(zero) = string_field("zero_digit")? {
        let zero_char = zero
            .chars()
            .next()
            .ok_or_else(|| LocaleError::ParseError("zero_digit is empty".to_string()))?;
        overrides.zero_digit = Some(zero_char);
    }

    if let Some(value) = table.get("min_grouping_digits") {
        let min_grouping = value
            .as_integer()
            .and_then(|v| usize::try_from(v).ok())
            .filter(|v| *v >= 1)
            .ok_or_else(|| {
                LocaleError::ParseError("min_grouping_digits must be a positive integer".to_string())
            })?;
        overrides.min_grouping_digits = Some(min_grouping);
    }

    // Reject broken patterns at load time rather than on every format call
    for (key, slot) in [
        ("decimal_pattern", &mut overrides.decimal_pattern),
        ("currency_pattern", &mut overrides.currency_pattern),
    ] {
        if let Some(pattern) = string_field(key)? {
            parse_number_pattern(&pattern)
                .map_err(|e| LocaleError::ParseError(format!("{key}: {e}")))?;
            *slot = Some(pattern);
        }
    }

    if let Some(symbols) = table.get("currency_symbols") {
        let symbols = symbols.as_table().ok_or_else(|| {
            LocaleError::ParseError("currency_symbols is not a table".to_string())
        })?;
        for (code, symbol) in symbols {
            let symbol = symbol.as_str().ok_or_else(|| {
                LocaleError::ParseError(format!("currency symbol for {code} is not a string"))
            })?;
            overrides
                .currency_symbols
                .insert(code.to_ascii_uppercase(), symbol.to_string());
        }
    }

    Ok(overrides)
}

/// Candidate tags from most to least specific: `zh-Hant-TW`, `zh-Hant`, `zh`
fn fallback_chain(tag: &str) -> Vec<String> {
    let mut chain = Vec::new();
    let mut current = tag;
    loop {
        chain.push(current.to_string());
        match current.rfind('-') {
            Some(idx) => current = &current[..idx],
            None => break,
        }
    }
    chain
}

/// Validate a BCP 47 style language tag and return its canonical casing
///
/// Returns `None` for malformed tags such as `en_US`, `e` or `en--US`.
///
/// # Examples
/// ```
/// use locale_number_guide::locale::canonicalize_tag;
///
/// assert_eq!(canonicalize_tag("EN-us").as_deref(), Some("en-US"));
/// assert_eq!(canonicalize_tag("zh-hant-tw").as_deref(), Some("zh-Hant-TW"));
/// assert_eq!(canonicalize_tag("en_US"), None);
/// ```
pub fn canonicalize_tag(tag: &str) -> Option<String> {
    let mut subtags = tag.split('-');
    let language = subtags.next()?;
    let language_ok = matches!(language.len(), 2..=3 | 5..=8)
        && language.chars().all(|c| c.is_ascii_alphabetic());
    if !language_ok {
        return None;
    }

    let mut canonical = language.to_ascii_lowercase();
    for (idx, subtag) in subtags.enumerate() {
        if subtag.is_empty()
            || subtag.len() > 8
            || !subtag.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return None;
        }
        let alphabetic = subtag.chars().all(|c| c.is_ascii_alphabetic());
        canonical.push('-');
        match subtag.len() {
            4 if idx == 0 && alphabetic => {
                let (first, rest) = subtag.split_at(1);
                canonical.push_str(&first.to_ascii_uppercase());
                canonical.push_str(&rest.to_ascii_lowercase());
            }
            2 if alphabetic => canonical.push_str(&subtag.to_ascii_uppercase()),
            _ => canonical.push_str(&subtag.to_ascii_lowercase()),
        }
    }
    Some(canonical)
}

/// Get locale settings for a tag (e.g., "en-US", "fr"), if its language has data
pub fn get_locale_settings(locale_id: &str) -> Option<LocaleSettings> {
    let tag = canonicalize_tag(locale_id)?;
    let manager = LocaleManager::get();
    manager
        .supported_chain(&tag)
        .map(|chain| manager.settings_for_chain(&chain))
}

/// Resolve settings for an already canonical tag, falling back to `default_tag`
pub fn resolve_locale_settings(tag: &str, default_tag: &str) -> LocaleSettings {
    LocaleManager::get().resolve(tag, default_tag)
}

/// ISO 4217 minor unit count for a currency code
pub fn currency_digits(code: &str) -> u32 {
    let manager = LocaleManager::get();
    manager
        .currency_digits
        .get(&code.to_ascii_uppercase())
        .copied()
        .unwrap_or(manager.default_currency_digits)
}

/// List all locale identifiers that carry data, sorted
pub fn list_available_locales() -> Vec<String> {
    let mut locales: Vec<String> = LocaleManager::get()
        .overrides
        .keys()
        .filter(|id| id.as_str() != ROOT)
        .cloned()
        .collect();
    locales.sort();
    locales
}
