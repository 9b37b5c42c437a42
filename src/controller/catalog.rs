//! Fixed demonstration catalogs.
//!
//! The guide always shows the same locales, test values and currency choices.
//! They are plain data handed to the controller at construction.

/// A locale shown as one result row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub code: String,
    pub name: String,
}

impl Locale {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// A fixed value formatted in the test-case section
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub value: f64,
    pub description: String,
}

impl TestCase {
    pub fn new(value: f64, description: impl Into<String>) -> Self {
        Self {
            value,
            description: description.into(),
        }
    }
}

/// An entry of the currency selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyChoice {
    pub code: String,
    pub label: String,
}

impl CurrencyChoice {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// Number of catalog locales shown for each test case
pub const TEST_CASE_LOCALE_COUNT: usize = 4;

const LOCALES: [(&str, &str); 8] = [
    ("en-US", "English (US)"),
    ("en-GB", "English (UK)"),
    ("fr-FR", "French"),
    ("es-ES", "Spanish"),
    ("de-DE", "German"),
    ("ja-JP", "Japanese"),
    ("ar-SA", "Arabic"),
    ("hi-IN", "Hindi"),
];

const TEST_CASES: [(f64, &str); 6] = [
    (1234567.89, "Large decimal"),
    (0.0001, "Small decimal"),
    (-5432.1, "Negative number"),
    (1000000000.0, "Billion"),
    (42.0, "Integer"),
    (3.14159265359, "Pi"),
];

const CURRENCIES: [(&str, &str); 4] = [
    ("USD", "USD ($)"),
    ("EUR", "EUR (€)"),
    ("GBP", "GBP (£)"),
    ("JPY", "JPY (¥)"),
];

/// Immutable catalog of locales, test cases and currency choices
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    locales: Vec<Locale>,
    test_cases: Vec<TestCase>,
    currencies: Vec<CurrencyChoice>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn new(
        locales: Vec<Locale>,
        test_cases: Vec<TestCase>,
        currencies: Vec<CurrencyChoice>,
    ) -> Self {
        Self {
            locales,
            test_cases,
            currencies,
        }
    }

    /// The eight locales, six test values and four currencies of the guide
    pub fn builtin() -> Self {
        Self::new(
            LOCALES
                .iter()
                .map(|(code, name)| Locale::new(*code, *name))
                .collect(),
            TEST_CASES
                .iter()
                .map(|(value, description)| TestCase::new(*value, *description))
                .collect(),
            CURRENCIES
                .iter()
                .map(|(code, label)| CurrencyChoice::new(*code, *label))
                .collect(),
        )
    }

    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    pub fn test_cases(&self) -> &[TestCase] {
        &self.test_cases
    }

    pub fn currencies(&self) -> &[CurrencyChoice] {
        &self.currencies
    }

    /// The leading locales used for the test-case blocks
    pub fn test_case_locales(&self) -> &[Locale] {
        let count = self.locales.len().min(TEST_CASE_LOCALE_COUNT);
        &self.locales[..count]
    }
}
