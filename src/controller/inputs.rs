//! Input field snapshots and their parsed form.

use crate::parser::{parse_float, parse_int};

/// Decimal places used when the field does not hold an integer
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

/// Largest value the decimal places field accepts
pub const MAX_DECIMAL_PLACES: u32 = 10;

/// Raw contents of the three input fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    pub number: String,
    pub currency: String,
    pub decimal_places: String,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            number: "1234567.89".to_string(),
            currency: "USD".to_string(),
            decimal_places: DEFAULT_DECIMAL_PLACES.to_string(),
        }
    }
}

impl InputState {
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_decimal_places(mut self, decimal_places: impl Into<String>) -> Self {
        self.decimal_places = decimal_places.into();
        self
    }
}

/// Sanitized values read from an [`InputState`]
#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    pub number: f64,
    pub currency: String,
    pub decimal_places: u32,
}

impl Inputs {
    pub fn from_snapshot(state: &InputState) -> Self {
        Self {
            number: parse_number_input(&state.number),
            currency: state.currency.trim().to_string(),
            decimal_places: parse_decimal_places(&state.decimal_places),
        }
    }
}

/// Unparsable, empty, NaN and zero (including `-0`) inputs all read as `0`
pub fn parse_number_input(raw: &str) -> f64 {
    match parse_float(raw) {
        Some(value) if value != 0.0 && !value.is_nan() => value,
        _ => 0.0,
    }
}

/// Integer prefix clamped to `0..=MAX_DECIMAL_PLACES`, or the default when absent
pub fn parse_decimal_places(raw: &str) -> u32 {
    match parse_int(raw) {
        Some(places) => places.clamp(0, i64::from(MAX_DECIMAL_PLACES)) as u32,
        None => DEFAULT_DECIMAL_PLACES,
    }
}
