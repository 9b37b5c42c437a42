//! Pattern and input parsing module
//!
//! This module parses CLDR number patterns into their `NumberPattern` representation,
//! and reads the page's free-form input fields.
//! The main entry points are `parse_number_pattern`, `parse_float` and `parse_int`.

mod format;
mod input;
mod sections;
mod tokens;

pub use format::parse_number_pattern;
pub use input::{parse_float, parse_int};
