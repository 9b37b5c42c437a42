pub mod cli;
pub mod controller;
pub mod environment;
pub mod error;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod types;

// Main API exports
pub use controller::RenderController;
pub use error::FormatError;
pub use formatter::{LocaleFormatter, NumberFormatter, format_number};
pub use parser::parse_number_pattern;
pub use types::*;

#[cfg(test)]
mod tests;
