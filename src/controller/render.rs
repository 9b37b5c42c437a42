//! Render operations.
//!
//! Each function maps the catalog, a formatter and one input snapshot to
//! fresh region contents. None of them touch the document; the controller
//! writes their results.

use tracing::trace;

use crate::controller::catalog::{Catalog, Locale};
use crate::controller::inputs::Inputs;
use crate::controller::region::{RegionContent, RegionId, ResultRow, TestCaseBlock};
use crate::environment::LocaleEnvironment;
use crate::formatter::{NumberFormatter, js_number_string};
use crate::types::FormatOptions;

/// Value formatted by the auto-detection demo
pub const BROWSER_DEMO_VALUE: f64 = 1234.56;

/// Shown when the environment does not report a locale
pub const UNKNOWN_LOCALE: &str = "unknown";

/// One row per locale; a failing locale only affects its own row
fn locale_rows<F: NumberFormatter + ?Sized>(
    locales: &[Locale],
    formatter: &F,
    value: f64,
    options: &FormatOptions,
) -> Vec<ResultRow> {
    locales
        .iter()
        .map(|locale| {
            ResultRow::new(
                locale.name.clone(),
                formatter.format(value, Some(&locale.code), options),
            )
        })
        .collect()
}

pub fn render_basic<F: NumberFormatter + ?Sized>(
    catalog: &Catalog,
    formatter: &F,
    inputs: &Inputs,
) -> RegionContent {
    trace!(number = inputs.number, "rendering basic results");
    RegionContent::Rows(locale_rows(
        catalog.locales(),
        formatter,
        inputs.number,
        &FormatOptions::decimal(),
    ))
}

pub fn render_currency<F: NumberFormatter + ?Sized>(
    catalog: &Catalog,
    formatter: &F,
    inputs: &Inputs,
) -> RegionContent {
    trace!(number = inputs.number, currency = %inputs.currency, "rendering currency results");
    RegionContent::Rows(locale_rows(
        catalog.locales(),
        formatter,
        inputs.number,
        &FormatOptions::currency(inputs.currency.as_str()),
    ))
}

pub fn render_decimal_precision<F: NumberFormatter + ?Sized>(
    catalog: &Catalog,
    formatter: &F,
    inputs: &Inputs,
) -> RegionContent {
    let places = inputs.decimal_places;
    trace!(number = inputs.number, places, "rendering decimal precision results");
    RegionContent::Rows(locale_rows(
        catalog.locales(),
        formatter,
        inputs.number,
        &FormatOptions::decimal().with_fraction_digits(places, places),
    ))
}

/// Independent of the inputs; the test values are fixed
pub fn render_test_cases<F: NumberFormatter + ?Sized>(
    catalog: &Catalog,
    formatter: &F,
) -> RegionContent {
    let options = FormatOptions::decimal();
    let blocks = catalog
        .test_cases()
        .iter()
        .map(|test_case| TestCaseBlock {
            heading: format!(
                "{} ({})",
                test_case.description,
                js_number_string(test_case.value)
            ),
            rows: locale_rows(
                catalog.test_case_locales(),
                formatter,
                test_case.value,
                &options,
            ),
        })
        .collect();
    RegionContent::TestCases(blocks)
}

/// Mirror the inputs into the code snippets
pub fn render_code_examples(inputs: &Inputs) -> Vec<(RegionId, RegionContent)> {
    let number = js_number_string(inputs.number);
    let places = inputs.decimal_places.to_string();
    vec![
        (RegionId::ExampleNumber1, RegionContent::Text(number.clone())),
        (RegionId::ExampleNumber2, RegionContent::Text(number.clone())),
        (RegionId::ExampleNumber3, RegionContent::Text(number)),
        (RegionId::ExampleCurrency, RegionContent::Text(inputs.currency.clone())),
        (RegionId::ExampleDecimals, RegionContent::Text(places.clone())),
        (RegionId::ExampleDecimalsMax, RegionContent::Text(places)),
    ]
}

/// Report the ambient locale and format a fixed value without an explicit locale
pub fn render_browser_locale_demo<F, E>(formatter: &F, environment: &E) -> Vec<(RegionId, RegionContent)>
where
    F: NumberFormatter + ?Sized,
    E: LocaleEnvironment + ?Sized,
{
    let locale = environment
        .preferred_locale()
        .unwrap_or_else(|| UNKNOWN_LOCALE.to_string());
    let result = ResultRow::new(
        locale.clone(),
        formatter.format(BROWSER_DEMO_VALUE, None, &FormatOptions::decimal()),
    );
    vec![
        (RegionId::BrowserLocale, RegionContent::Text(locale)),
        (RegionId::BrowserResult, RegionContent::Text(result.display_value())),
    ]
}
