use locale_number_guide::controller::catalog::{Catalog, Locale, TEST_CASE_LOCALE_COUNT};
use locale_number_guide::controller::inputs::InputState;
use locale_number_guide::controller::region::{RegionContent, RegionId};
use locale_number_guide::controller::{RenderController, RenderOp, Signal};
use locale_number_guide::environment::FixedEnvironment;
use locale_number_guide::error::Result;
use locale_number_guide::formatter::{LocaleFormatter, NumberFormatter};
use locale_number_guide::types::FormatOptions;
use locale_number_guide::FormatError;
use rstest::rstest;

fn controller(
    state: &InputState,
) -> RenderController<LocaleFormatter, FixedEnvironment> {
    let mut controller = RenderController::new(
        Catalog::builtin(),
        LocaleFormatter::new(),
        FixedEnvironment::new("en-US"),
    );
    controller.load(state);
    controller
}

fn region(
    controller: &RenderController<impl NumberFormatter, FixedEnvironment>,
    id: RegionId,
) -> RegionContent {
    controller.document().get(id).cloned().unwrap()
}

/// Fails for one locale and otherwise delegates
struct FailingFor {
    locale: &'static str,
    inner: LocaleFormatter,
}

impl NumberFormatter for FailingFor {
    fn format(&self, value: f64, locale: Option<&str>, options: &FormatOptions) -> Result<String> {
        if locale == Some(self.locale) {
            return Err(FormatError::InvalidLocale(self.locale.to_string()));
        }
        self.inner.format(value, locale, options)
    }

    fn default_locale(&self) -> &str {
        self.inner.default_locale()
    }
}

#[rstest]
#[case("1234567.89")]
#[case("-5432.1")]
#[case("0.0001")]
#[case("1e21")]
#[case("42")]
fn test_basic_one_row_per_locale(#[case] number: &str) {
    let controller = controller(&InputState::default().with_number(number));
    let rows = region(&controller, RegionId::BasicResults);
    let rows = rows.rows();
    assert_eq!(rows.len(), 8);
    for (row, locale) in rows.iter().zip(Catalog::builtin().locales()) {
        assert_eq!(row.locale_name, locale.name);
        assert!(!row.outcome.as_ref().unwrap().is_empty());
    }
}

#[rstest]
#[case("USD")]
#[case("EUR")]
#[case("GBP")]
#[case("JPY")]
fn test_currency_rows_never_empty(#[case] currency: &str) {
    let controller = controller(&InputState::default().with_currency(currency));
    let content = region(&controller, RegionId::CurrencyResults);
    assert_eq!(content.rows().len(), 8);
    for row in content.rows() {
        assert!(!row.display_value().is_empty());
    }
}

#[test]
fn test_currency_values() {
    let controller = controller(&InputState::default().with_currency("JPY"));
    let content = region(&controller, RegionId::CurrencyResults);
    let rows = content.rows();
    assert_eq!(rows[0].outcome.as_deref(), Ok("¥1,234,568"));
    assert_eq!(rows[5].outcome.as_deref(), Ok("￥1,234,568"));
}

#[test]
fn test_invalid_currency_shows_error_rows() {
    let controller = controller(&InputState::default().with_currency("EURO"));
    let content = region(&controller, RegionId::CurrencyResults);
    assert_eq!(content.rows().len(), 8);
    for row in content.rows() {
        assert_eq!(row.display_value(), "Error: Invalid currency code : EURO");
    }
    assert!(content.to_markup().contains("class=\"error\""));
}

#[test]
fn test_decimal_precision_two_places() {
    let controller = controller(&InputState::default());
    let content = region(&controller, RegionId::DecimalResults);
    assert_eq!(content.rows()[0].outcome.as_deref(), Ok("1,234,567.89"));
}

#[test]
fn test_decimal_precision_zero_places() {
    let controller = controller(&InputState::default().with_decimal_places("0"));
    let content = region(&controller, RegionId::DecimalResults);
    assert_eq!(content.rows()[0].outcome.as_deref(), Ok("1,234,568"));
    assert_eq!(content.rows()[4].outcome.as_deref(), Ok("1.234.568"));
}

#[rstest]
#[case("", "1,234,567.89")]
#[case("abc", "1,234,567.89")]
#[case("25", "1,234,567.8900000000")]
#[case("-3", "1,234,568")]
#[case("4.7", "1,234,567.8900")]
fn test_decimal_places_input(#[case] places: &str, #[case] expected: &str) {
    let controller = controller(&InputState::default().with_decimal_places(places));
    let content = region(&controller, RegionId::DecimalResults);
    assert_eq!(content.rows()[0].outcome.as_deref(), Ok(expected));
}

#[test]
fn test_currency_change_leaves_other_regions() {
    let state = InputState::default();
    let mut controller = controller(&state);
    let before = controller.document().clone();

    let changed = state.with_currency("EUR");
    let replaced = controller.dispatch(Signal::CurrencyChange, &changed);
    assert!(replaced.contains(&RegionId::CurrencyResults));
    assert!(replaced.contains(&RegionId::ExampleCurrency));
    assert!(!replaced.contains(&RegionId::BasicResults));

    let after = controller.document();
    for id in [
        RegionId::BasicResults,
        RegionId::DecimalResults,
        RegionId::TestCases,
        RegionId::BrowserLocale,
        RegionId::BrowserResult,
    ] {
        assert_eq!(before.markup(id), after.markup(id), "{id} changed");
    }
    assert_ne!(
        before.markup(RegionId::CurrencyResults),
        after.markup(RegionId::CurrencyResults)
    );
    assert_eq!(after.markup(RegionId::ExampleCurrency), "EUR");
}

#[test]
fn test_decimal_places_change_rerenders_its_section() {
    let state = InputState::default();
    let mut controller = controller(&state);
    let replaced = controller.dispatch(Signal::DecimalPlacesInput, &state.with_decimal_places("4"));
    assert_eq!(
        replaced,
        vec![
            RegionId::DecimalResults,
            RegionId::ExampleNumber1,
            RegionId::ExampleNumber2,
            RegionId::ExampleNumber3,
            RegionId::ExampleCurrency,
            RegionId::ExampleDecimals,
            RegionId::ExampleDecimalsMax,
        ]
    );
    assert_eq!(controller.document().markup(RegionId::ExampleDecimals), "4");
}

#[test]
fn test_number_input_rerenders_everything() {
    let state = InputState::default();
    let mut controller = controller(&state);
    let replaced = controller.dispatch(Signal::NumberInput, &state.with_number("42"));
    assert_eq!(replaced.len(), RegionId::ALL.len());
    assert_eq!(
        controller.document().markup(RegionId::ExampleNumber1),
        "42"
    );
}

#[rstest]
#[case(InputState::default())]
#[case(InputState::default().with_number("abc").with_currency("JPY"))]
#[case(InputState::default().with_decimal_places("9"))]
fn test_test_cases_fixed_shape(#[case] state: InputState) {
    let controller = controller(&state);
    let content = region(&controller, RegionId::TestCases);
    let RegionContent::TestCases(blocks) = &content else {
        panic!("test cases region holds {content:?}");
    };
    assert_eq!(blocks.len(), 6);
    let catalog = Catalog::builtin();
    let expected: Vec<&Locale> = catalog.locales().iter().take(4).collect();
    for block in blocks {
        assert_eq!(block.rows.len(), TEST_CASE_LOCALE_COUNT);
        for (row, locale) in block.rows.iter().zip(&expected) {
            assert_eq!(row.locale_name, locale.name);
        }
    }
    assert_eq!(blocks[0].heading, "Large decimal (1234567.89)");
    assert_eq!(blocks[1].rows[0].outcome.as_deref(), Ok("0"));
    assert_eq!(blocks[5].rows[0].outcome.as_deref(), Ok("3.142"));
}

#[rstest]
#[case("abc")]
#[case("")]
#[case("-0")]
fn test_non_numeric_input_reads_as_zero(#[case] number: &str) {
    let controller = controller(&InputState::default().with_number(number));
    let content = region(&controller, RegionId::BasicResults);
    let values: Vec<String> = content.rows().iter().map(|row| row.display_value()).collect();
    assert_eq!(values.len(), 8);
    for (idx, value) in values.iter().enumerate() {
        // Arabic uses its own zero
        let zero = if idx == 6 { "\u{660}" } else { "0" };
        assert_eq!(value, zero);
    }
    assert_eq!(controller.document().markup(RegionId::ExampleNumber1), "0");
}

#[test]
fn test_failing_locale_yields_one_error_row() {
    let formatter = FailingFor {
        locale: "fr-FR",
        inner: LocaleFormatter::new(),
    };
    let mut controller =
        RenderController::new(Catalog::builtin(), formatter, FixedEnvironment::new("en-US"));
    controller.load(&InputState::default());

    for id in [
        RegionId::BasicResults,
        RegionId::CurrencyResults,
        RegionId::DecimalResults,
    ] {
        let content = controller.document().get(id).cloned().unwrap();
        let errors: Vec<_> = content.rows().iter().filter(|row| row.outcome.is_err()).collect();
        assert_eq!(errors.len(), 1, "{id}");
        assert_eq!(errors[0].locale_name, "French");
        assert_eq!(
            errors[0].display_value(),
            "Error: Incorrect locale information provided: fr-FR"
        );
    }

    let Some(RegionContent::TestCases(blocks)) = controller.document().get(RegionId::TestCases)
    else {
        panic!("missing test cases");
    };
    for block in blocks {
        assert_eq!(block.rows.iter().filter(|row| row.outcome.is_err()).count(), 1);
    }
}

#[test]
fn test_browser_locale_demo() {
    let mut controller = RenderController::new(
        Catalog::builtin(),
        LocaleFormatter::with_default_locale("de-DE"),
        FixedEnvironment::new("de-DE"),
    );
    controller.render_browser_locale_demo(&InputState::default());
    assert_eq!(controller.document().markup(RegionId::BrowserLocale), "de-DE");
    assert_eq!(controller.document().markup(RegionId::BrowserResult), "1.234,56");

    let mut unknown = RenderController::new(
        Catalog::builtin(),
        LocaleFormatter::new(),
        FixedEnvironment::unknown(),
    );
    unknown.render_browser_locale_demo(&InputState::default());
    assert_eq!(unknown.document().markup(RegionId::BrowserLocale), "unknown");
    assert_eq!(unknown.document().markup(RegionId::BrowserResult), "1,234.56");
}

#[test]
fn test_unwired_controller() {
    let state = InputState::default();
    let mut controller = RenderController::unwired(
        Catalog::builtin(),
        LocaleFormatter::new(),
        FixedEnvironment::unknown(),
    );
    assert_eq!(controller.catalog(), &Catalog::builtin());
    assert!(controller.handlers(Signal::NumberInput).is_empty());
    assert!(controller.dispatch(Signal::NumberInput, &state).is_empty());
    assert!(controller.document().is_empty());

    controller.subscribe(Signal::CurrencyChange, RenderOp::Currency);
    assert_eq!(controller.handlers(Signal::CurrencyChange), vec![RenderOp::Currency]);
    let replaced = controller.dispatch(Signal::CurrencyChange, &state);
    assert_eq!(replaced, vec![RegionId::CurrencyResults]);
    assert!(controller.document().get(RegionId::BasicResults).is_none());
}

#[test]
fn test_individual_render_operations() {
    let state = InputState::default().with_number("1000");
    let mut controller = RenderController::unwired(
        Catalog::builtin(),
        LocaleFormatter::new(),
        FixedEnvironment::unknown(),
    );
    controller.render_basic(&state);
    controller.render_currency(&state);
    controller.render_decimal_precision(&state);
    controller.render_test_cases(&state);
    controller.render_code_examples(&state);
    let document = controller.document();
    assert_eq!(document.get(RegionId::BasicResults).unwrap().rows()[0].display_value(), "1,000");
    assert_eq!(
        document.get(RegionId::CurrencyResults).unwrap().rows()[0].display_value(),
        "$1,000.00"
    );
    assert_eq!(
        document.get(RegionId::DecimalResults).unwrap().rows()[0].display_value(),
        "1,000.00"
    );
    assert_eq!(document.markup(RegionId::ExampleDecimalsMax), "2");
    assert!(document.get(RegionId::BrowserLocale).is_none());
}

#[test]
fn test_html_page() {
    let state = InputState::default().with_currency("GBP");
    let controller = controller(&state);
    let html = controller.html(&state);
    assert!(html.starts_with("<!DOCTYPE html>"));
    for id in RegionId::ALL {
        assert!(html.contains(&format!("id=\"{}\"", id.id())), "missing {id}");
    }
    assert!(html.contains("<option value=\"GBP\" selected>"));
    assert!(html.contains("value=\"1234567.89\""));
    assert!(html.contains("<span class=\"locale-name\">English (US):</span><code>1,234,567.89</code>"));
    assert!(html.contains("£1,234,567.89"));
}

#[test]
fn test_html_escapes_inputs() {
    let state = InputState::default().with_number("\"><script>");
    let controller = controller(&state);
    let html = controller.html(&state);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&quot;&gt;&lt;script&gt;"));
}
