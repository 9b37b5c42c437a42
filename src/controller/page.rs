//! The static page shell.
//!
//! Explanatory content is assembled once; rendering the page only fills the
//! region slots and the input controls.

use crate::controller::catalog::{Catalog, CurrencyChoice};
use crate::controller::inputs::{InputState, MAX_DECIMAL_PLACES};
use crate::controller::region::{Document, RegionId, escape_html};

/// Input controls whose value comes from the current snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    NumberInput,
    CurrencySelect,
    DecimalPlacesInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Fragment {
    Static(String),
    /// A region rendered inside an element of the given tag
    Region(RegionId, &'static str),
    Control(Control),
}

#[derive(Debug, Default)]
struct PageBuilder {
    fragments: Vec<Fragment>,
}

impl PageBuilder {
    fn text(mut self, markup: &str) -> Self {
        if let Some(Fragment::Static(last)) = self.fragments.last_mut() {
            last.push_str(markup);
        } else {
            self.fragments.push(Fragment::Static(markup.to_string()));
        }
        self
    }

    fn region(mut self, region: RegionId, tag: &'static str) -> Self {
        self.fragments.push(Fragment::Region(region, tag));
        self
    }

    fn control(mut self, control: Control) -> Self {
        self.fragments.push(Fragment::Control(control));
        self
    }
}

/// Static page content interleaved with region slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    fragments: Vec<Fragment>,
    currencies: Vec<CurrencyChoice>,
}

impl Page {
    pub fn new(catalog: &Catalog) -> Self {
        let builder = PageBuilder::default()
            .text("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n")
            .text("<title>Locale Number Formatting Guide</title>\n</head>\n<body>\n")
            .text("<div id=\"app\"><div class=\"container\">\n")
            .text("<h1>Locale Number Formatting Interactive Guide</h1>\n")
            .text("<p class=\"subtitle\">Explore how numbers are formatted across different locales</p>\n");
        let builder = syntax_section(builder);
        let builder = input_section(builder);
        let builder = basic_section(builder);
        let builder = currency_section(builder);
        let builder = decimal_section(builder);
        let builder = options_section(builder);
        let builder = test_case_section(builder);
        let builder = auto_detection_section(builder).text("</div></div>\n</body>\n</html>\n");

        Self {
            fragments: builder.fragments,
            currencies: catalog.currencies().to_vec(),
        }
    }

    /// Full HTML for the current document and input snapshot
    pub fn render(&self, document: &Document, state: &InputState) -> String {
        let mut html = String::new();
        for fragment in &self.fragments {
            match fragment {
                Fragment::Static(markup) => html.push_str(markup),
                Fragment::Region(region, tag) => {
                    html.push_str(&format!("<{tag} id=\"{}\">", region.id()));
                    html.push_str(&document.markup(*region));
                    html.push_str(&format!("</{tag}>"));
                }
                Fragment::Control(control) => html.push_str(&self.render_control(*control, state)),
            }
        }
        html
    }

    fn render_control(&self, control: Control, state: &InputState) -> String {
        match control {
            Control::NumberInput => format!(
                "<input type=\"number\" id=\"custom-number\" value=\"{}\" step=\"any\">",
                escape_html(&state.number)
            ),
            Control::DecimalPlacesInput => format!(
                "<input type=\"number\" id=\"decimal-places\" value=\"{}\" min=\"0\" max=\"{MAX_DECIMAL_PLACES}\">",
                escape_html(&state.decimal_places)
            ),
            Control::CurrencySelect => {
                let selected = state.currency.trim();
                let options: String = self
                    .currencies
                    .iter()
                    .map(|choice| {
                        let marker = if choice.code == selected { " selected" } else { "" };
                        format!(
                            "<option value=\"{}\"{marker}>{}</option>",
                            escape_html(&choice.code),
                            escape_html(&choice.label)
                        )
                    })
                    .collect();
                format!("<select id=\"currency-select\">{options}</select>")
            }
        }
    }
}

fn syntax_section(builder: PageBuilder) -> PageBuilder {
    builder
        .text("<div class=\"syntax-section\">\n<h2>Syntax</h2>\n")
        .text("<pre><code>formatter.format(value, locale, &amp;options)</code></pre>\n<ul>\n")
        .text("<li><strong>locale</strong> (optional): a language tag such as 'en-US' or 'fr-FR'. ")
        .text("With <code>None</code> the environment's default locale is used.</li>\n")
        .text("<li><strong>options</strong>: style, currency and fraction digit settings.</li>\n")
        .text("</ul>\n</div>\n")
}

fn input_section(builder: PageBuilder) -> PageBuilder {
    builder
        .text("<div class=\"input-section\">\n<label for=\"custom-number\">Enter a number:</label>\n")
        .control(Control::NumberInput)
        .text("\n</div>\n")
}

fn basic_section(builder: PageBuilder) -> PageBuilder {
    builder
        .text("<div class=\"results-section\">\n<h2>Basic Formatting</h2>\n")
        .text("<div class=\"code-example\"><pre><code>let num = ")
        .region(RegionId::ExampleNumber1, "span")
        .text(";\nformatter.format(num, Some(\"en-US\"), &amp;FormatOptions::decimal()); // \"1,234,567.89\"\n")
        .text("formatter.format(num, Some(\"fr-FR\"), &amp;FormatOptions::decimal()); // \"1 234 567,89\"\n")
        .text("formatter.format(num, None, &amp;FormatOptions::decimal());          // default locale</code></pre></div>\n")
        .region(RegionId::BasicResults, "div")
        .text("\n</div>\n")
}

fn currency_section(builder: PageBuilder) -> PageBuilder {
    builder
        .text("<div class=\"results-section\">\n<h2>Currency Formatting</h2>\n")
        .text("<div class=\"code-example\"><pre><code>let price = ")
        .region(RegionId::ExampleNumber2, "span")
        .text(";\nformatter.format(price, Some(\"en-US\"), &amp;FormatOptions::currency(\"")
        .region(RegionId::ExampleCurrency, "span")
        .text("\"));</code></pre></div>\n")
        .text("<div class=\"controls\">\n<label for=\"currency-select\">Currency:</label>\n")
        .control(Control::CurrencySelect)
        .text("\n</div>\n")
        .region(RegionId::CurrencyResults, "div")
        .text("\n</div>\n")
}

fn decimal_section(builder: PageBuilder) -> PageBuilder {
    builder
        .text("<div class=\"results-section\">\n<h2>Decimal Precision</h2>\n")
        .text("<div class=\"code-example\"><pre><code>let value = ")
        .region(RegionId::ExampleNumber3, "span")
        .text(";\nformatter.format(value, Some(\"en-US\"), &amp;FormatOptions::decimal()\n")
        .text("    .with_fraction_digits(")
        .region(RegionId::ExampleDecimals, "span")
        .text(", ")
        .region(RegionId::ExampleDecimalsMax, "span")
        .text("));</code></pre></div>\n")
        .text("<div class=\"controls\">\n<label for=\"decimal-places\">Decimal places:</label>\n")
        .control(Control::DecimalPlacesInput)
        .text("\n</div>\n")
        .region(RegionId::DecimalResults, "div")
        .text("\n</div>\n")
}

fn options_section(builder: PageBuilder) -> PageBuilder {
    const CARDS: [(&str, &str); 5] = [
        (
            "style",
            "<code>Style::Decimal</code> (default)<br>\n<code>Style::Currency</code>",
        ),
        (
            "currency",
            "<code>\"USD\"</code>, <code>\"EUR\"</code>, <code>\"GBP\"</code>, etc.<br>\n<small>Required when style is currency</small>",
        ),
        (
            "minimum_fraction_digits",
            "<code>0</code> to <code>100</code><br>\n<small>Minimum decimal places</small>",
        ),
        (
            "maximum_fraction_digits",
            "<code>0</code> to <code>100</code><br>\n<small>Maximum decimal places</small>",
        ),
        (
            "use_grouping",
            "<code>true</code> (default) or <code>false</code><br>\n<small>Show thousand separators</small>",
        ),
    ];

    let mut builder = builder
        .text("<div class=\"results-section\">\n<h2>Common Options</h2>\n<div class=\"options-grid\">\n");
    for (name, body) in CARDS {
        builder = builder
            .text("<div class=\"option-card\">\n<h3>")
            .text(name)
            .text("</h3>\n")
            .text(body)
            .text("\n</div>\n");
    }
    builder.text("</div>\n</div>\n")
}

fn test_case_section(builder: PageBuilder) -> PageBuilder {
    builder
        .text("<div class=\"results-section\">\n<h2>Test Cases</h2>\n")
        .region(RegionId::TestCases, "div")
        .text("\n</div>\n")
}

fn auto_detection_section(builder: PageBuilder) -> PageBuilder {
    builder
        .text("<div class=\"results-section\">\n<h2>Auto-Detection</h2>\n")
        .text("<p>When no locale is given, the formatter uses the environment's default locale.</p>\n")
        .text("<div class=\"code-example\"><pre><code>// Auto-detect from the environment\n")
        .text("formatter.format(1234.56, None, &amp;FormatOptions::decimal());\n\n")
        .text("// Your locale: ")
        .region(RegionId::BrowserLocale, "strong")
        .text("\n// Result: ")
        .region(RegionId::BrowserResult, "strong")
        .text("</code></pre></div>\n</div>\n")
}
