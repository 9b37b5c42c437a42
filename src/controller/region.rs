//! Output regions and their contents.

use std::collections::BTreeMap;
use std::fmt::{self, Write};

use crate::error::FormatError;

/// A named output slot of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegionId {
    BasicResults,
    CurrencyResults,
    DecimalResults,
    TestCases,
    ExampleNumber1,
    ExampleNumber2,
    ExampleNumber3,
    ExampleCurrency,
    ExampleDecimals,
    ExampleDecimalsMax,
    BrowserLocale,
    BrowserResult,
}

impl RegionId {
    pub const ALL: [RegionId; 12] = [
        RegionId::BasicResults,
        RegionId::CurrencyResults,
        RegionId::DecimalResults,
        RegionId::TestCases,
        RegionId::ExampleNumber1,
        RegionId::ExampleNumber2,
        RegionId::ExampleNumber3,
        RegionId::ExampleCurrency,
        RegionId::ExampleDecimals,
        RegionId::ExampleDecimalsMax,
        RegionId::BrowserLocale,
        RegionId::BrowserResult,
    ];

    /// The element id the region renders into
    pub fn id(self) -> &'static str {
        match self {
            RegionId::BasicResults => "basic-results",
            RegionId::CurrencyResults => "currency-results",
            RegionId::DecimalResults => "decimal-results",
            RegionId::TestCases => "test-cases",
            RegionId::ExampleNumber1 => "example-num-1",
            RegionId::ExampleNumber2 => "example-num-2",
            RegionId::ExampleNumber3 => "example-num-3",
            RegionId::ExampleCurrency => "example-currency",
            RegionId::ExampleDecimals => "example-decimals",
            RegionId::ExampleDecimalsMax => "example-decimals-max",
            RegionId::BrowserLocale => "browser-locale",
            RegionId::BrowserResult => "browser-result",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|region| region.id() == id)
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One locale's formatted value, or the error formatting it raised
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub locale_name: String,
    pub outcome: Result<String, FormatError>,
}

impl ResultRow {
    pub fn new(locale_name: impl Into<String>, outcome: Result<String, FormatError>) -> Self {
        Self {
            locale_name: locale_name.into(),
            outcome,
        }
    }

    /// Text shown in the row's value cell
    pub fn display_value(&self) -> String {
        match &self.outcome {
            Ok(formatted) => formatted.clone(),
            Err(e) => format!("Error: {e}"),
        }
    }

    fn write_markup(&self, out: &mut String) -> fmt::Result {
        let class = if self.outcome.is_err() { " class=\"error\"" } else { "" };
        write!(
            out,
            "<div class=\"result-row\"><span class=\"locale-name\">{}:</span><code{class}>{}</code></div>",
            escape_html(&self.locale_name),
            escape_html(&self.display_value()),
        )
    }
}

/// A test value with one row per test-case locale
#[derive(Debug, Clone, PartialEq)]
pub struct TestCaseBlock {
    pub heading: String,
    pub rows: Vec<ResultRow>,
}

/// Everything a region can hold
#[derive(Debug, Clone, PartialEq)]
pub enum RegionContent {
    Rows(Vec<ResultRow>),
    TestCases(Vec<TestCaseBlock>),
    Text(String),
}

impl RegionContent {
    /// HTML placed inside the region's element
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) -> fmt::Result {
        match self {
            RegionContent::Rows(rows) => {
                for row in rows {
                    row.write_markup(out)?;
                }
            }
            RegionContent::TestCases(blocks) => {
                for block in blocks {
                    write!(out, "<div class=\"test-case\"><h3>{}</h3>", escape_html(&block.heading))?;
                    for row in &block.rows {
                        row.write_markup(out)?;
                    }
                    out.push_str("</div>");
                }
            }
            RegionContent::Text(text) => out.push_str(&escape_html(text)),
        }
        Ok(())
    }

    /// Plain text rendering, one row per line
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();
        match self {
            RegionContent::Rows(rows) => {
                for row in rows {
                    lines.push(format!("{}: {}", row.locale_name, row.display_value()));
                }
            }
            RegionContent::TestCases(blocks) => {
                for block in blocks {
                    lines.push(block.heading.clone());
                    for row in &block.rows {
                        lines.push(format!("  {}: {}", row.locale_name, row.display_value()));
                    }
                }
            }
            RegionContent::Text(text) => lines.push(text.clone()),
        }
        lines.join("\n")
    }

    /// Rows held directly by the region; empty for other content
    pub fn rows(&self) -> &[ResultRow] {
        match self {
            RegionContent::Rows(rows) => rows,
            _ => &[],
        }
    }
}

/// Current contents of every rendered region
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    regions: BTreeMap<RegionId, RegionContent>,
}

impl Document {
    pub fn get(&self, region: RegionId) -> Option<&RegionContent> {
        self.regions.get(&region)
    }

    /// Replace a region wholesale
    pub fn set(&mut self, region: RegionId, content: RegionContent) {
        self.regions.insert(region, content);
    }

    /// Markup of a region, empty until it has been rendered
    pub fn markup(&self, region: RegionId) -> String {
        self.get(region)
            .map(RegionContent::to_markup)
            .unwrap_or_default()
    }

    pub fn regions(&self) -> impl Iterator<Item = (RegionId, &RegionContent)> {
        self.regions.iter().map(|(id, content)| (*id, content))
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}
