//! Render controller module
//!
//! The controller owns the page document. Input signals are routed to the
//! render operations subscribed to them; every operation re-reads the input
//! snapshot it is given and replaces its regions wholesale.

pub mod catalog;
pub mod inputs;
pub mod page;
pub mod region;
pub mod render;

use std::fmt;

use tracing::debug;

use crate::environment::LocaleEnvironment;
use crate::formatter::NumberFormatter;

use self::catalog::Catalog;
use self::inputs::{InputState, Inputs};
use self::page::Page;
use self::region::{Document, RegionContent, RegionId};

/// Input change notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// The number field was edited
    NumberInput,
    /// Another currency was selected
    CurrencyChange,
    /// The decimal places field was edited
    DecimalPlacesInput,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Signal::NumberInput => "number-input",
            Signal::CurrencyChange => "currency-change",
            Signal::DecimalPlacesInput => "decimal-places-input",
        };
        f.write_str(name)
    }
}

/// A render operation a signal can be wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderOp {
    Basic,
    Currency,
    DecimalPrecision,
    TestCases,
    CodeExamples,
    BrowserLocaleDemo,
}

impl RenderOp {
    /// Every operation, in full-render order
    pub const ALL: [RenderOp; 6] = [
        RenderOp::Basic,
        RenderOp::Currency,
        RenderOp::DecimalPrecision,
        RenderOp::TestCases,
        RenderOp::CodeExamples,
        RenderOp::BrowserLocaleDemo,
    ];

    /// Regions the operation replaces
    pub fn regions(self) -> &'static [RegionId] {
        match self {
            RenderOp::Basic => &[RegionId::BasicResults],
            RenderOp::Currency => &[RegionId::CurrencyResults],
            RenderOp::DecimalPrecision => &[RegionId::DecimalResults],
            RenderOp::TestCases => &[RegionId::TestCases],
            RenderOp::CodeExamples => &[
                RegionId::ExampleNumber1,
                RegionId::ExampleNumber2,
                RegionId::ExampleNumber3,
                RegionId::ExampleCurrency,
                RegionId::ExampleDecimals,
                RegionId::ExampleDecimalsMax,
            ],
            RenderOp::BrowserLocaleDemo => &[RegionId::BrowserLocale, RegionId::BrowserResult],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Subscription {
    signal: Signal,
    op: RenderOp,
}

/// Keeps the page regions consistent with the inputs
pub struct RenderController<F, E> {
    catalog: Catalog,
    formatter: F,
    environment: E,
    page: Page,
    subscriptions: Vec<Subscription>,
    document: Document,
}

impl<F: NumberFormatter, E: LocaleEnvironment> RenderController<F, E> {
    /// Controller with the default wiring
    ///
    /// Number edits re-render everything; currency and decimal place edits
    /// re-render their own section and the code examples.
    pub fn new(catalog: Catalog, formatter: F, environment: E) -> Self {
        let mut controller = Self::unwired(catalog, formatter, environment);
        for op in RenderOp::ALL {
            controller.subscribe(Signal::NumberInput, op);
        }
        controller.subscribe(Signal::CurrencyChange, RenderOp::Currency);
        controller.subscribe(Signal::CurrencyChange, RenderOp::CodeExamples);
        controller.subscribe(Signal::DecimalPlacesInput, RenderOp::DecimalPrecision);
        controller.subscribe(Signal::DecimalPlacesInput, RenderOp::CodeExamples);
        controller
    }

    /// Controller without any subscriptions
    pub fn unwired(catalog: Catalog, formatter: F, environment: E) -> Self {
        let page = Page::new(&catalog);
        Self {
            catalog,
            formatter,
            environment,
            page,
            subscriptions: Vec::new(),
            document: Document::default(),
        }
    }

    /// Run `op` whenever `signal` is dispatched, after the handlers already registered
    pub fn subscribe(&mut self, signal: Signal, op: RenderOp) {
        self.subscriptions.push(Subscription { signal, op });
    }

    /// Operations wired to `signal`, in registration order
    pub fn handlers(&self, signal: Signal) -> Vec<RenderOp> {
        self.subscriptions
            .iter()
            .filter(|subscription| subscription.signal == signal)
            .map(|subscription| subscription.op)
            .collect()
    }

    /// Deliver a signal and return the regions that were replaced
    pub fn dispatch(&mut self, signal: Signal, state: &InputState) -> Vec<RegionId> {
        let handlers = self.handlers(signal);
        debug!(%signal, handlers = handlers.len(), "dispatching input signal");

        let inputs = Inputs::from_snapshot(state);
        let mut replaced = Vec::new();
        for op in handlers {
            self.apply(op, &inputs);
            for region in op.regions() {
                if !replaced.contains(region) {
                    replaced.push(*region);
                }
            }
        }
        replaced
    }

    /// First render of the page
    pub fn load(&mut self, state: &InputState) {
        debug!("initial render");
        self.render_all(state);
    }

    pub fn render_all(&mut self, state: &InputState) {
        let inputs = Inputs::from_snapshot(state);
        for op in RenderOp::ALL {
            self.apply(op, &inputs);
        }
    }

    pub fn render_basic(&mut self, state: &InputState) {
        self.apply(RenderOp::Basic, &Inputs::from_snapshot(state));
    }

    pub fn render_currency(&mut self, state: &InputState) {
        self.apply(RenderOp::Currency, &Inputs::from_snapshot(state));
    }

    pub fn render_decimal_precision(&mut self, state: &InputState) {
        self.apply(RenderOp::DecimalPrecision, &Inputs::from_snapshot(state));
    }

    pub fn render_test_cases(&mut self, state: &InputState) {
        self.apply(RenderOp::TestCases, &Inputs::from_snapshot(state));
    }

    pub fn render_code_examples(&mut self, state: &InputState) {
        self.apply(RenderOp::CodeExamples, &Inputs::from_snapshot(state));
    }

    pub fn render_browser_locale_demo(&mut self, state: &InputState) {
        self.apply(RenderOp::BrowserLocaleDemo, &Inputs::from_snapshot(state));
    }

    fn apply(&mut self, op: RenderOp, inputs: &Inputs) {
        let updates: Vec<(RegionId, RegionContent)> = match op {
            RenderOp::Basic => vec![(
                RegionId::BasicResults,
                render::render_basic(&self.catalog, &self.formatter, inputs),
            )],
            RenderOp::Currency => vec![(
                RegionId::CurrencyResults,
                render::render_currency(&self.catalog, &self.formatter, inputs),
            )],
            RenderOp::DecimalPrecision => vec![(
                RegionId::DecimalResults,
                render::render_decimal_precision(&self.catalog, &self.formatter, inputs),
            )],
            RenderOp::TestCases => vec![(
                RegionId::TestCases,
                render::render_test_cases(&self.catalog, &self.formatter),
            )],
            RenderOp::CodeExamples => render::render_code_examples(inputs),
            RenderOp::BrowserLocaleDemo => {
                render::render_browser_locale_demo(&self.formatter, &self.environment)
            }
        };

        for (region, content) in updates {
            self.document.set(region, content);
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The whole page for the current document and snapshot
    pub fn html(&self, state: &InputState) -> String {
        self.page.render(&self.document, state)
    }
}
