//! CLI argument definitions and command execution.
//!
//! The binary in `main.rs` only parses arguments, installs logging and maps
//! the outcome of [`run`] to an exit status.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::{debug, info};

use crate::controller::RenderController;
use crate::controller::Signal;
use crate::controller::catalog::Catalog;
use crate::controller::inputs::InputState;
use crate::controller::region::RegionId;
use crate::environment::{FixedEnvironment, LocaleEnvironment, SystemEnvironment};
use crate::formatter::LocaleFormatter;

/// Render the locale number formatting guide.
#[derive(Parser, Debug)]
#[command(name = "locale-number-guide")]
#[command(version, about)]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Write the page for a custom number:\n",
    "    $ locale-number-guide --number 9876.5 page -o guide.html\n\n",
    "  Print the currency results in euros:\n",
    "    $ locale-number-guide --currency EUR show currency-results\n\n",
    "  Edit inputs interactively (one `field=value` per line):\n",
    "    $ printf 'currency=JPY\\ndecimals=0\\n' | locale-number-guide watch",
))]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Initial contents of the number field.
    #[arg(long, default_value = "1234567.89", allow_hyphen_values = true, global = true)]
    pub number: String,

    /// Initial currency selection.
    #[arg(long, default_value = "USD", global = true)]
    pub currency: String,

    /// Initial contents of the decimal places field.
    #[arg(long, default_value = "2", allow_hyphen_values = true, global = true)]
    pub decimal_places: String,

    /// Locale reported as the environment default [default: from LC_ALL, LC_NUMERIC or LANG].
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Log render passes at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write the whole HTML page.
    Page {
        /// Output file [default: stdout].
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print regions as text (all regions when none are named).
    Show {
        /// Region ids such as `basic-results` or `example-currency`.
        regions: Vec<String>,
    },

    /// Read `number=`, `currency=` or `decimals=` edits from stdin and print the replaced regions.
    Watch,
}

impl Cli {
    /// The input snapshot described by the global flags
    pub fn input_state(&self) -> InputState {
        InputState {
            number: self.number.clone(),
            currency: self.currency.clone(),
            decimal_places: self.decimal_places.clone(),
        }
    }
}

/// Errors reported by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The page could not be written to the requested file.
    #[error("cannot write {path}: {source}")]
    WriteFile {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A region id passed to `show` is unknown.
    #[error("unknown region {0}; expected one of: {1}")]
    UnknownRegion(String, String),

    /// A `watch` line is not a recognised `field=value` edit.
    #[error("cannot parse edit {0:?}; expected number=, currency= or decimals=")]
    InvalidEdit(String),

    /// A `watch` session skipped at least one malformed line.
    #[error("{0} edit(s) were skipped")]
    SkippedEdits(usize),
}

pub type Result<T> = std::result::Result<T, CliError>;

/// Apply a `field=value` edit to the snapshot and name the signal it fires
pub fn apply_edit(line: &str, state: &mut InputState) -> Result<Signal> {
    let (field, value) = line
        .split_once('=')
        .ok_or_else(|| CliError::InvalidEdit(line.to_string()))?;
    let value = value.to_string();
    match field.trim() {
        "number" => {
            state.number = value;
            Ok(Signal::NumberInput)
        }
        "currency" => {
            state.currency = value;
            Ok(Signal::CurrencyChange)
        }
        "decimals" | "decimal-places" => {
            state.decimal_places = value;
            Ok(Signal::DecimalPlacesInput)
        }
        _ => Err(CliError::InvalidEdit(line.to_string())),
    }
}

fn environment_for(cli: &Cli) -> Box<dyn LocaleEnvironment> {
    match &cli.locale {
        Some(locale) => Box::new(FixedEnvironment::new(locale.clone())),
        None => Box::new(SystemEnvironment),
    }
}

/// Build the controller the CLI drives
///
/// The formatter's default locale follows the environment, so the auto-detection
/// demo formats in the reported locale.
pub fn build_controller(cli: &Cli) -> RenderController<LocaleFormatter, Box<dyn LocaleEnvironment>> {
    let environment = environment_for(cli);
    let formatter = match environment.preferred_locale() {
        Some(locale) => LocaleFormatter::with_default_locale(&locale),
        None => LocaleFormatter::new(),
    };
    RenderController::new(Catalog::builtin(), formatter, environment)
}

/// Execute the parsed command line
pub fn run(cli: &Cli, stdin: &mut dyn BufRead, stdout: &mut dyn Write, stderr: &mut dyn Write) -> Result<()> {
    let mut state = cli.input_state();
    let mut controller = build_controller(cli);
    controller.load(&state);

    match &cli.command {
        Command::Page { output } => {
            let html = controller.html(&state);
            match output {
                Some(path) => {
                    fs::write(path, html).map_err(|source| CliError::WriteFile {
                        path: path.clone(),
                        source,
                    })?;
                    info!(path = %path.display(), "wrote page");
                }
                None => stdout.write_all(html.as_bytes())?,
            }
        }
        Command::Show { regions } => {
            let selected = if regions.is_empty() {
                RegionId::ALL.to_vec()
            } else {
                regions
                    .iter()
                    .map(|id| {
                        RegionId::from_id(id).ok_or_else(|| {
                            let known: Vec<&str> = RegionId::ALL.iter().map(|r| r.id()).collect();
                            CliError::UnknownRegion(id.clone(), known.join(", "))
                        })
                    })
                    .collect::<Result<Vec<_>>>()?
            };
            for region in selected {
                write_region(&controller, region, stdout)?;
            }
        }
        Command::Watch => {
            let mut skipped = 0;
            for line in stdin.lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                // A bad line is reported and skipped; the session keeps going
                let signal = match apply_edit(&line, &mut state) {
                    Ok(signal) => signal,
                    Err(e) => {
                        writeln!(stderr, "{e}")?;
                        skipped += 1;
                        continue;
                    }
                };
                debug!(%signal, "applied edit");
                for region in controller.dispatch(signal, &state) {
                    write_region(&controller, region, stdout)?;
                }
                stdout.flush()?;
            }
            if skipped > 0 {
                return Err(CliError::SkippedEdits(skipped));
            }
        }
    }
    Ok(())
}

fn write_region<F, E>(
    controller: &RenderController<F, E>,
    region: RegionId,
    out: &mut dyn Write,
) -> Result<()>
where
    F: crate::formatter::NumberFormatter,
    E: LocaleEnvironment,
{
    if let Some(content) = controller.document().get(region) {
        writeln!(out, "[{region}]")?;
        writeln!(out, "{}", content.to_text())?;
    }
    Ok(())
}
