//! The interactive text menu driving load → fit → query.
//!
//! ```text
//!  dataset menu ──► load ──► fit ──► main menu ──► exit
//!       ▲             │        │          │
//!       └─────────────┴────────┴──────────┘  (error / "choose another")
//! ```

pub mod menu;
pub mod prompt;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::data::catalog::DatasetCatalog;
use crate::data::loader::load_file;
use crate::regression::{format_amount, format_equation, format_integral, predict};
use crate::session::Session;
use crate::ui::TrendSeries;
use menu::{DatasetChoice, MenuChoice, parse_dataset_choice, parse_menu_choice, parse_year};
pub use prompt::Prompter;

/// Rows shown after a dataset loads.
const PREVIEW_ROWS: usize = 5;

/// Graphical collaborators of the menu: the plot window and file picker.
pub trait Viewer {
    /// Show the trend plot; returns once the window is closed.
    fn show_trend(&mut self, dataset_name: &str, series: TrendSeries) -> anyhow::Result<()>;

    /// Let the user browse for a dataset. `None` if they cancelled.
    fn pick_dataset(&mut self) -> Option<PathBuf>;
}

/// Where the main menu hands control back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    ChangeDataset,
    Exit,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Run the whole interactive session until the user exits or input ends.
///
/// Data and schema errors send the user back to dataset selection; input
/// errors are reported and the same question is asked again.
pub fn run<R: BufRead, W: Write, V: Viewer>(
    config: &Config,
    prompter: &mut Prompter<R, W>,
    viewer: &mut V,
) -> io::Result<()> {
    welcome(prompter)?;

    let mut requested = config.dataset.clone();
    loop {
        let path = match requested.take() {
            Some(path) => path,
            None => match choose_dataset(config, prompter, viewer)? {
                Some(path) => path,
                None => break,
            },
        };

        let Some(session) = open_session(&path, prompter)? else {
            prompter.say("Please choose another dataset.")?;
            continue;
        };

        if main_menu(config, &session, prompter, viewer)? == Flow::Exit {
            break;
        }
    }

    prompter.say("Goodbye!")
}

fn welcome<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> io::Result<()> {
    prompter.say("==========================================")?;
    prompter.say(" Data Prediction using Linear Regression.")?;
    prompter.say("==========================================")
}

// ---------------------------------------------------------------------------
// Dataset selection
// ---------------------------------------------------------------------------

fn choose_dataset<R: BufRead, W: Write, V: Viewer>(
    config: &Config,
    prompter: &mut Prompter<R, W>,
    viewer: &mut V,
) -> io::Result<Option<PathBuf>> {
    let catalog = DatasetCatalog::scan(&config.data_dir);

    prompter.say("Select the dataset to operate on:")?;
    for (i, label) in catalog.labels().iter().enumerate() {
        prompter.say(format!("{}. {label}", i + 1))?;
    }
    prompter.say("b. Browse for a file...")?;
    prompter.say("q. Quit")?;

    loop {
        let Some(line) = prompter.ask("Enter your choice: ")? else {
            return Ok(None);
        };
        match parse_dataset_choice(&line, catalog.len()) {
            Ok(DatasetChoice::Entry(n)) => return Ok(catalog.get(n).map(Path::to_path_buf)),
            Ok(DatasetChoice::Browse) => match viewer.pick_dataset() {
                Some(path) => return Ok(Some(path)),
                None => prompter.say("No file selected.")?,
            },
            Ok(DatasetChoice::Quit) => return Ok(None),
            Err(e) => prompter.say(e.to_string())?,
        }
    }
}

/// Load and fit `path`, reporting any failure to the user.
fn open_session<R: BufRead, W: Write>(
    path: &Path,
    prompter: &mut Prompter<R, W>,
) -> io::Result<Option<Session>> {
    let table = match load_file(path) {
        Ok(table) => table,
        Err(e) => {
            log::warn!("Failed to load {}: {e}", path.display());
            prompter.say(e.to_string())?;
            return Ok(None);
        }
    };

    prompter.say("Data loaded successfully!")?;
    prompter.say(format!("Columns in the dataset: {:?}", table.column_names))?;
    prompter.say(table.head(PREVIEW_ROWS))?;

    match Session::from_table(path, table) {
        Ok(session) => Ok(Some(session)),
        Err(e) => {
            log::warn!("Cannot fit {}: {e}", path.display());
            prompter.say(format!("Error: {e}"))?;
            Ok(None)
        }
    }
}

// ---------------------------------------------------------------------------
// Main menu
// ---------------------------------------------------------------------------

fn main_menu<R: BufRead, W: Write, V: Viewer>(
    config: &Config,
    session: &Session,
    prompter: &mut Prompter<R, W>,
    viewer: &mut V,
) -> io::Result<Flow> {
    loop {
        prompter.say("")?;
        prompter.say("Menu:")?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            prompter.say(format!("{}. {}", i + 1, choice.label()))?;
        }

        let Some(line) = prompter.ask("Enter your choice: ")? else {
            return Ok(Flow::Exit);
        };

        match parse_menu_choice(&line) {
            Ok(MenuChoice::ViewTrends) => {
                let series = TrendSeries::new(&session.observations, &session.model, &config.currency);
                if let Err(e) = viewer.show_trend(&session.name(), series) {
                    log::error!("Plot window failed: {e:#}");
                    prompter.say(format!("Could not show the plot: {e:#}"))?;
                }
            }
            Ok(MenuChoice::Predict) => {
                if !prompt_prediction(config, session, prompter)? {
                    return Ok(Flow::Exit);
                }
            }
            Ok(MenuChoice::Equation) => {
                prompter.say(format!(
                    "Equation of the regression line: {}",
                    format_equation(&session.model)
                ))?;
            }
            Ok(MenuChoice::Integral) => {
                prompter.say(format!(
                    "Integral of the regression line: {}",
                    format_integral(&session.model)
                ))?;
            }
            Ok(MenuChoice::Exit) => return Ok(Flow::Exit),
            Ok(MenuChoice::ChangeDataset) => return Ok(Flow::ChangeDataset),
            Err(e) => prompter.say(e.to_string())?,
        }
    }
}

/// Ask for a year until one parses. Returns `false` if input ran out.
fn prompt_prediction<R: BufRead, W: Write>(
    config: &Config,
    session: &Session,
    prompter: &mut Prompter<R, W>,
) -> io::Result<bool> {
    loop {
        let Some(line) = prompter.ask("Enter the year for prediction: ")? else {
            return Ok(false);
        };
        match parse_year(&line) {
            Ok(year) => {
                let sales = predict(&session.model, year);
                prompter.say(format!(
                    "Predicted Sales for {year}: {} {}",
                    config.currency,
                    format_amount(sales)
                ))?;
                return Ok(true);
            }
            Err(e) => prompter.say(e.to_string())?,
        }
    }
}
