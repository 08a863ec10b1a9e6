use std::path::{Path, PathBuf};

use crate::data::loader::load_file;
use crate::data::model::SalesTable;
use crate::error::{FitError, SessionError};
use crate::regression::{FittedModel, Observations, fit_observations};

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// One loaded dataset and the line fitted to it.
///
/// A session is only constructed once fitting succeeded, so a half-built
/// model is never visible. Choosing another dataset builds a new session.
#[derive(Debug, Clone)]
pub struct Session {
    pub source: PathBuf,
    pub table: SalesTable,
    pub observations: Observations,
    pub model: FittedModel,
}

impl Session {
    /// Load `path` and fit a model to it.
    pub fn open(path: &Path) -> Result<Self, SessionError> {
        let table = load_file(path)?;
        Ok(Self::from_table(path, table)?)
    }

    /// Fit a model to an already loaded table.
    pub fn from_table(source: &Path, table: SalesTable) -> Result<Self, FitError> {
        let observations = Observations::from_table(&table)?;
        let model = fit_observations(&observations)?;
        log::info!(
            "Fitted {} ({} points): slope={:.4} intercept={:.4}",
            source.display(),
            observations.len(),
            model.slope,
            model.intercept
        );
        Ok(Session {
            source: source.to_path_buf(),
            table,
            observations,
            model,
        })
    }

    /// File name of the source, for menus and window titles.
    pub fn name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}
