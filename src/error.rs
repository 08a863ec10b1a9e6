use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Data source errors (loader)
// ---------------------------------------------------------------------------

/// The selected dataset could not be turned into a table.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File Not Found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `reason` carries the full parser context chain.
    #[error("Error loading data from {}: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("Unsupported file extension: .{extension}")]
    UnsupportedExtension { extension: String },
}

// ---------------------------------------------------------------------------
// Schema and fitting errors (fitter)
// ---------------------------------------------------------------------------

/// Why no model could be fitted to a table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    #[error("The dataset must contain 'Time' and 'Sales' columns (missing: {})", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("The dataset contains no records")]
    EmptyDataset,

    #[error("Row {row}: '{column}' is not a number")]
    NonNumeric { column: String, row: usize },

    #[error("All 'Time' values are identical; the regression line is undefined")]
    Degenerate,
}

impl FitError {
    /// Schema problems, as opposed to numerically degenerate input.
    pub fn is_schema_error(&self) -> bool {
        !matches!(self, FitError::Degenerate)
    }
}

// ---------------------------------------------------------------------------
// Session errors
// ---------------------------------------------------------------------------

/// Anything that stops a dataset from becoming a usable session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Fit(#[from] FitError),
}
