use thiserror::Error;

/// A user-typed value that could not be used.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputParseError {
    #[error("Invalid input! Please enter a number between 1 and {max}.")]
    NotAChoice { max: usize },

    #[error("Invalid choice! Please select a valid option.")]
    OutOfRange,

    #[error("Invalid year! Please enter a valid number.")]
    NotAYear,
}

// ---------------------------------------------------------------------------
// Main menu
// ---------------------------------------------------------------------------

/// Actions offered once a model is fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewTrends,
    Predict,
    Equation,
    Integral,
    Exit,
    ChangeDataset,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::ViewTrends,
        MenuChoice::Predict,
        MenuChoice::Equation,
        MenuChoice::Integral,
        MenuChoice::Exit,
        MenuChoice::ChangeDataset,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ViewTrends => "View Sales Trends",
            MenuChoice::Predict => "Predict Sales for a Specific Year",
            MenuChoice::Equation => "Calculate Equation (y = mx + c)",
            MenuChoice::Integral => "Integrate Equation",
            MenuChoice::Exit => "Exit",
            MenuChoice::ChangeDataset => "Choose Another Dataset",
        }
    }
}

/// Parse a main-menu selection such as `"3"`.
pub fn parse_menu_choice(input: &str) -> Result<MenuChoice, InputParseError> {
    let max = MenuChoice::ALL.len();
    let n: usize = input
        .trim()
        .parse()
        .map_err(|_| InputParseError::NotAChoice { max })?;
    n.checked_sub(1)
        .and_then(|i| MenuChoice::ALL.get(i).copied())
        .ok_or(InputParseError::OutOfRange)
}

/// Parse the year to predict for. Any finite number is accepted.
pub fn parse_year(input: &str) -> Result<f64, InputParseError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|y| y.is_finite())
        .ok_or(InputParseError::NotAYear)
}

// ---------------------------------------------------------------------------
// Dataset menu
// ---------------------------------------------------------------------------

/// What the user picked from the dataset menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetChoice {
    /// 1-based catalog entry.
    Entry(usize),
    Browse,
    Quit,
}

/// Parse a dataset-menu selection against a catalog of `count` entries.
pub fn parse_dataset_choice(input: &str, count: usize) -> Result<DatasetChoice, InputParseError> {
    let s = input.trim();
    if s.eq_ignore_ascii_case("b") {
        return Ok(DatasetChoice::Browse);
    }
    if s.eq_ignore_ascii_case("q") {
        return Ok(DatasetChoice::Quit);
    }
    let n: usize = s
        .parse()
        .map_err(|_| InputParseError::NotAChoice { max: count })?;
    if (1..=count).contains(&n) {
        Ok(DatasetChoice::Entry(n))
    } else {
        Err(InputParseError::OutOfRange)
    }
}
