use std::path::PathBuf;

use clap::Parser;

/// Fit a sales trend line to a dataset and explore it interactively.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "sales-trend", version, about)]
pub struct Config {
    /// Directory holding the pre-packaged datasets.
    #[arg(long, env = "SALES_TREND_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Open this dataset straight away instead of showing the dataset menu.
    #[arg(long, env = "SALES_TREND_DATASET")]
    pub dataset: Option<PathBuf>,

    /// Currency label printed in front of predicted sales.
    #[arg(long, env = "SALES_TREND_CURRENCY", default_value = "PKR")]
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            dataset: None,
            currency: "PKR".to_string(),
        }
    }
}
