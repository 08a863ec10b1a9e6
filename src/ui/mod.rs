//! Native windows: the trend plot and the dataset file picker.

pub mod app;
pub mod plot;

use std::path::PathBuf;

use crate::cli::Viewer;
use crate::data::loader::SUPPORTED_EXTENSIONS;
pub use plot::TrendSeries;

/// [`Viewer`] backed by eframe windows and the platform file dialog.
#[derive(Debug, Default)]
pub struct NativeViewer;

impl Viewer for NativeViewer {
    fn show_trend(&mut self, dataset_name: &str, series: TrendSeries) -> anyhow::Result<()> {
        app::show_trend_window(dataset_name.to_string(), series)
    }

    fn pick_dataset(&mut self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Open sales data")
            .add_filter("Supported files", SUPPORTED_EXTENSIONS)
            .add_filter("CSV", &["csv"])
            .add_filter("JSON", &["json"])
            .add_filter("Parquet", &["parquet", "pq"])
            .pick_file()
    }
}
