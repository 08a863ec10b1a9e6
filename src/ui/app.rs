use eframe::egui;

use super::plot::{TrendSeries, trend_plot};

pub const WINDOW_TITLE: &str = "Sales Trends and Predictions";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TrendViewerApp {
    pub dataset_name: String,
    pub series: TrendSeries,
}

impl eframe::App for TrendViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: dataset and equation ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong(&self.dataset_name);
                ui.separator();
                ui.label(&self.series.equation);
                ui.separator();
                ui.label(format!("{} points", self.series.points.len()));
            });
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(WINDOW_TITLE);
            trend_plot(ui, &self.series);
        });
    }
}

/// Open the trend window and block until the user closes it.
pub fn show_trend_window(dataset_name: String, series: TrendSeries) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(TrendViewerApp {
                dataset_name,
                series,
            }))
        }),
    )
    .map_err(|e| anyhow::anyhow!("plot window failed: {e}"))
}
