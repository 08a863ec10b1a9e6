use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::regression::{FittedModel, Observations, format_equation, predict};

// ---------------------------------------------------------------------------
// Trend series – everything the plot needs, computed up front
// ---------------------------------------------------------------------------

/// Observed points plus the fitted line across the observed time range.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    /// `[time, sales]` in record order.
    pub points: Vec<[f64; 2]>,
    /// Regression line from the earliest to the latest observed time.
    pub line: [[f64; 2]; 2],
    /// Equation text shown above the plot.
    pub equation: String,
    /// Y axis label, carries the currency.
    pub sales_label: String,
}

impl TrendSeries {
    pub fn new(observations: &Observations, model: &FittedModel, currency: &str) -> Self {
        let (lo, hi) = observations.time_range().unwrap_or((0.0, 0.0));
        TrendSeries {
            points: observations.points().collect(),
            line: [[lo, predict(model, lo)], [hi, predict(model, hi)]],
            equation: format_equation(model),
            sales_label: format!("Sales ({currency})"),
        }
    }
}

// ---------------------------------------------------------------------------
// Trend plot (central panel)
// ---------------------------------------------------------------------------

/// Render the scatter of observations and the regression line.
pub fn trend_plot(ui: &mut Ui, series: &TrendSeries) {
    Plot::new("trend_plot")
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label(series.sales_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let observed: PlotPoints = series.points.iter().copied().collect();
            plot_ui.points(
                Points::new(observed)
                    .name("Original Data")
                    .color(Color32::BLUE)
                    .radius(4.0),
            );

            let fitted: PlotPoints = series.line.iter().copied().collect();
            plot_ui.line(
                Line::new(fitted)
                    .name("Regression Line")
                    .color(Color32::RED)
                    .width(2.0),
            );
        });
}
