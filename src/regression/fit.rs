//! Ordinary least squares for one independent variable.
//!
//! The fitted line minimises the sum of squared vertical residuals:
//!
//! ```text
//! slope     = Σ (t - t̄)(s - s̄) / Σ (t - t̄)²
//! intercept = s̄ - slope · t̄
//! ```

use crate::data::model::SalesTable;
use crate::error::FitError;

pub const TIME_COLUMN: &str = "Time";
pub const SALES_COLUMN: &str = "Sales";

// ---------------------------------------------------------------------------
// Observations – validated (time, sales) pairs
// ---------------------------------------------------------------------------

/// The numeric `Time` and `Sales` columns of a table, in record order.
#[derive(Debug, Clone, PartialEq)]
pub struct Observations {
    pub time: Vec<f64>,
    pub sales: Vec<f64>,
}

impl Observations {
    /// Validate the schema and pull out both required columns.
    pub fn from_table(table: &SalesTable) -> Result<Self, FitError> {
        let missing: Vec<String> = [TIME_COLUMN, SALES_COLUMN]
            .iter()
            .filter(|c| !table.has_column(c))
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(FitError::MissingColumns { missing });
        }
        if table.is_empty() {
            return Err(FitError::EmptyDataset);
        }

        Ok(Observations {
            time: numeric_column(table, TIME_COLUMN)?,
            sales: numeric_column(table, SALES_COLUMN)?,
        })
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// `[time, sales]` pairs, ready for plotting.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.time.iter().zip(&self.sales).map(|(&t, &s)| [t, s])
    }

    /// Smallest and largest observed time.
    pub fn time_range(&self) -> Option<(f64, f64)> {
        let first = *self.time.first()?;
        Some(
            self.time
                .iter()
                .fold((first, first), |(lo, hi), &t| (lo.min(t), hi.max(t))),
        )
    }
}

fn numeric_column(table: &SalesTable, column: &str) -> Result<Vec<f64>, FitError> {
    table
        .records
        .iter()
        .enumerate()
        .map(|(row, record)| {
            record
                .get(column)
                .and_then(|v| v.as_f64())
                .filter(|v| v.is_finite())
                .ok_or_else(|| FitError::NonNumeric {
                    column: column.to_string(),
                    row,
                })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// FittedModel
// ---------------------------------------------------------------------------

/// Parameters of the fitted line `sales = slope * time + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedModel {
    /// Change in sales per unit of time.
    pub slope: f64,
    /// Sales at time zero.
    pub intercept: f64,
}

impl FittedModel {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }
}

/// Fit a line to the `Time` / `Sales` columns of `table`.
pub fn fit(table: &SalesTable) -> Result<FittedModel, FitError> {
    let observations = Observations::from_table(table)?;
    fit_observations(&observations)
}

/// Fit a line to already validated observations.
pub fn fit_observations(obs: &Observations) -> Result<FittedModel, FitError> {
    let Some(&first) = obs.time.first() else {
        return Err(FitError::EmptyDataset);
    };
    // Compare raw values: the mean of identical floats need not equal them.
    if obs.time.iter().all(|&t| t == first) {
        return Err(FitError::Degenerate);
    }

    let n = obs.len() as f64;
    let mean_t = obs.time.iter().sum::<f64>() / n;
    let mean_s = obs.sales.iter().sum::<f64>() / n;

    let mut num = 0.0;
    let mut den = 0.0;
    for (&t, &s) in obs.time.iter().zip(&obs.sales) {
        let dt = t - mean_t;
        num += dt * (s - mean_s);
        den += dt * dt;
    }

    let slope = num / den;
    let intercept = mean_s - slope * mean_t;
    if !slope.is_finite() || !intercept.is_finite() {
        return Err(FitError::Degenerate);
    }

    log::debug!("Fitted slope={slope} intercept={intercept} over {} points", obs.len());
    Ok(FittedModel { slope, intercept })
}

/// Sales predicted at time `x`. Any `x` is accepted, including values far
/// outside the observed range.
pub fn predict(model: &FittedModel, x: f64) -> f64 {
    model.slope * x + model.intercept
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::data::model::{CellValue, Record};

    fn table(rows: &[(f64, f64)]) -> SalesTable {
        let records = rows
            .iter()
            .map(|&(t, s)| {
                let mut cells = BTreeMap::new();
                cells.insert(TIME_COLUMN.to_string(), CellValue::Float(t));
                cells.insert(SALES_COLUMN.to_string(), CellValue::Float(s));
                Record { cells }
            })
            .collect();
        SalesTable::new(vec![TIME_COLUMN.into(), SALES_COLUMN.into()], records)
    }

    #[test]
    fn exact_line_is_recovered() {
        let model = fit(&table(&[(1.0, 100.0), (2.0, 200.0), (3.0, 300.0)])).unwrap();
        assert!((model.slope - 100.0).abs() < 1e-10);
        assert!(model.intercept.abs() < 1e-10);
        assert!((predict(&model, 5.0) - 500.0).abs() < 1e-9);
    }

    #[test]
    fn residuals_sum_to_zero() {
        let rows = [
            (2015.0, 1200.0),
            (2016.0, 1350.5),
            (2017.0, 1298.0),
            (2018.0, 1611.25),
            (2019.0, 1580.0),
            (2021.0, 1902.75),
        ];
        let model = fit(&table(&rows)).unwrap();
        let residual_sum: f64 = rows.iter().map(|&(t, s)| s - predict(&model, t)).sum();
        assert!(residual_sum.abs() < 1e-6, "residual sum {residual_sum}");
    }

    #[test]
    fn identical_times_are_degenerate() {
        let rows = [(2020.0, 10.0), (2020.0, 20.0), (2020.0, 30.0)];
        assert_eq!(fit(&table(&rows)), Err(FitError::Degenerate));

        // The float mean of these is not exactly 0.1.
        let rows = [(0.1, 1.0), (0.1, 2.0), (0.1, 3.0)];
        assert_eq!(fit(&table(&rows)), Err(FitError::Degenerate));
    }

    #[test]
    fn single_record_is_degenerate() {
        assert_eq!(fit(&table(&[(2020.0, 5.0)])), Err(FitError::Degenerate));
    }

    #[test]
    fn missing_columns_are_named() {
        let mut cells = BTreeMap::new();
        cells.insert("Time".to_string(), CellValue::Integer(2020));
        let t = SalesTable::new(vec!["Time".into(), "Revenue".into()], vec![Record { cells }]);

        assert_eq!(
            fit(&t),
            Err(FitError::MissingColumns {
                missing: vec!["Sales".into()]
            })
        );
    }

    #[test]
    fn header_only_table_is_empty() {
        let t = SalesTable::new(vec!["Time".into(), "Sales".into()], Vec::new());
        assert_eq!(fit(&t), Err(FitError::EmptyDataset));
    }

    #[test]
    fn text_cell_is_reported_with_its_row() {
        let mut t = table(&[(2019.0, 1.0), (2020.0, 2.0)]);
        t.records[1]
            .cells
            .insert(SALES_COLUMN.into(), CellValue::Text("n/a".into()));

        assert_eq!(
            fit(&t),
            Err(FitError::NonNumeric {
                column: "Sales".into(),
                row: 1
            })
        );
    }

    #[test]
    fn time_range_spans_unsorted_input() {
        let obs = Observations::from_table(&table(&[(2020.0, 1.0), (2018.0, 2.0), (2019.0, 3.0)]))
            .unwrap();
        assert_eq!(obs.time_range(), Some((2018.0, 2020.0)));
    }
}
