//! Simple linear regression of sales over time, and the values derived from
//! the fitted line.

pub mod fit;
pub mod formula;

pub use fit::{FittedModel, Observations, fit, fit_observations, predict};
pub use formula::{format_amount, format_equation, format_integral};
