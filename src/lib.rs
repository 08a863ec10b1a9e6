//! Fit a straight sales trend line to a `Time` / `Sales` dataset and derive
//! predictions, the line's equation and its integral.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod regression;
pub mod session;
pub mod ui;
