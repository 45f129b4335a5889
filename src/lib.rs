//! # Medir: Regression-Metric Evaluation and Reporting
//!
//! Medir scores regression-model predictions against synthetically
//! generated ground truth, aggregates the scores over many independent
//! runs, and persists them as CSV tables for comparison across scenarios,
//! sample sizes, and models.
//!
//! ## Pipeline
//!
//! - [`metrics::evaluate`] — (true values, predicted values) → one
//!   [`metrics::RegressionMetrics`] record
//! - [`run::average`] — elementwise mean over a series of per-run
//!   [`run::RunMetrics`], rounded to 5 decimals
//! - [`report`] — per-(scenario, sample size) summary tables and per-run
//!   detail tables with appended averages
//! - [`scenario`] — the closed-form target functions that generate
//!   ground truth
//!
//! ## Example
//!
//! ```rust
//! use medir::metrics::evaluate;
//! use medir::run::RunMetrics;
//! use medir::report::{write_summary, SummaryTable};
//!
//! let y_true = [1.0, 2.0, 3.0, 4.0];
//! let y_pred = [1.1, 1.9, 3.2, 3.8];
//!
//! let train = RunMetrics::new(evaluate(&y_true, &y_pred)?, 0.5);
//! let test = RunMetrics::new(evaluate(&y_true, &y_pred)?, 0.1);
//!
//! let mut table = SummaryTable::new();
//! table.insert("scenario_a", y_true.len(), train, test);
//!
//! let mut csv = Vec::new();
//! write_summary(&table, &mut csv)?;
//! assert!(String::from_utf8(csv).unwrap().starts_with("Scenario,"));
//! # Ok::<(), medir::Error>(())
//! ```
//!
//! Degenerate numeric inputs (zero true values, constant targets) yield
//! NaN/infinity in the affected metric fields and propagate unchanged
//! through aggregation into the output files; see [`error`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod metrics;
pub mod report;
pub mod run;
pub mod scenario;

pub use error::{Error, Result};
