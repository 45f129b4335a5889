//! Per-run metric records and multi-run aggregation
//!
//! A [`RunMetrics`] is one independent trial's quality metrics plus the
//! wall-clock cost of producing its predictions. [`average`] is the single
//! aggregation used everywhere an averaged record appears in a report, so
//! the rounding rule lives in exactly one place.

use serde::{Deserialize, Serialize};

use crate::metrics::RegressionMetrics;
use crate::{Error, Result};

/// Which data split a run's metrics describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Metrics computed on the training split
    Train,
    /// Metrics computed on the held-out test split
    Test,
}

impl Phase {
    /// The label used in report rows.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Train => "Train",
            Self::Test => "Test",
        }
    }
}

/// Metrics for one independent run, in reporting column order.
///
/// The field order here is the column order of every report: MSE, RMSE,
/// R2, MAPE, SMAPE, LOG, MAE, Bias, Time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Mean squared error
    pub mse: f64,
    /// Root mean squared error
    pub rmse: f64,
    /// Coefficient of determination
    pub r_squared: f64,
    /// Mean absolute percentage error, in percent
    pub mape: f64,
    /// Symmetric mean absolute percentage error, in percent
    pub smape: f64,
    /// Mean squared log-accuracy error
    pub log_error: f64,
    /// Mean absolute error
    pub mae: f64,
    /// Mean signed error, predicted minus true
    pub bias: f64,
    /// Wall-clock cost of producing the predictions, in seconds.
    /// Supplied by the caller, never computed here.
    pub elapsed_secs: f64,
}

impl RunMetrics {
    /// Report column headers, in field order.
    pub const COLUMNS: [&'static str; 9] = [
        "MSE", "RMSE", "R2", "MAPE", "SMAPE", "LOG", "MAE", "Bias", "Time",
    ];

    /// Combine an evaluation result with the caller-measured elapsed time.
    #[must_use]
    pub const fn new(metrics: RegressionMetrics, elapsed_secs: f64) -> Self {
        Self {
            mse: metrics.mse,
            rmse: metrics.rmse,
            r_squared: metrics.r_squared,
            mape: metrics.mape,
            smape: metrics.smape,
            log_error: metrics.log_error,
            mae: metrics.mae,
            bias: metrics.bias,
            elapsed_secs,
        }
    }

    /// The nine field values, in column order.
    #[must_use]
    pub const fn values(&self) -> [f64; 9] {
        [
            self.mse,
            self.rmse,
            self.r_squared,
            self.mape,
            self.smape,
            self.log_error,
            self.mae,
            self.bias,
            self.elapsed_secs,
        ]
    }
}

/// Round to 5 decimal places, halves away from zero (`f64::round`).
///
/// NaN and infinities pass through unchanged.
fn round5(value: f64) -> f64 {
    (value * 1e5).round() / 1e5
}

/// Elementwise arithmetic mean of a run series, rounded to 5 decimals.
///
/// Every field, the elapsed time included, is averaged independently and
/// rounded halves-away-from-zero at the 5th decimal. Non-finite field
/// values propagate into the average.
///
/// # Errors
///
/// Returns [`Error::EmptyRunSet`] if `records` is empty.
pub fn average(records: &[RunMetrics]) -> Result<RunMetrics> {
    if records.is_empty() {
        return Err(Error::EmptyRunSet);
    }

    #[allow(clippy::cast_precision_loss)]
    let n = records.len() as f64;
    let mut sums = [0.0f64; 9];
    for record in records {
        for (sum, value) in sums.iter_mut().zip(record.values()) {
            *sum += value;
        }
    }

    Ok(RunMetrics {
        mse: round5(sums[0] / n),
        rmse: round5(sums[1] / n),
        r_squared: round5(sums[2] / n),
        mape: round5(sums[3] / n),
        smape: round5(sums[4] / n),
        log_error: round5(sums[5] / n),
        mae: round5(sums[6] / n),
        bias: round5(sums[7] / n),
        elapsed_secs: round5(sums[8] / n),
    })
}
