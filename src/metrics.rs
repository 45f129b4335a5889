//! Regression quality metrics
//!
//! Pure evaluation of a predicted-value sequence against ground truth.
//! Every formula is the standard textbook definition; none of them guard
//! against degenerate inputs (zero true values, constant targets, values
//! at or below -1 for the log error). Degeneracy yields NaN/infinity in
//! the affected field and is propagated, never masked.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Quality metrics for one evaluation of predictions against ground truth.
///
/// Produced by [`evaluate`]; all fields are finite for well-behaved inputs
/// (equal-length sequences, strictly positive targets, non-constant truth).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionMetrics {
    /// Mean squared error
    pub mse: f64,
    /// Root mean squared error, `sqrt(mse)`
    pub rmse: f64,
    /// Mean absolute error
    pub mae: f64,
    /// Coefficient of determination; non-finite when the true values are
    /// constant (total sum of squares is zero)
    pub r_squared: f64,
    /// Mean absolute percentage error, in percent; non-finite when any
    /// true value is zero
    pub mape: f64,
    /// Symmetric mean absolute percentage error, in percent; NaN when a
    /// true/predicted pair is zero at the same index
    pub smape: f64,
    /// Mean squared log-accuracy error, `mean((ln(y+1) - ln(ŷ+1))²)`;
    /// non-finite when any value is at or below -1
    pub log_error: f64,
    /// Mean signed error, predicted minus true
    pub bias: f64,
}

/// Evaluate predictions against ground truth.
///
/// # Examples
///
/// ```
/// use medir::metrics::evaluate;
///
/// let metrics = evaluate(&[1.0, 2.0], &[2.0, 3.0])?;
/// assert!((metrics.mse - 1.0).abs() < 1e-12);
/// assert!((metrics.bias - 1.0).abs() < 1e-12);
/// # Ok::<(), medir::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if the sequences differ in length or
/// are empty. Value ranges are not checked; see the field docs on
/// [`RegressionMetrics`] for which inputs produce non-finite metrics.
pub fn evaluate(y_true: &[f64], y_pred: &[f64]) -> Result<RegressionMetrics> {
    if y_true.is_empty() || y_true.len() != y_pred.len() {
        return Err(Error::ShapeMismatch {
            y_true: y_true.len(),
            y_pred: y_pred.len(),
        });
    }

    #[allow(clippy::cast_precision_loss)]
    let n = y_true.len() as f64;

    let ss_res: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| (t - p).powi(2))
        .sum();
    let mse = ss_res / n;
    let rmse = mse.sqrt();

    let mae = y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| (t - p).abs())
        .sum::<f64>()
        / n;

    let y_mean = y_true.iter().sum::<f64>() / n;
    let ss_tot: f64 = y_true.iter().map(|t| (t - y_mean).powi(2)).sum();
    let r_squared = 1.0 - ss_res / ss_tot;

    let mape = 100.0
        * y_true
            .iter()
            .zip(y_pred)
            .map(|(t, p)| ((t - p) / t).abs())
            .sum::<f64>()
        / n;

    let smape = 100.0
        * y_true
            .iter()
            .zip(y_pred)
            .map(|(t, p)| 2.0 * (t - p).abs() / (t.abs() + p.abs()))
            .sum::<f64>()
        / n;

    let log_error = y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| ((t + 1.0).ln() - (p + 1.0).ln()).powi(2))
        .sum::<f64>()
        / n;

    let bias = y_pred.iter().zip(y_true).map(|(p, t)| p - t).sum::<f64>() / n;

    Ok(RegressionMetrics {
        mse,
        rmse,
        mae,
        r_squared,
        mape,
        smape,
        log_error,
        bias,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_perfect_predictions() {
        let y = [1.5, 2.0, 3.25, 7.0];
        let metrics = evaluate(&y, &y).unwrap();

        assert_close(metrics.mse, 0.0);
        assert_close(metrics.rmse, 0.0);
        assert_close(metrics.mae, 0.0);
        assert_close(metrics.r_squared, 1.0);
        assert_close(metrics.mape, 0.0);
        assert_close(metrics.smape, 0.0);
        assert_close(metrics.log_error, 0.0);
        assert_close(metrics.bias, 0.0);
    }

    #[test]
    fn test_unit_offset() {
        let metrics = evaluate(&[1.0, 2.0], &[2.0, 3.0]).unwrap();

        assert_close(metrics.mse, 1.0);
        assert_close(metrics.rmse, 1.0);
        assert_close(metrics.mae, 1.0);
        assert_close(metrics.bias, 1.0);
    }

    #[test]
    fn test_bias_is_signed() {
        let metrics = evaluate(&[2.0, 3.0], &[1.0, 2.0]).unwrap();
        assert_close(metrics.bias, -1.0);
        assert_close(metrics.mae, 1.0);
    }

    #[test]
    fn test_shape_mismatch() {
        let err = evaluate(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch {
                y_true: 3,
                y_pred: 2
            }
        ));
    }

    #[test]
    fn test_empty_input_is_shape_mismatch() {
        let err = evaluate(&[], &[]).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch {
                y_true: 0,
                y_pred: 0
            }
        ));
    }

    #[test]
    fn test_zero_true_value_gives_infinite_mape() {
        let metrics = evaluate(&[0.0, 1.0], &[1.0, 1.0]).unwrap();
        assert!(metrics.mape.is_infinite());
        // The remaining fields are unaffected by the division
        assert_close(metrics.mae, 0.5);
    }

    #[test]
    fn test_zero_pair_gives_nan_smape() {
        let metrics = evaluate(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert!(metrics.smape.is_nan());
    }

    #[test]
    fn test_constant_truth_gives_non_finite_r_squared() {
        // ss_tot = 0 and ss_res = 0: 0/0
        let metrics = evaluate(&[2.0, 2.0, 2.0], &[2.0, 2.0, 2.0]).unwrap();
        assert!(metrics.r_squared.is_nan());

        // ss_tot = 0 and ss_res > 0: division by zero
        let metrics = evaluate(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).unwrap();
        assert!(!metrics.r_squared.is_finite());
    }

    #[test]
    fn test_log_error_nan_below_minus_one() {
        let metrics = evaluate(&[-2.0, 1.0], &[1.0, 1.0]).unwrap();
        assert!(metrics.log_error.is_nan());
    }

    #[test]
    fn test_deterministic() {
        let y_true = [1.0, 2.0, 3.0, 4.0];
        let y_pred = [1.1, 1.9, 3.2, 3.8];
        let a = evaluate(&y_true, &y_pred).unwrap();
        let b = evaluate(&y_true, &y_pred).unwrap();
        assert_eq!(a, b);
    }
}
