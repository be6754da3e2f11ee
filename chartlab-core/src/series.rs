//! Monthly Time Series Generation
//!
//! Builds the demo's second dataset: a linearly rising baseline sampled at
//! month-end dates, perturbed by zero-mean normal noise.

use chrono::NaiveDate;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::calendar::month_end_sequence;
use crate::samples::GenError;

/// One point of the monthly series. Order is chronological and meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Month-end date of this point
    pub date: NaiveDate,
    /// Trend value plus noise
    pub value: f64,
}

/// Evenly spaced values from `start` to `end` inclusive.
///
/// Both endpoints are hit exactly; `n == 1` yields just `start`.
pub fn linear_trend(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![start];
    }

    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}

/// Generate a monthly series: linear trend plus `Normal(0, noise_std_dev)`.
///
/// Dates follow the month-end convention starting from `start`'s month.
/// Consumes exactly `periods` draws from `rng`.
pub fn generate_monthly_series<R: Rng + ?Sized>(
    rng: &mut R,
    start: NaiveDate,
    periods: usize,
    trend_start: f64,
    trend_end: f64,
    noise_std_dev: f64,
) -> Result<Vec<TimeSeriesPoint>, GenError> {
    let noise =
        Normal::new(0.0, noise_std_dev).map_err(|source| GenError::InvalidDistribution {
            mean: 0.0,
            std_dev: noise_std_dev,
            source,
        })?;

    let dates = month_end_sequence(start, periods);
    let trend = linear_trend(trend_start, trend_end, dates.len());

    Ok(dates
        .into_iter()
        .zip(trend)
        .map(|(date, baseline)| TimeSeriesPoint {
            date,
            value: baseline + noise.sample(rng),
        })
        .collect())
}
