#![warn(missing_docs)]
//! ChartLab Core - Synthetic Data Generation
//!
//! Produces the two datasets the demo charts are built from:
//! - Grouped observations drawn from normal distributions, one fixed-size
//!   sample per group label
//! - A monthly time series combining a linear trend with normal noise
//!
//! All randomness is consumed from a caller-owned [`rand::Rng`], so a single
//! seeded generator shared across both datasets makes a full run
//! reproducible bit-for-bit.

mod calendar;
mod samples;
mod series;

pub use calendar::{month_end, month_end_sequence};
pub use samples::{GenError, Observation, draw_group_samples};
pub use series::{TimeSeriesPoint, generate_monthly_series, linear_trend};
