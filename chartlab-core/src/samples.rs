//! Grouped Sample Generation
//!
//! Draws fixed-size samples from a normal distribution centered on each
//! group's true mean, producing one tagged [`Observation`] per draw.

use rand::Rng;
use rand_distr::{Distribution, Normal, NormalError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single generated value tagged with its group label.
///
/// Ephemeral: produced by generation, consumed by aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Group label this value belongs to
    pub group: String,
    /// Generated value
    pub value: f64,
}

/// Errors from data generation
#[derive(Debug, Error)]
pub enum GenError {
    /// The requested normal distribution is invalid (e.g. negative std dev)
    #[error("invalid normal distribution (mean {mean}, std_dev {std_dev}): {source}")]
    InvalidDistribution {
        /// Requested distribution mean
        mean: f64,
        /// Requested distribution standard deviation
        std_dev: f64,
        /// Underlying distribution error
        source: NormalError,
    },
}

/// Draw `count` values from `Normal(mean, std_dev)` and tag each with `group`.
///
/// Consumes exactly `count` draws from `rng`, so repeated runs with the same
/// seeded generator reproduce the same observations.
pub fn draw_group_samples<R: Rng + ?Sized>(
    rng: &mut R,
    group: &str,
    mean: f64,
    std_dev: f64,
    count: usize,
) -> Result<Vec<Observation>, GenError> {
    let normal = Normal::new(mean, std_dev).map_err(|source| GenError::InvalidDistribution {
        mean,
        std_dev,
        source,
    })?;

    Ok((0..count)
        .map(|_| Observation {
            group: group.to_string(),
            value: normal.sample(rng),
        })
        .collect())
}
