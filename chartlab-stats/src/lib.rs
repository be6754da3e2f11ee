#![warn(missing_docs)]
//! ChartLab Statistical Engine
//!
//! Elementary descriptive statistics for the demo's grouped dataset:
//! - Partition observations by group label
//! - Arithmetic mean, sample standard deviation (n-1 denominator), count
//! - Standard error of the mean (sd / sqrt(n))

mod summary;

pub use summary::{GroupSummary, standard_error, summarize_groups};

/// Minimum sample count for a defined sample standard deviation
pub const MIN_SAMPLES_FOR_STD_DEV: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(MIN_SAMPLES_FOR_STD_DEV, 2);
    }
}
