//! Run Report Data Structures

use chartlab_core::TimeSeriesPoint;
use chartlab_stats::GroupSummary;
use serde::{Deserialize, Serialize};

/// Complete record of one demo run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Run-shape metadata
    pub meta: ReportMeta,
    /// One summary row per distinct group label
    pub summaries: Vec<GroupSummary>,
    /// Monthly series in chronological order
    pub series: Vec<TimeSeriesPoint>,
}

/// Metadata describing how a run was shaped.
///
/// Only deterministic facts are captured here, so serialized reports from
/// identically seeded runs compare equal byte-for-byte.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Report schema version
    pub schema_version: u32,
    /// Seed the shared random generator was initialized with
    pub seed: u64,
    /// Observations drawn per group
    pub replicates_per_group: usize,
    /// Number of distinct groups
    pub groups: usize,
    /// Number of points in the monthly series
    pub series_points: usize,
}

/// Current report schema version
pub const SCHEMA_VERSION: u32 = 1;

impl ReportMeta {
    /// Build metadata for the current schema version.
    pub fn new(seed: u64, replicates_per_group: usize, groups: usize, series_points: usize) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            seed,
            replicates_per_group,
            groups,
            series_points,
        }
    }
}
