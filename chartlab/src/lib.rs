#![warn(missing_docs)]
//! # ChartLab
//!
//! One-shot chart demo: generate two synthetic datasets from a single
//! seeded random stream, summarize them, and render them.
//!
//! - **Grouped pipeline**: normal samples for four groups, aggregated into
//!   per-group mean / std dev / count / standard error, rendered as a bar
//!   chart with error bars (`bar_with_se.png`)
//! - **Time-series pipeline**: twelve month-end points on a linear trend
//!   with noise, rendered as a line chart (`line_evolution.png`)
//! - Both datasets printed to stdout as fixed-width tables
//!
//! Everything is driven by fixed constants; there is no configuration and
//! no CLI surface. For a fixed seed, repeated runs are bit-identical.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> Result<(), chartlab::DemoError> {
//!     chartlab::run()
//! }
//! ```

mod demo;

pub use demo::{
    BAR_CHART_FILE, DemoError, DemoOutput, GROUPS, GROUP_STD_DEV, LINE_CHART_FILE, NOISE_STD_DEV,
    REPLICATES_PER_GROUP, RNG_SEED, SERIES_HEAD_ROWS, SERIES_PERIODS, TREND_END, TREND_START,
    run, run_with_output_dir, series_start,
};

// Re-export the member crates' surfaces
pub use chartlab_core::{
    GenError, Observation, TimeSeriesPoint, draw_group_samples, generate_monthly_series,
    linear_trend, month_end_sequence,
};
pub use chartlab_report::{
    RenderError, RunReport, format_group_summary_table, format_series_head, generate_json_report,
    render_group_means_chart, render_monthly_series_chart,
};
pub use chartlab_stats::{GroupSummary, standard_error, summarize_groups};
