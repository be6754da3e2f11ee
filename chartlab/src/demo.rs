//! The One-Shot Demo Pipeline
//!
//! Fixed constants and the straight-line run: draw grouped samples,
//! summarize, render the bar chart, draw the monthly series, render the
//! line chart, print both tables. Both pipelines consume the same seeded
//! generator in this order, which is what makes a run reproducible.

use std::path::{Path, PathBuf};

use chartlab_core::{GenError, draw_group_samples, generate_monthly_series};
use chartlab_report::{
    RenderError, ReportMeta, RunReport, format_group_summary_table, format_series_head,
    render_group_means_chart, render_monthly_series_chart,
};
use chartlab_stats::summarize_groups;
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

/// Seed for the shared random generator
pub const RNG_SEED: u64 = 42;

/// Group labels and the true means their samples are centered on
pub const GROUPS: [(&str, f64); 4] = [("A", 10.0), ("B", 13.0), ("C", 9.0), ("D", 15.0)];

/// Observations drawn per group
pub const REPLICATES_PER_GROUP: usize = 12;

/// Dispersion of the grouped samples
pub const GROUP_STD_DEV: f64 = 1.8;

/// Number of monthly points in the time series
pub const SERIES_PERIODS: usize = 12;

/// Trend baseline at the first month
pub const TREND_START: f64 = 50.0;

/// Trend baseline at the last month
pub const TREND_END: f64 = 80.0;

/// Std dev of the noise added to the trend
pub const NOISE_STD_DEV: f64 = 2.0;

/// Output file for the bar chart
pub const BAR_CHART_FILE: &str = "bar_with_se.png";

/// Output file for the line chart
pub const LINE_CHART_FILE: &str = "line_evolution.png";

/// Rows of the series printed to stdout
pub const SERIES_HEAD_ROWS: usize = 5;

/// First month-end date of the series (January 2025).
pub fn series_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 31).expect("literal date is valid")
}

/// Errors from a demo run
#[derive(Debug, Error)]
pub enum DemoError {
    /// Data generation failed
    #[error(transparent)]
    Gen(#[from] GenError),
    /// Chart rendering failed
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Everything a run produced
#[derive(Debug)]
pub struct DemoOutput {
    /// Summaries, series, and run metadata
    pub report: RunReport,
    /// Path the bar chart was written to
    pub bar_chart: PathBuf,
    /// Path the line chart was written to
    pub line_chart: PathBuf,
}

/// Execute the full pipeline, writing both charts into `out_dir`.
///
/// Existing chart files are overwritten. The generation order (grouped
/// samples first, then series noise) is fixed; reordering would change the
/// values drawn from the shared generator.
pub fn run_with_output_dir(out_dir: &Path) -> Result<DemoOutput, DemoError> {
    let mut rng = StdRng::seed_from_u64(RNG_SEED);

    let mut observations = Vec::with_capacity(GROUPS.len() * REPLICATES_PER_GROUP);
    for (group, true_mean) in GROUPS {
        observations.extend(draw_group_samples(
            &mut rng,
            group,
            true_mean,
            GROUP_STD_DEV,
            REPLICATES_PER_GROUP,
        )?);
    }
    let summaries = summarize_groups(&observations);

    let bar_chart = out_dir.join(BAR_CHART_FILE);
    render_group_means_chart(&summaries, &bar_chart)?;

    let series = generate_monthly_series(
        &mut rng,
        series_start(),
        SERIES_PERIODS,
        TREND_START,
        TREND_END,
        NOISE_STD_DEV,
    )?;

    let line_chart = out_dir.join(LINE_CHART_FILE);
    render_monthly_series_chart(&series, &line_chart)?;

    let meta = ReportMeta::new(RNG_SEED, REPLICATES_PER_GROUP, GROUPS.len(), series.len());
    Ok(DemoOutput {
        report: RunReport {
            meta,
            summaries,
            series,
        },
        bar_chart,
        line_chart,
    })
}

/// Execute the pipeline in the current directory and print both tables.
pub fn run() -> Result<(), DemoError> {
    let output = run_with_output_dir(Path::new("."))?;

    println!("\n=== Group summary (mean, sd, n, se) ===");
    print!("{}", format_group_summary_table(&output.report.summaries));

    println!("\n=== Time series (first rows) ===");
    print!(
        "{}",
        format_series_head(&output.report.series, SERIES_HEAD_ROWS)
    );

    Ok(())
}
