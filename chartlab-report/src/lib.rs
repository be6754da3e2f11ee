#![warn(missing_docs)]
//! ChartLab Report - Rendering and Output
//!
//! Generates the demo's outputs:
//! - PNG charts via plotters (bar chart with error bars; monthly line chart)
//! - Fixed-width text tables for the terminal
//! - JSON (machine-readable run report)

mod charts;
mod json;
mod report;
mod tables;

pub use charts::{
    BAR_CHART_SIZE, LINE_CHART_SIZE, RenderError, render_group_means_chart,
    render_monthly_series_chart,
};
pub use json::generate_json_report;
pub use report::{ReportMeta, RunReport, SCHEMA_VERSION};
pub use tables::{format_group_summary_table, format_series_head};
