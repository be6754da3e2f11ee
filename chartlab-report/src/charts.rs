//! Chart Rendering
//!
//! Renders the two demo charts to PNG files via plotters:
//! - Bar chart of group means with standard-error whiskers and end caps
//! - Monthly line chart with a circular marker per point
//!
//! Output files are overwritten unconditionally; any backend or filesystem
//! failure surfaces as a [`RenderError`] and aborts the run.

use std::path::Path;

use chartlab_core::TimeSeriesPoint;
use chartlab_stats::GroupSummary;
use chrono::NaiveDate;
use plotters::prelude::*;
use thiserror::Error;

/// Bar chart pixel size (7 x 5 in at 140 dpi)
pub const BAR_CHART_SIZE: (u32, u32) = (980, 700);

/// Line chart pixel size (8 x 4.8 in at 140 dpi)
pub const LINE_CHART_SIZE: (u32, u32) = (1120, 672);

/// Half-width of a bar in group-index units
const BAR_HALF_WIDTH: f64 = 0.35;

/// Half-width of an error-bar end cap in group-index units
const CAP_HALF_WIDTH: f64 = 0.08;

/// Errors from chart rendering
#[derive(Debug, Error)]
pub enum RenderError {
    /// Nothing to plot
    #[error("cannot render a chart from an empty dataset")]
    EmptyDataset,
    /// Backend or filesystem failure while drawing
    #[error("chart drawing failed: {0}")]
    Draw(String),
}

fn draw_err<E: std::error::Error>(err: E) -> RenderError {
    RenderError::Draw(err.to_string())
}

/// Render the group-means bar chart with standard-error whiskers.
///
/// One bar per summary row, positioned at the row's mean; a vertical
/// whisker spans mean +/- standard error with horizontal end caps. Rows
/// with a non-finite standard error (singleton groups) get a bar but no
/// whisker.
pub fn render_group_means_chart(
    summaries: &[GroupSummary],
    path: &Path,
) -> Result<(), RenderError> {
    if summaries.is_empty() {
        return Err(RenderError::EmptyDataset);
    }

    let mut y_max = summaries
        .iter()
        .map(|s| {
            if s.std_error.is_finite() {
                s.mean + s.std_error
            } else {
                s.mean
            }
        })
        .fold(0.0f64, f64::max);
    if !y_max.is_finite() || y_max <= 0.0 {
        y_max = 1.0;
    }

    let n = summaries.len();
    let root = BitMapBackend::new(path, BAR_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Group means with standard error", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), 0.0f64..(y_max * 1.15))
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&|x| {
            let idx = x.round();
            if (x - idx).abs() < 1e-6 && idx >= 0.0 && (idx as usize) < summaries.len() {
                summaries[idx as usize].group.clone()
            } else {
                String::new()
            }
        })
        .x_desc("Group")
        .y_desc("Mean value")
        .draw()
        .map_err(draw_err)?;

    for (i, s) in summaries.iter().enumerate() {
        let x = i as f64;

        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, s.mean)],
                BLUE.mix(0.5).filled(),
            )))
            .map_err(draw_err)?;

        if s.std_error.is_finite() {
            let y0 = s.mean - s.std_error;
            let y1 = s.mean + s.std_error;
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(x, y0), (x, y1)],
                    BLACK,
                )))
                .map_err(draw_err)?;
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(x - CAP_HALF_WIDTH, y0), (x + CAP_HALF_WIDTH, y0)],
                    BLACK,
                )))
                .map_err(draw_err)?;
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(x - CAP_HALF_WIDTH, y1), (x + CAP_HALF_WIDTH, y1)],
                    BLACK,
                )))
                .map_err(draw_err)?;
        }
    }

    root.present().map_err(draw_err)?;
    Ok(())
}

/// Render the monthly line chart with a marker per point.
pub fn render_monthly_series_chart(
    series: &[TimeSeriesPoint],
    path: &Path,
) -> Result<(), RenderError> {
    let (first, last) = match (series.first(), series.last()) {
        (Some(first), Some(last)) => (first.date, last.date),
        _ => return Err(RenderError::EmptyDataset),
    };

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for point in series {
        y_min = y_min.min(point.value);
        y_max = y_max.max(point.value);
    }
    if !y_min.is_finite() || !y_max.is_finite() {
        y_min = 0.0;
        y_max = 1.0;
    }
    let mut pad = 0.1 * (y_max - y_min);
    if pad <= 0.0 {
        pad = 1.0;
    }

    let root = BitMapBackend::new(path, LINE_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Monthly evolution (2025)", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(first..last, (y_min - pad)..(y_max + pad))
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_labels(series.len())
        .x_label_formatter(&|date: &NaiveDate| date.format("%b %Y").to_string())
        .x_desc("Date")
        .y_desc("Value")
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(LineSeries::new(
            series.iter().map(|p| (p.date, p.value)),
            &BLUE,
        ))
        .map_err(draw_err)?;
    chart
        .draw_series(
            series
                .iter()
                .map(|p| Circle::new((p.date, p.value), 4, BLUE.filled())),
        )
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summaries_rejected() {
        let path = std::env::temp_dir().join("chartlab_empty_bar.png");
        let result = render_group_means_chart(&[], &path);
        assert!(matches!(result, Err(RenderError::EmptyDataset)));
    }

    #[test]
    fn test_empty_series_rejected() {
        let path = std::env::temp_dir().join("chartlab_empty_line.png");
        let result = render_monthly_series_chart(&[], &path);
        assert!(matches!(result, Err(RenderError::EmptyDataset)));
    }
}
