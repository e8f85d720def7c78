//! Price chart rendering

use std::path::Path;

use plotters::prelude::*;
use tracing::debug;

use crate::error::ChartError;
use crate::series::PricePoint;

pub const CHART_WIDTH: u32 = 1000;
pub const CHART_HEIGHT: u32 = 500;

/// Draws a closing-price chart to a file
///
/// Rendering is synchronous; async callers should move it off the runtime
/// threads.
pub trait ChartRenderer: Send + Sync {
    /// Render `points` for `ticker`, replacing whatever is at `destination`
    fn render(
        &self,
        ticker: &str,
        points: &[PricePoint],
        destination: &Path,
    ) -> Result<(), ChartError>;
}

/// Line chart of close against date, written as SVG
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgChartRenderer;

impl SvgChartRenderer {
    pub fn new() -> Self {
        Self
    }
}

pub fn chart_title(ticker: &str) -> String {
    format!("{ticker} Stock Price Over Last Year")
}

impl ChartRenderer for SvgChartRenderer {
    fn render(
        &self,
        ticker: &str,
        points: &[PricePoint],
        destination: &Path,
    ) -> Result<(), ChartError> {
        if points.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let (y_min, y_max) = price_bounds(points);
        let root = SVGBackend::new(destination, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(drawing)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(chart_title(ticker), ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(0..points.len(), y_min..y_max)
            .map_err(drawing)?;

        let date_label = |i: &usize| {
            points
                .get(*i)
                .map(|p| p.date.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };

        chart
            .configure_mesh()
            .x_desc("Date")
            .y_desc("Stock Price ($)")
            .x_labels(8)
            .x_label_formatter(&date_label)
            .y_label_formatter(&|v| format!("{v:.2}"))
            .draw()
            .map_err(drawing)?;

        chart
            .draw_series(LineSeries::new(
                points.iter().enumerate().map(|(i, p)| (i, p.close)),
                &BLUE,
            ))
            .map_err(drawing)?;

        root.present().map_err(drawing)?;

        debug!(ticker, path = %destination.display(), points = points.len(), "chart rendered");
        Ok(())
    }
}

fn drawing<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Drawing(e.to_string())
}

// Padded y range; a flat series still gets a visible band.
fn price_bounds(points: &[PricePoint]) -> (f64, f64) {
    let (min, max) = points
        .iter()
        .map(|p| p.close)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| {
            (lo.min(c), hi.max(c))
        });

    let span = max - min;
    let pad = if span > f64::EPSILON { span * 0.05 } else { 1.0 };
    (min - pad, max + pad)
}
