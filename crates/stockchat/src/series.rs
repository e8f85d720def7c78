//! Daily closing-price series

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day's close
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// Chronologically ascending closing prices, one entry per trading day
///
/// Dates and closes are stored side by side so the indicator functions can
/// work on a plain `&[f64]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    dates: Vec<NaiveDate>,
    closes: Vec<f64>,
}

impl PriceSeries {
    /// Build a series from points in any order
    ///
    /// Points are sorted by date; the sort is stable, so for duplicate dates
    /// the later input wins its position after the earlier one.
    pub fn from_points(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        let (dates, closes) = points.into_iter().map(|p| (p.date, p.close)).unzip();
        Self { dates, closes }
    }

    /// Closing prices in chronological order
    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn points(&self) -> impl Iterator<Item = PricePoint> + '_ {
        self.dates
            .iter()
            .zip(&self.closes)
            .map(|(&date, &close)| PricePoint { date, close })
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }
}

impl FromIterator<PricePoint> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = PricePoint>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}

#[cfg(test)]
pub(crate) fn daily_series(closes: &[f64]) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    closes
        .iter()
        .zip(start.iter_days())
        .map(|(&close, date)| PricePoint::new(date, close))
        .collect()
}
