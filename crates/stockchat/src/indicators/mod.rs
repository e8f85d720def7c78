//! Technical indicators over a closing-price series
//!
//! Every function here is pure: the same closes always give the same result
//! and nothing is cached between calls. Inputs are plain slices in
//! chronological order, as returned by [`PriceSeries::closes`].

mod momentum;
mod moving_average;

pub use momentum::{
    MACD_FAST_SPAN, MACD_SIGNAL_SPAN, MACD_SLOW_SPAN, Macd, RSI_CENTER_OF_MASS, interpret_rsi,
    macd, rsi,
};
pub use moving_average::{Smoothing, ema, ema_series, sma};

use crate::error::IndicatorError;
use crate::series::{PricePoint, PriceSeries};

/// Result type for indicator calculations
pub type Result<T> = std::result::Result<T, IndicatorError>;

/// Close of the most recent entry
pub fn latest_price(closes: &[f64]) -> Result<f64> {
    closes.last().copied().ok_or(IndicatorError::EmptySeries)
}

/// Full series as (date, close) points for a chart renderer
pub fn chart_points(series: &PriceSeries) -> Result<Vec<PricePoint>> {
    if series.is_empty() {
        return Err(IndicatorError::EmptySeries);
    }
    Ok(series.points().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::daily_series;

    #[test]
    fn test_latest_price_is_last_close() {
        for closes in [vec![5.0], vec![1.0, 2.0, 3.0], vec![9.5, 3.25, 7.75, 4.0]] {
            assert_eq!(latest_price(&closes), Ok(closes[closes.len() - 1]));
        }
    }

    #[test]
    fn test_latest_price_empty() {
        assert_eq!(latest_price(&[]), Err(IndicatorError::EmptySeries));
    }

    #[test]
    fn test_chart_points() {
        let series = daily_series(&[10.0, 11.0, 12.0]);
        let points = chart_points(&series).unwrap();

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].close, 10.0);
        assert_eq!(points[2].date, series.last_date().unwrap());
    }

    #[test]
    fn test_chart_points_empty() {
        assert_eq!(
            chart_points(&PriceSeries::default()),
            Err(IndicatorError::EmptySeries)
        );
    }
}
