// =============================================================================
// Momentum indicators: RSI and MACD
// =============================================================================
//
// RSI:
//   delta_t = close_t - close_{t-1}
//   up_t    = max(delta_t, 0)       down_t = max(-delta_t, 0)
//   avg_up, avg_down = EMA with center of mass 13 (alpha = 1/14), seeded by
//                      the first difference
//   RSI     = 100 - 100 / (1 + avg_up / avg_down)
//
// MACD:
//   line      = EMA(span 12) - EMA(span 26)
//   signal    = EMA(span 9) of line
//   histogram = line - signal
// =============================================================================

use serde::{Deserialize, Serialize};

use super::Result;
use super::moving_average::{Smoothing, ema_last, ema_series};
use crate::error::IndicatorError;

/// Center of mass of the gain/loss smoothing (14-period Wilder average)
pub const RSI_CENTER_OF_MASS: f64 = 13.0;

pub const MACD_FAST_SPAN: usize = 12;
pub const MACD_SLOW_SPAN: usize = 26;
pub const MACD_SIGNAL_SPAN: usize = 9;

/// MACD values at the most recent close
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Macd {
    pub line: f64,
    pub signal: f64,
    pub histogram: f64,
}

impl From<Macd> for (f64, f64, f64) {
    fn from(m: Macd) -> Self {
        (m.line, m.signal, m.histogram)
    }
}

/// Relative Strength Index at the final close
///
/// Needs at least two closes. When the smoothed loss is zero the result is
/// 100; when gains and losses are both zero the value is undefined and
/// [`IndicatorError::NoPriceMovement`] is returned.
pub fn rsi(closes: &[f64]) -> Result<f64> {
    if closes.is_empty() {
        return Err(IndicatorError::EmptySeries);
    }
    if closes.len() < 2 {
        return Err(IndicatorError::InsufficientData {
            required: 2,
            available: closes.len(),
        });
    }

    let (gains, losses): (Vec<f64>, Vec<f64>) = closes
        .windows(2)
        .map(|w| {
            let delta = w[1] - w[0];
            (delta.max(0.0), (-delta).max(0.0))
        })
        .unzip();

    let alpha = Smoothing::CenterOfMass(RSI_CENTER_OF_MASS).alpha();
    let avg_gain = ema_last(&gains, alpha).unwrap_or_default();
    let avg_loss = ema_last(&losses, alpha).unwrap_or_default();

    if avg_loss == 0.0 {
        return if avg_gain == 0.0 {
            Err(IndicatorError::NoPriceMovement)
        } else {
            Ok(100.0)
        };
    }

    Ok(100.0 - 100.0 / (1.0 + avg_gain / avg_loss))
}

/// MACD line, signal and histogram at the final close
pub fn macd(closes: &[f64]) -> Result<Macd> {
    if closes.is_empty() {
        return Err(IndicatorError::EmptySeries);
    }

    let fast = ema_series(closes, Smoothing::Span(MACD_FAST_SPAN));
    let slow = ema_series(closes, Smoothing::Span(MACD_SLOW_SPAN));
    let line: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();

    let alpha = Smoothing::Span(MACD_SIGNAL_SPAN).alpha();
    let signal = ema_last(&line, alpha).ok_or(IndicatorError::EmptySeries)?;
    let line = *line.last().ok_or(IndicatorError::EmptySeries)?;

    Ok(Macd {
        line,
        signal,
        histogram: line - signal,
    })
}

/// Conventional reading of an RSI value
pub fn interpret_rsi(rsi: f64) -> &'static str {
    if rsi > 70.0 {
        "Overbought - potential sell signal"
    } else if rsi < 30.0 {
        "Oversold - potential buy signal"
    } else {
        "Neutral"
    }
}
