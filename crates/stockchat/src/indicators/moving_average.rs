// =============================================================================
// Moving averages
// =============================================================================
//
// SMA: arithmetic mean of the trailing `window` closes.
//
// EMA: recursive mean seeded by the first value,
//   ema_0 = x_0
//   ema_t = ema_{t-1} + alpha * (x_t - ema_{t-1})
// which is the same as alpha * x_t + (1 - alpha) * ema_{t-1}, but leaves a
// constant series exactly unchanged.
// =============================================================================

use super::Result;
use crate::error::IndicatorError;

/// How an exponential average derives its smoothing factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Smoothing {
    /// alpha = 2 / (span + 1)
    Span(usize),
    /// alpha = 1 / (1 + com)
    CenterOfMass(f64),
}

impl Smoothing {
    pub fn alpha(self) -> f64 {
        match self {
            Self::Span(span) => 2.0 / (span as f64 + 1.0),
            Self::CenterOfMass(com) => 1.0 / (1.0 + com),
        }
    }
}

/// Mean of the last `window` closes
///
/// Partial windows are rejected with [`IndicatorError::InsufficientData`].
pub fn sma(closes: &[f64], window: usize) -> Result<f64> {
    if window == 0 {
        return Err(IndicatorError::InvalidWindow(window));
    }
    if closes.is_empty() {
        return Err(IndicatorError::EmptySeries);
    }
    if closes.len() < window {
        return Err(IndicatorError::InsufficientData {
            required: window,
            available: closes.len(),
        });
    }

    let tail = &closes[closes.len() - window..];
    Ok(tail.iter().sum::<f64>() / window as f64)
}

/// EMA with span `window`, evaluated at the final close
///
/// Single pass, constant extra space. Shorter series than `window` are fine:
/// the recursion is defined from the first value on.
pub fn ema(closes: &[f64], window: usize) -> Result<f64> {
    if window == 0 {
        return Err(IndicatorError::InvalidWindow(window));
    }
    ema_last(closes, Smoothing::Span(window).alpha()).ok_or(IndicatorError::EmptySeries)
}

/// EMA at every index of `values`
pub fn ema_series(values: &[f64], smoothing: Smoothing) -> Vec<f64> {
    let alpha = smoothing.alpha();
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;

    for &x in values {
        let next = match prev {
            None => x,
            Some(p) => p + alpha * (x - p),
        };
        out.push(next);
        prev = Some(next);
    }

    out
}

pub(super) fn ema_last(values: &[f64], alpha: f64) -> Option<f64> {
    let (&first, rest) = values.split_first()?;
    Some(rest.iter().fold(first, |prev, &x| prev + alpha * (x - prev)))
}
