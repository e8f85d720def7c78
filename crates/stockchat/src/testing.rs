//! Test fixtures shared across modules

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::api::PriceSeriesProvider;
use crate::error::ProviderError;
use crate::series::{PriceSeries, daily_series};

/// In-memory price provider that counts fetches
#[derive(Debug, Default)]
pub(crate) struct StaticPriceProvider {
    series: HashMap<String, PriceSeries>,
    fetches: AtomicUsize,
}

impl StaticPriceProvider {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, ticker: &str, closes: &[f64]) -> Self {
        self.series.insert(ticker.to_string(), daily_series(closes));
        self
    }

    pub(crate) fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceSeriesProvider for StaticPriceProvider {
    async fn fetch(
        &self,
        ticker: &str,
        _lookback: chrono::Duration,
    ) -> Result<PriceSeries, ProviderError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.series
            .get(ticker)
            .cloned()
            .ok_or_else(|| ProviderError::UnknownTicker(ticker.to_string()))
    }

    fn name(&self) -> &str {
        "static"
    }
}
