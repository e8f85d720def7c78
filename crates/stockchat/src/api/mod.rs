//! Price series providers
//!
//! The dialogue loop only sees the [`PriceSeriesProvider`] trait; the Yahoo
//! Finance client is the production implementation.

pub mod yahoo;

pub use yahoo::YahooFinanceClient;

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::series::PriceSeries;

/// Source of daily closing prices
#[async_trait]
pub trait PriceSeriesProvider: Send + Sync {
    /// Daily closes for `ticker` over the trailing `lookback`
    ///
    /// `ticker` is expected to be normalised already. Implementations fetch on
    /// every call; nothing is cached.
    async fn fetch(
        &self,
        ticker: &str,
        lookback: chrono::Duration,
    ) -> Result<PriceSeries, ProviderError>;

    /// Name used in log output
    fn name(&self) -> &str;
}
