//! Yahoo Finance price history client

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use time::OffsetDateTime;
use tracing::{debug, instrument};
use yahoo_finance_api as yahoo;

use super::PriceSeriesProvider;
use crate::error::ProviderError;
use crate::series::{PricePoint, PriceSeries};

/// Yahoo Finance client for daily quote history
#[derive(Debug, Clone, Default)]
pub struct YahooFinanceClient {}

impl YahooFinanceClient {
    pub fn new() -> Self {
        Self {}
    }

    /// Daily closes between `start` and `end`
    #[instrument(skip(self), fields(provider = "yahoo"))]
    pub async fn get_history(
        &self,
        ticker: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<PriceSeries, ProviderError> {
        let provider = yahoo::YahooConnector::new()
            .map_err(|e| ProviderError::ProviderUnavailable(e.to_string()))?;

        let start_odt = to_offset(start)?;
        let end_odt = to_offset(end)?;

        let response = provider
            .get_quote_history(ticker, start_odt, end_odt)
            .await
            .map_err(|e| classify(ticker, &e.to_string()))?;

        let quotes = response
            .quotes()
            .map_err(|_| ProviderError::UnknownTicker(ticker.to_string()))?;

        let series: PriceSeries = quotes
            .iter()
            .filter(|q| q.close.is_finite())
            .filter_map(|q| {
                DateTime::from_timestamp(q.timestamp as i64, 0)
                    .map(|ts| PricePoint::new(ts.date_naive(), q.close))
            })
            .collect();

        if series.is_empty() {
            return Err(ProviderError::UnknownTicker(ticker.to_string()));
        }

        debug!(
            ticker,
            points = series.len(),
            first = ?series.first_date(),
            last = ?series.last_date(),
            "fetched price history"
        );

        Ok(series)
    }
}

#[async_trait]
impl PriceSeriesProvider for YahooFinanceClient {
    async fn fetch(
        &self,
        ticker: &str,
        lookback: chrono::Duration,
    ) -> Result<PriceSeries, ProviderError> {
        let end = Utc::now();
        self.get_history(ticker, end - lookback, end).await
    }

    fn name(&self) -> &str {
        "yahoo"
    }
}

fn to_offset(ts: DateTime<Utc>) -> Result<OffsetDateTime, ProviderError> {
    OffsetDateTime::from_unix_timestamp(ts.timestamp())
        .map_err(|e| ProviderError::ProviderUnavailable(format!("invalid timestamp: {e}")))
}

// Yahoo answers an unknown symbol with 404 "Not Found"; everything else is a
// service or transport problem.
fn classify(ticker: &str, message: &str) -> ProviderError {
    let lower = message.to_lowercase();
    if lower.contains("404") || lower.contains("not found") || lower.contains("no data") {
        ProviderError::UnknownTicker(ticker.to_string())
    } else {
        ProviderError::ProviderUnavailable(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_not_found() {
        assert_eq!(
            classify("ZZZZ", "fetching the data from yahoo! finance failed: 404 Not Found"),
            ProviderError::UnknownTicker("ZZZZ".to_string())
        );
    }

    #[test]
    fn test_classify_transport_failure() {
        let err = classify("AAPL", "connection refused");
        assert!(matches!(err, ProviderError::ProviderUnavailable(msg) if msg == "connection refused"));
    }

    #[test]
    fn test_to_offset() {
        let ts = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        assert_eq!(to_offset(ts).unwrap().unix_timestamp(), 1_700_000_000);
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_year_of_history() {
        let client = YahooFinanceClient::new();
        let series = client
            .fetch("AAPL", chrono::Duration::days(365))
            .await
            .unwrap();

        assert!(series.len() > 200);
        assert!(series.closes().iter().all(|c| *c > 0.0));
        assert!(series.dates().windows(2).all(|w| w[0] <= w[1]));
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_unknown_ticker() {
        let client = YahooFinanceClient::new();
        let err = client
            .fetch("INVALIDSYMBOL12", chrono::Duration::days(30))
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::UnknownTicker(_)));
    }
}
