//! Provider abstraction for fetching market data from external APIs

use crate::error::ProviderError;
use async_trait::async_trait;
use reqwest::StatusCode;

/// Result of one market-data request that reached the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// HTTP 200 with the raw response body
    Success(String),

    /// Any other HTTP status
    Status(StatusCode),
}

/// Trait for market-data providers
///
/// Transport failures are `Err`; every response the server actually sent,
/// whatever its status, is an `Ok` outcome.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Issues one request for a ticker key
    ///
    /// # Arguments
    /// * `ticker` - Ticker key, passed through unmodified
    ///
    /// # Returns
    /// The classified outcome, or an error if the request never completed
    async fn fetch_market_data(&self, ticker: &str) -> Result<FetchOutcome, ProviderError>;

    /// Returns the name of this provider
    fn provider_name(&self) -> &'static str;
}
