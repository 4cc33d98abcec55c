//! Messari market-data provider implementation

use crate::{
    config::Config,
    constants::MESSARI_MARKET_DATA_ENDPOINT,
    error::ProviderError,
    provider::{FetchOutcome, MarketDataProvider},
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// Messari market-data provider
pub struct MessariProvider {
    client: Client,
    base_url: String,
}

impl MessariProvider {
    /// Creates a new Messari provider
    pub fn new(config: &Config) -> Result<Self, ProviderError> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ProviderError::NetworkError)?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    /// Builds the market-data URL for a ticker
    pub fn build_url(&self, ticker: &str) -> String {
        format!(
            "{}{}",
            self.base_url,
            MESSARI_MARKET_DATA_ENDPOINT.replace("{ticker}", ticker)
        )
    }
}

#[async_trait]
impl MarketDataProvider for MessariProvider {
    async fn fetch_market_data(&self, ticker: &str) -> Result<FetchOutcome, ProviderError> {
        let url = self.build_url(ticker);
        tracing::debug!(url = %url, "Fetching market data from Messari");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ProviderError::NetworkError)?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!(status = status.as_u16(), ticker, "Messari returned non-200 status");
            return Ok(FetchOutcome::Status(status));
        }

        let body = response.text().await.map_err(ProviderError::NetworkError)?;
        tracing::debug!(bytes = body.len(), ticker, "Received market data");

        Ok(FetchOutcome::Success(body))
    }

    fn provider_name(&self) -> &'static str {
        "messari"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let provider = MessariProvider::new(&Config::default()).unwrap();
        assert_eq!(
            provider.build_url("btc"),
            "https://data.messari.io/api/v1/assets/btc/metrics/market-data"
        );
    }

    #[test]
    fn test_build_url_passes_ticker_through() {
        let config = Config::default().with_api_base_url("http://localhost:9999");
        let provider = MessariProvider::new(&config).unwrap();
        assert_eq!(
            provider.build_url("Not-A-Coin"),
            "http://localhost:9999/assets/Not-A-Coin/metrics/market-data"
        );
    }
}
