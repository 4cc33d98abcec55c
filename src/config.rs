//! Provider and cycle configuration built from `constants`

use crate::constants::{DEFAULT_TICKER, MESSARI_API_URL, USER_AGENT};
use std::time::Duration;

/// Settings for a lookup session
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the market-data API, without trailing slash
    pub api_base_url: String,

    /// Ticker used when the free-text prompt is left empty
    pub default_ticker: String,

    /// Optional HTTP timeout. `None` means a request may wait forever.
    pub request_timeout: Option<Duration>,

    /// User agent for HTTP requests
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: MESSARI_API_URL.to_string(),
            default_ticker: DEFAULT_TICKER.to_string(),
            request_timeout: None,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Returns a copy pointing at another API base URL
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns a copy with a request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_timeout() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "https://data.messari.io/api/v1");
        assert_eq!(config.default_ticker, "btc");
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = Config::default().with_api_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
    }
}
