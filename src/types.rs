//! Types for the market-data lookup

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Messari market-data response
///
/// Every field is required. A body missing any of them fails to deserialize.
#[derive(Debug, Deserialize)]
pub struct MarketDataResponse {
    pub data: AssetData,
}

#[derive(Debug, Deserialize)]
pub struct AssetData {
    pub symbol: String,
    pub name: String,
    pub market_data: MarketData,
}

#[derive(Debug, Deserialize)]
pub struct MarketData {
    pub price_usd: f64,
    pub percent_change_usd_last_24_hours: f64,
}

/// Price quote extracted from a success response
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Asset symbol as reported by the API (e.g. "BTC")
    pub symbol: String,

    /// Asset name (e.g. "Bitcoin")
    pub name: String,

    /// Price in USD
    pub price_usd: f64,

    /// 24h price change percentage
    pub percent_change_24h: f64,

    /// When the quote was received
    pub fetched_at: DateTime<Utc>,
}

impl From<MarketDataResponse> for Quote {
    fn from(response: MarketDataResponse) -> Self {
        let AssetData {
            symbol,
            name,
            market_data,
        } = response.data;

        Self {
            symbol,
            name,
            price_usd: market_data.price_usd,
            percent_change_24h: market_data.percent_change_usd_last_24_hours,
            fetched_at: Utc::now(),
        }
    }
}

/// Direction of the 24h change, as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    /// Rounded change is zero or positive
    Up,
    /// Rounded change is negative
    Down,
}

impl ChangeDirection {
    /// Arrow glyph for this direction
    pub fn arrow(&self) -> &'static str {
        match self {
            ChangeDirection::Up => "⬆",
            ChangeDirection::Down => "⬇",
        }
    }
}
