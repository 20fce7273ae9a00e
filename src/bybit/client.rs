//! Bybit V5 API client for fetching spot market data
//!
//! No API key is required for the public market data endpoints. Credentials
//! from the configuration are carried for future authenticated endpoints
//! but are never attached to outgoing requests.

use std::time::Duration;

use tracing::debug;

use crate::config::Config;
use crate::types::Candle;

use super::error::{BybitError, BybitResult};
use super::types::{ApiResponse, KlineList, Ticker, TickerList};

/// Market category for all requests
const SPOT_CATEGORY: &str = "spot";

/// Quote asset used to filter ranked symbols
const QUOTE_ASSET: &str = "USDT";

/// Number of symbols returned by the volume ranking
const TOP_SYMBOL_COUNT: usize = 10;

/// Request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Bybit API client
#[derive(Debug, Clone)]
pub struct BybitClient {
    config: Config,
    client: reqwest::blocking::Client,
}

impl Default for BybitClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BybitClient {
    /// Create a client with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a client with explicit configuration
    pub fn with_config(config: Config) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        BybitClient { config, client }
    }

    /// Create a client configured from the environment
    pub fn from_env() -> Self {
        Self::with_config(Config::from_env())
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Fetch spot klines (candlestick data)
    ///
    /// # Arguments
    /// * `symbol` - Trading pair symbol (e.g., "BTCUSDT")
    /// * `interval` - Kline interval (e.g., "1", "5", "60", "D")
    /// * `limit` - Number of candles to fetch; passed through unvalidated
    ///
    /// Returns candles in the order the exchange sent them. Rows that fail
    /// numeric parsing are skipped.
    pub fn get_klines(
        &self,
        symbol: &str,
        interval: &str,
        limit: u32,
    ) -> BybitResult<Vec<Candle>> {
        let url = format!("{}/v5/market/kline", self.config.base_url);

        debug!(
            "Fetching klines: symbol={}, interval={}, limit={}",
            symbol, interval, limit
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("category", SPOT_CATEGORY),
                ("symbol", symbol),
                ("interval", interval),
                ("limit", &limit.to_string()),
            ])
            .send()?;

        if !response.status().is_success() {
            return Err(BybitError::Status(response.status()));
        }

        let payload: ApiResponse<KlineList> = response.json()?;
        if payload.ret_code != 0 {
            return Err(BybitError::Api {
                code: payload.ret_code,
                message: payload.ret_msg,
            });
        }

        let rows = payload.result.unwrap_or(KlineList { list: Vec::new() });
        let total = rows.list.len();
        let candles = rows.into_candles();
        if candles.len() < total {
            debug!("Skipped {} malformed kline rows", total - candles.len());
        }

        Ok(candles)
    }

    /// Fetch the top 10 USDT spot pairs by 24-hour traded volume
    ///
    /// Returns at most 10 symbols, highest volume first; ties keep the
    /// order the exchange sent them.
    pub fn get_top10_symbols(&self) -> BybitResult<Vec<String>> {
        let url = format!("{}/v5/market/tickers", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("category", SPOT_CATEGORY)])
            .send()?;

        if !response.status().is_success() {
            return Err(BybitError::Status(response.status()));
        }

        let payload: ApiResponse<TickerList> = response.json()?;
        if payload.ret_code != 0 {
            return Err(BybitError::Api {
                code: payload.ret_code,
                message: payload.ret_msg,
            });
        }

        let tickers = payload.result.map(|r| r.list).unwrap_or_default();
        Ok(top_symbols_by_volume(tickers))
    }
}

/// Rank tickers by 24-hour volume and keep the USDT-quoted leaders
pub fn top_symbols_by_volume(tickers: Vec<Ticker>) -> Vec<String> {
    let mut usdt_pairs: Vec<Ticker> = tickers
        .into_iter()
        .filter(|t| t.symbol.ends_with(QUOTE_ASSET))
        .collect();

    // stable sort: equal volumes keep exchange order
    usdt_pairs.sort_by(|a, b| {
        b.traded_volume()
            .partial_cmp(&a.traded_volume())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    usdt_pairs
        .into_iter()
        .take(TOP_SYMBOL_COUNT)
        .map(|t| t.symbol)
        .collect()
}
