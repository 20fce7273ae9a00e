//! Bybit V5 API wire types

use serde::{Deserialize, Serialize};

use crate::types::Candle;

/// V5 response envelope
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(rename = "retCode")]
    pub ret_code: i32,
    #[serde(rename = "retMsg")]
    pub ret_msg: String,
    pub result: Option<T>,
}

/// Kline list payload
///
/// Rows are positional string arrays:
/// [startTime_ms, open, high, low, close, volume, turnover]
#[derive(Debug, Deserialize)]
pub struct KlineList {
    #[serde(default)]
    pub list: Vec<Vec<String>>,
}

impl KlineList {
    /// Convert raw rows to candles, preserving exchange order
    ///
    /// Rows that are too short or fail numeric parsing are skipped.
    pub fn into_candles(self) -> Vec<Candle> {
        self.list
            .iter()
            .filter_map(|row| candle_from_row(row))
            .collect()
    }
}

/// Parse one positional kline row
pub(crate) fn candle_from_row(row: &[String]) -> Option<Candle> {
    if row.len() < 6 {
        return None;
    }

    let open_time_ms: i64 = row[0].parse().ok()?;
    Some(Candle {
        open_time: chrono::DateTime::from_timestamp_millis(open_time_ms)?,
        open: row[1].parse().ok()?,
        high: row[2].parse().ok()?,
        low: row[3].parse().ok()?,
        close: row[4].parse().ok()?,
        volume: row[5].parse().ok()?,
    })
}

/// Spot ticker snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticker {
    pub symbol: String,
    #[serde(rename = "lastPrice", default)]
    pub last_price: String,
    #[serde(rename = "highPrice24h", default)]
    pub high_price_24h: String,
    #[serde(rename = "lowPrice24h", default)]
    pub low_price_24h: String,
    #[serde(rename = "volume24h", default)]
    pub volume_24h: String,
    #[serde(rename = "turnover24h", default)]
    pub turnover_24h: String,
}

impl Ticker {
    /// 24-hour traded volume; unparseable values rank as zero
    pub fn traded_volume(&self) -> f64 {
        self.volume_24h.parse().unwrap_or(0.0)
    }
}

/// Ticker list payload
#[derive(Debug, Deserialize)]
pub struct TickerList {
    #[serde(default)]
    pub list: Vec<Ticker>,
}
