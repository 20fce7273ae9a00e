//! Summary command
//!
//! Mirrors the crate's direct-run output: base URL, top-10 symbol list,
//! and the head of a 100-row 1-minute BTCUSDT fetch. Fetch failures are
//! logged and rendered as empty output.

use anyhow::Result;
use market_data::BybitClient;
use tracing::warn;

use super::print_head;

pub fn run() -> Result<()> {
    let client = BybitClient::from_env();

    println!("Base URL: {}", client.base_url());

    let symbols = client.get_top10_symbols().unwrap_or_else(|e| {
        warn!("Failed to fetch tickers: {}", e);
        Vec::new()
    });
    println!("Top 10 symbols: {:?}", symbols);

    let candles = client.get_klines("BTCUSDT", "1", 100).unwrap_or_else(|e| {
        warn!("Failed to fetch klines for BTCUSDT: {}", e);
        Vec::new()
    });
    print_head(&candles);

    Ok(())
}
