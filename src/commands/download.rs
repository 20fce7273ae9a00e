//! Download command - fetch klines and save them to CSV

use anyhow::Result;
use market_data::{data, BybitClient};
use tracing::{info, warn};

pub fn run(symbol: String, interval: String, limit: u32, output: String) -> Result<()> {
    let client = BybitClient::from_env();

    info!(
        "Downloading {} {} ({} rows) from {}",
        symbol,
        interval,
        limit,
        client.base_url()
    );

    let mut candles = client
        .get_klines(&symbol, &interval, limit)
        .unwrap_or_else(|e| {
            warn!("Failed to fetch klines for {}: {}", symbol, e);
            Vec::new()
        });

    if candles.is_empty() {
        println!("No data fetched for {}", symbol);
        return Ok(());
    }

    // The exchange returns rows newest first; export chronologically
    candles.sort_by_key(|c| c.open_time);
    candles.dedup_by_key(|c| c.open_time);

    let report = data::validate_candles(&candles);
    for error in &report.errors {
        warn!("Validation: {}", error);
    }
    for warning in &report.warnings {
        warn!("Validation: {}", warning);
    }

    let filename = format!("{}_{}.csv", symbol, interval);
    let path = data::save_to_csv(&candles, &output, &filename)?;
    let restored = data::load_csv(&path)?;

    println!("Saved {} candles to {}", restored.len(), path.display());
    Ok(())
}
