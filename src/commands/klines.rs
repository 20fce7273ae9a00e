//! Klines command - fetch through the source dispatcher and print the head

use anyhow::Result;
use market_data::{data, BybitError};
use tracing::warn;

use super::print_head;

pub fn run(symbol: String, interval: String, limit: u32, source: String) -> Result<()> {
    let candles = match data::load_data(&symbol, &interval, limit, &source) {
        Ok(candles) => candles,
        // fetch failures render as an empty series; an unknown source stays fatal
        Err(e) if e.downcast_ref::<BybitError>().is_some() => {
            warn!("Failed to fetch klines for {}: {}", symbol, e);
            Vec::new()
        }
        Err(e) => return Err(e),
    };

    print_head(&candles);
    Ok(())
}
