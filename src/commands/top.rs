//! Top command - top 10 USDT pairs by 24h traded volume

use anyhow::Result;
use market_data::BybitClient;
use tracing::warn;

pub fn run() -> Result<()> {
    let client = BybitClient::from_env();

    let symbols = client.get_top10_symbols().unwrap_or_else(|e| {
        warn!("Failed to fetch tickers: {}", e);
        Vec::new()
    });

    if symbols.is_empty() {
        println!("(no symbols)");
        return Ok(());
    }

    for (rank, symbol) in symbols.iter().enumerate() {
        println!("{:>2}. {}", rank + 1, symbol);
    }

    Ok(())
}
