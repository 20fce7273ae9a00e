//! CLI subcommand implementations

pub mod download;
pub mod klines;
pub mod summary;
pub mod top;

use market_data::Candle;

/// Number of rows printed by series previews
const HEAD_ROWS: usize = 5;

/// Print the head of a candle series with the fixed column schema
pub(crate) fn print_head(candles: &[Candle]) {
    println!(
        "{:<20} {:>14} {:>14} {:>14} {:>14} {:>16}",
        "open_time", "open", "high", "low", "close", "volume"
    );

    for candle in candles.iter().take(HEAD_ROWS) {
        println!(
            "{:<20} {:>14.4} {:>14.4} {:>14.4} {:>14.4} {:>16.4}",
            candle.open_time.format("%Y-%m-%d %H:%M:%S"),
            candle.open,
            candle.high,
            candle.low,
            candle.close,
            candle.volume
        );
    }

    if candles.is_empty() {
        println!("(no rows)");
    } else if candles.len() > HEAD_ROWS {
        println!("... {} rows total", candles.len());
    }
}
