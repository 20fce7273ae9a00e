//! Data loading and management
//!
//! Source-dispatching candle loading plus CSV import/export for fetched
//! series.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::bybit::BybitClient;
use crate::types::Candle;

/// Load candle data from a named source
///
/// `source` is matched case-insensitively; only `"bybit"` is supported.
/// The client is configured from the environment and fetch errors
/// propagate to the caller unchanged.
pub fn load_data(symbol: &str, interval: &str, limit: u32, source: &str) -> Result<Vec<Candle>> {
    if source.eq_ignore_ascii_case("bybit") {
        let client = BybitClient::from_env();
        return Ok(client.get_klines(symbol, interval, limit)?);
    }
    anyhow::bail!("Unknown data source: {}. Available sources: bybit", source)
}

// =============================================================================
// CSV Import/Export
// =============================================================================

/// Load OHLCV data from a CSV file written by [`save_to_csv`]
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<Candle>> {
    let mut reader = csv::Reader::from_path(path.as_ref()).context("Failed to open CSV file")?;

    let mut candles = Vec::new();

    for (row_idx, result) in reader.records().enumerate() {
        let record = result.context(format!("Failed to read row {}", row_idx + 1))?;

        let dt_str = record.get(0).context("Missing open_time column")?;
        let open_time = dt_str
            .parse::<DateTime<Utc>>()
            .or_else(|_| {
                // Fall back to the naive format save_to_csv writes
                chrono::NaiveDateTime::parse_from_str(dt_str, "%Y-%m-%d %H:%M:%S")
                    .map(|ndt| DateTime::<Utc>::from_naive_utc_and_offset(ndt, Utc))
            })
            .context(format!("Failed to parse open_time: {}", dt_str))?;

        let open: f64 = record
            .get(1)
            .context("Missing open column")?
            .parse()
            .context("Failed to parse open")?;
        let high: f64 = record
            .get(2)
            .context("Missing high column")?
            .parse()
            .context("Failed to parse high")?;
        let low: f64 = record
            .get(3)
            .context("Missing low column")?
            .parse()
            .context("Failed to parse low")?;
        let close: f64 = record
            .get(4)
            .context("Missing close column")?
            .parse()
            .context("Failed to parse close")?;
        let volume: f64 = record
            .get(5)
            .context("Missing volume column")?
            .parse()
            .context("Failed to parse volume")?;

        candles.push(Candle {
            open_time,
            open,
            high,
            low,
            close,
            volume,
        });
    }

    Ok(candles)
}

/// Save candles to a CSV file under `dir`, creating the directory if needed
pub fn save_to_csv(candles: &[Candle], dir: impl AsRef<Path>, filename: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir.as_ref()).context("Failed to create output directory")?;

    let filepath = dir.as_ref().join(filename);
    let mut file = File::create(&filepath).context("Failed to create output file")?;

    writeln!(file, "open_time,open,high,low,close,volume")?;

    for candle in candles {
        writeln!(
            file,
            "{},{},{},{},{},{}",
            candle.open_time.format("%Y-%m-%d %H:%M:%S"),
            candle.open,
            candle.high,
            candle.low,
            candle.close,
            candle.volume
        )?;
    }

    info!("Saved {} rows to {}", candles.len(), filepath.display());
    Ok(filepath)
}

// =============================================================================
// Data Validation
// =============================================================================

/// Validate a candle series for consistency
///
/// Advisory only; fetching never rejects data.
pub fn validate_candles(candles: &[Candle]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if candles.is_empty() {
        errors.push("No candles provided".to_string());
        return ValidationResult { errors, warnings };
    }

    for (i, candle) in candles.iter().enumerate() {
        if let Err(e) = candle.validate() {
            errors.push(format!("Candle {}: {}", i, e));
        }
        if i > 0 && candle.open_time <= candles[i - 1].open_time {
            warnings.push(format!("Candle {}: not chronological", i));
        }
    }

    ValidationResult { errors, warnings }
}

/// Result of data validation
#[derive(Debug)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    fn sample_candles() -> Vec<Candle> {
        (0..3)
            .map(|i| Candle {
                open_time: Utc.with_ymd_and_hms(2024, 1, 1, 0, i, 0).unwrap(),
                open: 100.0 + i as f64,
                high: 105.0 + i as f64,
                low: 95.0 + i as f64,
                close: 102.0 + i as f64,
                volume: 1000.0 * (i + 1) as f64,
            })
            .collect()
    }

    #[test]
    fn test_unknown_source_fails() {
        let err = load_data("BTCUSDT", "1", 200, "kraken").unwrap_err();
        assert!(err.to_string().contains("kraken"));
    }

    #[test]
    fn test_csv_round_trip() {
        let dir = std::env::temp_dir().join("market-data-test-csv");
        let candles = sample_candles();

        let path = save_to_csv(&candles, &dir, "BTCUSDT_1.csv").unwrap();
        let restored = load_csv(&path).unwrap();

        assert_eq!(restored.len(), candles.len());
        for (orig, read) in candles.iter().zip(&restored) {
            assert_eq!(orig.open_time, read.open_time);
            assert_relative_eq!(orig.open, read.open);
            assert_relative_eq!(orig.close, read.close);
            assert_relative_eq!(orig.volume, read.volume);
        }

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_validate_clean_series() {
        let result = validate_candles(&sample_candles());
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_empty_series() {
        let result = validate_candles(&[]);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_validate_flags_inverted_range_and_order() {
        let mut candles = sample_candles();
        candles[1].high = candles[1].low - 1.0;
        candles[2].open_time = candles[0].open_time;

        let result = validate_candles(&candles);
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.contains("high")));
        assert!(result.warnings.iter().any(|w| w.contains("chronological")));
    }
}
