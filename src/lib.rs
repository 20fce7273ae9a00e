//! Spot market data fetching from the Bybit V5 API
//!
//! Provides a blocking HTTP client for the public kline and ticker
//! endpoints, a source-dispatching `load_data` entry point, and CSV
//! import/export for fetched candle series.

pub mod bybit;
pub mod config;
pub mod data;
pub mod types;

pub use bybit::{BybitClient, BybitError};
pub use config::Config;
pub use types::Candle;
