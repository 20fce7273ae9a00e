//! Bybit V5 API client
//!
//! Public spot market data endpoints only; no authenticated calls.

mod client;
mod error;
mod types;

pub use client::{top_symbols_by_volume, BybitClient};
pub use error::{BybitError, BybitResult};
pub use types::{ApiResponse, KlineList, Ticker, TickerList};
