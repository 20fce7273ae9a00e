//! Bybit-specific error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BybitError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("API returned error: {code} - {message}")]
    Api { code: i32, message: String },
}

pub type BybitResult<T> = Result<T, BybitError>;
