//! Integration tests for the market-data crate
//!
//! These tests exercise the wire-format parsing, symbol ranking, source
//! dispatch, and CSV export together, without touching the network
//! except for a deliberately unreachable endpoint.

use approx::assert_relative_eq;

use market_data::bybit::{top_symbols_by_volume, ApiResponse, KlineList, TickerList};
use market_data::config::Config;
use market_data::{data, BybitClient};

// =============================================================================
// Canned V5 payloads
// =============================================================================

const KLINE_PAYLOAD: &str = r#"{
    "retCode": 0,
    "retMsg": "OK",
    "result": {
        "category": "spot",
        "symbol": "BTCUSDT",
        "list": [
            ["1700000120000", "37010.0", "37120.0", "36910.0", "37060.0", "125.5", "4650000"],
            ["1700000060000", "37005.0", "37110.0", "36905.0", "37055.0", "124.5", "4620000"],
            ["1700000000000", "37000.5", "37100.0", "36900.25", "37050.75", "123.456", "4571234.5"]
        ]
    }
}"#;

const TICKER_PAYLOAD: &str = r#"{
    "retCode": 0,
    "retMsg": "OK",
    "result": {
        "category": "spot",
        "list": [
            {"symbol": "BTCUSDT", "lastPrice": "37000", "volume24h": "5000.5"},
            {"symbol": "ETHBTC", "lastPrice": "0.055", "volume24h": "99999"},
            {"symbol": "ETHUSDT", "lastPrice": "2000", "volume24h": "8000"},
            {"symbol": "XRPUSDT", "lastPrice": "0.6", "volume24h": "8000"},
            {"symbol": "SOLUSDT", "lastPrice": "60", "volume24h": "100"}
        ]
    }
}"#;

// =============================================================================
// Wire-format parsing
// =============================================================================

#[test]
fn test_kline_payload_parses_all_rows_in_order() {
    let payload: ApiResponse<KlineList> = serde_json::from_str(KLINE_PAYLOAD).unwrap();
    assert_eq!(payload.ret_code, 0);

    let candles = payload.result.unwrap().into_candles();
    assert_eq!(candles.len(), 3);

    // Exchange order (newest first) is preserved
    assert_eq!(candles[0].open_time.timestamp_millis(), 1_700_000_120_000);
    assert_eq!(candles[2].open_time.timestamp_millis(), 1_700_000_000_000);

    assert_relative_eq!(candles[2].open, 37000.5);
    assert_relative_eq!(candles[2].high, 37100.0);
    assert_relative_eq!(candles[2].low, 36900.25);
    assert_relative_eq!(candles[2].close, 37050.75);
    assert_relative_eq!(candles[2].volume, 123.456);
}

#[test]
fn test_kline_payload_without_result_is_empty() {
    let json = r#"{"retCode": 0, "retMsg": "OK", "result": null}"#;
    let payload: ApiResponse<KlineList> = serde_json::from_str(json).unwrap();
    let candles = payload.result.map(|r| r.into_candles()).unwrap_or_default();
    assert!(candles.is_empty());
}

#[test]
fn test_kline_payload_with_empty_list_is_empty() {
    let json = r#"{"retCode": 0, "retMsg": "OK", "result": {"list": []}}"#;
    let payload: ApiResponse<KlineList> = serde_json::from_str(json).unwrap();
    assert!(payload.result.unwrap().into_candles().is_empty());
}

// =============================================================================
// Symbol ranking
// =============================================================================

#[test]
fn test_ticker_payload_ranks_usdt_pairs_by_volume() {
    let payload: ApiResponse<TickerList> = serde_json::from_str(TICKER_PAYLOAD).unwrap();
    let symbols = top_symbols_by_volume(payload.result.unwrap().list);

    // ETHBTC is filtered out; ETHUSDT and XRPUSDT tie and keep input order
    assert_eq!(symbols, vec!["ETHUSDT", "XRPUSDT", "BTCUSDT", "SOLUSDT"]);
}

// =============================================================================
// Source dispatch
// =============================================================================

#[test]
fn test_load_data_rejects_unknown_source() {
    let err = data::load_data("BTCUSDT", "1", 200, "unknown").unwrap_err();
    assert!(err.to_string().contains("unknown"));
}

// =============================================================================
// Transport failures
// =============================================================================

#[test]
fn test_unreachable_endpoint_yields_errors() {
    // Nothing listens on the discard port; both calls must fail fast
    let config = Config::default().with_base_url("http://127.0.0.1:9");
    let client = BybitClient::with_config(config);

    assert!(client.get_klines("BTCUSDT", "1", 10).is_err());
    assert!(client.get_top10_symbols().is_err());
}

// =============================================================================
// CSV export flow
// =============================================================================

#[test]
fn test_parsed_payload_survives_csv_round_trip() {
    let payload: ApiResponse<KlineList> = serde_json::from_str(KLINE_PAYLOAD).unwrap();
    let mut candles = payload.result.unwrap().into_candles();
    candles.sort_by_key(|c| c.open_time);

    let report = data::validate_candles(&candles);
    assert!(report.is_valid());
    assert!(report.warnings.is_empty());

    let dir = std::env::temp_dir().join("market-data-integration-csv");
    let path = data::save_to_csv(&candles, &dir, "BTCUSDT_1.csv").unwrap();
    let restored = data::load_csv(&path).unwrap();

    assert_eq!(restored, candles);

    std::fs::remove_dir_all(&dir).ok();
}
