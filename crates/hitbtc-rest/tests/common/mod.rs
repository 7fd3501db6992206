//! Common fixtures for integration tests
//!
//! Sample JSON bodies in the shape returned by the HitBTC REST API v2.

#![allow(dead_code)]

pub const API_KEY: &str = "test_api_key";
pub const API_SECRET: &str = "test_api_secret";

/// Sample `GET /public/symbol` body
pub const SYMBOLS_RESPONSE: &str = r#"[
    {
        "id": "ETHBTC",
        "baseCurrency": "ETH",
        "quoteCurrency": "BTC",
        "quantityIncrement": "0.001",
        "tickSize": "0.000001",
        "takeLiquidityRate": "0.001",
        "provideLiquidityRate": "-0.0001",
        "feeCurrency": "BTC"
    },
    {
        "id": "BTCUSD",
        "baseCurrency": "BTC",
        "quoteCurrency": "USD",
        "quantityIncrement": "0.00001",
        "tickSize": "0.01",
        "takeLiquidityRate": "0.001",
        "provideLiquidityRate": "-0.0001",
        "feeCurrency": "USD"
    }
]"#;

/// Sample `GET /public/ticker/BTCUSD` body
pub const TICKER_RESPONSE: &str = r#"{
    "ask": "6402.00",
    "bid": "6401.99",
    "last": "6402.00",
    "open": "6332.01",
    "low": "6300.00",
    "high": "6450.00",
    "volume": "1354.21",
    "volumeQuote": "8659341.69",
    "timestamp": "2026-10-17T10:00:00.000Z",
    "symbol": "BTCUSD"
}"#;

/// Sample `GET /public/orderbook/ETHBTC` body
pub const ORDERBOOK_RESPONSE: &str = r#"{
    "ask": [
        {"price": "0.046002", "size": "0.088"},
        {"price": "0.046800", "size": "0.200"}
    ],
    "bid": [
        {"price": "0.046001", "size": "0.005"},
        {"price": "0.046000", "size": "0.200"}
    ],
    "timestamp": "2026-10-17T10:00:00.000Z"
}"#;

/// Sample `GET /public/trades` body with `format_item=object`
pub const TRADES_RESPONSE: &str = r#"{
    "trades": [
        {"id": 39872, "price": "0.046500", "quantity": "0.010", "side": "buy", "timestamp": 1510000000000},
        {"id": 39873, "price": "0.046510", "quantity": "0.250", "side": "sell", "timestamp": 1510000001000}
    ]
}"#;

/// Sample exchange error body
pub const ERROR_RESPONSE: &str = r#"{
    "error": {
        "code": 20001,
        "message": "Insufficient funds",
        "description": "Check that the funds are sufficient, given commissions"
    }
}"#;
