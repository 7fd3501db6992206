//! REST API client for the HitBTC cryptocurrency exchange
//!
//! This crate is a thin binding over HitBTC's REST API v2: each method builds
//! one HTTP request, sends it, and returns the decoded JSON body as a
//! [`serde_json::Value`].
//!
//! # Features
//!
//! - **Market Data**: Symbols, currencies, ticker, order book, public trades
//! - **Account**: Balances, active orders, trade and order history
//! - **Trading**: Create and cancel orders
//!
//! # Authentication
//!
//! Private endpoints use HTTP basic auth with the API key and secret. Every
//! private request also carries `apikey` and a strictly increasing
//! millisecond `nonce` parameter.
//!
//! # Example
//!
//! ```no_run
//! use hitbtc_rest::{Credentials, HitbtcRestClient, TradesQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = HitbtcRestClient::new()?;
//!     let ticker = client.get_ticker("ethbtc").await?;
//!     println!("ETH/BTC: {}", ticker);
//!
//!     let trades = client.get_trades("ethbtc", &TradesQuery::default()).await?;
//!     println!("Trades: {:?}", trades);
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_key_file("key.yml")?;
//!     let auth_client = HitbtcRestClient::with_credentials(creds)?;
//!     let balance = auth_client.get_balance().await?;
//!     println!("Balances: {}", balance);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Nothing is retried. Transport failures, undecodable bodies and invalid
//! arguments surface as [`RestError`]. A JSON error body from the exchange is
//! returned like any other body; [`ExchangeError::from_body`] recognises it.

pub mod client;
pub mod endpoint;
pub mod endpoints;
pub mod error;
pub mod options;
pub mod request;
pub mod transport;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, HitbtcRestClient};
pub use endpoint::ApiEndpoint;
pub use error::{RestError, RestResult};
pub use hitbtc_auth::{AuthError, Credentials};

// Re-export request option types
pub use options::{
    ActiveOrdersOptions, OrderBookOptions, OrderHistoryQuery, OrderRequest, ToParams,
    TradeHistoryQuery, TradesQuery,
};
pub use types::{
    ExchangeError, HistoryBy, OrderSide, OrderType, SortOrder, TimeInForce, TradesBy,
};
