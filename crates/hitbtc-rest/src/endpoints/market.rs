//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::endpoint::ApiEndpoint;
use crate::error::RestResult;
use crate::options::{OrderBookOptions, ToParams, TradesQuery};
use crate::request::{public_get, send_json};
use crate::transport::HttpTransport;

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    transport: &'a dyn HttpTransport,
    endpoint: &'a ApiEndpoint,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(transport: &'a dyn HttpTransport, endpoint: &'a ApiEndpoint) -> Self {
        Self { transport, endpoint }
    }

    /// List all trading symbols
    #[instrument(skip(self))]
    pub async fn get_symbols(&self) -> RestResult<Value> {
        debug!("Fetching symbols");
        let request = public_get(self.endpoint, &["symbol"], &[])?;
        send_json(self.transport, request).await
    }

    /// Get a single symbol's trading rules
    ///
    /// # Arguments
    /// * `symbol` - Trading symbol, any case (e.g., "ethbtc")
    #[instrument(skip(self))]
    pub async fn get_symbol(&self, symbol: &str) -> RestResult<Value> {
        let symbol = symbol.to_uppercase();
        let request = public_get(self.endpoint, &["symbol", symbol.as_str()], &[])?;
        send_json(self.transport, request).await
    }

    /// List all currencies
    #[instrument(skip(self))]
    pub async fn get_currencies(&self) -> RestResult<Value> {
        let request = public_get(self.endpoint, &["currency"], &[])?;
        send_json(self.transport, request).await
    }

    /// Get ticker for a symbol
    ///
    /// # Arguments
    /// * `symbol` - Trading symbol, any case (e.g., "ethbtc")
    #[instrument(skip(self))]
    pub async fn get_ticker(&self, symbol: &str) -> RestResult<Value> {
        let symbol = symbol.to_uppercase();
        debug!("Fetching ticker for {}", symbol);

        let request = public_get(self.endpoint, &["ticker", symbol.as_str()], &[])?;
        send_json(self.transport, request).await
    }

    /// Get order book for a symbol
    ///
    /// # Arguments
    /// * `symbol` - Trading symbol, any case
    /// * `options` - Depth limit and passthrough parameters
    #[instrument(skip(self, options))]
    pub async fn get_order_book(
        &self,
        symbol: &str,
        options: &OrderBookOptions,
    ) -> RestResult<Value> {
        let symbol = symbol.to_uppercase();
        debug!("Fetching order book for {}", symbol);

        let request = public_get(self.endpoint, &["orderbook", symbol.as_str()], &options.to_params())?;
        send_json(self.transport, request).await
    }

    /// Get public trade history for a symbol
    ///
    /// Returns the `trades` field of the response, or `None` when the body
    /// has no such field.
    ///
    /// # Arguments
    /// * `symbol` - Trading symbol, any case
    /// * `query` - Cursor, sort key, paging and formatting options
    #[instrument(skip(self, query), fields(by = %query.by, from = query.from))]
    pub async fn get_trades(&self, symbol: &str, query: &TradesQuery) -> RestResult<Option<Value>> {
        let mut params = query.to_params();
        params.retain(|(key, _)| key != "symbol");
        params.push(("symbol".to_string(), symbol.to_uppercase()));

        debug!("Fetching trades for {}", symbol);

        let request = public_get(self.endpoint, &["trades"], &params)?;
        let mut body = send_json(self.transport, request).await?;

        Ok(body.as_object_mut().and_then(|obj| obj.remove("trades")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use serde_json::json;

    const SYMBOLS_FIXTURE: &str = r#"[
        {"id": "ETHBTC", "baseCurrency": "ETH", "quoteCurrency": "BTC", "quantityIncrement": "0.001", "tickSize": "0.000001", "takeLiquidityRate": "0.001", "provideLiquidityRate": "-0.0001", "feeCurrency": "BTC"},
        {"id": "BTCUSD", "baseCurrency": "BTC", "quoteCurrency": "USD", "quantityIncrement": "0.00001", "tickSize": "0.01", "takeLiquidityRate": "0.001", "provideLiquidityRate": "-0.0001", "feeCurrency": "USD"}
    ]"#;

    #[tokio::test]
    async fn test_symbols_decodes_like_serde_json() {
        let transport = MockTransport::new();
        transport.push_json(200, SYMBOLS_FIXTURE);
        let endpoint = ApiEndpoint::default();

        let symbols = MarketEndpoints::new(&transport, &endpoint)
            .get_symbols()
            .await
            .unwrap();

        let expected: Value = serde_json::from_str(SYMBOLS_FIXTURE).unwrap();
        assert_eq!(symbols, expected);

        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "https://api.hitbtc.com/api/2/public/symbol");
    }

    #[tokio::test]
    async fn test_ticker_upper_cases_symbol() {
        let transport = MockTransport::new();
        let endpoint = ApiEndpoint::default();
        let market = MarketEndpoints::new(&transport, &endpoint);

        for symbol in ["ethbtc", "EthBtc", "ETHBTC"] {
            transport.push_json(200, r#"{"symbol":"ETHBTC","last":"0.0465"}"#);
            market.get_ticker(symbol).await.unwrap();
            assert_eq!(
                transport.last_request().unwrap().path(),
                "/api/2/public/ticker/ETHBTC"
            );
        }
    }

    #[tokio::test]
    async fn test_order_book_limit_in_query() {
        let transport = MockTransport::new();
        transport.push_json(200, r#"{"ask":[],"bid":[]}"#);
        let endpoint = ApiEndpoint::default();

        MarketEndpoints::new(&transport, &endpoint)
            .get_order_book("ethbtc", &OrderBookOptions::new().with_limit(50))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.path(), "/api/2/public/orderbook/ETHBTC");
        assert!(request.query().unwrap().contains("limit=50"));
    }

    #[tokio::test]
    async fn test_trades_returns_inner_field() {
        let transport = MockTransport::new();
        transport.push_json(
            200,
            r#"{"trades":[["39872","0.046500","0.010","1510000000000","buy"]]}"#,
        );
        let endpoint = ApiEndpoint::default();

        let trades = MarketEndpoints::new(&transport, &endpoint)
            .get_trades("ethbtc", &TradesQuery::new(1510000000, crate::types::TradesBy::Timestamp))
            .await
            .unwrap();

        assert_eq!(
            trades,
            Some(json!([["39872", "0.046500", "0.010", "1510000000000", "buy"]]))
        );

        let request = transport.last_request().unwrap();
        assert_eq!(request.path(), "/api/2/public/trades");
        assert_eq!(request.param("symbol"), Some("ETHBTC".to_string()));
        assert_eq!(request.param("from"), Some("1510000000".to_string()));
        assert_eq!(request.param("by"), Some("ts".to_string()));
        assert_eq!(request.param("start_index"), Some("0".to_string()));
        assert_eq!(request.param("max_results"), Some("1000".to_string()));
    }

    #[tokio::test]
    async fn test_trades_missing_field_is_none() {
        let transport = MockTransport::new();
        let endpoint = ApiEndpoint::default();
        let market = MarketEndpoints::new(&transport, &endpoint);

        transport.push_json(200, "{}");
        assert_eq!(market.get_trades("ETHBTC", &TradesQuery::default()).await.unwrap(), None);

        transport.push_json(200, "[]");
        assert_eq!(market.get_trades("ETHBTC", &TradesQuery::default()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_trades_symbol_not_overridable_by_extra() {
        let transport = MockTransport::new();
        transport.push_json(200, "{}");
        let endpoint = ApiEndpoint::default();

        let query = TradesQuery::default().with_extra("symbol", "BTCUSD");
        MarketEndpoints::new(&transport, &endpoint)
            .get_trades("ethbtc", &query)
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        let symbols: Vec<_> = request.params().into_iter().filter(|(k, _)| k == "symbol").collect();
        assert_eq!(symbols, vec![("symbol".to_string(), "ETHBTC".to_string())]);
    }

    #[tokio::test]
    async fn test_public_requests_are_unauthenticated() {
        let transport = MockTransport::new();
        transport.push_json(200, "[]");
        let endpoint = ApiEndpoint::default();

        MarketEndpoints::new(&transport, &endpoint)
            .get_currencies()
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert!(request.authorization.is_none());
        assert_eq!(request.param("nonce"), None);
    }
}
