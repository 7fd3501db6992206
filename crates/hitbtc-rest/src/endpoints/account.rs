//! Private account endpoints
//!
//! These endpoints require authentication.

use hitbtc_auth::Credentials;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::endpoint::ApiEndpoint;
use crate::error::RestResult;
use crate::options::{ActiveOrdersOptions, OrderHistoryQuery, ToParams, TradeHistoryQuery};
use crate::request::{private_request, send_json, Params};
use crate::transport::HttpTransport;

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    transport: &'a dyn HttpTransport,
    endpoint: &'a ApiEndpoint,
    credentials: &'a Credentials,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(
        transport: &'a dyn HttpTransport,
        endpoint: &'a ApiEndpoint,
        credentials: &'a Credentials,
    ) -> Self {
        Self {
            transport,
            endpoint,
            credentials,
        }
    }

    /// Make an authenticated GET request
    async fn get(&self, segments: &[&str], params: Params) -> RestResult<Value> {
        let request = private_request(
            self.endpoint,
            self.credentials,
            Method::GET,
            segments,
            params,
        )?;
        send_json(self.transport, request).await
    }

    /// Get trading balance per currency
    #[instrument(skip(self))]
    pub async fn get_balance(&self) -> RestResult<Value> {
        debug!("Fetching trading balance");
        self.get(&["trading", "balance"], Params::new()).await
    }

    /// Get active orders, optionally filtered by symbol
    #[instrument(skip(self, options), fields(symbol = ?options.symbol))]
    pub async fn get_active_orders(&self, options: &ActiveOrdersOptions) -> RestResult<Value> {
        self.get(&["order"], options.to_params()).await
    }

    /// Get a single active order by client order id
    #[instrument(skip(self))]
    pub async fn get_active_order(&self, client_order_id: &str) -> RestResult<Value> {
        self.get(&["order", client_order_id], Params::new()).await
    }

    /// Get account trade history
    #[instrument(skip(self, query))]
    pub async fn get_trade_history(&self, query: &TradeHistoryQuery) -> RestResult<Value> {
        debug!("Fetching trade history");
        self.get(&["history", "trades"], query.to_params()).await
    }

    /// Get recent (closed and cancelled) orders
    #[instrument(skip(self, query))]
    pub async fn get_recent_orders(&self, query: &OrderHistoryQuery) -> RestResult<Value> {
        debug!("Fetching order history");
        self.get(&["history", "order"], query.to_params()).await
    }
}
