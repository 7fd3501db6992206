//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use hitbtc_auth::Credentials;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::endpoint::ApiEndpoint;
use crate::error::RestResult;
use crate::options::{OrderRequest, ToParams};
use crate::request::{private_request, send_json, Params};
use crate::transport::HttpTransport;

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    transport: &'a dyn HttpTransport,
    endpoint: &'a ApiEndpoint,
    credentials: &'a Credentials,
}

impl<'a> TradingEndpoints<'a> {
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

    async fn send(&self, method: Method, segments: &[&str], params: Params) -> RestResult<Value> {
        let request = private_request(self.endpoint, self.credentials, method, segments, params)?;
        send_json(self.transport, request).await
    }

    /// Place a new order
    ///
    /// The order is sent as a form body. Missing price or quantity for the
    /// chosen order type is reported by the exchange in the response body.
    #[instrument(skip(self, order), fields(symbol = %order.symbol, side = %order.side, order_type = ?order.order_type))]
    pub async fn create_order(&self, order: &OrderRequest) -> RestResult<Value> {
        debug!(
            "Placing {} order for {:?} {}",
            order.side, order.quantity, order.symbol
        );
        self.send(Method::POST, &["order"], order.to_params()).await
    }

    /// Cancel an order by client order id
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, client_order_id: &str) -> RestResult<Value> {
        debug!("Cancelling order {}", client_order_id);
        self.send(Method::DELETE, &["order", client_order_id], Params::new())
            .await
    }

    /// Cancel all active orders, optionally only for one symbol
    #[instrument(skip(self))]
    pub async fn cancel_all_orders(&self, symbol: Option<&str>) -> RestResult<Value> {
        let mut params = Params::new();
        if let Some(symbol) = symbol {
            params.push(("symbol".to_string(), symbol.to_uppercase()));
        }
        self.send(Method::DELETE, &["order"], params).await
    }
}
