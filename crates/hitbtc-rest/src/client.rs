//! Main REST client implementation

use hitbtc_auth::Credentials;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::endpoint::ApiEndpoint;
use crate::endpoints::{AccountEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::options::{
    ActiveOrdersOptions, OrderBookOptions, OrderHistoryQuery, OrderRequest, TradeHistoryQuery,
    TradesQuery,
};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default user agent
const DEFAULT_USER_AGENT: &str = concat!("hitbtc-rest/", env!("CARGO_PKG_VERSION"));

/// HitBTC REST API client
///
/// Provides access to both public and private endpoints. Every method sends
/// exactly one request and returns the decoded JSON body.
///
/// # Example
///
/// ```no_run
/// use hitbtc_rest::{Credentials, HitbtcRestClient, OrderBookOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = HitbtcRestClient::new()?;
///     let ticker = client.get_ticker("ethbtc").await?;
///     let book = client.get_order_book("ethbtc", &OrderBookOptions::new().with_limit(10)).await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = HitbtcRestClient::with_credentials(creds)?;
///     let balance = auth_client.get_balance().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct HitbtcRestClient {
    transport: Arc<dyn HttpTransport>,
    endpoint: ApiEndpoint,
    credentials: Option<Credentials>,
}

impl HitbtcRestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::new().with_credentials(credentials))
    }

    /// Create a client with credentials loaded from a YAML key file
    ///
    /// Fails with a missing-configuration error, before any network access,
    /// when the file does not exist.
    pub fn from_key_file(path: impl AsRef<Path>) -> RestResult<Self> {
        let credentials = Credentials::from_key_file(path)?;
        Self::with_credentials(credentials)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        let transport =
            ReqwestTransport::new(Duration::from_secs(config.timeout_secs), user_agent)?;

        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client that sends requests through `transport`
    ///
    /// Timeout and user agent in `config` are left to the transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        info!(endpoint = %config.endpoint, authenticated = config.credentials.is_some(), "Created HitBTC REST client");

        Self {
            transport,
            endpoint: config.endpoint,
            credentials: config.credentials,
        }
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Endpoint requests are sent to
    pub fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    fn credentials(&self) -> RestResult<&Credentials> {
        self.credentials.as_ref().ok_or(RestError::AuthRequired)
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self.transport.as_ref(), &self.endpoint)
    }

    /// List all trading symbols
    pub async fn get_symbols(&self) -> RestResult<Value> {
        self.market().get_symbols().await
    }

    /// Get one symbol's trading rules
    pub async fn get_symbol(&self, symbol: &str) -> RestResult<Value> {
        self.market().get_symbol(symbol).await
    }

    /// List all currencies
    pub async fn get_currencies(&self) -> RestResult<Value> {
        self.market().get_currencies().await
    }

    /// Get ticker for a symbol (upper-cased before sending)
    pub async fn get_ticker(&self, symbol: &str) -> RestResult<Value> {
        self.market().get_ticker(symbol).await
    }

    /// Get order book for a symbol (upper-cased before sending)
    pub async fn get_order_book(
        &self,
        symbol: &str,
        options: &OrderBookOptions,
    ) -> RestResult<Value> {
        self.market().get_order_book(symbol, options).await
    }

    /// Get public trades for a symbol; `None` when the body has no `trades`
    pub async fn get_trades(&self, symbol: &str, query: &TradesQuery) -> RestResult<Option<Value>> {
        self.market().get_trades(symbol, query).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        Ok(AccountEndpoints::new(
            self.transport.as_ref(),
            &self.endpoint,
            self.credentials()?,
        ))
    }

    /// Get trading balance per currency
    pub async fn get_balance(&self) -> RestResult<Value> {
        self.account()?.get_balance().await
    }

    /// Get active orders
    pub async fn get_active_orders(&self, options: &ActiveOrdersOptions) -> RestResult<Value> {
        self.account()?.get_active_orders(options).await
    }

    /// Get one active order by client order id
    pub async fn get_active_order(&self, client_order_id: &str) -> RestResult<Value> {
        self.account()?.get_active_order(client_order_id).await
    }

    /// Get account trade history
    pub async fn get_trade_history(&self, query: &TradeHistoryQuery) -> RestResult<Value> {
        self.account()?.get_trade_history(query).await
    }

    /// Get recent orders
    pub async fn get_recent_orders(&self, query: &OrderHistoryQuery) -> RestResult<Value> {
        self.account()?.get_recent_orders(query).await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        Ok(TradingEndpoints::new(
            self.transport.as_ref(),
            &self.endpoint,
            self.credentials()?,
        ))
    }

    /// Place a new order
    pub async fn create_order(&self, order: &OrderRequest) -> RestResult<Value> {
        self.trading()?.create_order(order).await
    }

    /// Cancel an order by client order id
    pub async fn cancel_order(&self, client_order_id: &str) -> RestResult<Value> {
        self.trading()?.cancel_order(client_order_id).await
    }

    /// Cancel all active orders, optionally for one symbol only
    pub async fn cancel_all_orders(&self, symbol: Option<&str>) -> RestResult<Value> {
        self.trading()?.cancel_all_orders(symbol).await
    }
}

impl std::fmt::Debug for HitbtcRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitbtcRestClient")
            .field("endpoint", &self.endpoint)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Host, version and scheme
    pub endpoint: ApiEndpoint,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            endpoint: ApiEndpoint::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the endpoint
    pub fn with_endpoint(mut self, endpoint: ApiEndpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Override the API host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.endpoint = self.endpoint.with_host(host);
        self
    }

    /// Override the API version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.endpoint = self.endpoint.with_version(version);
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use hitbtc_auth::AuthError;

    #[test]
    fn test_client_without_credentials() {
        let client = HitbtcRestClient::new().unwrap();
        assert!(!client.has_credentials());
        assert_eq!(client.endpoint().base_url(), "https://api.hitbtc.com/api/2");
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_timeout(60)
            .with_user_agent("test-agent")
            .with_host("api.demo.hitbtc.com")
            .with_version("3");

        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
        assert_eq!(config.endpoint.base_url(), "https://api.demo.hitbtc.com/api/3");
    }

    #[test]
    fn test_auth_required_error() {
        let client = HitbtcRestClient::new().unwrap();
        assert!(matches!(client.account(), Err(RestError::AuthRequired)));
        assert!(matches!(client.trading(), Err(RestError::AuthRequired)));
    }

    #[tokio::test]
    async fn test_private_call_without_credentials_sends_nothing() {
        let transport = Arc::new(MockTransport::new());
        let client = HitbtcRestClient::with_transport(ClientConfig::new(), transport.clone());

        let result = client.cancel_order("abc123").await;
        assert!(matches!(result, Err(RestError::AuthRequired)));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_from_missing_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = HitbtcRestClient::from_key_file(dir.path().join("key.yml"));
        assert!(matches!(
            result,
            Err(RestError::Auth(AuthError::MissingConfig(_)))
        ));
    }

    #[test]
    fn test_debug_hides_credentials() {
        let creds = Credentials::new("key", "very_secret").unwrap();
        let client = HitbtcRestClient::with_credentials(creds).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("has_credentials: true"));
        assert!(!debug.contains("very_secret"));
    }
}
