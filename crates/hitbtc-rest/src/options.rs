//! Per-endpoint request options
//!
//! Each endpoint takes an explicit options struct. Unset fields are left out
//! of the request so the exchange applies its own defaults. Fields the
//! exchange adds later can be passed through `extra`; a named field always
//! takes precedence over an `extra` entry with the same key.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt::Display;

use crate::request::Params;
use crate::types::{HistoryBy, OrderSide, OrderType, SortOrder, TimeInForce, TradesBy};

/// Conversion of an options struct into ordered request parameters
pub trait ToParams {
    /// Render the set fields as `(name, value)` pairs
    fn to_params(&self) -> Params;
}

fn push<T: Display>(params: &mut Params, key: &str, value: T) {
    params.push((key.to_string(), value.to_string()));
}

fn push_opt<T: Display>(params: &mut Params, key: &str, value: &Option<T>) {
    if let Some(value) = value {
        push(params, key, value);
    }
}

fn append_extra(params: &mut Params, extra: &BTreeMap<String, String>) {
    for (key, value) in extra {
        if !params.iter().any(|(name, _)| name == key) {
            params.push((key.clone(), value.clone()));
        }
    }
}

// ============================================================================
// Public endpoints
// ============================================================================

/// Options for the order book endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBookOptions {
    /// Number of levels per side (exchange default 100, 0 = full book)
    pub limit: Option<u32>,
    /// Passthrough parameters
    pub extra: BTreeMap<String, String>,
}

impl OrderBookOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl ToParams for OrderBookOptions {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        push_opt(&mut params, "limit", &self.limit);
        append_extra(&mut params, &self.extra);
        params
    }
}

/// Query for the public trades endpoint
///
/// `from`, `by`, `start_index` and `max_results` are always sent. The
/// default asks for the last 24 hours by timestamp, first 1000 trades.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradesQuery {
    /// Trade id or unix timestamp, depending on `by`
    pub from: i64,
    /// Whether `from`/`till` are trade ids or timestamps
    pub by: TradesBy,
    /// Zero-based offset
    pub start_index: u64,
    /// Page size (exchange maximum 1000)
    pub max_results: u32,
    /// Upper bound, exclusive
    pub till: Option<i64>,
    /// Sort direction
    pub sort: Option<SortOrder>,
    /// Formatting options (`format_item`, `format_price`, ...) and other passthrough
    pub extra: BTreeMap<String, String>,
}

impl Default for TradesQuery {
    fn default() -> Self {
        Self {
            from: (Utc::now() - Duration::days(1)).timestamp(),
            by: TradesBy::Timestamp,
            start_index: 0,
            max_results: 1000,
            till: None,
            sort: None,
            extra: BTreeMap::new(),
        }
    }
}

impl TradesQuery {
    /// Query starting at `from`, interpreted according to `by`
    pub fn new(from: i64, by: TradesBy) -> Self {
        Self {
            from,
            by,
            ..Self::default()
        }
    }

    pub fn with_page(mut self, start_index: u64, max_results: u32) -> Self {
        self.start_index = start_index;
        self.max_results = max_results;
        self
    }

    pub fn with_till(mut self, till: i64) -> Self {
        self.till = Some(till);
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl ToParams for TradesQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        push(&mut params, "from", self.from);
        push(&mut params, "by", self.by);
        push(&mut params, "start_index", self.start_index);
        push(&mut params, "max_results", self.max_results);
        push_opt(&mut params, "till", &self.till);
        push_opt(&mut params, "sort", &self.sort);
        append_extra(&mut params, &self.extra);
        params
    }
}

// ============================================================================
// Private endpoints
// ============================================================================

/// Options for listing active orders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveOrdersOptions {
    /// Only orders for this symbol
    pub symbol: Option<String>,
    /// Passthrough parameters
    pub extra: BTreeMap<String, String>,
}

impl ActiveOrdersOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            ..Self::default()
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl ToParams for ActiveOrdersOptions {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        push_opt(&mut params, "symbol", &self.symbol.as_ref().map(|s| s.to_uppercase()));
        append_extra(&mut params, &self.extra);
        params
    }
}

/// Query for the account trade history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeHistoryQuery {
    pub symbol: Option<String>,
    pub sort: Option<SortOrder>,
    /// Whether `from`/`till` are timestamps or trade ids
    pub by: Option<HistoryBy>,
    /// ISO 8601 timestamp or trade id
    pub from: Option<String>,
    /// ISO 8601 timestamp or trade id
    pub till: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub extra: BTreeMap<String, String>,
}

impl TradeHistoryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_range(
        mut self,
        by: HistoryBy,
        from: Option<String>,
        till: Option<String>,
    ) -> Self {
        self.by = Some(by);
        self.from = from;
        self.till = till;
        self
    }

    pub fn with_page(mut self, limit: u32, offset: u32) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl ToParams for TradeHistoryQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        push_opt(&mut params, "symbol", &self.symbol);
        push_opt(&mut params, "sort", &self.sort);
        push_opt(&mut params, "by", &self.by);
        push_opt(&mut params, "from", &self.from);
        push_opt(&mut params, "till", &self.till);
        push_opt(&mut params, "limit", &self.limit);
        push_opt(&mut params, "offset", &self.offset);
        append_extra(&mut params, &self.extra);
        params
    }
}

/// Query for the account order history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderHistoryQuery {
    pub symbol: Option<String>,
    pub client_order_id: Option<String>,
    /// ISO 8601 timestamp
    pub from: Option<String>,
    /// ISO 8601 timestamp
    pub till: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub extra: BTreeMap<String, String>,
}

impl OrderHistoryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.client_order_id = Some(id.into());
        self
    }

    pub fn with_page(mut self, limit: u32, offset: u32) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl ToParams for OrderHistoryQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        push_opt(&mut params, "symbol", &self.symbol);
        push_opt(&mut params, "clientOrderId", &self.client_order_id);
        push_opt(&mut params, "from", &self.from);
        push_opt(&mut params, "till", &self.till);
        push_opt(&mut params, "limit", &self.limit);
        push_opt(&mut params, "offset", &self.offset);
        append_extra(&mut params, &self.extra);
        params
    }
}

/// New order
///
/// Only `symbol` and `side` are required. Everything else falls back to the
/// exchange defaults (`limit`, `GTC`, server-generated client order id).
/// Combinations such as a limit order without a price are not checked here;
/// the exchange rejects them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    /// Unique per trading day; generated by the exchange when omitted
    pub client_order_id: Option<String>,
    /// Trading symbol
    pub symbol: String,
    /// Order side
    pub side: OrderSide,
    /// Order type
    pub order_type: Option<OrderType>,
    /// Time in force
    pub time_in_force: Option<TimeInForce>,
    /// Order quantity
    pub quantity: Option<Decimal>,
    /// Price (limit types)
    pub price: Option<Decimal>,
    /// Trigger price (stop types)
    pub stop_price: Option<Decimal>,
    /// Expiry (GTD orders)
    pub expire_time: Option<DateTime<Utc>>,
    /// Reject price/quantity that are off the tick size and quantity step
    pub strict_validate: Option<bool>,
    /// Passthrough parameters
    pub extra: BTreeMap<String, String>,
}

impl OrderRequest {
    /// Order with only symbol and side set
    pub fn new(symbol: impl Into<String>, side: OrderSide) -> Self {
        Self {
            client_order_id: None,
            symbol: symbol.into(),
            side,
            order_type: None,
            time_in_force: None,
            quantity: None,
            price: None,
            stop_price: None,
            expire_time: None,
            strict_validate: None,
            extra: BTreeMap::new(),
        }
    }

    /// Create a limit order
    pub fn limit(symbol: impl Into<String>, side: OrderSide, quantity: Decimal, price: Decimal) -> Self {
        let mut order = Self::new(symbol, side);
        order.order_type = Some(OrderType::Limit);
        order.quantity = Some(quantity);
        order.price = Some(price);
        order
    }

    /// Create a market order
    pub fn market(symbol: impl Into<String>, side: OrderSide, quantity: Decimal) -> Self {
        let mut order = Self::new(symbol, side);
        order.order_type = Some(OrderType::Market);
        order.quantity = Some(quantity);
        order
    }

    /// Create a stop-limit order
    pub fn stop_limit(
        symbol: impl Into<String>,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
        stop_price: Decimal,
    ) -> Self {
        let mut order = Self::limit(symbol, side, quantity, price);
        order.order_type = Some(OrderType::StopLimit);
        order.stop_price = Some(stop_price);
        order
    }

    pub fn with_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.client_order_id = Some(id.into());
        self
    }

    pub fn with_time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    /// Good-till-date order expiring at `expire_time`
    pub fn with_expire_time(mut self, expire_time: DateTime<Utc>) -> Self {
        self.time_in_force = Some(TimeInForce::GoodTillDate);
        self.expire_time = Some(expire_time);
        self
    }

    pub fn with_strict_validate(mut self, strict: bool) -> Self {
        self.strict_validate = Some(strict);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl ToParams for OrderRequest {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        push_opt(&mut params, "clientOrderId", &self.client_order_id);
        push(&mut params, "symbol", &self.symbol);
        push(&mut params, "side", self.side);
        push_opt(&mut params, "type", &self.order_type);
        push_opt(&mut params, "timeInForce", &self.time_in_force);
        push_opt(&mut params, "quantity", &self.quantity);
        push_opt(&mut params, "price", &self.price);
        push_opt(&mut params, "stopPrice", &self.stop_price);
        push_opt(
            &mut params,
            "expireTime",
            &self
                .expire_time
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        push_opt(&mut params, "strictValidate", &self.strict_validate);
        append_extra(&mut params, &self.extra);
        params
    }
}
