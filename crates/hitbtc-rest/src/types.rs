//! Enumerations used in request options and the exchange error envelope

use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::RestError;

// ============================================================================
// Order enums
// ============================================================================

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Order type
///
/// The exchange defaults to `limit` when the field is omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderType {
    /// Limit order (price required)
    Limit,
    /// Market order
    Market,
    /// Stop-limit order (price and stop price required)
    StopLimit,
    /// Stop-market order (stop price required)
    StopMarket,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limit => write!(f, "limit"),
            Self::Market => write!(f, "market"),
            Self::StopLimit => write!(f, "stopLimit"),
            Self::StopMarket => write!(f, "stopMarket"),
        }
    }
}

/// Time in force
///
/// The exchange defaults to `GTC` when the field is omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeInForce {
    /// Good till cancelled
    GoodTillCancelled,
    /// Immediate or cancel
    ImmediateOrCancel,
    /// Fill or kill
    FillOrKill,
    /// Good for the trading day
    Day,
    /// Good till date (requires expire time)
    GoodTillDate,
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GoodTillCancelled => write!(f, "GTC"),
            Self::ImmediateOrCancel => write!(f, "IOC"),
            Self::FillOrKill => write!(f, "FOK"),
            Self::Day => write!(f, "Day"),
            Self::GoodTillDate => write!(f, "GTD"),
        }
    }
}

// ============================================================================
// Query enums
// ============================================================================

/// Sort direction for history and trade queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Oldest first
    #[default]
    Asc,
    /// Newest first
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// Field the public trades endpoint filters and sorts by
///
/// Only `trade_id` and `ts` are accepted; anything else is rejected locally
/// before a request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TradesBy {
    /// Filter by trade id; `from`/`till` are trade ids
    TradeId,
    /// Filter by timestamp; `from`/`till` are timestamps
    #[default]
    Timestamp,
}

impl TradesBy {
    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TradeId => "trade_id",
            Self::Timestamp => "ts",
        }
    }
}

impl fmt::Display for TradesBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradesBy {
    type Err = RestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trade_id" => Ok(Self::TradeId),
            "ts" => Ok(Self::Timestamp),
            other => Err(RestError::InvalidParameter(format!(
                "by should be 'trade_id' or 'ts', got '{}'",
                other
            ))),
        }
    }
}

/// Field the private trade history filters by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryBy {
    /// `from`/`till` are timestamps
    Timestamp,
    /// `from`/`till` are trade ids
    Id,
}

impl fmt::Display for HistoryBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timestamp => write!(f, "timestamp"),
            Self::Id => write!(f, "id"),
        }
    }
}

// ============================================================================
// Exchange error envelope
// ============================================================================

/// Error reported by the exchange inside a JSON body
///
/// The client returns such bodies unchanged; this type lets callers check
/// for one:
///
/// ```
/// use hitbtc_rest::types::ExchangeError;
///
/// let body = serde_json::json!({
///     "error": {"code": 20001, "message": "Insufficient funds", "description": "Check that the funds are sufficient"}
/// });
/// let err = ExchangeError::from_body(&body).unwrap();
/// assert_eq!(err.code, 20001);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExchangeError {
    /// Numeric error code
    pub code: i64,
    /// Short message
    pub message: String,
    /// Longer explanation, when given
    #[serde(default)]
    pub description: Option<String>,
}

impl ExchangeError {
    /// Extract the error from a response body shaped like `{"error": {...}}`
    pub fn from_body(body: &Value) -> Option<Self> {
        body.get("error")
            .and_then(|error| serde_json::from_value(error.clone()).ok())
    }
}

impl fmt::Display for ExchangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)?;
        if let Some(description) = &self.description {
            write!(f, ": {}", description)?;
        }
        Ok(())
    }
}
