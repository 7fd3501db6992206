//! Demo 2: Account Overview
//!
//! Showcases: private endpoints, credential fallback (environment, then key.yml)
//!
//! Run: cargo run --bin account_overview
//!
//! Set HITBTC_API_KEY and HITBTC_API_SECRET, or put `key` and `secret` in key.yml.

use colored::*;
use hitbtc_auth::{Credentials, DEFAULT_KEY_FILE};
use hitbtc_rest::{
    ActiveOrdersOptions, ExchangeError, HitbtcRestClient, OrderHistoryQuery, TradeHistoryQuery,
};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn print_error_or<F: FnOnce(&Value)>(body: &Value, print: F) {
    match ExchangeError::from_body(body) {
        Some(error) => println!("  {} {}", "✗".red(), error),
        None => print(body),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Explicit credentials from the environment win, otherwise fall back to the key file
    let explicit = match Credentials::from_env() {
        Ok(creds) => Some(creds),
        Err(e) => {
            warn!("{}, trying {}", e, DEFAULT_KEY_FILE);
            None
        }
    };
    let credentials = Credentials::resolve(explicit, DEFAULT_KEY_FILE)?;

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  ACCOUNT OVERVIEW".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = HitbtcRestClient::with_credentials(credentials)?;

    // Balances
    println!("{}", "--- Trading Balance ---".white().bold());
    let balance = client.get_balance().await?;
    print_error_or(&balance, |body| {
        for entry in body.as_array().into_iter().flatten() {
            let available: Decimal = entry["available"]
                .as_str()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default();
            let reserved: Decimal = entry["reserved"]
                .as_str()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default();
            if available.is_zero() && reserved.is_zero() {
                continue;
            }
            println!(
                "  {:<8} available {:>18}  reserved {:>18}",
                entry["currency"].as_str().unwrap_or("?").cyan(),
                available,
                reserved
            );
        }
    });
    println!();

    // Active orders
    println!("{}", "--- Active Orders ---".white().bold());
    let orders = client.get_active_orders(&ActiveOrdersOptions::new()).await?;
    print_error_or(&orders, |body| {
        let orders = body.as_array().map(Vec::as_slice).unwrap_or_default();
        if orders.is_empty() {
            println!("  (none)");
        }
        for order in orders {
            println!(
                "  {} {} {} {} @ {}",
                order["clientOrderId"].as_str().unwrap_or("?").dimmed(),
                order["symbol"].as_str().unwrap_or("?"),
                order["side"].as_str().unwrap_or("?"),
                order["quantity"].as_str().unwrap_or("?"),
                order["price"].as_str().unwrap_or("market")
            );
        }
    });
    println!();

    // Recent history
    println!("{}", "--- Recent History ---".white().bold());
    let trades = client
        .get_trade_history(&TradeHistoryQuery::new().with_page(10, 0))
        .await?;
    let recent = client
        .get_recent_orders(&OrderHistoryQuery::new().with_page(10, 0))
        .await?;
    print_error_or(&trades, |body| {
        println!("  {} trades", body.as_array().map_or(0, Vec::len));
    });
    print_error_or(&recent, |body| {
        println!("  {} closed orders", body.as_array().map_or(0, Vec::len));
    });

    Ok(())
}
