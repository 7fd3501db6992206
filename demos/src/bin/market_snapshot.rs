//! Demo 1: Market Snapshot
//!
//! Showcases: public endpoints (ticker, order book, trades), no credentials
//!
//! Run: cargo run --bin market_snapshot -- ethbtc

use colored::*;
use hitbtc_rest::{HitbtcRestClient, OrderBookOptions, SortOrder, TradesQuery};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

const DEFAULT_SYMBOL: &str = "ethbtc";
const BOOK_DEPTH: u32 = 5;

fn decimal(value: &Value) -> Option<Decimal> {
    value.as_str().and_then(|s| s.parse().ok())
}

/// Spread relative to the mid price, `None` for an empty book
fn spread_bps(bid: Decimal, ask: Decimal) -> Option<Decimal> {
    let mid = (bid + ask) / Decimal::TWO;
    (ask - bid)
        .checked_div(mid)
        .map(|ratio| ratio * Decimal::from(10000))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let symbol = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SYMBOL.to_string());

    println!("{}", "═".repeat(60).cyan());
    println!("{}", format!("  MARKET SNAPSHOT: {}", symbol.to_uppercase()).cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = HitbtcRestClient::new()?;

    // Ticker
    let ticker = client.get_ticker(&symbol).await?;
    match (decimal(&ticker["bid"]), decimal(&ticker["ask"])) {
        (Some(bid), Some(ask)) => {
            println!("  {:<10} {}", "Last".white().bold(), ticker["last"].as_str().unwrap_or("-"));
            println!("  {:<10} {}", "Bid".white().bold(), bid.to_string().green());
            println!("  {:<10} {}", "Ask".white().bold(), ask.to_string().red());
            match spread_bps(bid, ask) {
                Some(bps) => println!("  {:<10} {:.2} bps", "Spread".white().bold(), bps),
                None => println!("  {:<10} -", "Spread".white().bold()),
            }
        }
        _ => println!("  {} unexpected ticker body: {}", "✗".red(), ticker),
    }
    println!();

    // Order book
    let book = client
        .get_order_book(&symbol, &OrderBookOptions::new().with_limit(BOOK_DEPTH))
        .await?;
    println!("  {:>14} {:>14} │ {:<14} {:<14}", "BID SIZE", "BID", "ASK", "ASK SIZE");
    println!("  {}", "─".repeat(60));
    let bids: &[Value] = book["bid"].as_array().map_or(&[], Vec::as_slice);
    let asks: &[Value] = book["ask"].as_array().map_or(&[], Vec::as_slice);
    for i in 0..BOOK_DEPTH as usize {
        let level = |side: &[Value], field: &str| {
            side.get(i)
                .and_then(|l| l[field].as_str())
                .unwrap_or("-")
                .to_string()
        };
        println!(
            "  {:>14} {:>14} │ {:<14} {:<14}",
            level(bids, "size"),
            level(bids, "price").green(),
            level(asks, "price").red(),
            level(asks, "size")
        );
    }
    println!();

    // Recent trades
    let query = TradesQuery::default()
        .with_page(0, 10)
        .with_sort(SortOrder::Desc)
        .with_extra("format_item", "object");
    match client.get_trades(&symbol, &query).await? {
        Some(Value::Array(trades)) => {
            println!("  {} last {} trades", "✓".green(), trades.len());
            for trade in &trades {
                let side = trade["side"].as_str().unwrap_or("?");
                let side = if side == "buy" { side.green() } else { side.red() };
                println!(
                    "    {:<5} {:>14} x {}",
                    side,
                    trade["price"].as_str().unwrap_or("-"),
                    trade["quantity"].as_str().unwrap_or("-")
                );
            }
        }
        Some(other) => println!("  {} unexpected trades body: {}", "✗".red(), other),
        None => println!("  {} no trades field in response", "✗".yellow()),
    }

    Ok(())
}
