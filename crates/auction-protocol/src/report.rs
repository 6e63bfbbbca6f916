//! Report formatting.
//!
//! The whole run produces exactly one stdout payload:
//!
//! - One line per trade, in match order:
//!   `<buyer> buys from <seller> for <price>kr`
//!
//! - A closing block after end of input:
//!   ```text
//!   Order book:
//!   Sellers: <name price>, <name price>, ...
//!   Buyers: <name price>, ...
//!   ```
//!   Sellers ascending by price, buyers descending, entries joined with
//!   `", "`. An empty side lists nothing after its label.

use auction_core::{AuctionReport, Order, Trade};

/// Format one trade line (no trailing newline).
pub fn format_trade(trade: &Trade) -> String {
    format!(
        "{} buys from {} for {}kr",
        trade.buyer, trade.seller, trade.price
    )
}

/// Render the complete stdout payload for a finished run.
pub fn render_report(report: &AuctionReport) -> String {
    let mut out = String::new();

    for trade in &report.trades {
        out.push_str(&format_trade(trade));
        out.push('\n');
    }

    out.push_str("Order book:\n");
    out.push_str(&format!("Sellers: {}\n", join_orders(&report.closing.sellers)));
    out.push_str(&format!("Buyers: {}\n", join_orders(&report.closing.buyers)));

    out
}

fn join_orders(orders: &[Order]) -> String {
    orders
        .iter()
        .map(|order| order.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
