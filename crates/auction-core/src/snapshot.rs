//! Closing-state value types.
//!
//! Kept separate from the live book so that a finished run hands the
//! caller plain data with no queues attached.

use crate::messages::Trade;
use crate::order::Order;

/// Both sides of the book at end of stream, drained in priority order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClosingBook {
    /// Unmatched asks, cheapest first.
    pub sellers: Vec<Order>,

    /// Unmatched bids, highest first.
    pub buyers: Vec<Order>,
}

/// Everything a finished auction run produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuctionReport {
    /// Trades in the order the matches occurred.
    pub trades: Vec<Trade>,

    /// Whatever was left resting when the input ended.
    pub closing: ClosingBook,
}
