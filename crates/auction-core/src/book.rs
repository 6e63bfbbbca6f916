//! Two-sided order book with the crossing drain.
//!
//! - Asks: ascending by price (best = cheapest).
//! - Bids: descending by price (best = highest).
//! - Insertion order within a price, on both sides.
//!
//! Each side is an [`IndexedHeap`] with the matching priority policy. The
//! sides share no storage; they meet only in the drain step, which reads
//! both roots after every mutation.
//!
//! A revise locates its target by a linear scan over the relevant side and
//! then repairs the heap through the handle index in O(log n). The scan is
//! O(n), but book depth within a single session stays small.

use crate::error::BookError;
use crate::heap::{Handle, IndexedHeap};
use crate::messages::Trade;
use crate::order::Order;
use crate::ordering::{BuyerPriority, SellerPriority};
use crate::side::Side;
use crate::snapshot::ClosingBook;

/// Single-instrument order book.
#[derive(Debug)]
pub struct OrderBook {
    /// Resting sell orders, cheapest at the root.
    asks: IndexedHeap<Order, SellerPriority>,

    /// Resting buy orders, highest at the root.
    bids: IndexedHeap<Order, BuyerPriority>,
}

impl Default for OrderBook {
    fn default() -> Self {
        OrderBook::new()
    }
}

impl OrderBook {
    /// Create an empty book.
    pub fn new() -> Self {
        OrderBook {
            asks: IndexedHeap::new(SellerPriority),
            bids: IndexedHeap::new(BuyerPriority),
        }
    }

    /// Rest a fresh order on one side, then drain any crossings.
    ///
    /// Returns the trades the order triggered, in match order.
    pub fn submit(&mut self, side: Side, order: Order) -> Result<Vec<Trade>, BookError> {
        match side {
            Side::Buy => self.bids.insert(order),
            Side::Sell => self.asks.insert(order),
        };

        self.drain_crossings()
    }

    /// Reprice the earliest-submitted resting order matching
    /// `(participant, old_price)` on `side`, then drain any crossings.
    ///
    /// The repriced order keeps its handle, and with it its insertion
    /// priority among orders of equal price. Fails with
    /// [`BookError::OrderNotFound`] if nothing matches.
    pub fn revise(
        &mut self,
        side: Side,
        participant: &str,
        old_price: u32,
        new_price: u32,
    ) -> Result<Vec<Trade>, BookError> {
        let handle = self
            .find_resting(side, participant, old_price)
            .ok_or_else(|| BookError::OrderNotFound {
                side,
                participant: participant.to_string(),
                price: old_price,
            })?;

        let replacement = Order::new(participant, new_price);
        match side {
            Side::Buy => self.bids.update(handle, replacement)?,
            Side::Sell => self.asks.update(handle, replacement)?,
        };

        self.drain_crossings()
    }

    /// Drain both queues completely, in priority order.
    ///
    /// This is the terminal operation of a run: the book is empty
    /// afterwards.
    pub fn closing_snapshot(&mut self) -> Result<ClosingBook, BookError> {
        let mut sellers = Vec::with_capacity(self.asks.len());
        while !self.asks.is_empty() {
            sellers.push(self.asks.extract_min()?);
        }

        let mut buyers = Vec::with_capacity(self.bids.len());
        while !self.bids.is_empty() {
            buyers.push(self.bids.extract_min()?);
        }

        Ok(ClosingBook { sellers, buyers })
    }

    /// Cheapest resting ask, if any.
    pub fn best_ask(&self) -> Option<&Order> {
        self.asks.peek().ok()
    }

    /// Highest resting bid, if any.
    pub fn best_bid(&self) -> Option<&Order> {
        self.bids.peek().ok()
    }

    /// Number of resting asks.
    pub fn ask_count(&self) -> usize {
        self.asks.len()
    }

    /// Number of resting bids.
    pub fn bid_count(&self) -> usize {
        self.bids.len()
    }

    // -------------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------------

    /// While the best ask is at or below the best bid, match the two roots.
    ///
    /// The trade executes at the resting buy order's price. On return,
    /// either one side is empty or the best ask is strictly above the best
    /// bid.
    fn drain_crossings(&mut self) -> Result<Vec<Trade>, BookError> {
        let mut trades = Vec::new();

        while self.is_crossed() {
            let ask = self.asks.extract_min()?;
            let bid = self.bids.extract_min()?;
            trades.push(Trade::new(bid.participant, ask.participant, bid.price));
        }

        Ok(trades)
    }

    fn is_crossed(&self) -> bool {
        match (self.asks.peek(), self.bids.peek()) {
            (Ok(ask), Ok(bid)) => ask.price <= bid.price,
            _ => false,
        }
    }

    /// Handle of the earliest-submitted live order matching
    /// `(participant, price)` on `side`.
    fn find_resting(&self, side: Side, participant: &str, price: u32) -> Option<Handle> {
        match side {
            Side::Buy => self
                .bids
                .iter()
                .filter(|(_, order)| order.participant == participant && order.price == price)
                .map(|(handle, _)| handle)
                .min(),
            Side::Sell => self
                .asks
                .iter()
                .filter(|(_, order)| order.participant == participant && order.price == price)
                .map(|(handle, _)| handle)
                .min(),
        }
    }
}
