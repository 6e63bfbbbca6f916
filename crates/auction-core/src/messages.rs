//! Command and event types for the auction.
//!
//! These are transport-agnostic logical messages:
//! - [`Command`]: what the auction consumes, one per input line.
//! - [`Trade`]: what the matching loop produces.
//!
//! The text-line grammar that produces `Command`s lives in the
//! `auction-protocol` crate; this module is purely logical.

use crate::order::Order;
use crate::side::Side;

/// A single instruction for the auction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place a fresh order on one side of the book.
    Submit(Submit),

    /// Reprice an order already resting in the book.
    Revise(Revise),
}

/// Payload of [`Command::Submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submit {
    pub side: Side,
    pub order: Order,
}

/// Payload of [`Command::Revise`].
///
/// The order to reprice is identified by `(participant, old_price)` on the
/// given side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revise {
    pub side: Side,
    pub participant: String,
    pub old_price: u32,
    pub new_price: u32,
}

/// Trade event: a resting ask crossed a resting bid and both were removed.
///
/// The price is always the resting buy order's price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trade {
    pub buyer: String,
    pub seller: String,
    pub price: u32,
}

// -----------------------------------------------------------------------------
// Convenience constructors
// -----------------------------------------------------------------------------

impl Command {
    /// Convenience constructor for a submit command.
    pub fn submit(side: Side, order: Order) -> Self {
        Command::Submit(Submit { side, order })
    }

    /// Convenience constructor for a revise command.
    pub fn revise(
        side: Side,
        participant: impl Into<String>,
        old_price: u32,
        new_price: u32,
    ) -> Self {
        Command::Revise(Revise {
            side,
            participant: participant.into(),
            old_price,
            new_price,
        })
    }
}

impl Trade {
    pub fn new(buyer: impl Into<String>, seller: impl Into<String>, price: u32) -> Self {
        Trade {
            buyer: buyer.into(),
            seller: seller.into(),
            price,
        }
    }
}
