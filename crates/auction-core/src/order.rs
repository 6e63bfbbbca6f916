//! Resting order representation.

use std::fmt;

/// A single order in the book: who placed it and at what price.
///
/// Prices are non-negative integer ticks. The struct is immutable once
/// constructed; a revise replaces the whole value in its queue slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub participant: String,
    pub price: u32,
}

impl Order {
    pub fn new(participant: impl Into<String>, price: u32) -> Self {
        Order {
            participant: participant.into(),
            price,
        }
    }
}

/// Renders as `<name> <price>`, the form used in the closing book listing.
impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.participant, self.price)
    }
}
