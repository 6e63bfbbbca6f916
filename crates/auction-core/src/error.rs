//! Error types for the auction core.

use std::fmt;

use crate::heap::Handle;
use crate::side::Side;

/// Failure of a queue operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// Peek or extract on an empty queue.
    Empty,

    /// Update addressed a handle that is not (or no longer) resting.
    UnknownHandle(Handle),
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Empty => write!(f, "queue is empty"),
            QueueError::UnknownHandle(handle) => {
                write!(f, "no resting element for handle {}", handle)
            }
        }
    }
}

impl std::error::Error for QueueError {}

/// Failure of an order book operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A revise command referenced an order that is not resting in the
    /// targeted queue.
    OrderNotFound {
        side: Side,
        participant: String,
        price: u32,
    },

    /// A queue operation failed where the surrounding logic guarantees it
    /// cannot. This is an invariant violation, never a user-facing
    /// condition.
    Internal(String),
}

impl fmt::Display for BookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookError::OrderNotFound {
                side,
                participant,
                price,
            } => write!(f, "no resting {} order \"{} {}\"", side, participant, price),
            BookError::Internal(msg) => write!(f, "internal invariant violation: {}", msg),
        }
    }
}

impl std::error::Error for BookError {}

impl From<QueueError> for BookError {
    fn from(err: QueueError) -> Self {
        BookError::Internal(err.to_string())
    }
}
