//! Auction run orchestrator.
//!
//! Owns the order book plus the append-only trade log for one run:
//! - Routes each [`Command`] to the book.
//! - Collects the trades every mutation drains.
//! - Produces the final report when the input stream ends.
//!
//! A fresh instance is built per invocation; nothing survives a run.

use crate::book::OrderBook;
use crate::error::BookError;
use crate::messages::{Command, Trade};
use crate::snapshot::AuctionReport;

/// One auction run: a book and the trades it has produced so far.
#[derive(Debug, Default)]
pub struct Auction {
    book: OrderBook,
    trades: Vec<Trade>,
}

impl Auction {
    /// Create a new, empty auction.
    pub fn new() -> Self {
        Auction::default()
    }

    /// Process a single command.
    ///
    /// Any trades the command triggers are appended to the log. Errors
    /// propagate unchanged; the caller is expected to abort the run.
    pub fn apply(&mut self, command: Command) -> Result<(), BookError> {
        let trades = match command {
            Command::Submit(submit) => self.book.submit(submit.side, submit.order)?,
            Command::Revise(revise) => self.book.revise(
                revise.side,
                &revise.participant,
                revise.old_price,
                revise.new_price,
            )?,
        };

        self.trades.extend(trades);
        Ok(())
    }

    /// Trades recorded so far, in match order.
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// For tests or inspection: the live book.
    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    /// Finish the run: drain the closing book and hand back everything the
    /// run produced.
    pub fn finish(mut self) -> Result<AuctionReport, BookError> {
        let closing = self.book.closing_snapshot()?;
        Ok(AuctionReport {
            trades: self.trades,
            closing,
        })
    }
}
