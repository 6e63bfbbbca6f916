//! auction-protocol
//!
//! Text surface of the auction.
//!
//! This crate is responsible for turning input lines into logical
//! commands (`auction_core::Command`) and logical results back into the
//! report text:
//!
//! - [`line_codec`] : command-line grammar (parse side)
//! - [`report`]     : trade lines and the closing book block (format side)

pub mod line_codec;
pub mod report;

pub use line_codec::{parse_line, ParseError, ParseErrorKind};
pub use report::{format_trade, render_report};
