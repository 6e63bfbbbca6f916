//! Session driver.
//!
//! Feeds input lines through the parser into a fresh [`Auction`] and
//! assembles the report. The first malformed line or failed revise aborts
//! the whole session, so an aborted run prints no report at all.

use std::io::BufRead;

use anyhow::{Context, Result};
use tracing::debug;

use auction_core::Auction;
use auction_protocol::{parse_line, render_report};

/// Run one full session: consume `reader` to the end of the stream and
/// return the rendered report.
pub fn run_session<R: BufRead>(reader: R) -> Result<String> {
    let mut auction = Auction::new();
    let mut line_no = 0usize;

    for line in reader.lines() {
        line_no += 1;
        let line = line.with_context(|| format!("failed to read line {}", line_no))?;

        let Some(command) = parse_line(line_no, &line)? else {
            continue;
        };

        auction
            .apply(command)
            .with_context(|| format!("line {}", line_no))?;
    }

    debug!(
        lines = line_no,
        trades = auction.trades().len(),
        "input consumed"
    );

    let report = auction.finish()?;
    Ok(render_report(&report))
}
