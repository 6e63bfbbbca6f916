//! Command-line grammar.
//!
//! One command per line, whitespace-separated tokens:
//!
//! - New bid:
//!   `<name> K <price>`
//!
//! - New ask:
//!   `<name> S <price>`
//!
//! - Revise resting bid:
//!   `<name> NK <oldPrice> <newPrice>`
//!
//! - Revise resting ask:
//!   `<name> NS <oldPrice> <newPrice>`
//!
//! Blank (or whitespace-only) lines parse to `None`. Anything else that
//! does not fit the grammar is a [`ParseError`] carrying the 1-based line
//! number; the driver treats the first such error as fatal for the whole
//! run, so a malformed line never mutates the book.

use std::fmt;

use auction_core::{Command, Order, Side};

/// A line that does not fit the command grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based input line number.
    pub line: usize,
    pub kind: ParseErrorKind,
}

/// What exactly was wrong with the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Not the token count the grammar allows (3 for submits, 4 for
    /// revises).
    WordCount(usize),

    /// Empty participant identifier.
    EmptyName,

    /// A price token that is not a non-negative integer.
    InvalidPrice(String),

    /// An action code other than `K`, `S`, `NK`, `NS`.
    UnknownAction(String),
}

impl ParseError {
    fn new(line: usize, kind: ParseErrorKind) -> Self {
        ParseError { line, kind }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::WordCount(count) => write!(f, "{} words", count),
            ParseErrorKind::EmptyName => write!(f, "invalid name"),
            ParseErrorKind::InvalidPrice(token) => write!(f, "invalid price \"{}\"", token),
            ParseErrorKind::UnknownAction(token) => write!(f, "invalid action \"{}\"", token),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a single input line into a [`Command`].
///
/// Returns `Ok(None)` for blank lines. `line_no` is 1-based and is only
/// used for error reporting.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Command>, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(None);
    }

    if tokens.len() != 3 && tokens.len() != 4 {
        return Err(ParseError::new(
            line_no,
            ParseErrorKind::WordCount(tokens.len()),
        ));
    }

    let name = tokens[0];
    if name.is_empty() {
        return Err(ParseError::new(line_no, ParseErrorKind::EmptyName));
    }

    let action = tokens[1];
    let command = match action {
        "K" => parse_submit(line_no, Side::Buy, &tokens)?,
        "S" => parse_submit(line_no, Side::Sell, &tokens)?,
        "NK" => parse_revise(line_no, Side::Buy, &tokens)?,
        "NS" => parse_revise(line_no, Side::Sell, &tokens)?,
        _ => {
            return Err(ParseError::new(
                line_no,
                ParseErrorKind::UnknownAction(action.to_string()),
            ));
        }
    };

    Ok(Some(command))
}

fn parse_submit(line_no: usize, side: Side, tokens: &[&str]) -> Result<Command, ParseError> {
    // <name> K|S <price>
    if tokens.len() != 3 {
        return Err(ParseError::new(
            line_no,
            ParseErrorKind::WordCount(tokens.len()),
        ));
    }

    let price = parse_price(line_no, tokens[2])?;
    Ok(Command::submit(side, Order::new(tokens[0], price)))
}

fn parse_revise(line_no: usize, side: Side, tokens: &[&str]) -> Result<Command, ParseError> {
    // <name> NK|NS <oldPrice> <newPrice>
    if tokens.len() != 4 {
        return Err(ParseError::new(
            line_no,
            ParseErrorKind::WordCount(tokens.len()),
        ));
    }

    let old_price = parse_price(line_no, tokens[2])?;
    let new_price = parse_price(line_no, tokens[3])?;
    Ok(Command::revise(side, tokens[0], old_price, new_price))
}

fn parse_price(line_no: usize, token: &str) -> Result<u32, ParseError> {
    token
        .parse::<u32>()
        .map_err(|_| ParseError::new(line_no, ParseErrorKind::InvalidPrice(token.to_string())))
}
