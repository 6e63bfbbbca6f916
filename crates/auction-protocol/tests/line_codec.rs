// crates/auction-protocol/tests/line_codec.rs
//
// Grammar accept/reject cases and report formatting.

use auction_core::{AuctionReport, ClosingBook, Command, Order, Side, Trade};
use auction_protocol::{format_trade, parse_line, render_report, ParseError, ParseErrorKind};

#[test]
fn parses_new_bid() {
    let command = parse_line(1, "Alice K 100").unwrap();
    assert_eq!(
        command,
        Some(Command::submit(Side::Buy, Order::new("Alice", 100)))
    );
}

#[test]
fn parses_new_ask() {
    let command = parse_line(1, "Bob S 90").unwrap();
    assert_eq!(
        command,
        Some(Command::submit(Side::Sell, Order::new("Bob", 90)))
    );
}

#[test]
fn parses_bid_revision() {
    let command = parse_line(1, "Alice NK 100 200").unwrap();
    assert_eq!(command, Some(Command::revise(Side::Buy, "Alice", 100, 200)));
}

#[test]
fn parses_ask_revision() {
    let command = parse_line(1, "Bob NS 90 80").unwrap();
    assert_eq!(command, Some(Command::revise(Side::Sell, "Bob", 90, 80)));
}

#[test]
fn skips_blank_and_whitespace_lines() {
    assert_eq!(parse_line(1, "").unwrap(), None);
    assert_eq!(parse_line(2, "   \t ").unwrap(), None);
}

#[test]
fn tolerates_extra_whitespace_between_tokens() {
    let command = parse_line(1, "  Alice   K	 100 ").unwrap();
    assert_eq!(
        command,
        Some(Command::submit(Side::Buy, Order::new("Alice", 100)))
    );
}

#[test]
fn rejects_wrong_word_count() {
    let err = parse_line(7, "Alice K").unwrap_err();
    assert_eq!(
        err,
        ParseError {
            line: 7,
            kind: ParseErrorKind::WordCount(2),
        }
    );

    // Four tokens overall, but a submit takes three.
    let err = parse_line(2, "Alice K 100 200").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::WordCount(4));

    // A revise takes four.
    let err = parse_line(3, "Alice NK 100").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::WordCount(3));

    let err = parse_line(4, "a b c d e").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::WordCount(5));
}

#[test]
fn rejects_non_numeric_price() {
    let err = parse_line(1, "Alice K ten").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidPrice("ten".to_string()));

    let err = parse_line(1, "Alice K -5").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidPrice("-5".to_string()));

    let err = parse_line(1, "Alice NK 100 2x0").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidPrice("2x0".to_string()));
}

#[test]
fn rejects_unknown_action() {
    let err = parse_line(1, "Alice X 100").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnknownAction("X".to_string()));

    let err = parse_line(1, "Alice k 100").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnknownAction("k".to_string()));
}

#[test]
fn error_messages_name_the_line_and_reason() {
    assert_eq!(
        parse_line(7, "Alice K").unwrap_err().to_string(),
        "line 7: 2 words"
    );
    assert_eq!(
        parse_line(3, "Alice K ten").unwrap_err().to_string(),
        "line 3: invalid price \"ten\""
    );
    assert_eq!(
        parse_line(4, "Alice köper 100").unwrap_err().to_string(),
        "line 4: invalid action \"köper\""
    );
}

#[test]
fn formats_trade_line() {
    let trade = Trade::new("Alice", "Bob", 100);
    assert_eq!(format_trade(&trade), "Alice buys from Bob for 100kr");
}

#[test]
fn renders_full_report() {
    let report = AuctionReport {
        trades: vec![Trade::new("Alice", "Bob", 100)],
        closing: ClosingBook {
            sellers: vec![Order::new("Carol", 150), Order::new("Dan", 200)],
            buyers: vec![Order::new("Erik", 80)],
        },
    };

    assert_eq!(
        render_report(&report),
        "Alice buys from Bob for 100kr\n\
         Order book:\n\
         Sellers: Carol 150, Dan 200\n\
         Buyers: Erik 80\n"
    );
}

#[test]
fn renders_empty_report_with_bare_labels() {
    let report = AuctionReport::default();

    assert_eq!(render_report(&report), "Order book:\nSellers: \nBuyers: \n");
}
