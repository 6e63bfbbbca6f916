//! auction-cli
//!
//! Command-line driver for the auction simulator.

pub mod config;
pub mod runner;
