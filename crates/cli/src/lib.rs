//! `tally-cli`: console front end for the ledger engine.
//!
//! All terminal IO lives here; the engine itself never prints.

pub mod bench;
pub mod config;
pub mod console;
pub mod demo;

pub use config::{Cli, Command};
pub use console::Console;
