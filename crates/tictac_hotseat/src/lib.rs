//! Hot-seat terminal front end for `tictac_ledger`.
//!
//! Two players share one keyboard. The front end keeps the current ledger
//! and names, parses each input line into a [`Command`], forwards moves to
//! the core and prints the re-derived status.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod config;
pub mod render;
mod session;

pub use cli::Cli;
pub use command::{Command, CommandError, HELP};
pub use config::{ConfigError, HotseatConfig};
pub use session::{Reply, Session};
