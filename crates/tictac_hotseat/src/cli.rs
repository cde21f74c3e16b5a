//! Command-line interface for tictac_hotseat.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "tictac_hotseat")]
#[command(about = "Tic-tac-toe for two players at one terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Display name for X (overrides the config file)
    #[arg(long)]
    pub x_name: Option<String>,

    /// Display name for O (overrides the config file)
    #[arg(long)]
    pub o_name: Option<String>,

    /// Print the move log after every move
    #[arg(long)]
    pub show_log: bool,
}
