//! Tictac Hotseat - two-player terminal tic-tac-toe

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictac_hotseat::{Cli, HotseatConfig, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => HotseatConfig::from_file(path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => HotseatConfig::default(),
    }
    .with_overrides(cli.x_name, cli.o_name, cli.show_log);

    info!(?config, "Configuration resolved");

    let mut session = Session::new(&config);
    let stdin = std::io::stdin();
    session.run(stdin.lock(), std::io::stdout().lock())?;

    Ok(())
}
