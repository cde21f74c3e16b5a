//! Hot-seat session: the front end's only mutable state.
//!
//! The session holds the current ledger and name mapping and swaps them for
//! the new values the core hands back. It never edits either in place.

use crate::command::{Command, HELP};
use crate::config::HotseatConfig;
use crate::render;
use std::io::{BufRead, Write};
use tictac_ledger::{Ledger, PlayerNames, Position, restart, set_player_name, status};
use tracing::{debug, info, instrument, warn};

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading.
    Continue(String),
    /// Stop reading.
    Quit,
}

/// Current ledger and names for one pair of players.
#[derive(Debug, Clone)]
pub struct Session {
    ledger: Ledger,
    names: PlayerNames,
    show_log: bool,
}

impl Session {
    /// Creates a session with an empty ledger.
    #[instrument(skip(config))]
    pub fn new(config: &HotseatConfig) -> Self {
        info!("Starting hot-seat session");
        Self {
            ledger: restart(),
            names: config.player_names(),
            show_log: *config.show_log(),
        }
    }

    /// The current ledger.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The current names.
    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    /// Applies one command.
    #[instrument(skip(self), fields(moves = self.ledger.len()))]
    pub fn handle(&mut self, command: Command) -> Reply {
        match command {
            Command::Play(position) => Reply::Continue(self.play(position)),
            Command::Rename { symbol, name } => {
                self.names = set_player_name(&self.names, symbol, &name);
                Reply::Continue(format!("{symbol} is now {name}"))
            }
            Command::Restart => {
                self.ledger = restart();
                Reply::Continue(format!("New game\n\n{}", self.render_status()))
            }
            Command::Log => Reply::Continue(render::log(&self.ledger)),
            Command::Status => Reply::Continue(self.render_status()),
            Command::Json => Reply::Continue(self.status_json()),
            Command::Help => Reply::Continue(HELP.to_string()),
            Command::Quit => Reply::Quit,
        }
    }

    fn play(&mut self, position: Position) -> String {
        if status(&self.ledger, &self.names).is_over() {
            debug!("Move ignored after game end");
            return "The game is over. Type 'restart' to play again.".to_string();
        }

        match self.ledger.submit_move(position) {
            Ok(next) => {
                self.ledger = next;
                let mut out = self.render_status();
                if self.show_log {
                    out.push_str("\n\n");
                    out.push_str(&render::log(&self.ledger));
                }
                out
            }
            Err(err) => format!("Rejected: {err}"),
        }
    }

    fn render_status(&self) -> String {
        render::status(&status(&self.ledger, &self.names), &self.names)
    }

    fn status_json(&self) -> String {
        serde_json::to_string_pretty(&status(&self.ledger, &self.names)).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to serialize status");
            format!("Could not serialize status: {e}")
        })
    }

    /// Reads commands from `input` until EOF or `quit`, writing replies to
    /// `output`.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        writeln!(output, "{}\n", self.render_status())?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let reply = match line.parse::<Command>() {
                Ok(command) => self.handle(command),
                Err(err) => {
                    debug!(%err, "Unparsed input");
                    Reply::Continue(err.to_string())
                }
            };

            match reply {
                Reply::Continue(text) => writeln!(output, "{text}\n")?,
                Reply::Quit => break,
            }
            output.flush()?;
        }

        info!(moves = self.ledger.len(), "Session ended");
        Ok(())
    }
}
