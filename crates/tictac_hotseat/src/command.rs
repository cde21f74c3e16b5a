//! Parsing of input lines into front-end commands.

use std::str::FromStr;
use tictac_ledger::{Position, Symbol};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place the active player's mark.
    Play(Position),
    /// Change a player's display name.
    Rename {
        /// Whose name changes.
        symbol: Symbol,
        /// The new name.
        name: String,
    },
    /// Start over with an empty ledger.
    Restart,
    /// Show the move log.
    Log,
    /// Show board and turn.
    Status,
    /// Print the status snapshot as JSON.
    Json,
    /// List commands.
    Help,
    /// Leave the session.
    Quit,
}

/// Why an input line was not understood.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// Nothing was typed.
    #[display("Empty command")]
    Empty,

    /// The first word is not a command.
    #[display("Unknown command '{_0}' (type 'help')")]
    Unknown(String),

    /// A coordinate is not a non-negative number.
    #[display("'{_0}' is not a row or column number")]
    BadCoordinate(String),

    /// A required argument is absent.
    #[display("Missing {_0}")]
    MissingArgument(&'static str),

    /// A symbol other than X or O was named.
    #[display("'{_0}' is not a symbol (use X or O)")]
    BadSymbol(String),
}

impl std::error::Error for CommandError {}

fn coordinate(token: Option<&str>, what: &'static str) -> Result<usize, CommandError> {
    let token = token.ok_or(CommandError::MissingArgument(what))?;
    token
        .parse()
        .map_err(|_| CommandError::BadCoordinate(token.to_string()))
}

fn position<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Result<Position, CommandError> {
    let row = coordinate(tokens.next(), "row")?;
    let col = coordinate(tokens.next(), "column")?;
    Ok(Position::new(row, col))
}

/// Word separators: whitespace, and commas as in `1,2`.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

/// The remainder of `line` after its first `n` words.
fn skip_words(mut line: &str, n: usize) -> &str {
    for _ in 0..n {
        line = line.trim_start_matches(is_separator);
        line = line.find(is_separator).map_or("", |i| &line[i..]);
    }
    line.trim_start_matches(is_separator).trim_end()
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let normalized = line.replace(',', " ");
        let mut tokens = normalized.split_whitespace();
        let head = tokens.next().ok_or(CommandError::Empty)?;

        if head.chars().all(|c| c.is_ascii_digit()) {
            return position(std::iter::once(head).chain(tokens)).map(Command::Play);
        }

        match head.to_ascii_lowercase().as_str() {
            "play" | "p" => position(tokens).map(Command::Play),
            "name" | "rename" => {
                let symbol = tokens.next().ok_or(CommandError::MissingArgument("symbol"))?;
                let symbol = symbol
                    .parse::<Symbol>()
                    .map_err(|_| CommandError::BadSymbol(symbol.to_string()))?;
                // Names keep their inner commas; take the rest of the raw line.
                let name = skip_words(line, 2);
                if name.is_empty() {
                    return Err(CommandError::MissingArgument("name"));
                }
                Ok(Command::Rename {
                    symbol,
                    name: name.to_string(),
                })
            }
            "restart" | "new" => Ok(Command::Restart),
            "log" => Ok(Command::Log),
            "status" | "board" => Ok(Command::Status),
            "json" => Ok(Command::Json),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Text printed for `help`.
pub const HELP: &str = "\
Commands:
  <row> <col>       place a mark (also 'row,col' or 'play row col'), 0-2
  name <x|o> <name> rename a player
  restart           start a new game
  log               show the moves so far, newest first
  status            show the board
  json              print the game status as JSON
  help              show this text
  quit              leave";
