//! Text rendering of game state.

use tictac_ledger::{GameStatus, Ledger, PlayerNames};

/// Board plus a one-line summary of whose turn it is or how the game ended.
pub fn status(status: &GameStatus, names: &PlayerNames) -> String {
    let summary = match (status.winner(), status.winner_symbol()) {
        (Some(name), Some(symbol)) => format!("{name} ({symbol}) wins!"),
        _ if *status.is_draw() => "It's a draw!".to_string(),
        _ => {
            let symbol = *status.active_player();
            format!("{} ({symbol}) to move", names.name(symbol))
        }
    };
    format!("{}\n\n{summary}", status.board())
}

/// Move log, newest first.
pub fn log(ledger: &Ledger) -> String {
    if ledger.is_empty() {
        return "No moves yet".to_string();
    }

    ledger
        .log()
        .enumerate()
        .map(|(i, mov)| format!("{:>2}. {mov}", ledger.len() - i))
        .collect::<Vec<_>>()
        .join("\n")
}
