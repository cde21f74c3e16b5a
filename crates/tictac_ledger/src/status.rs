//! Status aggregation.
//!
//! [`status`] is the one call a presentation layer needs after every move.
//! It recomputes everything from the ledger; nothing is cached.

use super::board::{Board, project};
use super::names::PlayerNames;
use super::rules::{self, WinCombination, winning_line};
use super::{Ledger, Symbol, turn};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Snapshot of a game, derived from a ledger and the player names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GameStatus {
    /// The projected board.
    board: Board,
    /// Symbol that moves next.
    active_player: Symbol,
    /// Display name of the winner, if a line is complete.
    winner: Option<String>,
    /// Symbol owning the completed line.
    winner_symbol: Option<Symbol>,
    /// The completed line.
    winning_line: Option<WinCombination>,
    /// All 9 cells filled and no line complete.
    is_draw: bool,
    /// Number of recorded moves.
    move_count: usize,
}

impl GameStatus {
    /// Returns true once the game has a winner or is drawn.
    pub fn is_over(&self) -> bool {
        self.winner_symbol.is_some() || self.is_draw
    }
}

/// Derives the full game status.
#[instrument(skip(ledger, names), fields(moves = ledger.len()))]
pub fn status(ledger: &Ledger, names: &PlayerNames) -> GameStatus {
    let board = project(ledger);
    let active_player = turn::active_player(ledger);
    let line = winning_line(&board);
    let winner_symbol = line.map(|(symbol, _)| symbol);
    let is_draw = rules::is_draw(&board);

    if let Some(symbol) = winner_symbol {
        debug!(%symbol, "Line complete");
    } else if is_draw {
        debug!("Board full without a line");
    }

    GameStatus {
        board,
        active_player,
        winner: winner_symbol.map(|symbol| names.name(symbol).to_string()),
        winner_symbol,
        winning_line: line.map(|(_, combo)| combo),
        is_draw,
        move_count: ledger.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_fresh_game_status() {
        let status = status(&Ledger::new(), &PlayerNames::default());
        assert_eq!(*status.active_player(), Symbol::X);
        assert_eq!(status.winner(), &None);
        assert!(!status.is_draw());
        assert!(!status.is_over());
        assert_eq!(*status.move_count(), 0);
    }

    #[test]
    fn test_winner_uses_display_name() {
        let names = PlayerNames::new("Ada", "Grace");
        let ledger = [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]
            .into_iter()
            .try_fold(Ledger::new(), |l, (r, c)| l.submit_move(Position::new(r, c)))
            .unwrap();

        let status = status(&ledger, &names);
        assert_eq!(status.winner().as_deref(), Some("Ada"));
        assert_eq!(*status.winner_symbol(), Some(Symbol::X));
        assert!(status.is_over());
        let line = status.winning_line().expect("Line");
        assert!(line.contains(Position::new(0, 1)));
    }

    #[test]
    fn test_draw_flag_only_on_full_board_without_line() {
        let names = PlayerNames::default();
        // X O X / X O O / O X X
        let cells = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)];
        let mut ledger = Ledger::new();

        for (i, (r, c)) in cells.into_iter().enumerate() {
            assert!(!*status(&ledger, &names).is_draw(), "draw after {i} moves");
            ledger = ledger.submit_move(Position::new(r, c)).unwrap();
        }

        let status = status(&ledger, &names);
        assert!(*status.is_draw());
        assert!(rules::is_draw(status.board()));
        assert!(status.is_over());
    }
}
