//! Win detection.

use crate::{Board, Position, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three cells that form a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinCombination([Position; 3]);

impl WinCombination {
    const fn line(a: (usize, usize), b: (usize, usize), c: (usize, usize)) -> Self {
        Self([
            Position { row: a.0, col: a.1 },
            Position { row: b.0, col: b.1 },
            Position { row: c.0, col: c.1 },
        ])
    }

    /// The three cells of the line.
    pub fn cells(&self) -> [Position; 3] {
        self.0
    }

    /// Returns true if `position` is one of the line's cells.
    pub fn contains(&self, position: Position) -> bool {
        self.0.contains(&position)
    }

    /// The symbol filling all three cells, if any.
    fn owner(&self, board: &Board) -> Option<Symbol> {
        let [a, b, c] = self.0;
        let first = board.get(a)?;
        (board.get(b) == Some(first) && board.get(c) == Some(first)).then_some(first)
    }
}

/// Every winning line: rows, then columns, then diagonals.
pub const WIN_COMBINATIONS: [WinCombination; 8] = [
    // Rows
    WinCombination::line((0, 0), (0, 1), (0, 2)),
    WinCombination::line((1, 0), (1, 1), (1, 2)),
    WinCombination::line((2, 0), (2, 1), (2, 2)),
    // Columns
    WinCombination::line((0, 0), (1, 0), (2, 0)),
    WinCombination::line((0, 1), (1, 1), (2, 1)),
    WinCombination::line((0, 2), (1, 2), (2, 2)),
    // Diagonals
    WinCombination::line((0, 0), (1, 1), (2, 2)),
    WinCombination::line((0, 2), (1, 1), (2, 0)),
];

/// First completed line in table order, with its owner.
///
/// Boards that did not come from a legal ledger may hold several lines;
/// the earliest table entry wins.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Symbol, WinCombination)> {
    WIN_COMBINATIONS
        .iter()
        .find_map(|combo| combo.owner(board).map(|symbol| (symbol, *combo)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(symbol)` for the first completed line, `None` otherwise.
#[instrument(skip(board))]
pub fn detect_winner(board: &Board) -> Option<Symbol> {
    winning_line(board).map(|(symbol, _)| symbol)
}
