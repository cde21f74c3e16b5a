//! Board projection.
//!
//! The board is never edited in place. It is folded from a [`Ledger`] on
//! demand by [`project`], so it can never drift from the move history.

use super::position::BOARD_SIZE;
use super::{Ledger, Position, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 grid of cells, indexed `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Symbol>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit rows.
    ///
    /// The result need not correspond to any legal game; it exists so
    /// callers can evaluate arbitrary positions.
    pub fn from_rows(cells: [[Option<Symbol>; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Symbol at `position`, or `None` if the cell is empty or off the board.
    pub fn get(&self, position: Position) -> Option<Symbol> {
        self.cells
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .copied()
            .flatten()
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Returns true if every cell holds a symbol.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Some(symbol) => symbol.to_string(),
                        None => "·".to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }

    fn place(&mut self, position: Position, symbol: Symbol) {
        if let Some(cell) = self
            .cells
            .get_mut(position.row)
            .and_then(|row| row.get_mut(position.col))
        {
            *cell = Some(symbol);
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

/// Folds the ledger's moves, oldest first, into a fresh board.
#[instrument(skip(ledger), fields(moves = ledger.len()))]
pub fn project(ledger: &Ledger) -> Board {
    ledger.moves().iter().fold(Board::new(), |mut board, mov| {
        board.place(mov.position, mov.symbol);
        board
    })
}
