//! Moves and move rejections.
//!
//! A move is a domain event: once the ledger accepts it, it is never edited.
//! Rejections are values returned to the caller, who keeps the prior ledger.

use super::{Position, Symbol};
use serde::{Deserialize, Serialize};

/// A symbol placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Where the mark was placed.
    pub position: Position,
    /// Which symbol was placed.
    pub symbol: Symbol,
}

impl Move {
    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the symbol of this move.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} selected {}", self.symbol, self.position)
    }
}

/// Reason a submitted position was not recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum InvalidMove {
    /// Row or column lies outside `[0, 2]`.
    #[display("Position ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A recorded move already holds this position.
    #[display("Cell {position} is already occupied")]
    CellOccupied {
        /// The contested cell.
        position: Position,
    },

    /// All 9 moves have been recorded.
    #[display("Game is already over")]
    GameAlreadyOver,
}

impl std::error::Error for InvalidMove {}
