//! The move ledger: the single source of truth for a game.
//!
//! A [`Ledger`] is an immutable value. Submitting a move never touches the
//! ledger it was called on; it returns a new ledger that shares nothing
//! mutable with the old one, so earlier snapshots stay valid for display.

use super::action::{InvalidMove, Move};
use super::contracts::{Contract, SubmitContract, assert_postconditions};
use super::position::CELL_COUNT;
use super::{Position, Symbol, turn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Ordered, append-only history of moves, earliest first.
///
/// Invariants (upheld by every constructor):
/// - at most 9 moves
/// - no two moves share a position
/// - move `i` carries `X` when `i` is even and `O` when `i` is odd
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "Vec<Move>", try_from = "Vec<Move>")]
pub struct Ledger {
    moves: Arc<[Move]>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a mark for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// - [`InvalidMove::OutOfBounds`] if `position` is off the board
    /// - [`InvalidMove::GameAlreadyOver`] if 9 moves are already recorded
    /// - [`InvalidMove::CellOccupied`] if the cell was played before
    #[instrument(skip(self), fields(moves = self.len()))]
    pub fn submit_move(&self, position: Position) -> Result<Ledger, InvalidMove> {
        if let Err(err) = SubmitContract::pre(self, &position) {
            debug!(%err, "Move rejected");
            return Err(err);
        }

        let symbol = turn::active_player(self);
        let moves: Arc<[Move]> = self
            .moves
            .iter()
            .copied()
            .chain(std::iter::once(Move::new(position, symbol)))
            .collect();
        let next = Ledger { moves };

        assert_postconditions(self, &next);

        debug!(%symbol, "Move recorded");
        Ok(next)
    }

    /// Rebuilds a ledger from an explicit move list.
    ///
    /// Each move must be legal at its point in the sequence and carry the
    /// symbol whose turn it was.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Ledger, ReplayError> {
        let mut ledger = Ledger::new();

        for (index, mov) in moves.iter().enumerate() {
            let expected = ledger.active_player();
            let next = ledger
                .submit_move(mov.position)
                .map_err(|err| ReplayError::new(index, ReplayErrorKind::Rejected(err)))?;

            if mov.symbol != expected {
                debug!(index, %expected, found = %mov.symbol, "Replay out of turn");
                return Err(ReplayError::new(
                    index,
                    ReplayErrorKind::OutOfTurn {
                        expected,
                        found: mov.symbol,
                    },
                ));
            }

            ledger = next;
        }

        Ok(ledger)
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if no move has been recorded.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns true once every cell has been played.
    pub fn is_full(&self) -> bool {
        self.moves.len() >= CELL_COUNT
    }

    /// Moves in the order they were played.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Moves newest first, the order a move log is shown in.
    pub fn log(&self) -> impl DoubleEndedIterator<Item = &Move> + ExactSizeIterator {
        self.moves.iter().rev()
    }

    /// The most recent move.
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Symbol that moves next.
    pub fn active_player(&self) -> Symbol {
        turn::active_player(self)
    }

    /// Returns true if some recorded move holds `position`.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.moves.iter().any(|m| m.position == position)
    }

    /// Builds a ledger without checking invariants.
    #[cfg(test)]
    pub(crate) fn from_moves_unchecked(moves: Vec<Move>) -> Self {
        Self {
            moves: moves.into(),
        }
    }
}

/// Records a move for the active player. See [`Ledger::submit_move`].
pub fn submit_move(ledger: &Ledger, position: Position) -> Result<Ledger, InvalidMove> {
    ledger.submit_move(position)
}

/// Starts a new game with an empty ledger.
#[instrument]
pub fn restart() -> Ledger {
    debug!("Ledger restarted");
    Ledger::new()
}

impl From<Ledger> for Vec<Move> {
    fn from(ledger: Ledger) -> Self {
        ledger.moves.to_vec()
    }
}

impl TryFrom<Vec<Move>> for Ledger {
    type Error = ReplayError;

    fn try_from(moves: Vec<Move>) -> Result<Self, Self::Error> {
        Ledger::replay(&moves)
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// A move list that does not describe a legal game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_new::new)]
#[display("Move {index} cannot be replayed: {kind}")]
pub struct ReplayError {
    /// Zero-based index of the offending move.
    pub index: usize,
    /// What was wrong with it.
    pub kind: ReplayErrorKind,
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ReplayErrorKind::Rejected(err) => Some(err),
            ReplayErrorKind::OutOfTurn { .. } => None,
        }
    }
}

/// Why a replayed move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ReplayErrorKind {
    /// The ledger rejected the position.
    #[display("{_0}")]
    Rejected(InvalidMove),

    /// The move carried the wrong symbol for its turn.
    #[display("expected {expected} to move, found {found}")]
    OutOfTurn {
        /// Symbol whose turn it was.
        expected: Symbol,
        /// Symbol recorded on the move.
        found: Symbol,
    },
}
