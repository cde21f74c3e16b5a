//! Contract-based validation for move submission.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style `{P} submit {Q}`. Preconditions are always checked and
//! produce the caller-facing [`InvalidMove`]; postconditions guard the
//! implementation itself and are evaluated in debug builds.

use super::action::InvalidMove;
use super::invariants::{InvariantSet, InvariantViolation, LedgerInvariants};
use super::{Ledger, Position};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), InvalidMove>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the position names a real cell.
pub struct OnBoard;

impl OnBoard {
    /// Fails with [`InvalidMove::OutOfBounds`] for coordinates outside `[0, 2]`.
    pub fn check(position: &Position) -> Result<(), InvalidMove> {
        if position.is_on_board() {
            Ok(())
        } else {
            Err(InvalidMove::OutOfBounds {
                row: position.row,
                col: position.col,
            })
        }
    }
}

/// Precondition: the ledger has room for another move.
pub struct RoomLeft;

impl RoomLeft {
    /// Fails with [`InvalidMove::GameAlreadyOver`] once 9 moves exist.
    pub fn check(ledger: &Ledger) -> Result<(), InvalidMove> {
        if ledger.is_full() {
            Err(InvalidMove::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: nobody has played the cell yet.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`InvalidMove::CellOccupied`] for a recorded position.
    pub fn check(position: &Position, ledger: &Ledger) -> Result<(), InvalidMove> {
        if ledger.is_occupied(*position) {
            Err(InvalidMove::CellOccupied {
                position: *position,
            })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition, checked in a fixed order: bounds, room, occupancy.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a submission.
    #[instrument(skip(ledger), fields(moves = ledger.len()))]
    pub fn check(position: &Position, ledger: &Ledger) -> Result<(), InvalidMove> {
        OnBoard::check(position)?;
        RoomLeft::check(ledger)?;
        CellIsEmpty::check(position, ledger)?;
        Ok(())
    }
}

/// Contract for [`Ledger::submit_move`].
///
/// Postconditions:
/// - the ledger grew by exactly one move
/// - earlier moves are unchanged
/// - every [`LedgerInvariants`] member holds
pub struct SubmitContract;

impl Contract<Ledger, Position> for SubmitContract {
    fn pre(ledger: &Ledger, position: &Position) -> Result<(), InvalidMove> {
        LegalMove::check(position, ledger)
    }

    fn post(before: &Ledger, after: &Ledger) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = LedgerInvariants::check_all(after).err().unwrap_or_default();

        if after.len() != before.len() + 1 {
            violations.push(InvariantViolation::new("Submission appends exactly one move"));
        } else if after.moves()[..before.len()] != *before.moves() {
            violations.push(InvariantViolation::new("Submission keeps earlier moves"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Checks the submission postcondition in debug builds.
pub(crate) fn assert_postconditions(before: &Ledger, after: &Ledger) {
    if cfg!(debug_assertions) {
        let result = SubmitContract::post(before, after);
        if let Err(violations) = &result {
            warn!(?violations, "Submission postcondition violated");
        }
        debug_assert!(result.is_ok(), "Submission postcondition violated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Symbol};

    #[test]
    fn test_precondition_empty_cell() {
        let ledger = Ledger::new();
        assert!(SubmitContract::pre(&ledger, &Position::new(1, 1)).is_ok());
    }

    #[test]
    fn test_precondition_order_prefers_bounds() {
        let ledger = Ledger::new().submit_move(Position::new(0, 0)).unwrap();
        assert_eq!(
            SubmitContract::pre(&ledger, &Position::new(4, 4)),
            Err(InvalidMove::OutOfBounds { row: 4, col: 4 })
        );
        assert_eq!(
            SubmitContract::pre(&ledger, &Position::new(0, 0)),
            Err(InvalidMove::CellOccupied {
                position: Position::new(0, 0)
            })
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Ledger::new();
        let after = before.submit_move(Position::new(1, 1)).unwrap();
        assert!(SubmitContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_rewritten_history() {
        let before = Ledger::new().submit_move(Position::new(0, 0)).unwrap();
        let after = Ledger::from_moves_unchecked(vec![
            Move::new(Position::new(2, 2), Symbol::X),
            Move::new(Position::new(1, 1), Symbol::O),
        ]);
        let violations = SubmitContract::post(&before, &after).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, "Submission keeps earlier moves");
    }

    #[test]
    fn test_postcondition_detects_skipped_append() {
        let before = Ledger::new();
        let after = before.clone();
        assert!(SubmitContract::post(&before, &after).is_err());
    }
}
