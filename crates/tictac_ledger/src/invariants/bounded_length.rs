//! Bounded length invariant: at most one move per cell.

use super::Invariant;
use crate::Ledger;
use crate::position::CELL_COUNT;

/// Invariant: the ledger holds no more than 9 moves.
pub struct BoundedLengthInvariant;

impl Invariant<Ledger> for BoundedLengthInvariant {
    fn holds(ledger: &Ledger) -> bool {
        ledger.len() <= CELL_COUNT
    }

    fn description() -> &'static str {
        "Ledger holds at most 9 moves"
    }
}
