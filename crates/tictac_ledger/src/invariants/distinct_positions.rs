//! Distinct positions invariant: a cell is played at most once.

use super::Invariant;
use crate::Ledger;
use std::collections::HashSet;

/// Invariant: no two moves share a position.
///
/// Together with the projector this means the board has exactly one
/// occupied cell per recorded move.
pub struct DistinctPositionsInvariant;

impl Invariant<Ledger> for DistinctPositionsInvariant {
    fn holds(ledger: &Ledger) -> bool {
        let mut seen = HashSet::with_capacity(ledger.len());
        ledger.moves().iter().all(|mov| seen.insert(mov.position))
    }

    fn description() -> &'static str {
        "Each position is played at most once"
    }
}
