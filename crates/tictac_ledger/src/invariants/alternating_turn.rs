//! Alternating turn invariant: symbols run X, O, X, O, ...

use super::Invariant;
use crate::{Ledger, Symbol};

/// Invariant: move `i` carries `X` for even `i` and `O` for odd `i`.
pub struct AlternatingTurnInvariant;

impl Invariant<Ledger> for AlternatingTurnInvariant {
    fn holds(ledger: &Ledger) -> bool {
        ledger
            .moves()
            .iter()
            .enumerate()
            .all(|(i, mov)| mov.symbol == Symbol::for_turn(i))
    }

    fn description() -> &'static str {
        "Symbols alternate turns starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position};

    #[test]
    fn test_submitted_moves_hold() {
        let ledger = Ledger::new()
            .submit_move(Position::new(0, 0))
            .and_then(|l| l.submit_move(Position::new(2, 2)))
            .unwrap();
        assert!(AlternatingTurnInvariant::holds(&ledger));
    }

    #[test]
    fn test_o_first_violates() {
        let ledger = Ledger::from_moves_unchecked(vec![Move::new(Position::new(0, 0), Symbol::O)]);
        assert!(!AlternatingTurnInvariant::holds(&ledger));
    }

    #[test]
    fn test_same_symbol_twice_violates() {
        let ledger = Ledger::from_moves_unchecked(vec![
            Move::new(Position::new(0, 0), Symbol::X),
            Move::new(Position::new(1, 1), Symbol::O),
            Move::new(Position::new(2, 2), Symbol::O),
        ]);
        assert!(!AlternatingTurnInvariant::holds(&ledger));
    }
}
