//! Turn resolution.

use super::{Ledger, Symbol};
use tracing::instrument;

/// Returns the symbol that moves next: `X` after an even number of moves,
/// `O` after an odd number.
#[instrument(skip(ledger), fields(moves = ledger.len()))]
pub fn active_player(ledger: &Ledger) -> Symbol {
    Symbol::for_turn(ledger.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_ledger_is_x() {
        assert_eq!(active_player(&Ledger::new()), Symbol::X);
    }

    #[test]
    fn test_flips_after_each_move() {
        let mut ledger = Ledger::new();
        let mut expected = Symbol::X;

        for pos in Position::ALL.iter().take(8) {
            assert_eq!(active_player(&ledger), expected);
            ledger = ledger.submit_move(*pos).unwrap();
            expected = expected.opponent();
        }
        assert_eq!(active_player(&ledger), Symbol::X);
    }
}
