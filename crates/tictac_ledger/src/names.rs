//! Display names for the two symbols.

use super::Symbol;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Default name for `X`.
pub const DEFAULT_X_NAME: &str = "Player 1";

/// Default name for `O`.
pub const DEFAULT_O_NAME: &str = "Player 2";

/// Maps each symbol to a display name.
///
/// Names carry no game-logic meaning; they only label the winner in a
/// [`GameStatus`](crate::GameStatus).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct PlayerNames {
    /// Name shown for `X`.
    x: String,
    /// Name shown for `O`.
    o: String,
}

impl PlayerNames {
    /// Creates a mapping with the given names.
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
        }
    }

    /// Name configured for `symbol`.
    pub fn name(&self, symbol: Symbol) -> &str {
        match symbol {
            Symbol::X => &self.x,
            Symbol::O => &self.o,
        }
    }

    /// Returns a copy with `symbol` renamed; the other name is kept.
    #[instrument(skip(self, new_name), fields(name = %new_name.as_ref()))]
    pub fn with_name(&self, symbol: Symbol, new_name: impl AsRef<str>) -> Self {
        let mut next = self.clone();
        let slot = match symbol {
            Symbol::X => &mut next.x,
            Symbol::O => &mut next.o,
        };
        new_name.as_ref().clone_into(slot);
        debug!("Player renamed");
        next
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::new(DEFAULT_X_NAME, DEFAULT_O_NAME)
    }
}

impl std::ops::Index<Symbol> for PlayerNames {
    type Output = str;

    fn index(&self, symbol: Symbol) -> &str {
        self.name(symbol)
    }
}

/// Returns a new mapping with `symbol` renamed to `new_name`.
pub fn set_player_name(names: &PlayerNames, symbol: Symbol, new_name: impl AsRef<str>) -> PlayerNames {
    names.with_name(symbol, new_name)
}
