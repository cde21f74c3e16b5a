//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the ledger so they can evaluate any grid, legal or not.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{WIN_COMBINATIONS, WinCombination, detect_winner, winning_line};
