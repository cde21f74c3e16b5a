//! Ledger-driven tic-tac-toe.
//!
//! The whole game is derived from one value: an append-only [`Ledger`] of
//! moves. Everything a front end shows is recomputed from it on demand.
//!
//! # Architecture
//!
//! - **Ledger**: ordered move history; the only thing that changes
//! - **Projection**: [`project`] folds the ledger into a [`Board`]
//! - **Turns**: [`active_player`] reads the next symbol off the ledger length
//! - **Rules**: [`detect_winner`] scans the fixed [`WIN_COMBINATIONS`] table
//! - **Status**: [`status`] composes all of the above into a [`GameStatus`]
//!
//! # Example
//!
//! ```
//! use tictac_ledger::{PlayerNames, Position, restart, set_player_name, status, Symbol};
//!
//! let names = set_player_name(&PlayerNames::default(), Symbol::X, "Ada");
//! let ledger = restart()
//!     .submit_move(Position::new(0, 0))
//!     .and_then(|l| l.submit_move(Position::new(1, 1)))
//!     .expect("Legal moves");
//!
//! let snapshot = status(&ledger, &names);
//! assert_eq!(*snapshot.active_player(), Symbol::X);
//! assert!(!snapshot.is_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
pub mod contracts;
pub mod invariants;
mod ledger;
mod names;
mod position;
pub mod rules;
mod status;
mod symbol;
mod turn;

pub use action::{InvalidMove, Move};
pub use board::{Board, project};
pub use ledger::{Ledger, ReplayError, ReplayErrorKind, restart, submit_move};
pub use names::{DEFAULT_O_NAME, DEFAULT_X_NAME, PlayerNames, set_player_name};
pub use position::{BOARD_SIZE, CELL_COUNT, Position};
pub use rules::{WIN_COMBINATIONS, WinCombination, detect_winner, is_draw, winning_line};
pub use status::{GameStatus, status};
pub use symbol::Symbol;
pub use turn::active_player;
