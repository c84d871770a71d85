//! Game rules: winner detection, the turn engine, history navigation and
//! status.
//!
//! Every function here is pure. It borrows a `GameState` and returns a
//! new value; the caller decides whether to replace its own state.

pub mod winner;
pub mod engine;
pub mod navigator;
pub mod status;

pub use winner::{detect_winner, winning_line, WinningLine, WINNING_LINES};
pub use engine::{apply_move, legal_moves, new_game, validate_move};
pub use navigator::{jump_to, move_list, try_jump_to, MoveEntry};
pub use status::{describe, Status};
