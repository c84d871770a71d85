//! # tic-tac-toe-engine
//!
//! An immutable tic-tac-toe game state engine with move history and
//! time travel.
//!
//! ## Design Principles
//!
//! 1. **Immutable Values**: Boards and game states are never modified in
//!    place. Every move or jump returns a new `GameState`.
//!
//! 2. **Derived Turn Order**: The active player is a function of the
//!    viewed step's parity, never a separately stored flag.
//!
//! 3. **Shared History**: Move history uses `im-rs` persistent vectors, so
//!    rewinding and branching share snapshots instead of copying them.
//!
//! ## Example
//!
//! ```
//! use tic_tac_toe::{apply_move, describe, jump_to, new_game, Player, Status};
//!
//! let mut state = new_game();
//! for cell in [0, 4, 1, 3, 2] {
//!     state = apply_move(&state, cell).unwrap();
//! }
//! assert_eq!(describe(&state), Status::Won { winner: Player::X });
//!
//! // Rewind to step 2 and branch: the old future is discarded.
//! let state = apply_move(&jump_to(&state, 2), 3).unwrap();
//! assert_eq!(state.history().len(), 4);
//! assert_eq!(describe(&state), Status::InProgress { active_player: Player::O });
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, cells, boards, history, state, RNG, configuration
//! - `rules`: Winner detection, turn engine, history navigation, status
//! - `playout`: Seeded random play
//! - `error`: Move and history errors

pub mod core;
pub mod error;
pub mod playout;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BoardSnapshot, Cell, GameConfig, GameRng, GameState, Markers, MoveHistory,
    Player, RngCheckpoint,
};

pub use crate::error::{HistoryError, JumpError, MoveError};

pub use crate::rules::{
    apply_move, describe, detect_winner, jump_to, legal_moves, move_list, new_game,
    try_jump_to, winning_line, MoveEntry, Status, WinningLine,
};

pub use crate::playout::random_playout;
