//! Core value types: players, cells, boards, history, state, RNG, configuration.
//!
//! Everything here is a plain immutable value. The rules that move a game
//! forward live in `crate::rules`.

pub mod player;
pub mod board;
pub mod history;
pub mod state;
pub mod config;
pub mod rng;

pub use player::{Cell, Player};
pub use board::{location, BoardSnapshot, CellIndices, BOARD_CELLS, BOARD_SIDE};
pub use history::MoveHistory;
pub use state::GameState;
pub use config::{GameConfig, Markers};
pub use rng::{GameRng, RngCheckpoint};
