//! Error types for the engine.
//!
//! Every error here is an expected, recoverable rejection of an input.
//! The state passed in is only borrowed, so a rejected call leaves it
//! exactly as it was.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Player;

/// Reasons a move is rejected by the turn engine.
///
/// Checked in declaration order: range first, then occupancy, then
/// whether the viewed board already has a winner.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveError {
    #[error("cell {index} is off the board (expected 0-8)")]
    OutOfRange { index: usize },

    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("game already won by {winner}")]
    GameAlreadyWon { winner: Player },
}

/// Reasons a jump through history is rejected.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumpError {
    #[error("step {step} does not exist (history has {len} entries)")]
    StepOutOfRange { step: usize, len: usize },
}

/// Reasons a deserialized history or game state is rejected.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryError {
    #[error("move history has no entries")]
    Empty,

    #[error("move history does not start from an empty board")]
    NotStartingEmpty,

    #[error("history entry {step} does not differ from the previous entry in exactly one cell")]
    InvalidStep { step: usize },

    #[error("history entry {step} does not place a marker on empty cell {cell}")]
    NotAPlacement { step: usize, cell: usize },

    #[error("history entry {step} moves after {winner} already won")]
    MoveAfterWin { step: usize, winner: Player },

    #[error("history entry {step} is played by {player} out of turn")]
    OutOfTurn { step: usize, player: Player },

    #[error("step number {step} is past the end of history ({len} entries)")]
    CursorOutOfRange { step: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::OutOfRange { index: 9 }.to_string(),
            "cell 9 is off the board (expected 0-8)"
        );
        assert_eq!(
            MoveError::CellOccupied { index: 4 }.to_string(),
            "cell 4 is already occupied"
        );
        assert_eq!(
            MoveError::GameAlreadyWon { winner: Player::O }.to_string(),
            "game already won by O"
        );
        assert_eq!(
            JumpError::StepOutOfRange { step: 7, len: 3 }.to_string(),
            "step 7 does not exist (history has 3 entries)"
        );
    }
}
