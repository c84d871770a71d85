//! Turn engine: validates and applies moves.
//!
//! A move is checked against the *viewed* snapshot, not the latest one.
//! If the player has rewound, the move branches from the viewed step and
//! every later entry is discarded.

use tracing::debug;

use super::winner::detect_winner;
use crate::core::{CellIndices, GameState, BOARD_CELLS};
use crate::error::MoveError;

/// Start a standard game: one empty snapshot, step 0, X to move.
#[must_use]
pub fn new_game() -> GameState {
    GameState::new()
}

/// Check a move against the viewed snapshot without applying it.
///
/// Checks run in order: range, occupancy, existing winner.
pub fn validate_move(state: &GameState, cell_index: usize) -> Result<(), MoveError> {
    if cell_index >= BOARD_CELLS {
        return Err(MoveError::OutOfRange { index: cell_index });
    }

    let board = state.current_board();
    if !board.is_empty_at(cell_index) {
        return Err(MoveError::CellOccupied { index: cell_index });
    }

    if let Some(winner) = detect_winner(board) {
        return Err(MoveError::GameAlreadyWon { winner });
    }

    Ok(())
}

/// Place the active player's marker at `cell_index`.
///
/// On success the returned state has the history truncated to the viewed
/// step, the new snapshot appended, and the cursor on that snapshot.
/// `state` itself is never modified.
///
/// ```
/// use tic_tac_toe::core::{Cell, Player};
/// use tic_tac_toe::rules::{apply_move, new_game};
///
/// let state = new_game();
/// let next = apply_move(&state, 4).unwrap();
///
/// assert_eq!(next.current_board()[4], Cell::X);
/// assert_eq!(next.active_player(), Player::O);
/// assert_eq!(state.step_number(), 0);
/// ```
pub fn apply_move(state: &GameState, cell_index: usize) -> Result<GameState, MoveError> {
    if let Err(err) = validate_move(state, cell_index) {
        debug!(step = state.step_number(), cell = cell_index, error = %err, "move rejected");
        return Err(err);
    }

    let player = state.active_player();
    let board = state.current_board().with_marker(cell_index, player);
    let step_number = state.step_number() + 1;
    let history = state.history().branch(step_number, board);

    debug!(
        step = step_number,
        cell = cell_index,
        player = %player,
        discarded = state.history().len() - step_number,
        "move applied"
    );

    Ok(GameState::from_parts(history, step_number, state.first_player()))
}

/// Cells the active player may mark at the viewed step.
///
/// Empty if the viewed snapshot already has a winner.
#[must_use]
pub fn legal_moves(state: &GameState) -> CellIndices {
    let board = state.current_board();
    if detect_winner(board).is_some() {
        return CellIndices::new();
    }
    board.empty_cells()
}
