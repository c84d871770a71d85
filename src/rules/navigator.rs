//! History navigation ("time travel").
//!
//! Jumping only moves the cursor. The history is shared with the
//! original state and never altered; a later move from a past step is
//! what discards the entries after it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{location, GameState};
use crate::error::JumpError;

/// Move the cursor to an existing step, or report why it cannot.
pub fn try_jump_to(state: &GameState, step: usize) -> Result<GameState, JumpError> {
    let len = state.history().len();
    if step >= len {
        return Err(JumpError::StepOutOfRange { step, len });
    }

    debug!(from = state.step_number(), to = step, "jump");
    Ok(GameState::from_parts(
        state.history().clone(),
        step,
        state.first_player(),
    ))
}

/// Move the cursor to an existing step.
///
/// # Panics
///
/// Panics if `step` is not an index into the history. Use
/// [`try_jump_to`] when the step comes from untrusted input.
///
/// ```
/// use tic_tac_toe::core::Player;
/// use tic_tac_toe::rules::{apply_move, jump_to, new_game};
///
/// let state = apply_move(&new_game(), 0).unwrap();
/// let rewound = jump_to(&state, 0);
///
/// assert_eq!(rewound.step_number(), 0);
/// assert_eq!(rewound.history().len(), 2);
/// assert_eq!(rewound.active_player(), Player::X);
/// ```
#[must_use]
pub fn jump_to(state: &GameState, step: usize) -> GameState {
    match try_jump_to(state, step) {
        Ok(next) => next,
        Err(err) => panic!("invalid jump: {err}"),
    }
}

/// One entry of the move list shown next to the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub step: usize,
    /// Cell played to reach this step (`None` for the starting board).
    pub cell: Option<usize>,
    /// (row, column) of `cell`.
    pub location: Option<(usize, usize)>,
    /// Whether this is the step currently viewed.
    pub current: bool,
}

impl MoveEntry {
    /// Button label for this entry.
    #[must_use]
    pub fn label(&self) -> String {
        if self.step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.step)
        }
    }
}

/// List every step in the history, oldest first.
#[must_use]
pub fn move_list(state: &GameState) -> Vec<MoveEntry> {
    let history = state.history();
    (0..history.len())
        .map(|step| {
            let cell = history.move_at(step);
            MoveEntry {
                step,
                cell,
                location: cell.map(location),
                current: step == state.step_number(),
            }
        })
        .collect()
}
