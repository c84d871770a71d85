//! Uniform random playout.

use tracing::trace;

use crate::core::{GameRng, GameState};
use crate::rules::{apply_move, legal_moves};

/// Play uniformly random legal moves from the viewed step.
///
/// Stops when the viewed board is won or full, or after `max_moves`
/// moves (0 = no limit). The input state is not modified; if it was
/// rewound, the playout branches from the viewed step.
///
/// ```
/// use tic_tac_toe::core::GameRng;
/// use tic_tac_toe::playout::random_playout;
/// use tic_tac_toe::rules::{legal_moves, new_game};
///
/// let mut rng = GameRng::new(42);
/// let finished = random_playout(&new_game(), &mut rng, 0);
///
/// assert!(legal_moves(&finished).is_empty());
/// ```
#[must_use]
pub fn random_playout(state: &GameState, rng: &mut GameRng, max_moves: u32) -> GameState {
    let mut current = state.clone();
    let mut played = 0;

    loop {
        if max_moves > 0 && played >= max_moves {
            return current;
        }

        let Some(cell) = rng.pick_cell(&legal_moves(&current)) else {
            return current;
        };
        trace!(step = current.step_number(), cell, "playout move");
        // legal_moves only yields cells the engine accepts.
        let Ok(next) = apply_move(&current, cell) else {
            return current;
        };
        current = next;

        played += 1;
    }
}
