//! Game state: move history plus the viewed step.
//!
//! ## GameState
//!
//! - `history`: every snapshot reached so far
//! - `step_number`: index of the snapshot currently viewed
//! - `first_player`: who moves on even steps
//!
//! The active player is always derived from `step_number` parity and is
//! never stored, so it cannot drift out of sync with the history.
//!
//! States are immutable values. Moves and jumps (see `crate::rules`)
//! return a new state, and cloning is O(1) because the history is a
//! persistent vector.

use serde::{Deserialize, Serialize};

use super::board::BoardSnapshot;
use super::config::GameConfig;
use super::history::MoveHistory;
use super::player::Player;
use crate::error::HistoryError;

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr", into = "GameStateRepr")]
pub struct GameState {
    history: MoveHistory,
    step_number: usize,
    first_player: Player,
}

impl GameState {
    /// Start a standard game: empty board, X to move.
    ///
    /// ```
    /// use tic_tac_toe::core::{GameState, Player};
    ///
    /// let state = GameState::new();
    /// assert_eq!(state.step_number(), 0);
    /// assert_eq!(state.history().len(), 1);
    /// assert_eq!(state.active_player(), Player::X);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    /// Start a game from a configuration.
    #[must_use]
    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            history: MoveHistory::new(),
            step_number: 0,
            first_player: config.first_player,
        }
    }

    /// Build a state from parts the rules module has already validated.
    pub(crate) fn from_parts(history: MoveHistory, step_number: usize, first_player: Player) -> Self {
        debug_assert!(step_number < history.len());
        Self {
            history,
            step_number,
            first_player,
        }
    }

    /// Get the full move history.
    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Get the index of the viewed snapshot.
    #[must_use]
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Get the player who moves on even steps.
    #[must_use]
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Get the snapshot at the viewed step.
    #[must_use]
    pub fn current_board(&self) -> &BoardSnapshot {
        // step_number < history.len() is maintained by every constructor.
        self.history
            .get(self.step_number)
            .unwrap_or_else(|| self.history.latest())
    }

    /// Player to move at the viewed step.
    #[must_use]
    pub fn active_player(&self) -> Player {
        if self.step_number % 2 == 0 {
            self.first_player
        } else {
            self.first_player.opponent()
        }
    }

    /// Check if the viewed step is the most recent one.
    #[must_use]
    pub fn is_at_latest(&self) -> bool {
        self.step_number + 1 == self.history.len()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire form of `GameState`, validated on the way in.
#[derive(Clone, Serialize, Deserialize)]
struct GameStateRepr {
    history: MoveHistory,
    step_number: usize,
    first_player: Player,
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = HistoryError;

    fn try_from(repr: GameStateRepr) -> Result<Self, Self::Error> {
        if repr.step_number >= repr.history.len() {
            return Err(HistoryError::CursorOutOfRange {
                step: repr.step_number,
                len: repr.history.len(),
            });
        }
        if let Some(player) = repr.history.player_at(1) {
            if player != repr.first_player {
                return Err(HistoryError::OutOfTurn { step: 1, player });
            }
        }
        Ok(Self::from_parts(repr.history, repr.step_number, repr.first_player))
    }
}

impl From<GameState> for GameStateRepr {
    fn from(state: GameState) -> Self {
        Self {
            history: state.history,
            step_number: state.step_number,
            first_player: state.first_player,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new();

        assert_eq!(state.step_number(), 0);
        assert_eq!(state.history().len(), 1);
        assert_eq!(*state.current_board(), BoardSnapshot::empty());
        assert_eq!(state.active_player(), Player::X);
        assert!(state.is_at_latest());
    }

    #[test]
    fn test_with_config_first_player() {
        let config = GameConfig::new().with_first_player(Player::O);
        let state = GameState::with_config(&config);

        assert_eq!(state.first_player(), Player::O);
        assert_eq!(state.active_player(), Player::O);
    }

    #[test]
    fn test_active_player_follows_parity() {
        let start = MoveHistory::new();
        let b1 = start.latest().with_marker(0, Player::X);
        let history = start.branch(1, b1);

        let at_one = GameState::from_parts(history.clone(), 1, Player::X);
        assert_eq!(at_one.active_player(), Player::O);

        let at_zero = GameState::from_parts(history, 0, Player::X);
        assert_eq!(at_zero.active_player(), Player::X);
        assert!(!at_zero.is_at_latest());
    }

    #[test]
    fn test_deserialize_rejects_bad_cursor() {
        let json = r#"{"history":[{"cells":["Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty"]}],"step_number":3,"first_player":"X"}"#;
        let result: Result<GameState, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_wrong_opening_player() {
        let json = r#"{"history":[{"cells":["Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty"]},{"cells":["O","Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty"]}],"step_number":1,"first_player":"X"}"#;
        let result: Result<GameState, _> = serde_json::from_str(json);
        assert!(result.is_err());

        let o_first = json.replace(r#""first_player":"X""#, r#""first_player":"O""#);
        let state: GameState = serde_json::from_str(&o_first).unwrap();
        assert_eq!(state.active_player(), Player::X);
    }

    #[test]
    fn test_serialization_round_trip() {
        let state = GameState::new();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
