//! Read-only game status for the presentation layer.

use serde::{Deserialize, Serialize};

use super::winner::detect_winner;
use crate::core::{GameState, Markers, Player};

/// What the status line shows for the viewed step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// No winner yet; `active_player` moves next.
    InProgress { active_player: Player },
    /// `winner` has completed a line.
    Won { winner: Player },
}

impl Status {
    /// Render with the given markers, e.g. "Next player: ❌".
    #[must_use]
    pub fn render(&self, markers: &Markers) -> String {
        match self {
            Status::InProgress { active_player } => {
                format!("Next player: {}", markers.player_glyph(*active_player))
            }
            Status::Won { winner } => format!("Winner: {}", markers.player_glyph(*winner)),
        }
    }

    /// Get the winner, if the game is won.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::Won { winner } => Some(*winner),
            Status::InProgress { .. } => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(&Markers::ascii()))
    }
}

/// Describe the viewed step.
#[must_use]
pub fn describe(state: &GameState) -> Status {
    match detect_winner(state.current_board()) {
        Some(winner) => Status::Won { winner },
        None => Status::InProgress {
            active_player: state.active_player(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{apply_move, new_game};

    #[test]
    fn test_new_game_status() {
        let status = describe(&new_game());
        assert_eq!(status, Status::InProgress { active_player: Player::X });
        assert_eq!(status.to_string(), "Next player: X");
        assert_eq!(status.winner(), None);
    }

    #[test]
    fn test_won_status() {
        let state = [0, 4, 1, 3, 2]
            .iter()
            .try_fold(new_game(), |state, &cell| apply_move(&state, cell))
            .unwrap();

        let status = describe(&state);
        assert_eq!(status, Status::Won { winner: Player::X });
        assert_eq!(status.to_string(), "Winner: X");
        assert_eq!(status.render(&Markers::emoji()), "Winner: ❌");
        assert_eq!(status.winner(), Some(Player::X));
    }
}
