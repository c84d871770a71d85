//! Game configuration types.
//!
//! - `GameConfig`: chosen once when a game starts; the opening player
//!   only shifts which side moves on even steps
//! - `Markers`: glyphs the presentation layer passes to `render` calls.
//!   They are not part of the game state.

use serde::{Deserialize, Serialize};

use super::player::{Cell, Player};

/// Glyphs used to render each kind of cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    /// Glyph for an `X` cell.
    pub x: String,
    /// Glyph for an `O` cell.
    pub o: String,
    /// Glyph for an empty cell.
    pub empty: String,
}

impl Markers {
    /// Plain ASCII markers: `X`, `O` and `.` for empty.
    #[must_use]
    pub fn ascii() -> Self {
        Self {
            x: "X".to_string(),
            o: "O".to_string(),
            empty: ".".to_string(),
        }
    }

    /// Emoji markers as shown in the browser version of the game.
    #[must_use]
    pub fn emoji() -> Self {
        Self {
            x: "❌".to_string(),
            o: "⭕️".to_string(),
            empty: "⬜".to_string(),
        }
    }

    /// Get the glyph for a cell.
    #[must_use]
    pub fn glyph(&self, cell: Cell) -> &str {
        match cell {
            Cell::Empty => &self.empty,
            Cell::X => &self.x,
            Cell::O => &self.o,
        }
    }

    /// Get the glyph for a player.
    #[must_use]
    pub fn player_glyph(&self, player: Player) -> &str {
        self.glyph(player.cell())
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::ascii()
    }
}

/// Configuration for starting a game.
///
/// ## Example
///
/// ```
/// use tic_tac_toe::core::{GameConfig, GameState, Player};
///
/// let config = GameConfig::new().with_first_player(Player::O);
/// let state = GameState::with_config(&config);
///
/// assert_eq!(state.active_player(), Player::O);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player who moves on step 0 (and every even step).
    pub first_player: Player,
}

impl GameConfig {
    /// Standard configuration: X opens.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opening player.
    #[must_use]
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: Player::X,
        }
    }
}
