//! Move history: the ordered list of board snapshots.
//!
//! Entry 0 is always the empty board. Entry `i` is the board after the
//! `i`-th move, so consecutive entries differ in exactly one cell.
//!
//! Uses an `im` persistent vector, so cloning a history is O(1) and old
//! snapshots are shared between every game state that can see them.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::BoardSnapshot;
use super::player::{Cell, Player};
use crate::error::HistoryError;
use crate::rules::detect_winner;

/// Ordered board snapshots, one per move plus the starting board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vector<BoardSnapshot>", into = "Vector<BoardSnapshot>")]
pub struct MoveHistory {
    snapshots: Vector<BoardSnapshot>,
}

impl MoveHistory {
    /// Create a history holding only the empty starting board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshots: Vector::unit(BoardSnapshot::empty()),
        }
    }

    /// Number of entries, including the starting board.
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Get the snapshot at `step`.
    #[must_use]
    pub fn get(&self, step: usize) -> Option<&BoardSnapshot> {
        self.snapshots.get(step)
    }

    /// Get the most recent snapshot.
    #[must_use]
    pub fn latest(&self) -> &BoardSnapshot {
        // Never empty: construction and deserialization both guarantee an entry.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Iterate over snapshots from the starting board onward.
    pub fn iter(&self) -> impl Iterator<Item = &BoardSnapshot> {
        self.snapshots.iter()
    }

    /// Get the cell index played to reach `step`.
    ///
    /// Returns `None` for step 0 (no move made yet) and for steps past
    /// the end.
    #[must_use]
    pub fn move_at(&self, step: usize) -> Option<usize> {
        let previous = self.get(step.checked_sub(1)?)?;
        self.get(step)?.changed_cell(previous)
    }

    /// Get the player whose marker was placed to reach `step`.
    #[must_use]
    pub fn player_at(&self, step: usize) -> Option<Player> {
        let cell = self.move_at(step)?;
        self.get(step)?[cell].player()
    }

    /// Keep the first `keep` entries and append `snapshot`.
    ///
    /// Returns a new history; `self` is unchanged and still shares its
    /// entries with the result.
    #[must_use]
    pub(crate) fn branch(&self, keep: usize, snapshot: BoardSnapshot) -> Self {
        let mut snapshots = self.snapshots.clone();
        snapshots.truncate(keep);
        snapshots.push_back(snapshot);
        Self { snapshots }
    }
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vector<BoardSnapshot>> for MoveHistory {
    type Error = HistoryError;

    fn try_from(snapshots: Vector<BoardSnapshot>) -> Result<Self, Self::Error> {
        let first = snapshots.front().ok_or(HistoryError::Empty)?;
        if *first != BoardSnapshot::empty() {
            return Err(HistoryError::NotStartingEmpty);
        }

        let mut last_player = None;
        for step in 1..snapshots.len() {
            let previous = &snapshots[step - 1];
            let cell = snapshots[step]
                .changed_cell(previous)
                .ok_or(HistoryError::InvalidStep { step })?;

            let player = match (previous[cell], snapshots[step][cell].player()) {
                (Cell::Empty, Some(player)) => player,
                _ => return Err(HistoryError::NotAPlacement { step, cell }),
            };
            if let Some(winner) = detect_winner(previous) {
                return Err(HistoryError::MoveAfterWin { step, winner });
            }
            if last_player == Some(player) {
                return Err(HistoryError::OutOfTurn { step, player });
            }
            last_player = Some(player);
        }

        Ok(Self { snapshots })
    }
}

impl From<MoveHistory> for Vector<BoardSnapshot> {
    fn from(history: MoveHistory) -> Self {
        history.snapshots
    }
}
