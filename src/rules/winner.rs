//! Winner detection over the eight winning lines.

use serde::{Deserialize, Serialize};

use crate::core::{BoardSnapshot, Player};

/// Winning line indices, checked in this order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line and the player holding it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// The three cell indices of the line.
    pub cells: [usize; 3],
    /// The player whose marker fills the line.
    pub winner: Player,
}

/// Find the first completed line on the board.
///
/// Lines are checked rows first, then columns, then diagonals.
#[must_use]
pub fn winning_line(board: &BoardSnapshot) -> Option<WinningLine> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let winner = board[a].player()?;
        (board[a] == board[b] && board[a] == board[c]).then_some(WinningLine {
            cells: [a, b, c],
            winner,
        })
    })
}

/// Get the winner of the board, if any line is filled by one player.
///
/// ```
/// use tic_tac_toe::core::{BoardSnapshot, Player};
/// use tic_tac_toe::core::Cell::{Empty as E, O, X};
/// use tic_tac_toe::rules::detect_winner;
///
/// let board = BoardSnapshot::from_cells([X, X, X, O, O, E, E, E, E]);
/// assert_eq!(detect_winner(&board), Some(Player::X));
/// assert_eq!(detect_winner(&BoardSnapshot::empty()), None);
/// ```
#[must_use]
pub fn detect_winner(board: &BoardSnapshot) -> Option<Player> {
    winning_line(board).map(|line| line.winner)
}
