//! Winning line checks for the 3x3 grid

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has three in a row on any line
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// The player owning a complete line, if any.
    ///
    /// X is checked first. Boards reached through legal play never have two
    /// winners.
    pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
        [Player::X, Player::O]
            .into_iter()
            .find(|&player| Self::has_won(cells, player))
    }

    /// Whether every cell is occupied
    pub fn is_full(cells: &[Cell; 9]) -> bool {
        !cells.contains(&Cell::Empty)
    }
}
