//! Board representation and immutable state snapshots

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Number of cells on the board, and therefore the size of the action space
pub const BOARD_CELLS: usize = 9;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// The live 3x3 grid owned by the game engine.
///
/// Only the engine mutates a board; everything else observes it through
/// [`State`] snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Get cell at position (0-8), `None` when out of range
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Check if a position holds no mark. Out-of-range positions are never empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        empty_positions(&self.cells)
    }

    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        LineAnalyzer::is_full(&self.cells)
    }

    /// Copy the current cells into an immutable snapshot
    pub fn snapshot(&self) -> State {
        State { cells: self.cells }
    }

    pub(crate) fn place(&mut self, pos: usize, player: Player) {
        self.cells[pos] = player.to_cell();
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [Cell::Empty; BOARD_CELLS];
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, &self.cells)
    }
}

/// Immutable, hashable snapshot of all nine cells.
///
/// Used as the lookup key of the value table. Two snapshots with the same
/// cells in the same order are equal and hash equally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    cells: [Cell; BOARD_CELLS],
}

impl State {
    /// Snapshot of the empty board
    pub fn empty() -> Self {
        Board::new().snapshot()
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    pub fn empty_positions(&self) -> Vec<usize> {
        empty_positions(&self.cells)
    }

    /// Compact single-line encoding, e.g. `XO.......`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl From<&Board> for State {
    fn from(board: &Board) -> Self {
        board.snapshot()
    }
}

impl FromStr for State {
    type Err = crate::Error;

    /// Parse nine cells, ignoring whitespace, so both `XO.......` and a
    /// three-line grid are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != BOARD_CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(State { cells })
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, &self.cells)
    }
}

fn empty_positions(cells: &[Cell; BOARD_CELLS]) -> Vec<usize> {
    cells
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Cell::Empty)
        .map(|(i, _)| i)
        .collect()
}

fn write_grid(f: &mut fmt::Formatter<'_>, cells: &[Cell; BOARD_CELLS]) -> fmt::Result {
    for (i, &cell) in cells.iter().enumerate() {
        write!(f, "{}", cell.to_char())?;
        if (i + 1).is_multiple_of(3) && i < 8 {
            writeln!(f)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert_eq!(board.empty_positions(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_out_of_range_is_not_empty() {
        let board = Board::new();
        assert_eq!(board.get(9), None);
        assert!(!board.is_empty(9));
    }

    #[test]
    fn test_snapshot_does_not_alias_board() {
        let mut board = Board::new();
        let before = board.snapshot();
        board.place(4, Player::X);

        assert_eq!(before.get(4), Some(Cell::Empty));
        assert_eq!(board.snapshot().get(4), Some(Cell::X));
    }

    #[test]
    fn test_equal_states_hash_equal() {
        let mut a = Board::new();
        let mut b = Board::new();
        a.place(0, Player::X);
        a.place(8, Player::O);
        b.place(8, Player::O);
        b.place(0, Player::X);

        let mut set = HashSet::new();
        set.insert(a.snapshot());
        set.insert(b.snapshot());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_parse_state() {
        let state: State = "XO.\n.X.\n..O".parse().unwrap();
        assert_eq!(state.encode(), "XO..X...O");
        assert_eq!(state.get(1), Some(Cell::O));
        assert_eq!(state.empty_positions(), vec![2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_parse_state_rejects_bad_input() {
        assert!(matches!(
            "XO".parse::<State>(),
            Err(crate::Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            "XO?......".parse::<State>(),
            Err(crate::Error::InvalidCellCharacter {
                character: '?',
                position: 2,
                ..
            })
        ));
        assert!(matches!(
            "X0.......".parse::<State>(),
            Err(crate::Error::InvalidCellCharacter {
                character: '0',
                position: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_display_grid() {
        let state: State = "XXO......".parse().unwrap();
        assert_eq!(state.to_string(), "XXO\n...\n...");
    }
}
