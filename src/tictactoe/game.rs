//! Game engine: the rule-enforcing state machine

use serde::{Deserialize, Serialize};

use super::board::{BOARD_CELLS, Board, Player, State};
use crate::{Error, Result};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// Deterministic tic-tac-toe engine.
///
/// Owns the live [`Board`], the turn marker and the move history. X always
/// opens. Once a game is won or drawn, further moves are rejected with
/// [`Error::GameOver`] until [`Game::reset`] is called.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
    moves: Vec<Move>,
}

impl Game {
    /// The mark that opens every game
    pub const FIRST_PLAYER: Player = Player::X;

    /// Create a new game on an empty board
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            to_move: Self::FIRST_PLAYER,
            moves: Vec::with_capacity(BOARD_CELLS),
        }
    }

    /// Clear the board, hand the turn back to X and return the initial state
    pub fn reset(&mut self) -> State {
        self.board.clear();
        self.to_move = Self::FIRST_PLAYER;
        self.moves.clear();
        self.state()
    }

    /// Snapshot of the current board
    pub fn state(&self) -> State {
        self.board.snapshot()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark that moves next
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Moves played since the last reset, oldest first
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Indices of empty cells in ascending order. Empty when the board is full.
    pub fn available_actions(&self) -> Vec<usize> {
        self.board.empty_positions()
    }

    /// Place the current mark on `action` and pass the turn.
    ///
    /// Returns `Ok(false)` and leaves the game untouched when the cell is
    /// already occupied; the caller may pick another cell.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPosition`] if `action` is not in 0..9
    /// - [`Error::GameOver`] if the game has already been won or drawn
    #[must_use = "an occupied cell is reported as Ok(false) and must be handled"]
    pub fn apply_move(&mut self, action: usize) -> Result<bool> {
        if action >= BOARD_CELLS {
            return Err(Error::InvalidPosition { position: action });
        }
        if self.is_terminal() {
            return Err(Error::GameOver);
        }
        if !self.board.is_empty(action) {
            return Ok(false);
        }

        self.board.place(action, self.to_move);
        self.moves.push(Move {
            position: action,
            player: self.to_move,
        });
        self.to_move = self.to_move.opponent();
        Ok(true)
    }

    /// Whether `player` owns any complete row, column or diagonal
    pub fn is_winner(&self, player: Player) -> bool {
        self.board.has_won(player)
    }

    pub fn winner(&self) -> Option<Player> {
        self.board.winner()
    }

    /// Board full and nobody has a line
    pub fn is_draw(&self) -> bool {
        self.board.is_full() && self.winner().is_none()
    }

    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.board.is_full()
    }

    /// Outcome of the game, `None` while it is still in progress
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.winner() {
            Some(player) => Some(GameOutcome::Win(player)),
            None if self.board.is_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }

    /// Reward for `player` given the current board alone.
    ///
    /// +1 if `player` has a line, -1 if the opponent has one, 0 otherwise.
    /// Non-terminal positions and draws both score 0.
    pub fn reward(&self, player: Player) -> f64 {
        if self.is_winner(player) {
            1.0
        } else if self.is_winner(player.opponent()) {
            -1.0
        } else {
            0.0
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
