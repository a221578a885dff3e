//! Tic-Tac-Toe game engine

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BOARD_CELLS, Board, Cell, Player, State};
pub use game::{Game, GameOutcome, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
