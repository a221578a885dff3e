//! Win/draw/loss tallies shared by training and evaluation

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    tictactoe::{GameOutcome, Player},
};

/// Outcome counts seen from one player's perspective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeSummary {
    /// Whose wins are counted as wins
    pub perspective: Player,

    /// Total games played
    pub total_games: usize,

    /// Number of wins
    pub wins: usize,

    /// Number of draws
    pub draws: usize,

    /// Number of losses
    pub losses: usize,
}

impl OutcomeSummary {
    /// Create an empty tally for `perspective`
    pub fn new(perspective: Player) -> Self {
        Self {
            perspective,
            total_games: 0,
            wins: 0,
            draws: 0,
            losses: 0,
        }
    }

    /// Count one finished game
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(winner) if winner == self.perspective => self.wins += 1,
            GameOutcome::Win(_) => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }
        self.total_games += 1;
    }

    pub fn win_rate(&self) -> f64 {
        self.rate(self.wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    pub fn loss_rate(&self) -> f64 {
        self.rate(self.losses)
    }

    fn rate(&self, count: usize) -> f64 {
        if self.total_games > 0 {
            count as f64 / self.total_games as f64
        } else {
            0.0
        }
    }

    /// Save summary to JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load summary from JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let summary = serde_json::from_reader(file)?;
        Ok(summary)
    }
}
