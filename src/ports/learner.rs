//! Learner port - abstraction over anything that picks moves
//!
//! The training and evaluation pipelines drive players through this trait,
//! so the Q-learning agent, baseline opponents and the interactive human
//! player are interchangeable.

use crate::{Result, tictactoe::Game};

/// Learner trait - unified interface for move selection
///
/// # Examples
///
/// ```no_run
/// use tictactoe_td::{ports::Learner, tictactoe::Game};
///
/// fn first_reply(learner: &mut dyn Learner) -> tictactoe_td::Result<usize> {
///     let game = Game::new();
///     learner.select_move(&game)
/// }
/// ```
pub trait Learner: Send {
    /// Select a move for the current position of `game`.
    ///
    /// The learner returns the position (0-8) where it wants to place the
    /// mark of [`Game::current_player`].
    ///
    /// # Errors
    ///
    /// Returns an error if no valid moves are available (full board).
    fn select_move(&mut self, game: &Game) -> Result<usize>;

    /// Get the learner's name, used in logs and summaries.
    fn name(&self) -> &str;

    /// Seed the learner's internal random number generator.
    ///
    /// Pipelines call this when given a deterministic seed. Learners without
    /// randomness can ignore it.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
