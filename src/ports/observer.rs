//! Observer port - hooks into the training loop
//!
//! Observers collect progress and metrics without the training loop knowing
//! about output formats.

use crate::{Result, tictactoe::GameOutcome};

/// Observer trait for monitoring training
///
/// # Event Sequence
///
/// 1. `on_training_start(total_episodes)` - once
/// 2. `on_episode_end(episode, outcome)` - after every episode
/// 3. `on_training_end()` - once
///
/// # Examples
///
/// ```no_run
/// use tictactoe_td::{ports::Observer, tictactoe::GameOutcome};
///
/// struct Counter {
///     episodes: usize,
/// }
///
/// impl Observer for Counter {
///     fn on_episode_end(
///         &mut self,
///         _episode: usize,
///         _outcome: GameOutcome,
///     ) -> tictactoe_td::Result<()> {
///         self.episodes += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called once before the first episode.
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each episode with its 0-based index and final outcome.
    fn on_episode_end(&mut self, _episode: usize, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    /// Called once after the last episode.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
