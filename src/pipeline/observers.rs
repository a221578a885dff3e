//! Observers for the training pipeline

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    pipeline::summary::OutcomeSummary,
    ports::Observer,
    tictactoe::{GameOutcome, Player},
};

/// Progress bar observer - Shows training progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    tally: OutcomeSummary,
}

impl ProgressObserver {
    /// Create a progress observer counting wins for `perspective`
    pub fn new(perspective: Player) -> Self {
        Self {
            progress_bar: None,
            tally: OutcomeSummary::new(perspective),
        }
    }

    fn message(&self) -> String {
        format!(
            "W:{} D:{} L:{}",
            self.tally.wins, self.tally.draws, self.tally.losses
        )
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, outcome: GameOutcome) -> Result<()> {
        self.tally.record(outcome);
        if let Some(pb) = &self.progress_bar {
            pb.set_position(episode as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// Logs a win/draw/loss line for every block of `interval` episodes
pub struct LoggingObserver {
    interval: usize,
    block: OutcomeSummary,
}

impl LoggingObserver {
    pub fn new(perspective: Player, interval: usize) -> Self {
        Self {
            interval: interval.max(1),
            block: OutcomeSummary::new(perspective),
        }
    }
}

impl Observer for LoggingObserver {
    fn on_episode_end(&mut self, episode: usize, outcome: GameOutcome) -> Result<()> {
        self.block.record(outcome);
        if (episode + 1).is_multiple_of(self.interval) {
            log::info!(
                "episodes {:>7}-{:<7} win {:>5.1}% draw {:>5.1}% loss {:>5.1}%",
                episode + 1 - self.block.total_games,
                episode,
                self.block.win_rate() * 100.0,
                self.block.draw_rate() * 100.0,
                self.block.loss_rate() * 100.0,
            );
            self.block = OutcomeSummary::new(self.block.perspective);
        }
        Ok(())
    }
}
