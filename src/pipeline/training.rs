//! Self-play training loop

use serde::{Deserialize, Serialize};

use super::summary::OutcomeSummary;
use crate::{
    Error, Result,
    ports::{Learner, Observer},
    q_learning::{AgentConfig, QLearningAgent},
    tictactoe::{Game, GameOutcome, Player},
};

/// Training configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Number of self-play episodes
    pub episodes: usize,

    /// Random seed applied to the agent before the first episode
    pub seed: Option<u64>,

    /// The mark whose rewards the agent learns from
    pub agent_player: Player,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 10_000,
            seed: None,
            agent_player: Player::X,
        }
    }
}

/// Drives a single agent through self-play episodes.
///
/// The agent picks the move for both marks. Every transition is fed back
/// with the reward of the agent's own mark, so it learns from its moves and
/// from the replies it makes on the other side of the board.
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Run every configured episode and return the tally from the agent's side
    pub fn run(&mut self, agent: &mut QLearningAgent) -> Result<OutcomeSummary> {
        if let Some(seed) = self.config.seed {
            agent.set_rng_seed(seed)?;
        }

        log::info!(
            "training {} for {} episodes as {} (alpha={}, gamma={}, epsilon={})",
            agent.name(),
            self.config.episodes,
            agent.player(),
            agent.config().learning_rate,
            agent.config().discount_factor,
            agent.config().exploration_rate,
        );

        for observer in &mut self.observers {
            observer.on_training_start(self.config.episodes)?;
        }

        let mut summary = OutcomeSummary::new(agent.player());
        let mut game = Game::new();

        for episode in 0..self.config.episodes {
            let outcome = Self::play_episode(&mut game, agent)?;
            summary.record(outcome);

            for observer in &mut self.observers {
                observer.on_episode_end(episode, outcome)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        log::info!(
            "training finished: {} episodes, {} table entries, W/D/L {}/{}/{}",
            summary.total_games,
            agent.table_size(),
            summary.wins,
            summary.draws,
            summary.losses,
        );

        Ok(summary)
    }

    /// Play one episode from an empty board, updating after every move
    fn play_episode(game: &mut Game, agent: &mut QLearningAgent) -> Result<GameOutcome> {
        let mut state = game.reset();

        while !game.is_terminal() {
            let actions = game.available_actions();
            let action = agent.choose_action(&state, &actions)?;
            if !game.apply_move(action)? {
                return Err(Error::LegalMoveRejected { position: action });
            }

            let reward = game.reward(agent.player());
            let next_state = game.state();
            agent.update_value(&state, action, reward, &next_state)?;
            state = next_state;
        }

        game.outcome().ok_or(Error::NoValidMoves)
    }
}

/// Build an agent from `agent_config` and train it with `training`.
///
/// Returns the trained agent together with the training tally.
pub fn train_agent(
    agent_config: AgentConfig,
    training: TrainingConfig,
) -> Result<(QLearningAgent, OutcomeSummary)> {
    let mut agent = QLearningAgent::new(training.agent_player, agent_config)?;
    let summary = TrainingPipeline::new(training).run(&mut agent)?;
    Ok((agent, summary))
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::tictactoe::State;

    struct CountingObserver {
        started: Arc<AtomicUsize>,
        episodes: Arc<AtomicUsize>,
        finished: Arc<AtomicUsize>,
    }

    impl Observer for CountingObserver {
        fn on_training_start(&mut self, total: usize) -> Result<()> {
            self.started.store(total, Ordering::SeqCst);
            Ok(())
        }

        fn on_episode_end(&mut self, _episode: usize, _outcome: GameOutcome) -> Result<()> {
            self.episodes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_training_end(&mut self) -> Result<()> {
            self.finished.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_training_pipeline() {
        let config = TrainingConfig {
            episodes: 25,
            seed: Some(42),
            ..TrainingConfig::default()
        };
        let (agent, summary) = train_agent(AgentConfig::default(), config).unwrap();

        assert_eq!(summary.total_games, 25);
        assert_eq!(summary.wins + summary.draws + summary.losses, 25);
        assert!(agent.table_size() > 0);
        assert_eq!(agent.rng_seed(), Some(42));
    }

    #[test]
    fn test_observers_see_every_episode() {
        let started = Arc::new(AtomicUsize::new(0));
        let episodes = Arc::new(AtomicUsize::new(0));
        let finished = Arc::new(AtomicUsize::new(0));

        let mut pipeline = TrainingPipeline::new(TrainingConfig {
            episodes: 12,
            seed: Some(1),
            ..TrainingConfig::default()
        })
        .with_observer(Box::new(CountingObserver {
            started: Arc::clone(&started),
            episodes: Arc::clone(&episodes),
            finished: Arc::clone(&finished),
        }));

        let mut agent = QLearningAgent::new(Player::X, AgentConfig::default()).unwrap();
        pipeline.run(&mut agent).unwrap();

        assert_eq!(started.load(Ordering::SeqCst), 12);
        assert_eq!(episodes.load(Ordering::SeqCst), 12);
        assert_eq!(finished.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_opponent_win_is_scored_against_the_agent() {
        let mut agent = QLearningAgent::new(
            Player::X,
            AgentConfig {
                exploration_rate: 0.0,
                ..AgentConfig::default()
            },
        )
        .unwrap()
        .with_seed(3);

        // X: 0, 1, 8   O: 3, 4, 5 completes the middle row
        let script: [(&str, usize); 6] = [
            (".........", 0),
            ("X........", 3),
            ("X..O.....", 1),
            ("XX.O.....", 4),
            ("XX.OO....", 8),
            ("XX.OO...X", 5),
        ];
        for (cells, action) in script {
            let state: State = cells.parse().unwrap();
            agent
                .update_value(&state, action, 1.0, &State::empty())
                .unwrap();
        }

        let last: State = "XX.OO...X".parse().unwrap();
        let before = agent.value_of(&last, 5);
        assert!(before > 0.0);

        let mut game = Game::new();
        let outcome = TrainingPipeline::play_episode(&mut game, &mut agent).unwrap();

        assert_eq!(outcome, GameOutcome::Win(Player::O));
        let after = agent.value_of(&last, 5);
        // before + 0.1 * (-1 + 0.9 * 0 - before)
        assert!((after - (0.9 * before - 0.1)).abs() < 1e-12);
        assert!(after < 0.0);
    }

    #[test]
    fn test_zero_episodes_learns_nothing() {
        let config = TrainingConfig {
            episodes: 0,
            ..TrainingConfig::default()
        };
        let (agent, summary) = train_agent(AgentConfig::default(), config).unwrap();

        assert_eq!(summary.total_games, 0);
        assert_eq!(agent.table_size(), 0);
    }

    #[test]
    fn test_table_only_grows_across_runs() {
        let mut agent = QLearningAgent::new(Player::X, AgentConfig::default()).unwrap();
        let config = TrainingConfig {
            episodes: 20,
            seed: Some(7),
            ..TrainingConfig::default()
        };

        TrainingPipeline::new(config.clone()).run(&mut agent).unwrap();
        let after_first = agent.table_size();
        TrainingPipeline::new(config).run(&mut agent).unwrap();

        assert!(after_first > 0);
        assert!(agent.table_size() >= after_first);
    }
}
