//! Tabular Q-learning agent
//!
//! The agent owns its Q-table exclusively and learns from every transition it
//! is shown, scoring each one from the perspective of its own mark.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    ports::Learner,
    q_learning::q_table::QTable,
    tictactoe::{BOARD_CELLS, Game, Player, State},
};

/// Hyperparameters fixed at agent construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Step size α toward the TD target
    pub learning_rate: f64,
    /// Weight γ on the projected future value
    pub discount_factor: f64,
    /// Probability ε of a uniformly random action
    pub exploration_rate: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            discount_factor: 0.9,
            exploration_rate: 0.1,
        }
    }
}

impl AgentConfig {
    /// Check that every parameter is finite and in range.
    ///
    /// α must be in (0, 1]; γ and ε in [0, 1].
    pub fn validate(&self) -> Result<()> {
        let check = |name: &str, value: f64, lower_open: bool| -> Result<()> {
            let lower_ok = if lower_open { value > 0.0 } else { value >= 0.0 };
            if value.is_finite() && lower_ok && value <= 1.0 {
                Ok(())
            } else {
                let range = if lower_open { "(0, 1]" } else { "[0, 1]" };
                Err(Error::InvalidConfiguration {
                    message: format!("{name} must be in {range}, got {value}"),
                })
            }
        };

        check("learning_rate", self.learning_rate, true)?;
        check("discount_factor", self.discount_factor, false)?;
        check("exploration_rate", self.exploration_rate, false)
    }
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// ε-greedy Q-learning agent with a TD(0) update
#[derive(Debug, Clone)]
pub struct QLearningAgent {
    player: Player,
    config: AgentConfig,
    q_table: QTable,
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl QLearningAgent {
    /// Create an agent that scores transitions for `player`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `config` fails validation.
    pub fn new(player: Player, config: AgentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            player,
            config,
            q_table: QTable::new(config.learning_rate, config.discount_factor),
            rng: build_rng(None),
            rng_seed: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        self
    }

    /// The mark whose rewards this agent learns from
    pub fn player(&self) -> Player {
        self.player
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Number of (state, action) entries learned so far
    pub fn table_size(&self) -> usize {
        self.q_table.size()
    }

    /// Current estimate for `action` in `state`, 0.0 if never updated
    pub fn value_of(&self, state: &State, action: usize) -> f64 {
        self.q_table.get(state, action)
    }

    /// ε-greedy action selection with a uniform tie-break among the best.
    ///
    /// # Errors
    ///
    /// - [`Error::NoValidMoves`] if `available_actions` is empty
    /// - [`Error::InvalidPosition`] if any candidate is outside 0..9
    pub fn choose_action(&mut self, state: &State, available_actions: &[usize]) -> Result<usize> {
        if available_actions.is_empty() {
            return Err(Error::NoValidMoves);
        }
        if let Some(&position) = available_actions.iter().find(|&&a| a >= BOARD_CELLS) {
            return Err(Error::InvalidPosition { position });
        }

        let candidates = if self.rng.random::<f64>() < self.config.exploration_rate {
            available_actions.to_vec()
        } else {
            self.q_table.greedy_actions(state, available_actions)
        };

        candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoValidMoves)
    }

    /// Nudge Q(state, action) toward `reward + γ · max_a Q(next_state, a)`.
    ///
    /// The bootstrap maximum runs over all nine cells, including ones that
    /// are occupied in `next_state`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `action` is outside 0..9; the
    /// table is left untouched.
    pub fn update_value(
        &mut self,
        state: &State,
        action: usize,
        reward: f64,
        next_state: &State,
    ) -> Result<()> {
        if action >= BOARD_CELLS {
            return Err(Error::InvalidPosition { position: action });
        }
        self.q_table.td_update(*state, action, reward, next_state);
        Ok(())
    }
}

impl Learner for QLearningAgent {
    fn select_move(&mut self, game: &Game) -> Result<usize> {
        self.choose_action(&game.state(), &game.available_actions())
    }

    fn name(&self) -> &str {
        "Q-Learning"
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        Ok(())
    }
}
