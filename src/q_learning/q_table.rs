//! Q-table implementation for temporal difference learning

use std::collections::HashMap;

use crate::tictactoe::{BOARD_CELLS, State};

/// Q-table mapping (state, action) pairs to Q-values
///
/// Unseen pairs read as 0.0. Entries are only created by [`QTable::set`] and
/// [`QTable::td_update`] and are never removed.
#[derive(Debug, Clone)]
pub struct QTable {
    /// Q-values: (state, action_position) -> Q-value
    q_values: HashMap<(State, usize), f64>,
    /// Learning rate α
    learning_rate: f64,
    /// Discount factor γ
    discount_factor: f64,
}

impl QTable {
    /// Create a new, empty Q-table
    pub fn new(learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            q_values: HashMap::new(),
            learning_rate,
            discount_factor,
        }
    }

    /// Get Q-value for a state-action pair
    pub fn get(&self, state: &State, action: usize) -> f64 {
        self.q_values
            .get(&(*state, action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Set Q-value for a state-action pair
    pub fn set(&mut self, state: State, action: usize, value: f64) {
        self.q_values.insert((state, action), value);
    }

    /// Maximum Q-value over every cell index of the board.
    ///
    /// Occupied cells are not excluded: they are never written, so they read
    /// as 0.0 and act as a floor on the bootstrap value.
    pub fn max_q(&self, state: &State) -> f64 {
        (0..BOARD_CELLS)
            .map(|action| self.get(state, action))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// All candidates whose Q-value equals the best among `candidates`
    pub fn greedy_actions(&self, state: &State, candidates: &[usize]) -> Vec<usize> {
        let values: Vec<f64> = candidates
            .iter()
            .map(|&action| self.get(state, action))
            .collect();
        let best = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        candidates
            .iter()
            .zip(values)
            .filter(|&(_, q)| q == best)
            .map(|(&action, _)| action)
            .collect()
    }

    /// TD(0) update toward `reward + γ · max_a Q(s', a)`
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
    pub fn td_update(&mut self, state: State, action: usize, reward: f64, next_state: &State) {
        let current_q = self.get(&state, action);
        let td_target = reward + self.discount_factor * self.max_q(next_state);
        let td_error = td_target - current_q;
        let new_q = current_q + self.learning_rate * td_error;
        self.set(state, action, new_q);
    }

    /// Get total number of Q-values stored
    pub fn size(&self) -> usize {
        self.q_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q_values.is_empty()
    }
}
