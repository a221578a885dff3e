//! Tabular Q-learning
//!
//! A [`QTable`] stores one scalar estimate per (state, action) pair and an
//! [`QLearningAgent`] drives it with ε-greedy selection and a TD(0) update:
//!
//! ```text
//! Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
//! ```
//!
//! ## Usage Example
//!
//! ```
//! use tictactoe_td::q_learning::{AgentConfig, QLearningAgent};
//! use tictactoe_td::tictactoe::{Game, Player};
//!
//! let mut agent = QLearningAgent::new(Player::X, AgentConfig::default())
//!     .unwrap()
//!     .with_seed(42);
//! let mut game = Game::new();
//! let state = game.reset();
//! let action = agent.choose_action(&state, &game.available_actions()).unwrap();
//! assert!(game.apply_move(action).unwrap());
//! let reward = game.reward(agent.player());
//! agent.update_value(&state, action, reward, &game.state()).unwrap();
//! ```

pub mod agent;
pub mod q_table;

pub use agent::{AgentConfig, QLearningAgent};
pub use q_table::QTable;
