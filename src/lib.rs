//! Tabular temporal-difference learning for tic-tac-toe
//!
//! This crate provides:
//! - A deterministic tic-tac-toe engine with move validation and scoring
//! - An ε-greedy Q-learning agent with a sparse (state, action) value table
//! - A self-play training pipeline and evaluation matches against baselines
//! - A command-line interface for training and playing against the agent
//!
//! Nothing runs on load; training and play are started explicitly, either
//! through [`pipeline::train_agent`] or the `tictactoe-td` binary.

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod q_learning;
pub mod tictactoe;

pub use error::{Error, Result};
pub use pipeline::{OutcomeSummary, TrainingConfig, train_agent};
pub use q_learning::{AgentConfig, QLearningAgent};
pub use tictactoe::{Game, GameOutcome, Player, State};
