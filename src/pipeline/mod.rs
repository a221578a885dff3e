//! Training and evaluation pipelines
//!
//! - [`TrainingPipeline`] runs self-play episodes for a Q-learning agent
//! - [`evaluate`] plays a trained agent against another [`Learner`]
//! - Observers report progress while training runs

pub mod comparison;
pub mod evaluation;
pub mod observers;
pub mod summary;
pub mod training;

pub use comparison::RandomLearner;
pub use evaluation::{EvaluationConfig, evaluate, play_game};
pub use observers::{LoggingObserver, ProgressObserver};
pub use summary::OutcomeSummary;
pub use training::{TrainingConfig, TrainingPipeline, train_agent};

pub use crate::ports::{Learner, Observer};
