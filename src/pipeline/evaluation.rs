//! Head-to-head matches between two learners

use serde::{Deserialize, Serialize};

use super::summary::OutcomeSummary;
use crate::{
    Error, Result,
    ports::Learner,
    tictactoe::{Game, GameOutcome, Player},
};

/// Evaluation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Number of evaluation games
    pub games: usize,

    /// Which mark the evaluated agent plays
    pub agent_player: Player,

    /// Random seed; the opponent receives `seed + 1`
    pub seed: Option<u64>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            games: 100,
            agent_player: Player::X,
            seed: None,
        }
    }
}

/// Play one game between `agent` and `opponent`, X always opening
pub fn play_game(
    agent: &mut dyn Learner,
    opponent: &mut dyn Learner,
    agent_player: Player,
) -> Result<GameOutcome> {
    let mut game = Game::new();

    while !game.is_terminal() {
        let learner: &mut dyn Learner = if game.current_player() == agent_player {
            &mut *agent
        } else {
            &mut *opponent
        };

        let position = learner.select_move(&game)?;
        if !game.apply_move(position)? {
            return Err(Error::LegalMoveRejected { position });
        }
    }

    game.outcome().ok_or(Error::NoValidMoves)
}

/// Play `config.games` games and tally them from the agent's side
pub fn evaluate(
    agent: &mut dyn Learner,
    opponent: &mut dyn Learner,
    config: &EvaluationConfig,
) -> Result<OutcomeSummary> {
    if let Some(seed) = config.seed {
        agent.set_rng_seed(seed)?;
        opponent.set_rng_seed(seed.wrapping_add(1))?;
    }

    log::info!(
        "evaluating {} as {} against {} over {} games",
        agent.name(),
        config.agent_player,
        opponent.name(),
        config.games,
    );

    let mut summary = OutcomeSummary::new(config.agent_player);
    for _ in 0..config.games {
        let outcome = play_game(agent, opponent, config.agent_player)?;
        log::debug!("evaluation game {} ended {:?}", summary.total_games, outcome);
        summary.record(outcome);
    }

    log::info!(
        "evaluation finished: win {:.1}%, draw {:.1}%, loss {:.1}%",
        summary.win_rate() * 100.0,
        summary.draw_rate() * 100.0,
        summary.loss_rate() * 100.0,
    );

    Ok(summary)
}
