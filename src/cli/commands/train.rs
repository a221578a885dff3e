//! Train command - self-play training with an optional validation match

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    cli::{
        config::RunConfig,
        output::{format_number, print_kv, print_section, print_summary},
    },
    pipeline::{
        LoggingObserver, OutcomeSummary, ProgressObserver, RandomLearner, TrainingPipeline,
        evaluate,
    },
    q_learning::QLearningAgent,
    tictactoe::Player,
};

#[derive(Debug, Serialize)]
struct TrainingSummaryFile {
    training: OutcomeSummary,
    validation: Option<OutcomeSummary>,
    table_entries: usize,
    config: RunConfig,
}

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "p1" => Ok(Player::X),
        "o" | "second" | "p2" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

fn sanitize_summary_path(raw: &Path) -> PathBuf {
    let mut normalized = raw.to_path_buf();
    let raw_str = raw.as_os_str().to_string_lossy();

    // Trailing separator or no file name means a directory target
    if raw_str.ends_with(std::path::MAIN_SEPARATOR) || normalized.file_name().is_none() {
        normalized.push("training_summary.json");
        return normalized;
    }

    match normalized.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => normalized,
        _ => {
            normalized.set_extension("json");
            normalized
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Train a Q-learning agent through self-play", allow_negative_numbers = true)]
pub struct TrainArgs {
    /// JSON run configuration; the flags below override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Number of self-play episodes
    #[arg(long, short = 'e')]
    pub episodes: Option<usize>,

    /// Learning rate (alpha)
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Discount factor (gamma)
    #[arg(long)]
    pub gamma: Option<f64>,

    /// Exploration rate (epsilon)
    #[arg(long)]
    pub epsilon: Option<f64>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Which mark the agent learns for (`x` or `o`)
    #[arg(long)]
    pub agent_player: Option<String>,

    /// Games against a random opponent after training (0 to skip)
    #[arg(long, short = 'g')]
    pub validation_games: Option<usize>,

    /// Write a JSON summary to this path (directories get training_summary.json)
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Log a win/draw/loss line every N episodes
    #[arg(long)]
    pub log_interval: Option<usize>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

/// Build the run configuration: defaults, then the config file, then flags
pub(crate) fn resolve_config(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<RunConfig> {
    let mut config = match config_path {
        Some(path) => RunConfig::load(path)
            .with_context(|| format!("loading run configuration from {}", path.display()))?,
        None => RunConfig::default(),
    };

    if let Some(episodes) = overrides.episodes {
        config.training.episodes = episodes;
    }
    if let Some(alpha) = overrides.alpha {
        config.agent.learning_rate = alpha;
    }
    if let Some(gamma) = overrides.gamma {
        config.agent.discount_factor = gamma;
    }
    if let Some(epsilon) = overrides.epsilon {
        config.agent.exploration_rate = epsilon;
    }
    if let Some(seed) = overrides.seed {
        config.training.seed = Some(seed);
        config.evaluation.seed = Some(seed.wrapping_add(1));
    }
    if let Some(ref value) = overrides.agent_player {
        let player = parse_player_token(value, "--agent-player")?;
        config.training.agent_player = player;
        config.evaluation.agent_player = player;
    }

    config.validate()?;
    Ok(config)
}

/// Flag values that take precedence over the run configuration
#[derive(Debug, Default)]
pub(crate) struct ConfigOverrides {
    pub episodes: Option<usize>,
    pub alpha: Option<f64>,
    pub gamma: Option<f64>,
    pub epsilon: Option<f64>,
    pub seed: Option<u64>,
    pub agent_player: Option<String>,
}

/// Create an agent from `config` and run self-play training on it
pub(crate) fn train_from_config(
    config: &RunConfig,
    progress: bool,
    log_interval: Option<usize>,
) -> Result<(QLearningAgent, OutcomeSummary)> {
    let player = config.training.agent_player;
    let mut agent = QLearningAgent::new(player, config.agent)?;

    let mut pipeline = TrainingPipeline::new(config.training.clone());
    if progress {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new(player)));
    }
    if let Some(interval) = log_interval {
        pipeline = pipeline.with_observer(Box::new(LoggingObserver::new(player, interval)));
    }

    let summary = pipeline.run(&mut agent)?;
    Ok((agent, summary))
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let overrides = ConfigOverrides {
        episodes: args.episodes,
        alpha: args.alpha,
        gamma: args.gamma,
        epsilon: args.epsilon,
        seed: args.seed,
        agent_player: args.agent_player.clone(),
    };
    let mut config = resolve_config(args.config.as_deref(), &overrides)?;
    if let Some(games) = args.validation_games {
        config.evaluation.games = games;
    }

    let (mut agent, training) = train_from_config(&config, !args.no_progress, args.log_interval)?;

    print_section("Training Results");
    print_summary(&training);
    print_kv("Table entries", &format_number(agent.table_size()));

    let validation = if config.evaluation.games > 0 {
        let mut opponent = RandomLearner::new("Random".to_string());
        let summary = evaluate(&mut agent, &mut opponent, &config.evaluation)?;

        print_section("Validation vs Random");
        print_summary(&summary);
        Some(summary)
    } else {
        None
    };

    if let Some(raw) = &args.summary {
        let path = sanitize_summary_path(raw);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating summary directory {}", parent.display()))?;
        }

        let file = File::create(&path)
            .with_context(|| format!("creating summary file {}", path.display()))?;
        to_writer_pretty(
            file,
            &TrainingSummaryFile {
                training,
                validation,
                table_entries: agent.table_size(),
                config,
            },
        )?;
        log::info!("wrote training summary to {}", path.display());
    }

    Ok(())
}
