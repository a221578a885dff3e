//! Play command - train an agent, then play it from the terminal
//!
//! This is the text presentation layer: it renders the board, collects a
//! position from the human and reports the result. All rules live in
//! [`Game`].

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Result, anyhow};
use clap::Parser;

use super::train::{ConfigOverrides, parse_player_token, resolve_config, train_from_config};
use crate::{
    Error,
    ports::Learner,
    tictactoe::{Game, GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Train an agent, then play against it")]
pub struct PlayArgs {
    /// JSON run configuration; the flags below override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Number of self-play episodes before the game
    #[arg(long, short = 'e')]
    pub episodes: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Which mark you play (`x` or `o`); X always moves first
    #[arg(long, default_value = "o")]
    pub human_player: String,

    /// Hide the training progress bar
    #[arg(long)]
    pub no_progress: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let human = parse_player_token(&args.human_player, "--human-player")?;
    let overrides = ConfigOverrides {
        episodes: args.episodes,
        seed: args.seed,
        agent_player: Some(human.opponent().to_string()),
        ..ConfigOverrides::default()
    };
    let config = resolve_config(args.config.as_deref(), &overrides)?;

    let (mut agent, _) = train_from_config(&config, !args.no_progress, None)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(&mut agent, human, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Run one interactive game between `agent` and a human typing positions.
///
/// Unparseable, out-of-range and occupied positions are reported and the
/// human is asked again.
pub fn play_session<R: BufRead, W: Write>(
    agent: &mut dyn Learner,
    human: Player,
    mut input: R,
    mut output: W,
) -> Result<GameOutcome> {
    let mut game = Game::new();
    writeln!(output, "Starting a game of Tic Tac Toe! You are {human}.")?;

    while !game.is_terminal() {
        writeln!(output, "\nCurrent Board:\n{}", game.board())?;

        let action = if game.current_player() == human {
            read_action(&mut input, &mut output)?
                .ok_or_else(|| anyhow!("input closed before the game finished"))?
        } else {
            let action = agent.select_move(&game)?;
            writeln!(output, "Agent chooses position {action}")?;
            action
        };

        match game.apply_move(action) {
            Ok(true) => {}
            Ok(false) => writeln!(output, "Invalid move. Try again.")?,
            Err(Error::InvalidPosition { .. }) => {
                writeln!(output, "Position must be between 0 and 8. Try again.")?
            }
            Err(err) => return Err(err.into()),
        }
    }

    writeln!(output, "\nFinal Board:\n{}", game.board())?;
    let outcome = game
        .outcome()
        .ok_or_else(|| anyhow!("game ended without an outcome"))?;
    match outcome {
        GameOutcome::Win(player) => writeln!(output, "{player} wins!")?,
        GameOutcome::Draw => writeln!(output, "It's a draw!")?,
    }

    Ok(outcome)
}

/// Prompt until a line parses as a number; `None` on end of input
fn read_action<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<usize>> {
    let mut line = String::new();
    loop {
        write!(output, "Your move (0-8): ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse::<usize>() {
            Ok(action) => return Ok(Some(action)),
            Err(_) => writeln!(output, "Please enter a number between 0 and 8.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    /// Always plays the highest free cell
    struct LastFree;

    impl Learner for LastFree {
        fn select_move(&mut self, game: &Game) -> crate::Result<usize> {
            game.available_actions()
                .last()
                .copied()
                .ok_or(Error::NoValidMoves)
        }

        fn name(&self) -> &str {
            "LastFree"
        }
    }

    fn run(human: Player, script: &str) -> (Result<GameOutcome>, String) {
        let mut output = Vec::new();
        let result = play_session(&mut LastFree, human, Cursor::new(script), &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_human_wins_top_row() {
        // Human X: 0, 1, 2; agent O: 8, 7
        let (result, output) = run(Player::X, "0\n1\n2\n");
        assert_eq!(result.unwrap(), GameOutcome::Win(Player::X));
        assert!(output.contains("Agent chooses position 8"));
        assert!(output.contains("X wins!"));
    }

    #[test]
    fn test_bad_input_is_reprompted() {
        // Agent X opens on 8; human retries after junk, range and occupied input
        let (result, output) = run(Player::O, "abc\n12\n8\n0\n1\n2\n3\n4\n5\n6\n");
        assert!(result.is_ok());
        assert!(output.contains("Please enter a number between 0 and 8."));
        assert!(output.contains("Position must be between 0 and 8. Try again."));
        assert!(output.contains("Invalid move. Try again."));
        assert!(output.contains("Final Board:"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (result, _) = run(Player::X, "");
        assert!(result.is_err());
    }
}
