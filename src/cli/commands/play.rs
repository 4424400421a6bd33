//! Play command - train two agents, then play them at the console

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use crate::{
    cli::{
        config::PlayConfig,
        console::ConsoleObserver,
        human::HumanPlayer,
        output::{ProgressObserver, write_agent_stats},
    },
    menace::{Difficulty, TrainingSession},
    ports::{Observer, SilentObserver},
    tictactoe::play_game,
};

#[derive(Parser, Debug)]
#[command(about = "Train two agents, then play against them")]
pub struct PlayArgs {
    /// Difficulty level 1-6; asked for when omitted
    #[arg(long, short = 'd')]
    pub difficulty: Option<Difficulty>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file with session settings; flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Hide the training progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,

    /// Don't print the agent's bead counts before its moves
    #[arg(long, default_value_t = false)]
    pub hide_pools: bool,
}

impl PlayArgs {
    /// Settings from the config file (if any) with flags applied on top
    pub fn resolve(&self) -> crate::Result<PlayConfig> {
        let mut config = match &self.config {
            Some(path) => PlayConfig::load(path)?,
            None => PlayConfig::default(),
        };
        if self.difficulty.is_some() {
            config.difficulty = self.difficulty;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.no_progress {
            config.progress = false;
        }
        if self.hide_pools {
            config.show_pools = false;
        }
        Ok(config)
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.resolve().context("failed to load play configuration")?;
    let stdin = io::stdin();
    let mut human = HumanPlayer::new(stdin.lock(), io::stdout());
    let mut console = ConsoleObserver::new(io::stdout(), config.show_pools);
    run_session(&config, &mut human, &mut console)?;
    Ok(())
}

/// Ask until the human names a valid difficulty
fn ask_difficulty<R: BufRead, W: Write>(human: &mut HumanPlayer<R, W>) -> crate::Result<Difficulty> {
    loop {
        let answer = human.prompt_line(&format!(
            "Choose difficulty {}-{}: ",
            Difficulty::MIN,
            Difficulty::MAX
        ))?;
        match answer.parse::<Difficulty>() {
            Ok(difficulty) => return Ok(difficulty),
            Err(_) => human.say("Not a valid choice")?,
        }
    }
}

fn wants_another_round(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// One interactive session.
///
/// Trains a pair of agents for the chosen difficulty, shows what they
/// learned, then repeats two games against the human (agent first, then
/// human first) for as long as the human answers `y`.
///
/// # Errors
/// Fails if training fails or the console is closed.
pub fn run_session<R, W, V>(
    config: &PlayConfig,
    human: &mut HumanPlayer<R, W>,
    console: &mut ConsoleObserver<V>,
) -> crate::Result<()>
where
    R: BufRead,
    W: Write,
    V: Write,
{
    let difficulty = match config.difficulty {
        Some(difficulty) => difficulty,
        None => ask_difficulty(human)?,
    };

    let mut session = TrainingSession::new(config.training(difficulty));
    let mut progress = ProgressObserver::new();
    let mut silent = SilentObserver;
    let observer: &mut dyn Observer = if config.progress {
        &mut progress
    } else {
        &mut silent
    };
    session.train_observed(observer)?;

    let (mut goes_first, mut goes_second) = session.into_agents();
    let out = human.output_mut();
    write_agent_stats(out, "Agent playing first", &goes_first.stats())?;
    write_agent_stats(out, "Agent playing second", &goes_second.stats())?;

    let mut rounds = 0;
    loop {
        play_game(&mut goes_first, &mut *human, &mut *console)?;
        play_game(&mut *human, &mut goes_second, &mut *console)?;
        rounds += 1;

        let answer = human.prompt_line("Would you like to play again y/n?: ")?;
        if !wants_another_round(&answer) {
            break;
        }
    }

    info!("session over after {rounds} rounds");
    Ok(())
}
