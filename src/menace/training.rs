//! Self-play training for a pair of MENACE agents

use std::{fmt, str::FromStr};

use log::info;
use serde::{Deserialize, Serialize};

use super::agent::{AgentStats, MenaceAgent};
use crate::{
    ports::{Observer, SilentObserver},
    tictactoe::{GameOutcome, GameRecord, Player, play_game},
};

/// How long the agents practise before a human gets to play them:
/// `10^level` self-play games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Difficulty(u32);

impl Difficulty {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 6;

    /// # Errors
    /// Returns an error if `level` is outside `1..=6`.
    pub fn new(level: u32) -> crate::Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Difficulty(level))
        } else {
            Err(Self::invalid(level.to_string()))
        }
    }

    fn invalid(input: String) -> crate::Error {
        crate::Error::InvalidDifficulty {
            input,
            min: Self::MIN,
            max: Self::MAX,
        }
    }

    pub fn level(self) -> u32 {
        self.0
    }

    /// Number of self-play games for this level
    pub fn games(self) -> usize {
        10usize.pow(self.0)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty(3)
    }
}

impl TryFrom<u32> for Difficulty {
    type Error = crate::Error;

    fn try_from(level: u32) -> crate::Result<Self> {
        Self::new(level)
    }
}

impl From<Difficulty> for u32 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

impl FromStr for Difficulty {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        let trimmed = s.trim();
        let level = trimmed
            .parse::<u32>()
            .map_err(|_| Self::invalid(trimmed.to_string()))?;
        Self::new(level)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configuration for training session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Self-play games to run
    pub games: usize,
    /// Seed for the first agent; the second gets `seed + 1`
    pub seed: Option<u64>,
}

impl TrainingConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            games: difficulty.games(),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::default())
    }
}

/// Results from training, seen from the board: X is the first agent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingResults {
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
    pub resignations: usize,
}

impl TrainingResults {
    fn record(&mut self, record: &GameRecord) {
        match record.outcome {
            GameOutcome::Win(Player::X) => self.first_wins += 1,
            GameOutcome::Win(Player::O) => self.second_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
        if record.resigned_by.is_some() {
            self.resignations += 1;
        }
    }
}

/// Snapshot of a training run, suitable for writing out as JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub games_played: usize,
    pub results: TrainingResults,
    pub first: AgentStats,
    pub second: AgentStats,
}

/// Two agents and the games they have played against each other.
///
/// `first` always plays X and opens; `second` always plays O.
#[derive(Debug)]
pub struct TrainingSession {
    pub first: MenaceAgent,
    pub second: MenaceAgent,
    pub config: TrainingConfig,
    pub games_played: usize,
    pub results: TrainingResults,
}

impl TrainingSession {
    /// Create a session with two fresh agents named "first" and "second".
    pub fn new(config: TrainingConfig) -> Self {
        let first = MenaceAgent::builder()
            .name("first")
            .maybe_seed(config.seed)
            .build();
        let second = MenaceAgent::builder()
            .name("second")
            .maybe_seed(config.seed.map(|seed| seed.wrapping_add(1)))
            .build();
        Self::with_agents(first, second, config)
    }

    pub fn with_agents(first: MenaceAgent, second: MenaceAgent, config: TrainingConfig) -> Self {
        TrainingSession {
            first,
            second,
            config,
            games_played: 0,
            results: TrainingResults::default(),
        }
    }

    /// Run the configured number of games with nothing watching
    pub fn train(&mut self) -> crate::Result<()> {
        self.train_observed(&mut SilentObserver)
    }

    /// Run the configured number of games, reporting to `observer`
    pub fn train_observed(&mut self, observer: &mut dyn Observer) -> crate::Result<()> {
        let games = self.config.games;
        info!("self-play training: {games} games");
        observer.on_training_start(games)?;

        for _ in 0..games {
            let record = play_game(&mut self.first, &mut self.second, observer)?;
            self.results.record(&record);
            self.games_played += 1;
        }

        observer.on_training_end()?;
        info!(
            "self-play finished: first {} / draws {} / second {}, boards learned {} and {}",
            self.results.first_wins,
            self.results.draws,
            self.results.second_wins,
            self.first.stats().boards_learned,
            self.second.stats().boards_learned,
        );
        Ok(())
    }

    pub fn summary(&self) -> TrainingSummary {
        TrainingSummary {
            games_played: self.games_played,
            results: self.results,
            first: self.first.stats(),
            second: self.second.stats(),
        }
    }

    /// Hand the trained agents back, first then second
    pub fn into_agents(self) -> (MenaceAgent, MenaceAgent) {
        (self.first, self.second)
    }
}
