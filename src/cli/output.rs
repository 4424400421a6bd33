//! Output formatting and progress bars for CLI

use std::io::{self, Write};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    menace::AgentStats,
    ports::Observer,
    tictactoe::{GameOutcome, GameRecord, Player},
};

/// Create a progress bar for training
pub fn create_training_progress(total_games: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
            .map_err(|e| crate::Error::ProgressBarTemplate {
                message: e.to_string(),
            })?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Write a section header
pub fn write_section(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(60))?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(60))
}

/// Write a key-value pair
pub fn write_kv(out: &mut impl Write, key: &str, value: &str) -> io::Result<()> {
    writeln!(out, "  {:20} {}", format!("{}:", key), value)
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Write what an agent has learned and how it has fared
pub fn write_agent_stats(out: &mut impl Write, label: &str, stats: &AgentStats) -> io::Result<()> {
    writeln!(out, "{label}")?;
    write_kv(out, "Boards learned", &format_number(stats.boards_learned))?;
    write_kv(
        out,
        "W/D/L",
        &format!("{}/{}/{}", stats.wins, stats.draws, stats.losses),
    )
}

/// Progress bar observer - shows training progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    first_wins: usize,
    draws: usize,
    second_wins: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            first_wins: 0,
            draws: 0,
            second_wins: 0,
        }
    }

    fn message(&self) -> String {
        format!(
            "X:{} D:{} O:{}",
            self.first_wins, self.draws, self.second_wins
        )
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_games: usize) -> Result<()> {
        self.progress_bar = Some(create_training_progress(total_games as u64)?);
        Ok(())
    }

    fn on_game_end(&mut self, record: &GameRecord) -> Result<()> {
        match record.outcome {
            GameOutcome::Win(Player::X) => self.first_wins += 1,
            GameOutcome::Win(Player::O) => self.second_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.inc(1);
            // redrawing the message every game slows long runs down
            if pb.position() % 1_000 == 0 {
                pb.set_message(self.message());
            }
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}
