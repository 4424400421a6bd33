//! Train command - headless self-play between two agents

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    cli::output::{ProgressObserver, format_number, write_agent_stats, write_kv, write_section},
    menace::{Difficulty, TrainingConfig, TrainingSession, TrainingSummary},
    ports::{Observer, SilentObserver},
};

#[derive(Debug, Serialize)]
struct TrainingSummaryFile {
    #[serde(flatten)]
    training: TrainingSummary,
    metadata: SummaryMetadata,
}

#[derive(Debug, Serialize)]
struct SummaryMetadata {
    difficulty: Option<u32>,
    seed: Option<u64>,
}

fn sanitize_summary_path(raw: &Path) -> PathBuf {
    let mut normalized = raw.to_path_buf();
    let raw_str = raw.as_os_str().to_string_lossy();

    // Treat trailing separators or missing filename as a directory target.
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
#[command(about = "Train two agents against each other without a human")]
pub struct TrainArgs {
    /// Difficulty level 1-6; trains for 10^level games
    #[arg(long, short = 'd', conflicts_with = "games")]
    pub difficulty: Option<Difficulty>,

    /// Exact number of self-play games
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}

impl TrainArgs {
    fn training_config(&self) -> TrainingConfig {
        let config = match self.games {
            Some(games) => TrainingConfig { games, seed: None },
            None => TrainingConfig::from_difficulty(self.difficulty.unwrap_or_default()),
        };
        config.with_seed(self.seed)
    }
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let config = args.training_config();
    let summary_spec = args.summary.as_ref().map(|raw| {
        let sanitized = sanitize_summary_path(raw);
        let normalized = sanitized != *raw;
        (sanitized, normalized)
    });

    let mut session = TrainingSession::new(config);
    let mut progress = ProgressObserver::new();
    let mut silent = SilentObserver;
    let observer: &mut dyn Observer = if args.no_progress {
        &mut silent
    } else {
        &mut progress
    };
    session
        .train_observed(observer)
        .context("self-play training failed")?;

    let summary = session.summary();
    let mut out = std::io::stdout().lock();
    write_section(&mut out, "Training Results")?;
    write_kv(&mut out, "Games", &format_number(summary.games_played))?;
    write_kv(
        &mut out,
        "First/Draw/Second",
        &format!(
            "{}/{}/{}",
            summary.results.first_wins, summary.results.draws, summary.results.second_wins
        ),
    )?;
    write_kv(
        &mut out,
        "Resignations",
        &summary.results.resignations.to_string(),
    )?;
    write_agent_stats(&mut out, "\nFirst player (X)", &summary.first)?;
    write_agent_stats(&mut out, "\nSecond player (O)", &summary.second)?;

    if let Some((summary_path, normalized)) = summary_spec {
        if normalized {
            writeln!(
                out,
                "\nNormalizing summary path to {}",
                summary_path.display()
            )?;
        }

        if let Some(parent) = summary_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let file = TrainingSummaryFile {
            training: summary,
            metadata: SummaryMetadata {
                difficulty: args.difficulty.map(Difficulty::level),
                seed: args.seed,
            },
        };

        let handle = File::create(&summary_path)
            .with_context(|| format!("failed to create {}", summary_path.display()))?;
        to_writer_pretty(handle, &file)?;
        writeln!(out, "\nSummary written to {}", summary_path.display())?;
    }

    Ok(())
}
