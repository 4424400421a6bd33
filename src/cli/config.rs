//! Settings for an interactive session

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::menace::{Difficulty, TrainingConfig};

/// Configuration for `matchbox play`, optionally read from a JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Training length; asked for interactively when absent
    pub difficulty: Option<Difficulty>,

    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Print the agent's bead counts before each of its moves
    pub show_pools: bool,

    /// Whether to show a progress bar while training
    pub progress: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            difficulty: None,
            seed: None,
            show_pools: true,
            progress: true,
        }
    }
}

impl PlayConfig {
    /// Read a configuration file. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| crate::Error::io(format!("read config {}", path.display()), e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn training(&self, difficulty: Difficulty) -> TrainingConfig {
        TrainingConfig::from_difficulty(difficulty).with_seed(self.seed)
    }
}
