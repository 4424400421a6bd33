//! Builder for MenaceAgent construction

use super::agent::MenaceAgent;

/// Builder for constructing MenaceAgent instances with custom configuration.
///
/// # Examples
///
/// ```
/// use matchbox::menace::builder::MenaceAgentBuilder;
///
/// // Defaults: named "MENACE", seeded from system entropy
/// let agent = MenaceAgentBuilder::new().build();
///
/// // Reproducible agent with its own name
/// let agent = MenaceAgentBuilder::new().name("second").seed(42).build();
/// assert_eq!(agent.name(), "second");
/// ```
#[derive(Debug, Clone)]
pub struct MenaceAgentBuilder {
    name: String,
    seed: Option<u64>,
}

impl MenaceAgentBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name shown in console output and logs.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the random seed for deterministic behavior.
    ///
    /// # Arguments
    /// * `seed` - The seed value for the random number generator
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set or clear the random seed.
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> MenaceAgent {
        MenaceAgent::with_name(self.name, self.seed)
    }
}

impl Default for MenaceAgentBuilder {
    fn default() -> Self {
        Self {
            name: "MENACE".to_string(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::GameState;

    #[test]
    fn seeded_builds_agree() {
        let mut a = MenaceAgentBuilder::new().seed(11).build();
        let mut b = MenaceAgentBuilder::new().maybe_seed(Some(11)).build();
        let state = GameState::new();
        for _ in 0..10 {
            assert_eq!(a.choose_move(&state), b.choose_move(&state));
        }
        assert_eq!(a.name(), "MENACE");
    }
}
