//! MENACE learning system
//!
//! Matchbox agents, and the self-play loop that trains them.

pub mod agent;
pub mod builder;
pub mod matchbox;
pub mod training;

// Re-export main types
pub use agent::{AgentStats, MenaceAgent, OutcomeCounters};
pub use builder::MenaceAgentBuilder;
pub use matchbox::{ActionCounts, DRAW_BEADS, Distribution, LOSS_BEADS, Matchbox, WIN_BEADS};
pub use training::{Difficulty, TrainingConfig, TrainingResults, TrainingSession, TrainingSummary};
