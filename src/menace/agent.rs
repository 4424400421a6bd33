//! MENACE agent that learns to play Tic-Tac-Toe from game outcomes.

use std::collections::{HashMap, hash_map::Entry};

use log::{debug, warn};
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use super::matchbox::{DRAW_BEADS, Distribution, Matchbox, WIN_BEADS};
use crate::{
    ports::MoveProvider,
    tictactoe::{GameState, Move},
};

/// Running game results for one agent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounters {
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

/// Statistics about a MENACE agent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentStats {
    /// Distinct states the agent has opened a box for
    pub boards_learned: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

/// MENACE learning agent
///
/// Keeps one [`Matchbox`] per board key it has been asked to move from,
/// plus the `(key, move)` pairs it played in the current game. Outcome
/// reports feed those pairs back into the boxes.
pub struct MenaceAgent {
    name: String,
    boxes: HashMap<String, Matchbox>,
    history: Vec<(String, usize)>,
    record: OutcomeCounters,
    rng: StdRng,
}

impl std::fmt::Debug for MenaceAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenaceAgent")
            .field("name", &self.name)
            .field("boxes", &self.boxes.len())
            .field("history", &self.history)
            .field("record", &self.record)
            .finish()
    }
}

impl MenaceAgent {
    /// Create a new builder for constructing a MENACE agent.
    ///
    /// # Example
    /// ```
    /// use matchbox::menace::MenaceAgent;
    ///
    /// let agent = MenaceAgent::builder().name("first").seed(42).build();
    /// assert_eq!(agent.stats().boards_learned, 0);
    /// ```
    pub fn builder() -> super::builder::MenaceAgentBuilder {
        super::builder::MenaceAgentBuilder::new()
    }

    /// Create an agent with no boxes. `None` seeds from system entropy.
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_name("MENACE", seed)
    }

    pub fn with_name(name: impl Into<String>, seed: Option<u64>) -> Self {
        MenaceAgent {
            name: name.into(),
            boxes: HashMap::new(),
            history: Vec::new(),
            record: OutcomeCounters::default(),
            rng: Self::make_rng(seed),
        }
    }

    fn make_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        }
    }

    /// Set or reset the agent's RNG seed
    pub fn reseed(&mut self, seed: Option<u64>) {
        self.rng = Self::make_rng(seed);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Forget the previous game's moves. Call once before every game.
    pub fn start_game(&mut self) {
        self.history.clear();
    }

    /// Draw a move for `state` from its box.
    ///
    /// A box is filled the first time a state is seen, and refilled if
    /// losses emptied it. A state with no empty cell gives an empty box,
    /// and the agent resigns.
    pub fn choose_move(&mut self, state: &GameState) -> Move {
        let key = state.serialize();

        let matchbox = match self.boxes.entry(key.clone()) {
            Entry::Occupied(entry) => {
                let matchbox = entry.into_mut();
                if matchbox.is_empty() {
                    debug!("{}: restocking empty matchbox {key:?}", self.name);
                    *matchbox = Matchbox::stocked(state);
                }
                matchbox
            }
            Entry::Vacant(entry) => {
                debug!("{}: new matchbox {key:?}", self.name);
                entry.insert(Matchbox::stocked(state))
            }
        };

        match matchbox.sample(&mut self.rng) {
            Some(position) => {
                self.history.push((key, position));
                Move::Place(position)
            }
            None => {
                warn!("{}: no beads for {key:?}, resigning", self.name);
                Move::Resign
            }
        }
    }

    /// Add [`WIN_BEADS`] beads for every move played this game.
    pub fn report_win(&mut self) {
        for (key, position) in &self.history {
            if let Some(matchbox) = self.boxes.get_mut(key) {
                matchbox.add(*position, WIN_BEADS);
            }
        }
        self.record.wins += 1;
    }

    /// Add [`DRAW_BEADS`] bead for every move played this game.
    pub fn report_draw(&mut self) {
        for (key, position) in &self.history {
            if let Some(matchbox) = self.boxes.get_mut(key) {
                matchbox.add(*position, DRAW_BEADS);
            }
        }
        self.record.draws += 1;
    }

    /// Take beads out for every move played this game, see
    /// [`Matchbox::penalize`].
    pub fn report_loss(&mut self) {
        for (key, position) in &self.history {
            if let Some(matchbox) = self.boxes.get_mut(key) {
                matchbox.penalize(*position);
            }
        }
        self.record.losses += 1;
    }

    /// Get statistics about the agent
    pub fn stats(&self) -> AgentStats {
        AgentStats {
            boards_learned: self.boxes.len(),
            wins: self.record.wins,
            draws: self.record.draws,
            losses: self.record.losses,
        }
    }

    pub fn outcomes(&self) -> OutcomeCounters {
        self.record
    }

    /// Bead counts for `state`, or [`Distribution::NotSeen`] if no box was
    /// ever opened for it.
    pub fn action_distribution(&self, state: &GameState) -> Distribution {
        match self.boxes.get(&state.serialize()) {
            Some(matchbox) => Distribution::Seen(matchbox.counts()),
            None => Distribution::NotSeen,
        }
    }

    /// `(key, move)` pairs played since the last `start_game`
    pub fn move_history(&self) -> &[(String, usize)] {
        &self.history
    }

    pub fn matchbox(&self, key: &str) -> Option<&Matchbox> {
        self.boxes.get(key)
    }
}

impl MoveProvider for MenaceAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn start_game(&mut self) -> crate::Result<()> {
        MenaceAgent::start_game(self);
        Ok(())
    }

    fn choose_move(&mut self, state: &GameState) -> crate::Result<Move> {
        Ok(MenaceAgent::choose_move(self, state))
    }

    fn report_win(&mut self) -> crate::Result<()> {
        MenaceAgent::report_win(self);
        Ok(())
    }

    fn report_draw(&mut self) -> crate::Result<()> {
        MenaceAgent::report_draw(self);
        Ok(())
    }

    fn report_loss(&mut self) -> crate::Result<()> {
        MenaceAgent::report_loss(self);
        Ok(())
    }

    fn action_distribution(&self, state: &GameState) -> Option<Distribution> {
        Some(MenaceAgent::action_distribution(self, state))
    }
}
