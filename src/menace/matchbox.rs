//! Matchbox implementation for MENACE

use std::collections::BTreeMap;

use rand::{Rng, prelude::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::tictactoe::GameState;

/// Copies of a move added to its box after a win
pub const WIN_BEADS: usize = 4;
/// Copies of a move added to its box after a draw
pub const DRAW_BEADS: usize = 1;
/// Most copies of a move taken out of its box after a loss
pub const LOSS_BEADS: usize = 3;

/// The beads for one board state.
///
/// Each bead is a cell index; a move's weight is how many of its beads are in
/// the box. Sampling picks one bead uniformly, so weights stay exact integers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchbox {
    beads: Vec<usize>,
}

impl Matchbox {
    /// Fill a box for `state`: every empty cell, the whole list repeated
    /// [`Matchbox::initial_copies`] times.
    pub fn stocked(state: &GameState) -> Self {
        let legal = state.empty_positions();
        let copies = Self::initial_copies(legal.len());
        let mut beads = Vec::with_capacity(legal.len() * copies);
        for _ in 0..copies {
            beads.extend_from_slice(&legal);
        }
        Matchbox { beads }
    }

    /// Beads per move in a fresh box with `legal_moves` options.
    ///
    /// Early, wide-open positions get more beads so they explore for longer.
    pub fn initial_copies(legal_moves: usize) -> usize {
        (legal_moves + 2) / 2
    }

    pub fn beads(&self) -> &[usize] {
        &self.beads
    }

    pub fn len(&self) -> usize {
        self.beads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beads.is_empty()
    }

    /// Number of beads for `position`
    pub fn count(&self, position: usize) -> usize {
        self.beads.iter().filter(|&&bead| bead == position).count()
    }

    /// Draw a bead without removing it
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        self.beads.choose(rng).copied()
    }

    /// Append `copies` beads for `position`
    pub fn add(&mut self, position: usize, copies: usize) {
        self.beads.extend(std::iter::repeat_n(position, copies));
    }

    /// Take up to [`LOSS_BEADS`] beads for `position` out of the box, newest
    /// first. Returns how many were removed.
    ///
    /// The first removal always happens, even if it empties the box. Each
    /// further removal only happens while more than one bead is left.
    pub fn penalize(&mut self, position: usize) -> usize {
        let mut removed = 0;
        while removed < LOSS_BEADS {
            if removed > 0 && self.beads.len() <= 1 {
                break;
            }
            let Some(idx) = self.beads.iter().rposition(|&bead| bead == position) else {
                break;
            };
            self.beads.remove(idx);
            removed += 1;
        }
        removed
    }

    /// Bead count per move
    pub fn counts(&self) -> ActionCounts {
        let mut counts = BTreeMap::new();
        for &bead in &self.beads {
            *counts.entry(bead).or_insert(0) += 1;
        }
        ActionCounts(counts)
    }
}

/// Bead counts per move for one box
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCounts(BTreeMap<usize, usize>);

impl ActionCounts {
    pub fn get(&self, position: usize) -> usize {
        self.0.get(&position).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Moves in ascending cell order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().map(|(&pos, &count)| (pos, count))
    }

    /// Moves ordered by count, highest first; ties by cell index
    pub fn most_common(&self) -> Vec<(usize, usize)> {
        let mut items: Vec<(usize, usize)> = self.iter().collect();
        items.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        items
    }
}

/// What an agent knows about a state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Distribution {
    /// The agent never opened a box for this state
    NotSeen,
    Seen(ActionCounts),
}

impl Distribution {
    pub fn counts(&self) -> Option<&ActionCounts> {
        match self {
            Distribution::NotSeen => None,
            Distribution::Seen(counts) => Some(counts),
        }
    }
}
