//! Observer that narrates a game on the console

use std::io::Write;

use super::render::render_board;
use crate::{
    Result,
    menace::{ActionCounts, Distribution},
    ports::{MoveProvider, Observer},
    tictactoe::{GameState, Player},
};

/// Prints each game as it is played: the board after every move and, when
/// `show_pools` is set, the bead counts an agent is about to draw from.
pub struct ConsoleObserver<W> {
    out: W,
    show_pools: bool,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W, show_pools: bool) -> Self {
        Self { out, show_pools }
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}").map_err(|e| crate::Error::io("write game output", e))
    }
}

/// Bead counts as keypad keys, most beads first
fn describe_counts(counts: &ActionCounts) -> String {
    counts
        .most_common()
        .into_iter()
        .map(|(cell, beads)| format!("{}:{beads}", cell + 1))
        .collect::<Vec<_>>()
        .join(" ")
}

impl<W: Write> Observer for ConsoleObserver<W> {
    fn on_game_start(&mut self, state: &GameState) -> Result<()> {
        self.line("\n\nStarting a new game!")?;
        self.line(&render_board(state))
    }

    fn on_turn(&mut self, state: &GameState, _marker: Player, mover: &dyn MoveProvider) -> Result<()> {
        if !self.show_pools {
            return Ok(());
        }
        match mover.action_distribution(state) {
            Some(Distribution::Seen(counts)) => {
                let text = format!("Stats for this board: {}", describe_counts(&counts));
                self.line(&text)
            }
            Some(Distribution::NotSeen) => self.line("Never seen this board before."),
            None => Ok(()),
        }
    }

    fn on_move(&mut self, state: &GameState, _marker: Player, _position: usize) -> Result<()> {
        self.line(&render_board(state))
    }

    fn on_resign(&mut self, _marker: Player) -> Result<()> {
        self.line("Player resigns")
    }
}
