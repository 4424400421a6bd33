//! Observer port - hooks fired while games are played
//!
//! Observers keep rendering and progress reporting out of the driver and the
//! training loop.

use crate::{
    Result,
    ports::MoveProvider,
    tictactoe::{GameRecord, GameState, Player},
};

/// Observer trait for watching games and training runs
///
/// # Event Sequence
///
/// 1. `on_training_start(total_games)` - once, only when a training loop runs
/// 2. For each game:
///    - `on_game_start(state)`
///    - `on_turn(...)` before each move, then `on_move(...)` after it
///      (or `on_resign(...)` instead)
///    - `on_game_end(record)`
/// 3. `on_training_end()` - once, only when a training loop runs
///
/// Every method does nothing by default.
pub trait Observer {
    fn on_training_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    fn on_game_start(&mut self, _state: &GameState) -> Result<()> {
        Ok(())
    }

    /// Called before `mover` is asked for a move.
    fn on_turn(
        &mut self,
        _state: &GameState,
        _marker: Player,
        _mover: &dyn MoveProvider,
    ) -> Result<()> {
        Ok(())
    }

    /// Called after `marker` was placed on `position`; `state` includes it.
    fn on_move(&mut self, _state: &GameState, _marker: Player, _position: usize) -> Result<()> {
        Ok(())
    }

    fn on_resign(&mut self, _marker: Player) -> Result<()> {
        Ok(())
    }

    fn on_game_end(&mut self, _record: &GameRecord) -> Result<()> {
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl Observer for SilentObserver {}
