//! Move provider port - anything that can sit at the board

use crate::{
    Result,
    menace::Distribution,
    tictactoe::{GameState, Move},
};

/// A participant in a game.
///
/// The driver calls `start_game` once before the first turn, `choose_move`
/// whenever it is this participant's turn, and exactly one of the three
/// `report_*` methods when the game ends.
///
/// # Examples
///
/// ```no_run
/// use matchbox::{
///     menace::MenaceAgent,
///     ports::SilentObserver,
///     tictactoe::play_game,
/// };
///
/// let mut first = MenaceAgent::new(Some(1));
/// let mut second = MenaceAgent::new(Some(2));
/// let record = play_game(&mut first, &mut second, &mut SilentObserver)?;
/// println!("{:?}", record.outcome);
/// # Ok::<(), matchbox::Error>(())
/// ```
pub trait MoveProvider {
    /// Name used in console output and logs
    fn name(&self) -> &str;

    /// Prepare for a new game.
    fn start_game(&mut self) -> Result<()>;

    /// Pick a cell for the current state, or resign.
    ///
    /// A returned `Move::Place` must name an empty cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot produce a move at all
    /// (for example, the console input was closed).
    fn choose_move(&mut self, state: &GameState) -> Result<Move>;

    fn report_win(&mut self) -> Result<()>;

    fn report_draw(&mut self) -> Result<()>;

    fn report_loss(&mut self) -> Result<()>;

    /// Current action pool for `state`, for providers that keep one.
    ///
    /// # Default Implementation
    ///
    /// Returns `None`: the provider has no learned pools.
    fn action_distribution(&self, _state: &GameState) -> Option<Distribution> {
        None
    }
}
