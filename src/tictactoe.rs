//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BOARD_CELLS, Cell, GameState, Player};
pub use game::{GameOutcome, GameRecord, Move, play_game};
pub use lines::{LineAnalyzer, WINNING_LINES};
