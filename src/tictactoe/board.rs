//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of cells on the board
pub const BOARD_CELLS: usize = 9;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Character used for this cell in state keys
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            ' ' | '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player's marker. X always opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// The nine cells of a game in progress.
///
/// Cells are indexed 0-8 row by row from the bottom-left, matching the
/// numeric keypad layout used by the console (key `k` is cell `k - 1`).
/// A state reached through play always holds as many X as O, or one more X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    cells: [Cell; BOARD_CELLS],
}

impl GameState {
    /// Create an empty board
    pub fn new() -> Self {
        GameState {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// Parse a state from its 9-character key.
    ///
    /// Empty cells may be written as `' '` or `'.'`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not exactly 9 characters long, contains
    /// an unknown character, or has piece counts no game could produce.
    pub fn from_key(key: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = key.chars().collect();
        if chars.len() != BOARD_CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_CELLS,
                got: chars.len(),
                context: key.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: key.to_string(),
            })?;
        }

        let state = GameState { cells };
        let (x_count, o_count) = state.piece_counts();
        if x_count != o_count && x_count != o_count + 1 {
            return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
        }
        Ok(state)
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Check whether `index` names an empty cell.
    ///
    /// Accepts any integer type; negative or out-of-range values are simply
    /// not valid moves.
    pub fn is_valid_move<I: TryInto<usize>>(&self, index: I) -> bool {
        match index.try_into() {
            Ok(pos) => pos < BOARD_CELLS && self.is_empty(pos),
            Err(_) => false,
        }
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Count X and O pieces
    pub fn piece_counts(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(x, o), cell| match cell {
            Cell::X => (x + 1, o),
            Cell::O => (x, o + 1),
            Cell::Empty => (x, o),
        })
    }

    /// Marker that moves next, assuming X opened
    pub fn to_move(&self) -> Player {
        let (x, o) = self.piece_counts();
        if x > o { Player::O } else { Player::X }
    }

    /// Place `player`'s marker on `index`.
    ///
    /// The caller guarantees the move is valid.
    pub fn apply_move(&mut self, index: usize, player: Player) {
        debug_assert!(
            self.is_valid_move(index),
            "apply_move called with invalid position {index}"
        );
        self.cells[index] = player.to_cell();
    }

    /// Check whether any line holds three identical markers.
    ///
    /// Every line passes through cell 0, 4 or 8, so only lines anchored on an
    /// occupied one of those need comparing.
    pub fn check_win(&self) -> bool {
        let c = &self.cells;
        let same = |a: usize, b: usize, d: usize| c[a] == c[b] && c[b] == c[d];

        (c[0] != Cell::Empty && (same(0, 1, 2) || same(0, 3, 6) || same(0, 4, 8)))
            || (c[4] != Cell::Empty && (same(1, 4, 7) || same(3, 4, 5) || same(2, 4, 6)))
            || (c[8] != Cell::Empty && (same(2, 5, 8) || same(6, 7, 8)))
    }

    /// Check whether every cell is occupied
    pub fn check_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        super::lines::LineAnalyzer::winner(&self.cells)
    }

    /// Key used to look up learned state: one character per cell.
    pub fn serialize(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            let c = match cell {
                Cell::Empty => '.',
                other => other.to_char(),
            };
            write!(f, "{c}")?;
            if (i + 1) % 3 == 0 && i < BOARD_CELLS - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
