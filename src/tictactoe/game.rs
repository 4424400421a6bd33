//! Turn loop for a single game between two move providers

use serde::{Deserialize, Serialize};

use super::board::{GameState, Player};
use crate::ports::{MoveProvider, Observer};

/// What a move provider answers when asked to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Place the mover's marker on a cell (0-8)
    Place(usize),
    /// Give up; the opponent wins
    Resign,
}

impl Move {
    /// Numeric code for resignation
    pub const RESIGN_CODE: i32 = -1;

    /// The move as a plain integer: the cell index, or [`Move::RESIGN_CODE`].
    pub fn code(self) -> i32 {
        match self {
            Move::Place(position) => position as i32,
            Move::Resign => Self::RESIGN_CODE,
        }
    }
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            GameOutcome::Draw => None,
        }
    }
}

/// Summary of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    /// Markers placed before the game ended
    pub plies: usize,
    /// Set when the game ended because this player resigned
    pub resigned_by: Option<Player>,
}

/// Play one game. `first` plays X and moves first, `second` plays O.
///
/// Both providers get `start_game` before the first turn and exactly one
/// outcome report at the end. The observer sees every turn.
///
/// # Errors
///
/// Returns an error if a provider fails (e.g. console input closed) or
/// answers with an occupied or out-of-range cell.
pub fn play_game(
    first: &mut dyn MoveProvider,
    second: &mut dyn MoveProvider,
    observer: &mut dyn Observer,
) -> crate::Result<GameRecord> {
    let mut players: [&mut dyn MoveProvider; 2] = [first, second];
    for player in players.iter_mut() {
        player.start_game()?;
    }

    let mut state = GameState::new();
    observer.on_game_start(&state)?;

    let mut turn = 0;
    let mut marker = Player::X;
    let mut plies = 0;

    let record = loop {
        let other = 1 - turn;
        observer.on_turn(&state, marker, &*players[turn])?;

        match players[turn].choose_move(&state)? {
            Move::Resign => {
                observer.on_resign(marker)?;
                players[turn].report_loss()?;
                players[other].report_win()?;
                break GameRecord {
                    outcome: GameOutcome::Win(marker.opponent()),
                    plies,
                    resigned_by: Some(marker),
                };
            }
            Move::Place(position) => {
                if !state.is_valid_move(position) {
                    return Err(if position >= super::BOARD_CELLS {
                        crate::Error::InvalidPosition { position }
                    } else {
                        crate::Error::InvalidMove { position }
                    });
                }
                state.apply_move(position, marker);
                plies += 1;
                observer.on_move(&state, marker, position)?;

                if state.check_win() {
                    players[turn].report_win()?;
                    players[other].report_loss()?;
                    break GameRecord {
                        outcome: GameOutcome::Win(marker),
                        plies,
                        resigned_by: None,
                    };
                }
                if state.check_draw() {
                    players[turn].report_draw()?;
                    players[other].report_draw()?;
                    break GameRecord {
                        outcome: GameOutcome::Draw,
                        plies,
                        resigned_by: None,
                    };
                }
            }
        }

        turn = other;
        marker = marker.opponent();
    };

    observer.on_game_end(&record)?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::SilentObserver;

    /// Plays a fixed list of moves and remembers which report it got
    struct Scripted {
        moves: Vec<Move>,
        next: usize,
        started: usize,
        reports: Vec<&'static str>,
    }

    impl Scripted {
        fn new(moves: Vec<Move>) -> Self {
            Self {
                moves,
                next: 0,
                started: 0,
                reports: Vec::new(),
            }
        }
    }

    impl MoveProvider for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        fn start_game(&mut self) -> crate::Result<()> {
            self.started += 1;
            Ok(())
        }

        fn choose_move(&mut self, _state: &GameState) -> crate::Result<Move> {
            let mv = self.moves[self.next];
            self.next += 1;
            Ok(mv)
        }

        fn report_win(&mut self) -> crate::Result<()> {
            self.reports.push("win");
            Ok(())
        }

        fn report_draw(&mut self) -> crate::Result<()> {
            self.reports.push("draw");
            Ok(())
        }

        fn report_loss(&mut self) -> crate::Result<()> {
            self.reports.push("loss");
            Ok(())
        }
    }

    fn places(cells: &[usize]) -> Vec<Move> {
        cells.iter().map(|&c| Move::Place(c)).collect()
    }

    #[test]
    fn first_player_wins_on_bottom_row() {
        let mut x = Scripted::new(places(&[0, 1, 2]));
        let mut o = Scripted::new(places(&[3, 4]));
        let record = play_game(&mut x, &mut o, &mut SilentObserver).unwrap();

        assert_eq!(record.outcome, GameOutcome::Win(Player::X));
        assert_eq!(record.plies, 5);
        assert_eq!(record.resigned_by, None);
        assert_eq!(x.reports, vec!["win"]);
        assert_eq!(o.reports, vec!["loss"]);
        assert_eq!((x.started, o.started), (1, 1));
    }

    #[test]
    fn second_player_can_win() {
        let mut x = Scripted::new(places(&[0, 1, 8]));
        let mut o = Scripted::new(places(&[3, 4, 5]));
        let record = play_game(&mut x, &mut o, &mut SilentObserver).unwrap();

        assert_eq!(record.outcome, GameOutcome::Win(Player::O));
        assert_eq!(record.plies, 6);
        assert_eq!(o.reports, vec!["win"]);
        assert_eq!(x.reports, vec!["loss"]);
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        let mut x = Scripted::new(places(&[0, 2, 3, 7, 8]));
        let mut o = Scripted::new(places(&[1, 4, 5, 6]));
        let record = play_game(&mut x, &mut o, &mut SilentObserver).unwrap();

        assert_eq!(record.outcome, GameOutcome::Draw);
        assert_eq!(record.plies, 9);
        assert_eq!(x.reports, vec!["draw"]);
        assert_eq!(o.reports, vec!["draw"]);
    }

    #[test]
    fn resignation_hands_the_game_to_the_opponent() {
        let mut x = Scripted::new(places(&[4]));
        let mut o = Scripted::new(vec![Move::Resign]);
        let record = play_game(&mut x, &mut o, &mut SilentObserver).unwrap();

        assert_eq!(record.outcome, GameOutcome::Win(Player::X));
        assert_eq!(record.resigned_by, Some(Player::O));
        assert_eq!(record.plies, 1);
        assert_eq!(o.reports, vec!["loss"]);
        assert_eq!(x.reports, vec!["win"]);
    }

    #[test]
    fn occupied_cell_is_rejected() {
        let mut x = Scripted::new(places(&[4]));
        let mut o = Scripted::new(places(&[4]));
        let err = play_game(&mut x, &mut o, &mut SilentObserver).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidMove { position: 4 }));

        let mut x = Scripted::new(places(&[9]));
        let mut o = Scripted::new(Vec::new());
        let err = play_game(&mut x, &mut o, &mut SilentObserver).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidPosition { position: 9 }));
    }

    #[test]
    fn resign_code_is_minus_one() {
        assert_eq!(Move::Resign.code(), -1);
        assert_eq!(Move::Place(7).code(), 7);
    }
}
