//! Human player reading moves from a console

use std::io::{self, BufRead, Write};

use crate::{
    Result,
    ports::MoveProvider,
    tictactoe::{GameState, Move},
};

/// A person at the keyboard.
///
/// Moves are typed as keypad keys 1-9 (see [`crate::cli::render`]); key `k`
/// is cell `k - 1`. Anything else is refused and asked for again.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            name: "Human".to_string(),
            input,
            output,
        }
    }

    /// Print `prompt` and read one line, without its line ending.
    ///
    /// # Errors
    /// Returns an `UnexpectedEof` IO error once input is exhausted.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}").map_err(|e| crate::Error::io("write prompt", e))?;
        self.output
            .flush()
            .map_err(|e| crate::Error::io("flush prompt", e))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| crate::Error::io("read input", e))?;
        if read == 0 {
            return Err(crate::Error::io(
                "read input",
                io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"),
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Print a line of text
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").map_err(|e| crate::Error::io("write output", e))
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    fn cell_for_key(state: &GameState, text: &str) -> Option<usize> {
        let key: i64 = text.trim().parse().ok()?;
        let cell = key.checked_sub(1)?;
        if state.is_valid_move(cell) {
            usize::try_from(cell).ok()
        } else {
            None
        }
    }
}

impl<R: BufRead, W: Write> MoveProvider for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn start_game(&mut self) -> Result<()> {
        self.say("Get ready!")
    }

    fn choose_move(&mut self, state: &GameState) -> Result<Move> {
        loop {
            let text = self.prompt_line("Make a move: ")?;
            match Self::cell_for_key(state, &text) {
                Some(cell) => return Ok(Move::Place(cell)),
                None => self.say("Not a valid move")?,
            }
        }
    }

    fn report_win(&mut self) -> Result<()> {
        self.say("You won!")
    }

    fn report_draw(&mut self) -> Result<()> {
        self.say("It's a draw.")
    }

    fn report_loss(&mut self) -> Result<()> {
        self.say("You lose.")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::tictactoe::Player;

    fn human(input: &str) -> HumanPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        HumanPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(player: &HumanPlayer<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(player.output.clone()).unwrap()
    }

    #[test]
    fn keypad_key_maps_to_cell() {
        let mut player = human("7\n");
        let mv = player.choose_move(&GameState::new()).unwrap();
        assert_eq!(mv, Move::Place(6));
        assert_eq!(printed(&player), "Make a move: ");
    }

    #[test]
    fn bad_input_is_asked_again() {
        let mut state = GameState::new();
        state.apply_move(4, Player::X);
        // text, zero, negative, out of range, occupied, then a good one
        let mut player = human("abc\n0\n-3\n10\n5\n1\n");
        let mv = player.choose_move(&state).unwrap();

        assert_eq!(mv, Move::Place(0));
        assert_eq!(printed(&player).matches("Not a valid move").count(), 5);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut player = human("");
        let err = player.choose_move(&GameState::new()).unwrap_err();
        match err {
            crate::Error::Io { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::UnexpectedEof)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn outcome_messages() {
        let mut player = human("");
        player.start_game().unwrap();
        player.report_win().unwrap();
        player.report_draw().unwrap();
        player.report_loss().unwrap();
        assert_eq!(
            printed(&player),
            "Get ready!\nYou won!\nIt's a draw.\nYou lose.\n"
        );
        assert_eq!(player.action_distribution(&GameState::new()), None);
    }

    #[test]
    fn prompt_line_strips_line_ending() {
        let mut player = human("y\r\n");
        assert_eq!(player.prompt_line("again? ").unwrap(), "y");
    }
}
