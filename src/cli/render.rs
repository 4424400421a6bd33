//! Text rendering of the board for the console

use crate::tictactoe::GameState;

const DIVIDER: &str = "---+---+---   ---+---+---";

/// Render `state` as two boards side by side: the keypad key for each cell
/// on the left, the markers on the right. The top row is cells 6-8.
pub fn render_board(state: &GameState) -> String {
    let mut rows = Vec::with_capacity(3);
    for row in (0..3).rev() {
        let base = row * 3;
        let marker = |offset: usize| state.get(base + offset).to_char();
        rows.push(format!(
            " {} | {} | {}     {} | {} | {}",
            base + 1,
            base + 2,
            base + 3,
            marker(0),
            marker(1),
            marker(2),
        ));
    }
    format!("\n{}", rows.join(&format!("\n{DIVIDER}\n")))
}
