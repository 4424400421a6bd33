//! Common test utilities for the matchbox test suite.

use std::collections::HashSet;

use matchbox::tictactoe::{GameState, Player};

/// Every state reachable by legal play from the empty board, including
/// finished ones. Play stops at a win or a full board.
pub fn reachable_states() -> Vec<GameState> {
    let mut seen = HashSet::new();
    let mut stack = vec![GameState::new()];
    let mut states = Vec::new();

    while let Some(state) = stack.pop() {
        if !seen.insert(state.serialize()) {
            continue;
        }
        states.push(state);
        if state.winner().is_some() || state.check_draw() {
            continue;
        }
        let mover = state.to_move();
        for pos in state.empty_positions() {
            let mut next = state;
            next.apply_move(pos, mover);
            stack.push(next);
        }
    }
    states
}

/// Play `moves` from an empty board, alternating from X
#[allow(dead_code)]
pub fn play(moves: &[usize]) -> GameState {
    let mut state = GameState::new();
    let mut player = Player::X;
    for &pos in moves {
        state.apply_move(pos, player);
        player = player.opponent();
    }
    state
}
