//! Exhaustive checks of the game rules over every reachable position

use std::collections::HashSet;

use matchbox::{
    menace::{MenaceAgent, TrainingConfig, TrainingSession},
    ports::SilentObserver,
    tictactoe::{GameOutcome, GameState, LineAnalyzer, play_game},
};

mod common;

#[test]
fn reachable_state_count_matches_known_total() {
    // 5478 legal positions, counting the empty board
    assert_eq!(common::reachable_states().len(), 5478);
}

#[test]
fn anchored_win_check_agrees_with_full_scan() {
    for state in common::reachable_states() {
        assert_eq!(
            state.check_win(),
            LineAnalyzer::has_any_line(state.cells()),
            "disagreement on {:?}",
            state.serialize()
        );
    }
}

#[test]
fn keys_are_unique_and_parse_back() {
    let states = common::reachable_states();
    let keys: HashSet<String> = states.iter().map(GameState::serialize).collect();
    assert_eq!(keys.len(), states.len());

    for state in &states {
        let key = state.serialize();
        assert_eq!(key.chars().count(), 9);
        assert_eq!(GameState::from_key(&key).unwrap(), *state);
    }
}

#[test]
fn at_most_one_player_has_a_line() {
    for state in common::reachable_states() {
        if let Some(winner) = state.winner() {
            let (x, o) = state.piece_counts();
            // the winner made the last move
            match winner {
                matchbox::tictactoe::Player::X => assert_eq!(x, o + 1),
                matchbox::tictactoe::Player::O => assert_eq!(x, o),
            }
        }
    }
}

#[test]
fn every_game_ends_within_nine_plies() {
    let mut first = MenaceAgent::new(Some(21));
    let mut second = MenaceAgent::new(Some(22));
    for _ in 0..500 {
        let record = play_game(&mut first, &mut second, &mut SilentObserver).unwrap();
        assert!(record.plies <= 9);
        match record.outcome {
            GameOutcome::Draw => assert_eq!(record.plies, 9),
            GameOutcome::Win(_) => assert!(record.plies >= 5 || record.resigned_by.is_some()),
        }
    }
}

#[test]
fn training_results_partition_the_games() {
    let mut session = TrainingSession::new(TrainingConfig {
        games: 1_000,
        seed: Some(7),
    });
    session.train().unwrap();
    let summary = session.summary();
    let results = summary.results;
    assert_eq!(
        results.first_wins + results.second_wins + results.draws,
        summary.games_played
    );
}
