//! Exhaustive enumeration of the classic 3x3 game.

use tictactoe_lab::{
    Board, Side,
    config::GameConfig,
    tictactoe::{is_terminal, outcome_counts, reachable_states, regression_dataset},
};

#[test]
fn test_reachable_state_count() {
    let states = reachable_states(&Board::new(3), Side::PlayerOne, 3);
    assert_eq!(states.len(), 5477);
    assert!(states.iter().all(|(board, _)| board.occupied_count() > 0));
}

#[test]
fn test_side_to_move_matches_marks() {
    for (board, side) in reachable_states(&Board::new(3), Side::PlayerOne, 3) {
        let expected = if board.occupied_count() % 2 == 0 {
            Side::PlayerOne
        } else {
            Side::PlayerTwo
        };
        assert_eq!(side, expected, "wrong side to move on\n{board}");
    }
}

#[test]
fn test_complete_game_counts() {
    let tally = outcome_counts(&Board::new(3), Side::PlayerOne, 3);
    assert_eq!(tally.total(), 255_168);
    assert_eq!(tally.player_one_wins, 131_184);
    assert_eq!(tally.player_two_wins, 77_904);
    assert_eq!(tally.draws, 46_080);
}

#[test]
fn test_terminal_state_count() {
    let terminal = reachable_states(&Board::new(3), Side::PlayerOne, 3)
        .iter()
        .filter(|(board, _)| is_terminal(board, 3))
        .count();
    assert_eq!(terminal, 958);
}

#[test]
fn test_dataset_targets_from_correct_side() {
    let samples = regression_dataset(GameConfig::default(), Side::PlayerOne).unwrap();
    assert_eq!(samples.len(), 5477);

    // Centre opening: X then the side to move is player two.
    let centre = samples
        .iter()
        .find(|s| s.features == [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0])
        .unwrap();
    let expected = outcome_counts(
        &Board::from_values(&[0, 0, 0, 0, 1, 0, 0, 0, 0]).unwrap(),
        Side::PlayerTwo,
        3,
    )
    .mean_outcome();
    assert!((centre.target - expected).abs() < 1e-12);
    assert!(centre.target > 0.0);
}

#[test]
fn test_player_two_first() {
    let tally = outcome_counts(&Board::new(3), Side::PlayerTwo, 3);
    assert_eq!(tally.player_two_wins, 131_184);
    assert_eq!(tally.player_one_wins, 77_904);
}
