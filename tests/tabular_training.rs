//! Training the tabular agent through the pipeline.

mod common;

use common::board_3x3;
use tictactoe_lab::{
    Position, Side,
    config::{GameConfig, TabularConfig},
    pipeline::{SelfPlayPipeline, TrainingPipeline, train_tabular},
    players::RandomStrategy,
    ports::Strategy,
    q_learning::QLearningAgent,
};

#[test]
fn test_learned_win_becomes_greedy_choice() {
    // O O .
    // X X .
    // . . .
    let board = board_3x3([[-1, -1, 0], [1, 1, 0], [0, 0, 0]]);
    let mut agent = QLearningAgent::new(TabularConfig::default().with_q_init(0.0), 3);

    assert_eq!(
        agent.select_move(&board, Side::PlayerOne).unwrap(),
        Position::new(0, 2)
    );
    agent
        .learn(&board, Position::new(1, 2), Side::PlayerOne)
        .unwrap();
    assert_eq!(
        agent.select_move(&board, Side::PlayerOne).unwrap(),
        Position::new(1, 2)
    );
}

#[test]
fn test_values_stay_between_zero_and_one() {
    let config = GameConfig::default();
    let mut agent = QLearningAgent::new(TabularConfig::default(), config.winning_length);
    let mut opponent = RandomStrategy::with_seed(42);

    let tally = TrainingPipeline::new(config)
        .run(500, &mut agent, &mut opponent)
        .unwrap();
    assert_eq!(tally.total(), 500);
    assert!(agent.table().size() > 100);

    let root = tictactoe_lab::Board::new(3).encode();
    let values = agent.table().values(&root).unwrap();
    assert_eq!(values.len(), 9);
    assert!(values.values().all(|&v| (0.0..=1.0).contains(&v)));
}

#[test]
fn test_train_as_second_player_then_evaluate() {
    let config = GameConfig::default();
    let mut agent = QLearningAgent::new(TabularConfig::default(), config.winning_length);
    let mut opponent = RandomStrategy::with_seed(5);

    let training = train_tabular(&mut agent, Side::PlayerTwo, &mut opponent, config, 300).unwrap();
    assert_eq!(training.total(), 300);

    let learned = agent.table().size();
    let evaluation = SelfPlayPipeline::new(config)
        .run(100, &mut opponent, &mut agent)
        .unwrap();
    assert_eq!(evaluation.total(), 100);
    assert!(agent.table().size() >= learned);
}

#[test]
fn test_reset_forgets_states() {
    let config = GameConfig::default();
    let mut agent = QLearningAgent::new(TabularConfig::default(), config.winning_length);
    let mut opponent = RandomStrategy::with_seed(9);

    train_tabular(&mut agent, Side::PlayerOne, &mut opponent, config, 10).unwrap();
    assert!(agent.table().size() > 0);
    agent.reset();
    assert_eq!(agent.table().size(), 0);
}
