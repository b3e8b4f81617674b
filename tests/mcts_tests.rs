//! MCTS integration tests on small boards, checked against exhaustive play.

use std::collections::HashMap;

use last_teddy::core::{Configuration, Move, PlayerName};
use last_teddy::mcts::{MCTSConfig, MCTSSearch};
use last_teddy::strategy::{Difficulty, DifficultyStrategy, MctsStrategy, Strategy};
use last_teddy::GameRng;

/// True if the player to move on `board` can force a win.
fn is_winning(board: &Configuration, memo: &mut HashMap<Vec<u32>, bool>) -> bool {
    if board.is_empty() {
        // The previous mover took the last object.
        return true;
    }
    if let Some(&known) = memo.get(&board.to_vec()) {
        return known;
    }

    let winning = board
        .legal_moves()
        .iter()
        .any(|mv| !is_winning(&board.apply(mv).unwrap(), memo));

    memo.insert(board.to_vec(), winning);
    winning
}

fn winning_moves(board: &Configuration) -> Vec<Move> {
    let mut memo = HashMap::new();
    board
        .legal_moves()
        .into_iter()
        .filter(|mv| !is_winning(&board.apply(mv).unwrap(), &mut memo))
        .collect()
}

// =============================================================================
// Search Quality
// =============================================================================

#[test]
fn test_finds_winning_move_on_small_boards() {
    let boards = [vec![1, 2], vec![2, 3], vec![1, 1, 3], vec![2, 2, 1], vec![4]];

    for bins in boards {
        let board = Configuration::from(bins);
        let winners = winning_moves(&board);
        assert!(!winners.is_empty(), "{board} should be a winning position");

        let mut search = MCTSSearch::new(MCTSConfig::default().with_iterations(5000));
        let mv = search.search(&board, PlayerName::Player1).unwrap();

        assert!(winners.contains(&mv), "{mv} on {board} is not one of {winners:?}");
    }
}

#[test]
fn test_search_is_player_symmetric() {
    let board = Configuration::from(vec![2, 3]);
    let config = MCTSConfig::default().with_iterations(2000);

    let as_player1 = MCTSSearch::new(config.clone()).search(&board, PlayerName::Player1);
    let as_player2 = MCTSSearch::new(config).search(&board, PlayerName::Player2);

    assert_eq!(as_player1, as_player2);
}

#[test]
fn test_search_returns_legal_move() {
    let mut rng = GameRng::new(11);
    let mut search = MCTSSearch::new(MCTSConfig::default().with_iterations(100));

    for _ in 0..20 {
        let bins: Vec<u32> = (0..4).map(|_| rng.gen_range(0..=6)).collect();
        let board = Configuration::from(bins);

        match search.search(&board, PlayerName::Player1) {
            Some(mv) => assert!(board.apply(&mv).is_ok()),
            None => assert!(board.is_empty()),
        }
    }
}

#[test]
fn test_temperature_sampling_is_legal() {
    let board = Configuration::from(vec![3, 4, 5]);
    let mut search = MCTSSearch::new(
        MCTSConfig::default()
            .with_iterations(300)
            .with_temperature(1.0),
    );

    let mv = search.search(&board, PlayerName::Player2).unwrap();
    assert!(board.legal_moves().contains(&mv));
}

#[test]
fn test_depth_limit_still_returns_move() {
    let board = Configuration::from(vec![6, 6, 6]);
    let mut search = MCTSSearch::new(
        MCTSConfig::default()
            .with_iterations(300)
            .with_max_depth(2),
    );

    assert!(search.search(&board, PlayerName::Player1).is_some());
    assert!(search.stats().max_depth <= 2);
}

// =============================================================================
// Strategies
// =============================================================================

#[test]
fn test_mcts_strategy_records_stats() {
    let mut strategy = MctsStrategy::new(MCTSConfig::default().with_iterations(150));
    let board = Configuration::from(vec![2, 3, 4]);

    let mv = strategy.choose_move(&board, Difficulty::Hard).unwrap();

    assert!(board.apply(&mv).is_ok());
    assert_eq!(strategy.last_stats().iterations, 150);
}

#[test]
fn test_standard_hard_plays_winning_move() {
    let rng = GameRng::new(5);
    let mut strategy = DifficultyStrategy::standard(&rng, MCTSConfig::default().with_iterations(3000));
    let board = Configuration::from(vec![1, 4]);

    assert_eq!(strategy.choose_move(&board, Difficulty::Hard), Some(Move::new(1, 4)));
}

#[test]
fn test_strategies_pass_on_empty_board() {
    let rng = GameRng::new(5);
    let mut strategy = DifficultyStrategy::standard(&rng, MCTSConfig::default());
    let board = Configuration::from(vec![0, 0, 0]);

    assert_eq!(strategy.choose_move(&board, Difficulty::Easy), None);
    assert_eq!(strategy.choose_move(&board, Difficulty::Hard), None);
}
