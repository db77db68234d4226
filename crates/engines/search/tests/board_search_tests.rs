//! Search behaviour on real Isolation positions.

use isolation_core::{Board, GameState, Move, Player};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use search_engine::{Heuristic, SearchAgent, SearchConfig, SearchMethod, Searcher};

fn plenty() -> f64 {
    1.0e9
}

/// Play `plies` random moves from the empty board (fewer if the game ends).
fn random_position(seed: u64, size: usize, plies: usize) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new(size, size).unwrap();
    for _ in 0..plies {
        let moves = board.legal_moves(board.active_player());
        match moves.choose(&mut rng) {
            Some(&mv) => board.apply_move(mv).unwrap(),
            None => break,
        }
    }
    board
}

#[test]
fn test_alphabeta_score_equals_minimax_on_random_positions() {
    let heuristic = Heuristic::default();
    for seed in 0..40u64 {
        let board = random_position(seed, 5, 2 + (seed as usize % 8));
        let perspective = board.active_player();

        for depth in 1..=3 {
            let mut plain = Searcher::new(&heuristic, &plenty, 10.0, perspective);
            let mut pruned = Searcher::new(&heuristic, &plenty, 10.0, perspective);

            let mm = plain.search(&board, depth, SearchMethod::Minimax).unwrap();
            let ab = pruned.search(&board, depth, SearchMethod::AlphaBeta).unwrap();

            assert_eq!(mm.score, ab.score, "seed {seed} depth {depth}\n{board}");
            assert!(pruned.nodes() <= plain.nodes());
        }
    }
}

#[test]
fn test_search_finds_immediate_win() {
    // 3x3 board: player two on (0, 1) must take (2, 2), after which
    // player one on (1, 0) is trapped
    let moves = [
        Move::new(0, 0),
        Move::new(1, 2),
        Move::new(2, 1),
        Move::new(2, 0),
        Move::new(0, 2),
        Move::new(0, 1),
        Move::new(1, 0),
    ];
    let board = Board::from_moves(3, 3, &moves).unwrap();
    assert_eq!(board.active_player(), Player::Two);
    let legal = board.legal_moves(Player::Two);

    for method in [SearchMethod::Minimax, SearchMethod::AlphaBeta] {
        let mut agent = SearchAgent::new(SearchConfig::fixed(method, 2)).unwrap();
        let report = agent.search_turn(&board, &legal, &plenty).unwrap();
        assert_eq!(report.best_move, Move::new(2, 2));
        assert_eq!(report.score, Some(f64::INFINITY));
    }
}

#[test]
fn test_iterative_search_on_small_board_finishes_without_deadline() {
    let board = random_position(3, 4, 4);
    let legal = board.legal_moves(board.active_player());
    if legal.is_empty() {
        return;
    }
    let mut agent = SearchAgent::new(SearchConfig::iterative(SearchMethod::AlphaBeta)).unwrap();

    let report = agent.search_turn(&board, &legal, &plenty).unwrap();

    assert!(!report.stopped);
    assert!(report.depth >= 1);
    assert!(legal.contains(&report.best_move));
}

#[test]
fn test_every_turn_of_a_game_returns_a_legal_move() {
    let mut board = Board::new(5, 5).unwrap();
    let mut agents = [
        SearchAgent::new(SearchConfig::fixed(SearchMethod::AlphaBeta, 2)).unwrap(),
        SearchAgent::new(SearchConfig::fixed(SearchMethod::Minimax, 1)).unwrap(),
    ];

    loop {
        let player = board.active_player();
        let legal = board.legal_moves(player);
        let mv = agents[player.idx()]
            .choose_move(&board, &legal, &plenty)
            .unwrap();
        if legal.is_empty() {
            assert_eq!(mv, Move::NONE);
            assert!(board.is_loser(player));
            break;
        }
        assert!(legal.contains(&mv), "{mv} not legal\n{board}");
        board.apply_move(mv).unwrap();
    }
}
