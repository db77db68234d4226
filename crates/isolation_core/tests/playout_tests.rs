//! Random playouts checking the board invariants the search engines rely on.

use isolation_core::{Board, GameError, GameState, Move, Player};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[test]
fn test_random_games_always_end_with_one_trapped_player() {
    for seed in 0..100u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::default();
        let mut plies = 0;

        loop {
            let player = board.active_player();
            let moves = board.legal_moves(player);
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };

            let child = board.forecast_move(mv).unwrap();
            assert_eq!(child.move_count(), board.move_count() + 1);
            assert_eq!(child.active_player(), player.other());
            assert_eq!(child.player_location(player), Some(mv));
            assert!(!child.is_blank(mv));

            board.apply_move(mv).unwrap();
            assert_eq!(board, child);
            plies += 1;
        }

        let loser = board.active_player();
        assert!(board.is_loser(loser), "seed {seed}");
        assert!(board.is_winner(loser.other()), "seed {seed}");
        assert!(plies >= 2, "seed {seed}");
        assert!(plies <= 49, "seed {seed}");
    }
}

#[test]
fn test_nobody_has_won_at_the_start() {
    let board = Board::default();
    for player in [Player::One, Player::Two] {
        assert!(!board.is_winner(player));
        assert!(!board.is_loser(player));
    }
    assert_eq!(board.opponent(Player::One), Player::Two);
}

#[test]
fn test_moves_only_land_on_blank_cells() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut board = Board::new(5, 5).unwrap();
    for _ in 0..6 {
        let moves = board.legal_moves(board.active_player());
        for &mv in &moves {
            assert!(board.is_blank(mv), "{mv} offered but blocked");
        }
        match moves.choose(&mut rng) {
            Some(&mv) => board.apply_move(mv).unwrap(),
            None => break,
        }
    }

    let off_board = Move::new(-1, 0);
    assert_eq!(
        board.forecast_move(off_board),
        Err(GameError::IllegalMove(off_board))
    );
    assert_eq!(board.blank_spaces().len(), 25 - board.move_count() as usize);
}
