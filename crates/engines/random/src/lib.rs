//! Random Move Isolation Agent
//!
//! Selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Testing the match runner before tuning heuristics
//! - Baseline comparisons (any search agent should easily beat this)

use isolation_core::{Agent, Board, GameResult, Move, TimeLeft};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// An Isolation agent that plays random legal moves.
///
/// It provides no evaluation and ignores the clock. Seeded agents replay the
/// same choices for the same sequence of positions.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn get_move(
        &mut self,
        _board: &Board,
        legal_moves: &[Move],
        _time_left: &dyn TimeLeft,
    ) -> GameResult<Move> {
        Ok(legal_moves.choose(&mut self.rng).copied().unwrap_or(Move::NONE))
    }

    fn name(&self) -> &str {
        "Random"
    }
}
