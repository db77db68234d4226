//! Static evaluation of game states.
//!
//! Every evaluator scores a state from one player's point of view and must
//! return `-inf` when that player has lost and `+inf` when they have won.
//! Only non-terminal states get a finite heuristic value.

use isolation_core::{GameState, Player};
use serde::{Deserialize, Serialize};

/// Default penalty per opponent move in [`Heuristic::Mobility`].
pub const DEFAULT_OPPONENT_WEIGHT: f64 = 5.0;

/// Maps a (state, perspective player) pair to a score.
pub trait Evaluator<S: GameState> {
    fn evaluate(&self, state: &S, player: Player) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    S: GameState,
    F: Fn(&S, Player) -> f64,
{
    fn evaluate(&self, state: &S, player: Player) -> f64 {
        self(state, player)
    }
}

/// Built-in mobility heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Heuristic {
    /// Zero for every non-terminal state.
    Null,
    /// Number of moves available to the player.
    OpenMoves,
    /// `own_moves - opponent_weight * opponent_moves`.
    Mobility { opponent_weight: f64 },
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::Mobility {
            opponent_weight: DEFAULT_OPPONENT_WEIGHT,
        }
    }
}

impl<S: GameState> Evaluator<S> for Heuristic {
    fn evaluate(&self, state: &S, player: Player) -> f64 {
        if let Some(score) = terminal_score(state, player) {
            return score;
        }
        match *self {
            Heuristic::Null => 0.0,
            Heuristic::OpenMoves => state.legal_moves(player).len() as f64,
            Heuristic::Mobility { opponent_weight } => {
                let own = state.legal_moves(player).len() as f64;
                let opp = state.legal_moves(state.opponent(player)).len() as f64;
                own - opponent_weight * opp
            }
        }
    }
}

/// `Some(-inf)` if `player` has lost, `Some(+inf)` if they have won.
#[inline]
pub fn terminal_score<S: GameState>(state: &S, player: Player) -> Option<f64> {
    if state.is_loser(player) {
        Some(f64::NEG_INFINITY)
    } else if state.is_winner(player) {
        Some(f64::INFINITY)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
