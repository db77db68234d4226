//! Depth-limited minimax and alpha-beta tree walkers.
//!
//! Both walkers check the deadline when they are entered and again before
//! every child is expanded. A failed check returns
//! [`GameError::DeadlineExceeded`], which `?` carries up through every
//! frame to the turn driver. No walker ever recovers from it.
//!
//! Move enumeration order decides ties: a child replaces the running best
//! only when it is strictly better, so among equal scores the first move
//! produced by the state wins.

use isolation_core::{GameError, GameResult, GameState, Move, Player, TimeLeft};

use crate::eval::Evaluator;

/// Score and move returned by every walker call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub score: f64,
    /// [`Move::NONE`] at leaves and nodes without legal moves
    pub best_move: Move,
}

impl SearchResult {
    fn leaf(score: f64) -> Self {
        Self {
            score,
            best_move: Move::NONE,
        }
    }
}

/// Which side a node plays for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Max,
    Min,
}

impl Role {
    fn from_flag(maximizing: bool) -> Self {
        if maximizing {
            Role::Max
        } else {
            Role::Min
        }
    }

    /// Starting value that any child score can match or beat.
    fn worst(self) -> f64 {
        match self {
            Role::Max => f64::NEG_INFINITY,
            Role::Min => f64::INFINITY,
        }
    }

    /// Strict comparison: ties keep the earlier move.
    fn prefers(self, value: f64, best: f64) -> bool {
        match self {
            Role::Max => value > best,
            Role::Min => value < best,
        }
    }
}

/// Per-search context shared by every frame of one walker invocation.
pub struct Searcher<'a, E> {
    evaluator: &'a E,
    time_left: &'a dyn TimeLeft,
    threshold_ms: f64,
    perspective: Player,
    nodes: u64,
    horizon_reached: bool,
}

impl<'a, E> Searcher<'a, E> {
    /// # Arguments
    /// * `evaluator` - Static evaluation applied at depth-0 and exhausted nodes
    /// * `time_left` - Deadline reader for the current turn
    /// * `threshold_ms` - Abort once the reading drops below this
    /// * `perspective` - Player all scores are computed for
    pub fn new(
        evaluator: &'a E,
        time_left: &'a dyn TimeLeft,
        threshold_ms: f64,
        perspective: Player,
    ) -> Self {
        Self {
            evaluator,
            time_left,
            threshold_ms,
            perspective,
            nodes: 0,
            horizon_reached: false,
        }
    }

    /// Number of child states forecast so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// True if the last walk cut any line off at depth 0.
    ///
    /// When it did not, every line ended in a terminal position and a deeper
    /// search would return the same score.
    pub fn horizon_reached(&self) -> bool {
        self.horizon_reached
    }

    /// Fails if the remaining time is below the threshold.
    #[inline]
    pub fn check_deadline(&self) -> GameResult<()> {
        let remaining_ms = self.time_left.remaining_ms();
        if remaining_ms < self.threshold_ms {
            return Err(GameError::DeadlineExceeded {
                remaining_ms,
                threshold_ms: self.threshold_ms,
            });
        }
        Ok(())
    }

    /// Run the walker selected by `method` from the root.
    pub fn search<S>(
        &mut self,
        state: &S,
        depth: u32,
        method: crate::SearchMethod,
    ) -> GameResult<SearchResult>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.horizon_reached = false;
        match method {
            crate::SearchMethod::Minimax => self.minimax(state, depth, true),
            crate::SearchMethod::AlphaBeta => {
                self.alphabeta(state, depth, f64::NEG_INFINITY, f64::INFINITY, true)
            }
        }
    }

    /// Plain depth-limited minimax.
    pub fn minimax<S>(&mut self, state: &S, depth: u32, maximizing: bool) -> GameResult<SearchResult>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.check_deadline()?;

        if depth == 0 {
            self.horizon_reached = true;
            return Ok(self.leaf(state));
        }

        let moves = state.active_moves();
        if moves.is_empty() {
            return Ok(self.leaf(state));
        }

        let role = Role::from_flag(maximizing);
        let mut best = SearchResult::leaf(role.worst());

        for mv in moves {
            self.check_deadline()?;

            let child = self.forecast(state, mv)?;
            let value = self.minimax(&child, depth - 1, !maximizing)?.score;

            if role.prefers(value, best.score) {
                best = SearchResult {
                    score: value,
                    best_move: mv,
                };
            }
        }

        Ok(best)
    }

    /// Minimax with fail-hard alpha-beta cutoffs.
    ///
    /// `alpha` is the score the maximizing side is already guaranteed,
    /// `beta` the one the minimizing side is. Call with `(-inf, +inf)` at the
    /// root.
    pub fn alphabeta<S>(
        &mut self,
        state: &S,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> GameResult<SearchResult>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.check_deadline()?;

        if depth == 0 {
            self.horizon_reached = true;
            return Ok(self.leaf(state));
        }

        let moves = state.active_moves();
        if moves.is_empty() {
            return Ok(self.leaf(state));
        }

        let role = Role::from_flag(maximizing);
        let mut best = SearchResult::leaf(role.worst());

        for mv in moves {
            self.check_deadline()?;

            let child = self.forecast(state, mv)?;
            let value = self
                .alphabeta(&child, depth - 1, alpha, beta, !maximizing)?
                .score;

            if role.prefers(value, best.score) {
                best = SearchResult {
                    score: value,
                    best_move: mv,
                };
            }

            match role {
                Role::Max => {
                    if value >= beta {
                        return Ok(best); // Beta cutoff
                    }
                    alpha = alpha.max(value);
                }
                Role::Min => {
                    if value <= alpha {
                        return Ok(best); // Alpha cutoff
                    }
                    beta = beta.min(value);
                }
            }
        }

        Ok(best)
    }

    fn leaf<S>(&self, state: &S) -> SearchResult
    where
        S: GameState,
        E: Evaluator<S>,
    {
        SearchResult::leaf(self.evaluator.evaluate(state, self.perspective))
    }

    fn forecast<S: GameState>(&mut self, state: &S, mv: Move) -> GameResult<S> {
        self.nodes += 1;
        state.forecast_move(mv)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
