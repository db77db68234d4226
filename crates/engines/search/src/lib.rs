//! Isolation Search Engine
//!
//! Depth-limited minimax and alpha-beta search, driven either at a fixed
//! depth or by iterative deepening against a per-turn deadline.

mod config;
mod eval;
mod search;

#[cfg(test)]
mod test_tree;

use isolation_core::{Agent, Board, GameError, GameResult, GameState, Move, TimeLeft};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, trace};

pub use config::{ConfigError, Fallback, SearchConfig, SearchMethod};
pub use eval::{terminal_score, Evaluator, Heuristic, DEFAULT_OPPONENT_WEIGHT};
pub use search::{SearchResult, Searcher};

/// Outcome of one turn of the driver.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    /// Chosen move ([`Move::NONE`] if there were no legal moves)
    pub best_move: Move,
    /// Score of the chosen move, if a completed search produced it
    pub score: Option<f64>,
    /// Deepest fully completed search depth (0 if none completed)
    pub depth: u32,
    /// Number of states forecast during the turn
    pub nodes: u64,
    /// Whether the deadline interrupted the search
    pub stopped: bool,
}

impl TurnReport {
    fn immediate(best_move: Move) -> Self {
        Self {
            best_move,
            score: None,
            depth: 0,
            nodes: 0,
            stopped: false,
        }
    }
}

/// Game-playing agent searching with minimax or alpha-beta.
///
/// This agent uses:
/// - Minimax or alpha-beta search, selected by [`SearchMethod`]
/// - Iterative deepening or a single fixed-depth search
/// - A pluggable [`Evaluator`] (mobility heuristic by default)
/// - The board center as its opening move
pub struct SearchAgent<E = Heuristic> {
    config: SearchConfig,
    evaluator: E,
    rng: Option<StdRng>,
    name: String,
}

impl SearchAgent<Heuristic> {
    /// Build an agent using the heuristic named in the config.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        let heuristic = config.heuristic;
        Self::with_evaluator(config, heuristic)
    }
}

impl<E> SearchAgent<E> {
    /// Build an agent with a custom evaluation function.
    pub fn with_evaluator(config: SearchConfig, evaluator: E) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.fallback {
            Fallback::FirstLegal => None,
            Fallback::Random { seed: Some(seed) } => Some(StdRng::seed_from_u64(seed)),
            Fallback::Random { seed: None } => Some(StdRng::from_entropy()),
        };
        let name = default_name(&config);
        Ok(Self {
            config,
            evaluator,
            rng,
            name,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Search for the best move before the deadline.
    ///
    /// # Arguments
    /// * `state` - The position to search, with the searching player to move
    /// * `legal_moves` - Legal moves of the searching player
    /// * `time_left` - Deadline reader for this turn
    ///
    /// # Returns
    /// The chosen move, or [`Move::NONE`] if `legal_moves` is empty. Fails
    /// with [`GameError::DeadlineExceeded`] only when the deadline has already
    /// passed on entry, since no fallback exists yet.
    pub fn choose_move<S>(
        &mut self,
        state: &S,
        legal_moves: &[Move],
        time_left: &dyn TimeLeft,
    ) -> GameResult<Move>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.search_turn(state, legal_moves, time_left)
            .map(|report| report.best_move)
    }

    /// Like [`choose_move`](Self::choose_move), with search statistics.
    pub fn search_turn<S>(
        &mut self,
        state: &S,
        legal_moves: &[Move],
        time_left: &dyn TimeLeft,
    ) -> GameResult<TurnReport>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let threshold_ms = self.config.timeout_ms;
        let remaining_ms = time_left.remaining_ms();
        if remaining_ms < threshold_ms {
            return Err(GameError::DeadlineExceeded {
                remaining_ms,
                threshold_ms,
            });
        }

        if legal_moves.is_empty() {
            return Ok(TurnReport::immediate(Move::NONE));
        }

        if state.move_count() == 1 {
            if let Some(center) = center_cell(state).filter(|c| legal_moves.contains(c)) {
                trace!(%center, "opening book");
                return Ok(TurnReport::immediate(center));
            }
        }

        let fallback = self.fallback_move(legal_moves);
        let perspective = state.active_player();
        let mut searcher = Searcher::new(&self.evaluator, time_left, threshold_ms, perspective);

        let mut report = TurnReport::immediate(fallback);

        if self.config.iterative {
            let mut best_score = f64::NEG_INFINITY;
            let mut depth = 1;

            while !state.legal_moves(perspective).is_empty() {
                let result = match searcher.search(state, depth, self.config.method) {
                    Ok(result) => result,
                    Err(GameError::DeadlineExceeded { remaining_ms, .. }) => {
                        debug!(depth, remaining_ms, "deadline hit, keeping last completed depth");
                        report.stopped = true;
                        break;
                    }
                    Err(e) => return Err(e),
                };

                report.depth = depth;
                if legal_moves.contains(&result.best_move) && result.score > best_score {
                    best_score = result.score;
                    report.best_move = result.best_move;
                    report.score = Some(result.score);
                }
                debug!(
                    depth,
                    score = result.score,
                    best_move = %result.best_move,
                    nodes = searcher.nodes(),
                    "completed iteration"
                );

                // Every line ended in a terminal position: deeper search changes nothing
                if !searcher.horizon_reached() {
                    break;
                }
                if self.config.max_depth.is_some_and(|max| depth >= max) {
                    break;
                }
                depth += 1;
            }
        } else {
            let depth = self.config.search_depth;
            match searcher.search(state, depth, self.config.method) {
                Ok(result) if result.best_move.is_none() => {
                    debug!(depth, score = result.score, "no move beats the worst case, using fallback move");
                    report.depth = depth;
                }
                Ok(result) => {
                    report.depth = depth;
                    if legal_moves.contains(&result.best_move) {
                        report.best_move = result.best_move;
                        report.score = Some(result.score);
                    }
                }
                Err(GameError::DeadlineExceeded { remaining_ms, .. }) => {
                    debug!(depth, remaining_ms, "deadline hit, using fallback move");
                    report.stopped = true;
                }
                Err(e) => return Err(e),
            }
        }

        report.nodes = searcher.nodes();
        Ok(report)
    }

    /// Safety move picked before searching.
    fn fallback_move(&mut self, legal_moves: &[Move]) -> Move {
        let first = legal_moves.first().copied().unwrap_or(Move::NONE);
        match self.rng.as_mut() {
            Some(rng) => legal_moves.choose(rng).copied().unwrap_or(first),
            None => first,
        }
    }
}

/// Middle cell of the board, `None` if it does not fit a [`Move`].
fn center_cell<S: GameState>(state: &S) -> Option<Move> {
    let row = i32::try_from(state.height() / 2).ok()?;
    let col = i32::try_from(state.width() / 2).ok()?;
    Some(Move::new(row, col))
}

fn default_name(config: &SearchConfig) -> String {
    let method = match config.method {
        SearchMethod::Minimax => "MM",
        SearchMethod::AlphaBeta => "AB",
    };
    if config.iterative {
        format!("ID_{method}")
    } else {
        format!("{method}_d{}", config.search_depth)
    }
}

impl<E> Agent for SearchAgent<E>
where
    E: Evaluator<Board>,
{
    fn get_move(
        &mut self,
        board: &Board,
        legal_moves: &[Move],
        time_left: &dyn TimeLeft,
    ) -> GameResult<Move> {
        self.choose_move(board, legal_moves, time_left)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
