//! Error types shared by the board and the search engines.

use thiserror::Error;

use crate::types::Move;

/// Errors raised while querying or advancing a game.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    /// A forecast or move application was asked for a move that is not legal.
    ///
    /// Search code only forecasts moves it enumerated itself, so this is a
    /// broken contract rather than something to retry.
    #[error("illegal move requested: {0}")]
    IllegalMove(Move),

    /// Requested board dimensions cannot be addressed by a [`Move`].
    #[error("board size {width}x{height} exceeds the {max}x{max} limit")]
    BoardTooLarge { width: usize, height: usize, max: usize },

    /// The time-left reading dropped below the engine's timeout threshold.
    #[error("deadline exceeded: {remaining_ms:.1} ms left, threshold {threshold_ms:.1} ms")]
    DeadlineExceeded { remaining_ms: f64, threshold_ms: f64 },
}

impl GameError {
    pub fn is_deadline(&self) -> bool {
        matches!(self, GameError::DeadlineExceeded { .. })
    }
}

/// Result alias for game and search operations
pub type GameResult<T> = Result<T, GameError>;
