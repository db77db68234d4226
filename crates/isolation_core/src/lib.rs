pub mod board;
pub mod error;
pub mod game;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use game::GameState;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Agent trait, implemented by every Isolation player
// =============================================================================

/// Trait that all Isolation agents must implement.
///
/// The match runner calls [`Agent::get_move`] once per turn with a fresh
/// time budget and the legal moves of the active player.
pub trait Agent {
    /// Choose a move for the active player of `board`.
    ///
    /// # Arguments
    /// * `board` - The current position
    /// * `legal_moves` - Legal moves of the active player (may be empty)
    /// * `time_left` - Milliseconds remaining in this turn
    ///
    /// # Returns
    /// The chosen move, [`Move::NONE`] when `legal_moves` is empty, or an
    /// error if the agent could not produce a move in time.
    fn get_move(
        &mut self,
        board: &Board,
        legal_moves: &[Move],
        time_left: &dyn TimeLeft,
    ) -> GameResult<Move>;

    /// Returns the agent's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
