//! The game-state contract consumed by search engines.

use crate::error::GameResult;
use crate::types::{Move, Player};

/// Immutable snapshot of a two-player, zero-sum, perfect-information game.
///
/// Search code never mutates a state: every child is produced by
/// [`GameState::forecast_move`] and owned by the frame that created it.
pub trait GameState: Sized {
    /// Player whose turn it is.
    fn active_player(&self) -> Player;

    /// Legal moves for `player`, in an unspecified but stable order. May be empty.
    fn legal_moves(&self, player: Player) -> Vec<Move>;

    /// New state with `mv` applied and the turn passed to the opponent.
    ///
    /// Fails with [`GameError::IllegalMove`](crate::GameError::IllegalMove) if
    /// `mv` is not legal for the active player.
    fn forecast_move(&self, mv: Move) -> GameResult<Self>;

    fn is_winner(&self, player: Player) -> bool;

    fn is_loser(&self, player: Player) -> bool;

    fn opponent(&self, player: Player) -> Player {
        player.other()
    }

    /// Number of plies played so far.
    fn move_count(&self) -> u32;

    fn height(&self) -> usize;

    fn width(&self) -> usize;

    /// Legal moves of the active player.
    fn active_moves(&self) -> Vec<Move> {
        self.legal_moves(self.active_player())
    }
}
