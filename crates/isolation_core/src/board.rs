use std::fmt;

use crate::error::{GameError, GameResult};
use crate::game::GameState;
use crate::types::*;

/// Standard board edge length.
pub const DEFAULT_SIZE: usize = 7;

/// Largest accepted edge length. Keeps every cell index inside `i32`.
pub const MAX_SIZE: usize = 1024;

/// Knight-move Isolation board.
///
/// Each player owns one piece. A piece that has not been placed yet may go to
/// any blank cell; afterwards it moves like a chess knight. Every visited cell
/// stays blocked for the rest of the game.
///
/// Both edges are at most [`MAX_SIZE`], so cell coordinates always fit `i32`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    blocked: Vec<bool>,
    locations: [Option<Move>; 2],
    active: Player,
    move_count: u32,
}

impl Board {
    /// Empty board. Fails if either edge exceeds [`MAX_SIZE`].
    pub fn new(width: usize, height: usize) -> GameResult<Self> {
        if width > MAX_SIZE || height > MAX_SIZE {
            return Err(GameError::BoardTooLarge {
                width,
                height,
                max: MAX_SIZE,
            });
        }
        Ok(Self::blank(width, height))
    }

    fn blank(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            blocked: vec![false; width * height],
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        }
    }

    /// Apply a sequence of moves from the empty board.
    pub fn from_moves(width: usize, height: usize, moves: &[Move]) -> GameResult<Self> {
        let mut board = Board::new(width, height)?;
        for &mv in moves {
            board.apply_move(mv)?;
        }
        Ok(board)
    }

    fn index(&self, mv: Move) -> Option<usize> {
        let row = usize::try_from(mv.row).ok().filter(|&r| r < self.height)?;
        let col = usize::try_from(mv.col).ok().filter(|&c| c < self.width)?;
        Some(row * self.width + col)
    }

    pub fn is_blank(&self, mv: Move) -> bool {
        self.index(mv).is_some_and(|i| !self.blocked[i])
    }

    pub fn player_location(&self, player: Player) -> Option<Move> {
        self.locations[player.idx()]
    }

    pub fn blank_spaces(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(self.blocked.len());
        for row in 0..self.height as i32 {
            for col in 0..self.width as i32 {
                let mv = Move::new(row, col);
                if self.is_blank(mv) {
                    out.push(mv);
                }
            }
        }
        out
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.legal_moves(self.active).contains(&mv)
    }

    /// Apply `mv` for the active player in place.
    pub fn apply_move(&mut self, mv: Move) -> GameResult<()> {
        if !self.is_legal(mv) {
            return Err(GameError::IllegalMove(mv));
        }
        let idx = self.index(mv).ok_or(GameError::IllegalMove(mv))?;
        self.blocked[idx] = true;
        self.locations[self.active.idx()] = Some(mv);
        self.active = self.active.other();
        self.move_count += 1;
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::blank(DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

impl GameState for Board {
    fn active_player(&self) -> Player {
        self.active
    }

    fn legal_moves(&self, player: Player) -> Vec<Move> {
        let Some(from) = self.locations[player.idx()] else {
            return self.blank_spaces();
        };
        KNIGHT_OFFSETS
            .iter()
            .map(|&(dr, dc)| Move::new(from.row + dr, from.col + dc))
            .filter(|&mv| self.is_blank(mv))
            .collect()
    }

    fn forecast_move(&self, mv: Move) -> GameResult<Self> {
        let mut next = self.clone();
        next.apply_move(mv)?;
        Ok(next)
    }

    fn is_winner(&self, player: Player) -> bool {
        self.active == player.other() && self.legal_moves(self.active).is_empty()
    }

    fn is_loser(&self, player: Player) -> bool {
        self.active == player && self.legal_moves(player).is_empty()
    }

    fn move_count(&self) -> u32 {
        self.move_count
    }

    fn height(&self) -> usize {
        self.height
    }

    fn width(&self) -> usize {
        self.width
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height as i32 {
            for col in 0..self.width as i32 {
                let mv = Move::new(row, col);
                let cell = if self.locations[0] == Some(mv) {
                    '1'
                } else if self.locations[1] == Some(mv) {
                    '2'
                } else if self.is_blank(mv) {
                    '.'
                } else {
                    '#'
                };
                write!(f, "{cell}")?;
                if col + 1 < self.width as i32 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
