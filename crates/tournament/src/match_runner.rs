//! Match runner for playing games between agents

use isolation_core::{Agent, Board, GameError, GameResult, GameState, Move, Player, TurnTimer};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Configuration for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Time budget per move in milliseconds
    pub time_limit_ms: u64,
    /// Board edge length
    pub board_size: usize,
    /// Whether to alternate who moves first each game
    pub alternate_first: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            time_limit_ms: 150,
            board_size: 7,
            alternate_first: true,
        }
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossReason {
    /// The loser had no legal moves on its turn
    NoMoves,
    /// The loser ran out of time
    Timeout,
    /// The loser returned a move that was not legal
    IllegalMove,
}

/// Complete record of one game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub winner: Player,
    pub reason: LossReason,
    /// Moves in play order, starting with player one
    pub moves: Vec<Move>,
}

impl GameRecord {
    pub fn loser(&self) -> Player {
        self.winner.other()
    }
}

/// Result of a match (multiple games), from the first agent's perspective
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub timeouts: u32,
}

impl MatchResult {
    pub fn total_games(&self) -> u32 {
        self.wins + self.losses
    }

    /// Fraction of games won (0.5 when nothing was played)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        self.wins as f64 / total
    }
}

/// Runs matches between two agents
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two agents
    ///
    /// Returns the result from agent1's perspective; `timeouts` counts the
    /// games agent1 lost on time. Fails only if the board size is invalid.
    pub fn run_match(
        &self,
        agent1: &mut dyn Agent,
        agent2: &mut dyn Agent,
    ) -> GameResult<MatchResult> {
        let mut result = MatchResult::default();

        for game_num in 0..self.config.num_games {
            let agent1_first = !self.config.alternate_first || game_num % 2 == 0;

            let record = if agent1_first {
                self.play_game(agent1, agent2)?
            } else {
                self.play_game(agent2, agent1)?
            };

            let agent1_side = if agent1_first { Player::One } else { Player::Two };
            if record.winner == agent1_side {
                result.wins += 1;
            } else {
                result.losses += 1;
                if record.reason == LossReason::Timeout {
                    result.timeouts += 1;
                }
            }

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                first = if agent1_first { agent1.name() } else { agent2.name() },
                winner = %record.winner,
                reason = ?record.reason,
                plies = record.moves.len(),
                wins = result.wins,
                losses = result.losses,
                "game finished"
            );
        }

        Ok(result)
    }

    /// Play a single game; `first` moves as player one.
    pub fn play_game(
        &self,
        first: &mut dyn Agent,
        second: &mut dyn Agent,
    ) -> GameResult<GameRecord> {
        let size = self.config.board_size;
        let mut board = Board::new(size, size)?;
        let mut moves = Vec::new();
        first.new_game();
        second.new_game();

        loop {
            let player = board.active_player();
            let agent: &mut dyn Agent = match player {
                Player::One => &mut *first,
                Player::Two => &mut *second,
            };

            let legal = board.legal_moves(player);
            if legal.is_empty() {
                return Ok(Self::finish(player, LossReason::NoMoves, moves));
            }

            // Fresh clock for every move
            let timer = TurnTimer::from_millis(self.config.time_limit_ms);
            let chosen = agent.get_move(&board, &legal, &timer);

            if timer.expired() {
                warn!(
                    agent = agent.name(),
                    elapsed = ?timer.elapsed(),
                    limit = ?timer.limit(),
                    "move returned after the time limit"
                );
                return Ok(Self::finish(player, LossReason::Timeout, moves));
            }

            let mv = match chosen {
                Ok(mv) => mv,
                Err(e @ GameError::DeadlineExceeded { .. }) => {
                    warn!(agent = agent.name(), error = %e, "agent gave up on time");
                    return Ok(Self::finish(player, LossReason::Timeout, moves));
                }
                Err(e) => {
                    warn!(agent = agent.name(), error = %e, "agent failed");
                    return Ok(Self::finish(player, LossReason::IllegalMove, moves));
                }
            };

            if let Err(e) = board.apply_move(mv) {
                warn!(agent = agent.name(), error = %e, "agent played an illegal move");
                return Ok(Self::finish(player, LossReason::IllegalMove, moves));
            }
            moves.push(mv);
        }
    }

    fn finish(loser: Player, reason: LossReason, moves: Vec<Move>) -> GameRecord {
        GameRecord {
            winner: loser.other(),
            reason,
            moves,
        }
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
