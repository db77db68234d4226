//! Tournament Runner for Isolation agents
//!
//! This crate provides infrastructure for:
//! - Building agents from names such as `alphabeta:4` or `id_minimax`
//! - Playing single games under a per-move time limit
//! - Running matches between two agents, alternating who moves first
//! - Saving results and generating reports
//!
//! # Usage
//!
//! ```bash
//! # Run a match between iterative alpha-beta and the random baseline
//! cargo run -p tournament -- match id_alphabeta random --games 20
//!
//! # Round robin over several agents with a custom engine config
//! cargo run -p tournament -- roundrobin id_alphabeta id_minimax alphabeta --config engine.toml
//! ```

mod agents;
mod match_runner;
mod results;

pub use agents::*;
pub use match_runner::*;
pub use results::*;
