//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::match_runner::{MatchConfig, MatchResult};

#[derive(Error, Debug)]
pub enum ResultsError {
    #[error("failed to access results file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode or decode results: {0}")]
    Json(#[from] serde_json::Error),
}

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Participating agents
    pub participants: Vec<String>,
    /// All match results, in the order they were played
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: MatchConfig,
}

/// A single match entry in the tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub agent1: String,
    pub agent2: String,
    pub result: MatchResult,
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: MatchConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, agent1: &str, agent2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            agent1: agent1.to_string(),
            agent2: agent2.to_string(),
            result,
        });
    }

    /// Total (wins, games) for one participant across all matches.
    pub fn totals(&self, agent: &str) -> (u32, u32) {
        self.matches.iter().fold((0, 0), |(wins, games), entry| {
            if entry.agent1 == agent {
                (wins + entry.result.wins, games + entry.result.total_games())
            } else if entry.agent2 == agent {
                (wins + entry.result.losses, games + entry.result.total_games())
            } else {
                (wins, games)
            }
        })
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), ResultsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, ResultsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Config: {} games/match, {} ms/move, {}x{} board\n\n",
            self.config.num_games,
            self.config.time_limit_ms,
            self.config.board_size,
            self.config.board_size
        ));

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<20} vs {:<20} {:>5}-{:<5} {:>8}\n",
            "Agent 1", "Agent 2", "W", "L", "Timeouts"
        ));
        report.push_str(&"-".repeat(64));
        report.push('\n');

        for entry in &self.matches {
            report.push_str(&format!(
                "{:<20} vs {:<20} {:>5}-{:<5} {:>8}\n",
                entry.agent1,
                entry.agent2,
                entry.result.wins,
                entry.result.losses,
                entry.result.timeouts
            ));
        }

        report.push_str("\nWin rates:\n");
        for agent in &self.participants {
            let (wins, games) = self.totals(agent);
            let rate = if games == 0 {
                0.0
            } else {
                100.0 * wins as f64 / games as f64
            };
            report.push_str(&format!("{:<20} {:>6.1}% ({}/{})\n", agent, rate, wins, games));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
