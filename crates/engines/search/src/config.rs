//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! search_depth = 3
//! iterative = false
//! method = "alphabeta"
//! timeout_ms = 15.0
//!
//! [heuristic]
//! kind = "mobility"
//! opponent_weight = 5.0
//!
//! [fallback.random]
//! seed = 7
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::eval::Heuristic;

/// Errors raised while loading or validating a [`SearchConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tree walker used by the turn driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMethod {
    #[default]
    Minimax,
    AlphaBeta,
}

impl SearchMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMethod::Minimax => "minimax",
            SearchMethod::AlphaBeta => "alphabeta",
        }
    }
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(SearchMethod::Minimax),
            "alphabeta" | "alpha-beta" | "alpha_beta" => Ok(SearchMethod::AlphaBeta),
            other => Err(ConfigError::Invalid(format!("unknown search method `{other}`"))),
        }
    }
}

/// Move returned when no search iteration completes in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fallback {
    /// First move of the legal-move list.
    #[default]
    FirstLegal,
    /// Uniformly random legal move. Seeded runs are reproducible.
    Random { seed: Option<u64> },
}

/// Parameters fixed when a search agent is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Depth in plies for fixed-depth search
    pub search_depth: u32,
    /// Use iterative deepening instead of a single fixed-depth search
    pub iterative: bool,
    pub method: SearchMethod,
    /// Abort once fewer than this many milliseconds remain
    pub timeout_ms: f64,
    /// Optional cap on iterative deepening (None = until time runs out)
    pub max_depth: Option<u32>,
    pub heuristic: Heuristic,
    pub fallback: Fallback,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_depth: 10,
            iterative: true,
            method: SearchMethod::Minimax,
            timeout_ms: 10.0,
            max_depth: None,
            heuristic: Heuristic::default(),
            fallback: Fallback::FirstLegal,
        }
    }
}

impl SearchConfig {
    /// Fixed-depth search with the given method.
    pub fn fixed(method: SearchMethod, depth: u32) -> Self {
        Self {
            search_depth: depth,
            iterative: false,
            method,
            ..Default::default()
        }
    }

    /// Iterative deepening with the given method.
    pub fn iterative(method: SearchMethod) -> Self {
        Self {
            iterative: true,
            method,
            ..Default::default()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.timeout_ms > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "timeout_ms must be positive, got {}",
                self.timeout_ms
            )));
        }
        if self.search_depth == 0 {
            return Err(ConfigError::Invalid("search_depth must be at least 1".into()));
        }
        if self.max_depth == Some(0) {
            return Err(ConfigError::Invalid("max_depth must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
