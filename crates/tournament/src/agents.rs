//! Agents named on the command line.
//!
//! A name is `random`, or a search method with an optional `id_` prefix for
//! iterative deepening and an optional `:D` depth suffix: `minimax`,
//! `alphabeta:4`, `id_alphabeta`, `id_minimax:6`.

use std::num::ParseIntError;

use isolation_core::Agent;
use random_engine::RandomAgent;
use search_engine::{ConfigError, SearchAgent, SearchConfig, SearchMethod};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentSpecError {
    #[error("unknown agent `{0}`")]
    Unknown(String),

    #[error("bad depth in agent `{spec}`: {source}")]
    Depth {
        spec: String,
        #[source]
        source: ParseIntError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Build the agent named by `spec`. Search agents start from `base`.
pub fn create_agent(spec: &str, base: &SearchConfig) -> Result<Box<dyn Agent>, AgentSpecError> {
    match search_config_for(spec, base)? {
        None => Ok(Box::new(RandomAgent::new())),
        Some(config) => Ok(Box::new(SearchAgent::new(config)?.with_name(spec))),
    }
}

/// Search settings for `spec`, or `None` for the random baseline.
///
/// The name picks the method and mode. A `:D` suffix sets the fixed depth, or
/// caps iterative deepening; without one the depths in `base` are kept.
pub fn search_config_for(
    spec: &str,
    base: &SearchConfig,
) -> Result<Option<SearchConfig>, AgentSpecError> {
    let (kind, depth) = match spec.split_once(':') {
        Some((kind, depth)) => {
            let depth = depth.parse::<u32>().map_err(|source| AgentSpecError::Depth {
                spec: spec.to_string(),
                source,
            })?;
            (kind, Some(depth))
        }
        None => (spec, None),
    };

    let kind = kind.to_ascii_lowercase();
    if kind == "random" {
        return Ok(None);
    }

    let (iterative, method) = match kind.strip_prefix("id_") {
        Some(method) => (true, method),
        None => (false, kind.as_str()),
    };
    let method: SearchMethod = method
        .parse()
        .map_err(|_| AgentSpecError::Unknown(spec.to_string()))?;

    let config = if iterative {
        SearchConfig {
            iterative,
            method,
            max_depth: depth.or(base.max_depth),
            ..base.clone()
        }
    } else {
        SearchConfig {
            iterative,
            method,
            search_depth: depth.unwrap_or(base.search_depth),
            ..base.clone()
        }
    };
    Ok(Some(config))
}

#[cfg(test)]
#[path = "agents_tests.rs"]
mod agents_tests;
