//! Error types surfaced by the simulation driver.

use game_core::ConfigError;
use thiserror::Error;

use crate::simulation::AgentRef;

pub type Result<T> = std::result::Result<T, SimulationError>;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid simulation config")]
    Config(#[from] ConfigError),

    #[error("no brain for {agent} ({snakes} snakes in the swamp)")]
    UnknownAgent { agent: AgentRef, snakes: usize },
}

/// An agent name that is neither `frog` nor `snake:<index>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected `frog` or `snake:<index>`, got `{input}`")]
pub struct ParseAgentError {
    pub input: String,
}
