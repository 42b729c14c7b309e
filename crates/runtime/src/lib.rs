//! Agent brains and the simulation driver for the swamp.
//!
//! This crate wires `behavior-tree` to `game-core`: it defines the swamp's
//! condition and action nodes, assembles them into frog and snake brains, and
//! drives brains and world together one fixed step at a time.
//!
//! Modules are organized by responsibility:
//! - [`providers`] hosts the AI nodes, subtrees and assembled brains
//! - [`simulation`] ticks every brain, then advances the [`World`](game_core::World)
//! - [`error`] defines [`SimulationError`]
pub mod error;
pub mod providers;
pub mod simulation;

pub use error::{ParseAgentError, Result, SimulationError};
pub use providers::ai::{Linger, SnakeBrainConfig, Subtree, frog_tree, snake_tree};
pub use simulation::{AgentRef, Simulation, SimulationSummary};
