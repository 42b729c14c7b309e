//! Behavior-tree AI for the frog and the snakes.
//!
//! Every agent owns one [`BehaviorTree`](behavior_tree::BehaviorTree) whose
//! context is the shared [`World`](game_core::World). Snake trees capture
//! their snake's index in their leaves, so all brains can be ticked in turn
//! against the same world.
//!
//! # Core Components
//!
//! - [`nodes`]: condition, action and custom nodes
//! - [`subtrees`]: reusable patterns and the assembled brains
//! - [`memo`]: blackboard categories the brains store their goals under

pub mod memo;
pub mod nodes;
pub mod subtrees;

// Re-export public API
pub use nodes::Linger;
pub use subtrees::{SnakeBrainConfig, Subtree, frog_tree, snake_tree};
