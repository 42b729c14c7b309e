//! Reusable behavior tree runtime for tick-driven game agents.
//!
//! This library provides a small, single-threaded behavior tree core: nodes
//! are evaluated once per simulation tick, may report `Running` to span
//! several ticks, and share data through a per-tree [`Blackboard`].
//!
//! - **Explicit continuation**: `Running` is a returned value; cursors,
//!   counters and node memory carry the state between ticks
//! - **Episode lifecycle**: every node initializes once per running episode
//!   and terminates exactly once with its final state
//! - **Scoped evaluation**: every evaluation receives a [`Tick`] carrying the
//!   agent context and the tree's shared state, so nodes never hold a
//!   reference back to their tree
//! - **Closures as leaves**: conditions, actions and utility scorers are owned
//!   closures supplied by the embedding game
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes, [`NodeCore`] their shared state
//! - [`NodeState`]: Running, Success or Failure
//! - Composite nodes: [`Sequence`], [`Selector`], [`Parallel`],
//!   [`RandomSelector`], [`UtilitySelector`]
//! - Decorator nodes: [`Root`], [`Inverter`], [`Repeater`]
//! - Leaf nodes: [`Conditional`], [`Action`], [`StaticUtilityNode`],
//!   [`DynamicUtilityNode`]
//! - [`BehaviorTree`]: per-tick driver owning the root and the blackboard

pub mod behavior;
pub mod blackboard;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod leaf;
pub mod memory;
pub mod node;
pub mod status;
pub mod tick;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use blackboard::{Blackboard, BlackboardError};
pub use composite::{Parallel, RandomSelector, Selector, Sequence, UtilitySelector};
pub use decorator::{Inverter, Repeater, Root};
pub use leaf::{
    Action, ActionFn, ConditionFn, Conditional, DynamicUtilityNode, StaticUtilityNode, UtilityFn,
};
pub use memory::Memory;
pub use node::{NodeCore, NodeId};
pub use status::NodeState;
pub use tick::{ActiveNode, Tick, TreeState};
pub use tree::BehaviorTree;
