//! Per-evaluation scope handed to every node.
//!
//! A [`Tick`] bundles the embedding agent's context with the [`TreeState`] of
//! the tree being evaluated. Passing it down the call stack replaces a
//! tree back-reference on every node: a node can only run inside a scope that
//! already knows its blackboard and active-node tracker.

use std::collections::BTreeMap;

use crate::{Blackboard, Memory, NodeCore, NodeId, NodeState};

/// A node reported as Running during the latest update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveNode {
    pub id: NodeId,
    pub name: String,
}

/// Mutable state owned by one behavior tree and shared by all of its nodes.
#[derive(Debug, Default)]
pub struct TreeState {
    blackboard: Blackboard,
    shared: Memory,
    active: BTreeMap<NodeId, String>,
}

impl TreeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blackboard(&self) -> &Blackboard {
        &self.blackboard
    }

    pub fn blackboard_mut(&mut self) -> &mut Blackboard {
        &mut self.blackboard
    }

    /// Legacy shared data written through [`Tick::set_data`].
    pub fn shared_data(&self) -> &Memory {
        &self.shared
    }

    /// Records the state a node just produced.
    ///
    /// Running adds the node to the active set (once); any terminal state
    /// removes it.
    pub fn track_node_status<C>(&mut self, node: &NodeCore<C>, state: NodeState) {
        if state.is_running() {
            self.active
                .entry(node.id())
                .or_insert_with(|| node.name().to_owned());
        } else {
            self.active.remove(&node.id());
        }
    }

    /// Nodes that were Running at the end of the latest update, ordered by id.
    pub fn active_nodes(&self) -> Vec<ActiveNode> {
        self.active
            .iter()
            .map(|(id, name)| ActiveNode {
                id: *id,
                name: name.clone(),
            })
            .collect()
    }

    pub fn is_node_active(&self, id: NodeId) -> bool {
        self.active.contains_key(&id)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub(crate) fn clear_active(&mut self) {
        self.active.clear();
    }
}

/// Evaluation scope for one tick.
pub struct Tick<'a, C> {
    agent: &'a mut C,
    state: &'a mut TreeState,
}

impl<'a, C> Tick<'a, C> {
    pub fn new(agent: &'a mut C, state: &'a mut TreeState) -> Self {
        Self { agent, state }
    }

    /// The embedding agent's context.
    pub fn agent(&self) -> &C {
        &*self.agent
    }

    pub fn agent_mut(&mut self) -> &mut C {
        &mut *self.agent
    }

    pub fn blackboard(&self) -> &Blackboard {
        &self.state.blackboard
    }

    pub fn blackboard_mut(&mut self) -> &mut Blackboard {
        &mut self.state.blackboard
    }

    /// Borrows the agent and the blackboard at the same time.
    pub fn split_mut(&mut self) -> (&mut C, &mut Blackboard) {
        (&mut *self.agent, &mut self.state.blackboard)
    }

    /// Writes legacy shared data visible to every node of this tree.
    ///
    /// Prefer the [`Blackboard`] for new code.
    pub fn set_data<T: std::any::Any + Send>(&mut self, key: impl Into<String>, value: T) {
        self.state.shared.set(key, value);
    }

    pub fn get_data<T: std::any::Any>(&self, key: &str) -> Option<&T> {
        self.state.shared.get(key)
    }

    /// Removes a legacy shared data key. Returns `true` if it existed.
    pub fn clear_data(&mut self, key: &str) -> bool {
        self.state.shared.remove(key)
    }

    pub(crate) fn track(&mut self, node: &NodeCore<C>, state: NodeState) {
        self.state.track_node_status(node, state);
    }
}
