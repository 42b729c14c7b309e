//! Shared node state.
//!
//! Every concrete node embeds a [`NodeCore`] that holds what the lifecycle in
//! [`Behavior::evaluate`](crate::Behavior::evaluate) needs: identity, ordered
//! children, node-local memory and the initialized flag.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{Behavior, Memory};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier assigned to every node at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u64);

impl NodeId {
    fn next() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity, children and episode state common to all nodes.
pub struct NodeCore<C> {
    id: NodeId,
    name: String,
    parent: Option<NodeId>,
    children: Vec<Box<dyn Behavior<C>>>,
    memory: Memory,
    initialized: bool,
}

impl<C> NodeCore<C> {
    /// Creates a childless core. The name is only used for diagnostics.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NodeId::next(),
            name: name.into(),
            parent: None,
            children: Vec::new(),
            memory: Memory::new(),
            initialized: false,
        }
    }

    /// Creates a core and attaches `children` in order.
    pub fn with_children(name: impl Into<String>, children: Vec<Box<dyn Behavior<C>>>) -> Self {
        let mut core = Self::new(name);
        for child in children {
            core.attach(child);
        }
        core
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier of the node this one is attached to, if any.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Appends `child` to the ordered child list and records `self` as its parent.
    pub fn attach(&mut self, mut child: Box<dyn Behavior<C>>) {
        child.core_mut().parent = Some(self.id);
        self.children.push(child);
    }

    pub fn children(&self) -> &[Box<dyn Behavior<C>>] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Box<dyn Behavior<C>>] {
        &mut self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Node-local execution memory. Emptied whenever the node terminates.
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// `true` between `on_initialize` and the terminal result of an episode.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub(crate) fn begin_episode(&mut self) {
        self.memory.clear();
        self.initialized = true;
    }

    pub(crate) fn end_episode(&mut self) {
        self.initialized = false;
        self.memory.clear();
    }
}

impl<C> fmt::Debug for NodeCore<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeCore")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("children", &self.children.len())
            .field("initialized", &self.initialized)
            .finish()
    }
}
