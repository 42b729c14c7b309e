//! A timed idle node for patrol pauses.

use behavior_tree::{Behavior, NodeCore, NodeState, Tick};

const ELAPSED: &str = "elapsed";

/// Idles for a fixed number of ticks.
///
/// Counts ticks in node-local memory, so the count restarts with every new
/// episode. Returns Running until `ticks` evaluations have elapsed, then
/// Success. A zero-tick linger succeeds immediately.
pub struct Linger<C> {
    core: NodeCore<C>,
    ticks: u32,
}

impl<C> Linger<C> {
    pub fn new(name: impl Into<String>, ticks: u32) -> Self {
        Self {
            core: NodeCore::new(name),
            ticks,
        }
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Ticks spent in the current episode.
    pub fn elapsed(&self) -> u32 {
        self.core.memory().get::<u32>(ELAPSED).copied().unwrap_or(0)
    }
}

impl<C> Behavior<C> for Linger<C> {
    fn core(&self) -> &NodeCore<C> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore<C> {
        &mut self.core
    }

    fn on_initialize(&mut self, _tick: &mut Tick<'_, C>) {
        self.core.memory_mut().set(ELAPSED, 0u32);
    }

    fn on_evaluate(&mut self, _tick: &mut Tick<'_, C>) -> NodeState {
        if self.ticks == 0 {
            return NodeState::Success;
        }

        let memory = self.core.memory_mut();
        let elapsed = memory.get::<u32>(ELAPSED).copied().unwrap_or(0) + 1;
        memory.set(ELAPSED, elapsed);

        if elapsed >= self.ticks {
            NodeState::Success
        } else {
            NodeState::Running
        }
    }
}
