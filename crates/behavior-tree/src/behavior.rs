//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, the fundamental abstraction for
//! all behavior tree nodes. The trait is generic over a context type `C`, the
//! embedding agent's view of the game, which nodes reach through the [`Tick`]
//! scope.

use crate::{NodeCore, NodeId, NodeState, Tick};

/// A behavior tree node that can be evaluated once per tick.
///
/// Implementors provide [`on_evaluate`](Behavior::on_evaluate) and optionally
/// the initialize/terminate hooks. Callers only ever use
/// [`evaluate`](Behavior::evaluate), which drives the episode lifecycle:
///
/// 1. `on_initialize` runs once at the start of every running episode
/// 2. `on_evaluate` computes this tick's state
/// 3. the state is reported to the tree's active-node tracker
/// 4. on a terminal state, `on_terminate(state)` runs, the initialized flag is
///    reset and node-local memory is cleared
pub trait Behavior<C>: Send {
    fn core(&self) -> &NodeCore<C>;

    fn core_mut(&mut self) -> &mut NodeCore<C>;

    /// Called before the first `on_evaluate` of a running episode.
    fn on_initialize(&mut self, _tick: &mut Tick<'_, C>) {}

    /// Computes the state for the current tick.
    fn on_evaluate(&mut self, tick: &mut Tick<'_, C>) -> NodeState;

    /// Called exactly once with the terminal state that ends an episode.
    fn on_terminate(&mut self, _tick: &mut Tick<'_, C>, _state: NodeState) {}

    /// Utility score exposed to a [`UtilitySelector`](crate::UtilitySelector).
    ///
    /// `None` for nodes that are not utility leaves.
    fn utility(&mut self, _tick: &mut Tick<'_, C>) -> Option<f32> {
        None
    }

    /// Evaluates this node for one tick.
    fn evaluate(&mut self, tick: &mut Tick<'_, C>) -> NodeState {
        if !self.core().is_initialized() {
            self.core_mut().begin_episode();
            self.on_initialize(tick);
        }

        let state = self.on_evaluate(tick);
        tick.track(self.core(), state);

        if state.is_terminal() {
            self.on_terminate(tick, state);
            self.core_mut().end_episode();
            tracing::trace!(
                node = %self.core().name(),
                id = %self.core().id(),
                %state,
                "node terminated"
            );
        }

        state
    }

    /// Appends `child` to this node's ordered children.
    fn attach(&mut self, child: Box<dyn Behavior<C>>) {
        self.core_mut().attach(child);
    }

    fn id(&self) -> NodeId {
        self.core().id()
    }

    fn name<'a>(&'a self) -> &'a str
    where
        C: 'a,
    {
        self.core().name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TreeState;

    #[derive(Default)]
    struct Trace {
        initialized: u32,
        terminated: Vec<NodeState>,
    }

    /// Returns Running `running_for` times, then Success.
    struct Countdown {
        core: NodeCore<Trace>,
        running_for: u32,
    }

    impl Countdown {
        fn new(running_for: u32) -> Self {
            Self {
                core: NodeCore::new("countdown"),
                running_for,
            }
        }
    }

    impl Behavior<Trace> for Countdown {
        fn core(&self) -> &NodeCore<Trace> {
            &self.core
        }

        fn core_mut(&mut self) -> &mut NodeCore<Trace> {
            &mut self.core
        }

        fn on_initialize(&mut self, tick: &mut Tick<'_, Trace>) {
            assert!(self.core.memory().is_empty());
            tick.agent_mut().initialized += 1;
        }

        fn on_evaluate(&mut self, _tick: &mut Tick<'_, Trace>) -> NodeState {
            let seen = self.core.memory().get::<u32>("seen").copied().unwrap_or(0);
            if seen >= self.running_for {
                NodeState::Success
            } else {
                self.core.memory_mut().set("seen", seen + 1);
                NodeState::Running
            }
        }

        fn on_terminate(&mut self, tick: &mut Tick<'_, Trace>, state: NodeState) {
            tick.agent_mut().terminated.push(state);
        }
    }

    #[test]
    fn initialize_and_terminate_once_per_episode() {
        let mut node = Countdown::new(2);
        let mut trace = Trace::default();
        let mut state = TreeState::new();

        let results: Vec<NodeState> = (0..3)
            .map(|_| node.evaluate(&mut Tick::new(&mut trace, &mut state)))
            .collect();

        assert_eq!(
            results,
            vec![NodeState::Running, NodeState::Running, NodeState::Success]
        );
        assert_eq!(trace.initialized, 1);
        assert_eq!(trace.terminated, vec![NodeState::Success]);
    }

    #[test]
    fn memory_is_cleared_between_episodes() {
        let mut node = Countdown::new(1);
        let mut trace = Trace::default();
        let mut state = TreeState::new();

        for _ in 0..4 {
            node.evaluate(&mut Tick::new(&mut trace, &mut state));
        }

        // Two full episodes: Running, Success, Running, Success.
        assert_eq!(trace.initialized, 2);
        assert_eq!(trace.terminated.len(), 2);
        assert!(node.core().memory().is_empty());
        assert!(!node.core().is_initialized());
    }

    #[test]
    fn running_nodes_are_tracked_until_they_terminate() {
        let mut node = Countdown::new(1);
        let mut trace = Trace::default();
        let mut state = TreeState::new();

        node.evaluate(&mut Tick::new(&mut trace, &mut state));
        assert!(state.is_node_active(node.id()));

        node.evaluate(&mut Tick::new(&mut trace, &mut state));
        assert!(!state.is_node_active(node.id()));
    }

    #[test]
    fn name_and_id_come_from_the_core() {
        let node = Countdown::new(0);
        assert_eq!(node.name(), "countdown");

        let boxed: Box<dyn Behavior<Trace>> = Box::new(node);
        let id = boxed.core().id();
        assert_eq!(boxed.name(), "countdown");
        assert_eq!(boxed.id(), id);
    }
}
