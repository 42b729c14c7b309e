//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and transform or gate its result.
//! This module provides [`Root`] (tree entry point), [`Inverter`] (NOT logic)
//! and [`Repeater`] (run a child to success N times).
//!
//! A decorator evaluated without a child returns `Failure`.

use crate::{Behavior, NodeCore, NodeState, Tick};

/// Entry point of a [`BehaviorTree`](crate::BehaviorTree).
///
/// Delegates every evaluation to its single child.
pub struct Root<C> {
    core: NodeCore<C>,
}

impl<C> Root<C> {
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self {
            core: NodeCore::with_children("Root", vec![child]),
        }
    }

    /// A root with no child. Evaluates to `Failure` until one is attached.
    pub fn empty() -> Self {
        Self {
            core: NodeCore::new("Root"),
        }
    }
}

impl<C> Behavior<C> for Root<C> {
    fn core(&self) -> &NodeCore<C> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore<C> {
        &mut self.core
    }

    fn on_evaluate(&mut self, tick: &mut Tick<'_, C>) -> NodeState {
        match self.core.children_mut().first_mut() {
            Some(child) => child.evaluate(tick),
            None => {
                tracing::warn!("behavior tree root has no child");
                NodeState::Failure
            }
        }
    }
}

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - `Running` passes through unchanged
pub struct Inverter<C> {
    core: NodeCore<C>,
}

impl<C> Inverter<C> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(name: impl Into<String>, child: Box<dyn Behavior<C>>) -> Self {
        Self {
            core: NodeCore::with_children(name, vec![child]),
        }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn core(&self) -> &NodeCore<C> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore<C> {
        &mut self.core
    }

    fn on_evaluate(&mut self, tick: &mut Tick<'_, C>) -> NodeState {
        match self.core.children_mut().first_mut() {
            Some(child) => child.evaluate(tick).invert(),
            None => NodeState::Failure,
        }
    }
}

/// Runs its child until it has succeeded `times` times.
///
/// # Semantics
///
/// - Child `Running`: returns `Running`
/// - Child `Failure`: returns `Failure` immediately, no further repeats
/// - Child `Success`: counts it; returns `Success` once the count reaches
///   `times`, otherwise `Running` (the child starts a fresh episode next tick)
pub struct Repeater<C> {
    core: NodeCore<C>,
    times: u32,
    successes: u32,
}

impl<C> Repeater<C> {
    pub fn new(name: impl Into<String>, times: u32, child: Box<dyn Behavior<C>>) -> Self {
        Self {
            core: NodeCore::with_children(name, vec![child]),
            times,
            successes: 0,
        }
    }

    /// Child successes counted in the current episode.
    pub fn successes(&self) -> u32 {
        self.successes
    }
}

impl<C> Behavior<C> for Repeater<C> {
    fn core(&self) -> &NodeCore<C> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore<C> {
        &mut self.core
    }

    fn on_initialize(&mut self, _tick: &mut Tick<'_, C>) {
        self.successes = 0;
    }

    fn on_evaluate(&mut self, tick: &mut Tick<'_, C>) -> NodeState {
        let Some(child) = self.core.children_mut().first_mut() else {
            return NodeState::Failure;
        };

        match child.evaluate(tick) {
            NodeState::Running => NodeState::Running,
            NodeState::Failure => NodeState::Failure,
            NodeState::Success => {
                self.successes += 1;
                if self.successes >= self.times {
                    NodeState::Success
                } else {
                    NodeState::Running
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Conditional, TreeState};

    struct TestContext {
        value: i32,
        calls: u32,
    }

    impl TestContext {
        fn new(value: i32) -> Self {
            Self { value, calls: 0 }
        }
    }

    fn is_positive() -> Box<dyn Behavior<TestContext>> {
        Box::new(Conditional::new("is_positive", |tick: &mut Tick<'_, TestContext>| {
            tick.agent().value > 0
        }))
    }

    fn succeed_counting() -> Box<dyn Behavior<TestContext>> {
        Box::new(Action::new("count", |tick: &mut Tick<'_, TestContext>| {
            tick.agent_mut().calls += 1;
            NodeState::Success
        }))
    }

    fn evaluate(
        node: &mut dyn Behavior<TestContext>,
        ctx: &mut TestContext,
        state: &mut TreeState,
    ) -> NodeState {
        node.evaluate(&mut Tick::new(ctx, state))
    }

    #[test]
    fn inverter_inverts_success() {
        let mut inverter = Inverter::new("not", is_positive());
        let mut state = TreeState::new();

        let mut ctx = TestContext::new(10);
        assert_eq!(evaluate(&mut inverter, &mut ctx, &mut state), NodeState::Failure);
    }

    #[test]
    fn inverter_inverts_failure() {
        let mut inverter = Inverter::new("not", is_positive());
        let mut state = TreeState::new();

        let mut ctx = TestContext::new(-10);
        assert_eq!(evaluate(&mut inverter, &mut ctx, &mut state), NodeState::Success);
    }

    #[test]
    fn inverter_passes_running_through() {
        let running = Box::new(Action::new("wait", |_: &mut Tick<'_, TestContext>| {
            NodeState::Running
        }));
        let mut inverter = Inverter::new("not", running);
        let mut state = TreeState::new();

        let mut ctx = TestContext::new(0);
        assert_eq!(evaluate(&mut inverter, &mut ctx, &mut state), NodeState::Running);
    }

    #[test]
    fn root_without_child_fails() {
        let mut root = Root::<TestContext>::empty();
        let mut state = TreeState::new();

        let mut ctx = TestContext::new(0);
        assert_eq!(evaluate(&mut root, &mut ctx, &mut state), NodeState::Failure);
    }

    #[test]
    fn repeater_needs_n_child_successes() {
        let mut repeater = Repeater::new("thrice", 3, succeed_counting());
        let mut state = TreeState::new();
        let mut ctx = TestContext::new(0);

        assert_eq!(evaluate(&mut repeater, &mut ctx, &mut state), NodeState::Running);
        assert_eq!(ctx.calls, 1);
        assert_eq!(evaluate(&mut repeater, &mut ctx, &mut state), NodeState::Running);
        assert_eq!(ctx.calls, 2);
        assert_eq!(evaluate(&mut repeater, &mut ctx, &mut state), NodeState::Success);
        assert_eq!(ctx.calls, 3);

        // A fresh episode starts counting from zero again.
        assert_eq!(evaluate(&mut repeater, &mut ctx, &mut state), NodeState::Running);
        assert_eq!(repeater.successes(), 1);
    }

    #[test]
    fn repeater_aborts_on_child_failure() {
        let mut repeater = Repeater::new("thrice", 3, is_positive());
        let mut state = TreeState::new();
        let mut ctx = TestContext::new(1);

        assert_eq!(evaluate(&mut repeater, &mut ctx, &mut state), NodeState::Running);
        ctx.value = -1;
        assert_eq!(evaluate(&mut repeater, &mut ctx, &mut state), NodeState::Failure);
    }
}
