//! Leaf behavior nodes.
//!
//! Leaves hold an owned closure supplied by the embedding game and invoke it
//! through a uniform signature:
//!
//! - [`Conditional`]: predicate, `true` → `Success`, `false` → `Failure`
//! - [`Action`]: returns a [`NodeState`] verbatim, so it may span ticks
//! - [`StaticUtilityNode`] / [`DynamicUtilityNode`]: actions that also expose a
//!   utility score for a [`UtilitySelector`](crate::UtilitySelector)

use crate::{Behavior, NodeCore, NodeState, Tick};

/// Boxed predicate evaluated by a [`Conditional`].
pub type ConditionFn<C> = Box<dyn FnMut(&mut Tick<'_, C>) -> bool + Send>;

/// Boxed thunk evaluated by an [`Action`] or utility leaf.
pub type ActionFn<C> = Box<dyn FnMut(&mut Tick<'_, C>) -> NodeState + Send>;

/// Boxed scoring function for utility selection.
pub type UtilityFn<C> = Box<dyn FnMut(&mut Tick<'_, C>) -> f32 + Send>;

/// Wraps a predicate. Never returns `Running`.
pub struct Conditional<C> {
    core: NodeCore<C>,
    predicate: ConditionFn<C>,
}

impl<C> Conditional<C> {
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: FnMut(&mut Tick<'_, C>) -> bool + Send + 'static,
    {
        Self {
            core: NodeCore::new(name),
            predicate: Box::new(predicate),
        }
    }
}

impl<C> Behavior<C> for Conditional<C> {
    fn core(&self) -> &NodeCore<C> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore<C> {
        &mut self.core
    }

    fn on_evaluate(&mut self, tick: &mut Tick<'_, C>) -> NodeState {
        if (self.predicate)(tick) {
            NodeState::Success
        } else {
            NodeState::Failure
        }
    }
}

/// Wraps a thunk whose result is returned as-is.
pub struct Action<C> {
    core: NodeCore<C>,
    action: ActionFn<C>,
}

impl<C> Action<C> {
    pub fn new<F>(name: impl Into<String>, action: F) -> Self
    where
        F: FnMut(&mut Tick<'_, C>) -> NodeState + Send + 'static,
    {
        Self {
            core: NodeCore::new(name),
            action: Box::new(action),
        }
    }
}

impl<C> Behavior<C> for Action<C> {
    fn core(&self) -> &NodeCore<C> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore<C> {
        &mut self.core
    }

    fn on_evaluate(&mut self, tick: &mut Tick<'_, C>) -> NodeState {
        (self.action)(tick)
    }
}

/// Action leaf with a utility score fixed at construction.
pub struct StaticUtilityNode<C> {
    core: NodeCore<C>,
    score: f32,
    action: ActionFn<C>,
}

impl<C> StaticUtilityNode<C> {
    pub fn new<F>(name: impl Into<String>, score: f32, action: F) -> Self
    where
        F: FnMut(&mut Tick<'_, C>) -> NodeState + Send + 'static,
    {
        Self {
            core: NodeCore::new(name),
            score,
            action: Box::new(action),
        }
    }

    pub fn score(&self) -> f32 {
        self.score
    }
}

impl<C> Behavior<C> for StaticUtilityNode<C> {
    fn core(&self) -> &NodeCore<C> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore<C> {
        &mut self.core
    }

    fn on_evaluate(&mut self, tick: &mut Tick<'_, C>) -> NodeState {
        (self.action)(tick)
    }

    fn utility(&mut self, _tick: &mut Tick<'_, C>) -> Option<f32> {
        Some(self.score)
    }
}

/// Action leaf whose utility is recomputed every time it is asked for.
pub struct DynamicUtilityNode<C> {
    core: NodeCore<C>,
    scorer: UtilityFn<C>,
    action: ActionFn<C>,
}

impl<C> DynamicUtilityNode<C> {
    pub fn new<S, F>(name: impl Into<String>, scorer: S, action: F) -> Self
    where
        S: FnMut(&mut Tick<'_, C>) -> f32 + Send + 'static,
        F: FnMut(&mut Tick<'_, C>) -> NodeState + Send + 'static,
    {
        Self {
            core: NodeCore::new(name),
            scorer: Box::new(scorer),
            action: Box::new(action),
        }
    }
}

impl<C> Behavior<C> for DynamicUtilityNode<C> {
    fn core(&self) -> &NodeCore<C> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore<C> {
        &mut self.core
    }

    fn on_evaluate(&mut self, tick: &mut Tick<'_, C>) -> NodeState {
        (self.action)(tick)
    }

    fn utility(&mut self, tick: &mut Tick<'_, C>) -> Option<f32> {
        Some((self.scorer)(tick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TreeState;

    #[derive(Default)]
    struct Counter {
        hits: u32,
        scored: u32,
    }

    #[test]
    fn conditional_maps_bool_to_state() {
        let mut yes = Conditional::new("yes", |_: &mut Tick<'_, Counter>| true);
        let mut no = Conditional::new("no", |_: &mut Tick<'_, Counter>| false);
        let mut ctx = Counter::default();
        let mut state = TreeState::new();

        assert_eq!(yes.evaluate(&mut Tick::new(&mut ctx, &mut state)), NodeState::Success);
        assert_eq!(no.evaluate(&mut Tick::new(&mut ctx, &mut state)), NodeState::Failure);
    }

    #[test]
    fn action_returns_thunk_result() {
        let mut remaining = 2;
        let mut action = Action::new("dig", move |tick: &mut Tick<'_, Counter>| {
            tick.agent_mut().hits += 1;
            if remaining == 0 {
                NodeState::Success
            } else {
                remaining -= 1;
                NodeState::Running
            }
        });
        let mut ctx = Counter::default();
        let mut state = TreeState::new();

        let results: Vec<NodeState> = (0..3)
            .map(|_| action.evaluate(&mut Tick::new(&mut ctx, &mut state)))
            .collect();

        assert_eq!(
            results,
            vec![NodeState::Running, NodeState::Running, NodeState::Success]
        );
        assert_eq!(ctx.hits, 3);
    }

    #[test]
    fn dynamic_utility_is_never_cached() {
        let mut node = DynamicUtilityNode::new(
            "hunt",
            |tick: &mut Tick<'_, Counter>| {
                tick.agent_mut().scored += 1;
                tick.agent().scored as f32
            },
            |_: &mut Tick<'_, Counter>| NodeState::Success,
        );
        let mut ctx = Counter::default();
        let mut state = TreeState::new();

        assert_eq!(node.utility(&mut Tick::new(&mut ctx, &mut state)), Some(1.0));
        assert_eq!(node.utility(&mut Tick::new(&mut ctx, &mut state)), Some(2.0));
    }

    #[test]
    fn static_utility_exposes_its_score() {
        let mut node = StaticUtilityNode::new("idle", 0.25, |_: &mut Tick<'_, Counter>| {
            NodeState::Success
        });
        let mut ctx = Counter::default();
        let mut state = TreeState::new();

        assert_eq!(node.score(), 0.25);
        assert_eq!(node.utility(&mut Tick::new(&mut ctx, &mut state)), Some(0.25));
        assert_eq!(node.evaluate(&mut Tick::new(&mut ctx, &mut state)), NodeState::Success);
    }
}
