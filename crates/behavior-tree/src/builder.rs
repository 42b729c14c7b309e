//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose
//! `Box::new(Sequence::new("name", vec![...]))`, you can use shorter functions
//! like `sequence("name", vec![...])`.

use crate::{
    Action, Behavior, Conditional, DynamicUtilityNode, Inverter, NodeState, Parallel,
    RandomSelector, Repeater, Selector, Sequence, StaticUtilityNode, Tick,
};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(name, children))`.
#[inline]
pub fn sequence<C: 'static>(
    name: &str,
    children: Vec<Box<dyn Behavior<C>>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(name, children))
}

/// Creates a prioritized selector node.
///
/// Shorthand for `Box::new(Selector::new(name, children))`.
#[inline]
pub fn selector<C: 'static>(
    name: &str,
    children: Vec<Box<dyn Behavior<C>>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(name, children))
}

/// Creates a selector that resumes at its running child.
///
/// Shorthand for `Box::new(Selector::resumable(name, children))`.
#[inline]
pub fn resumable_selector<C: 'static>(
    name: &str,
    children: Vec<Box<dyn Behavior<C>>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Selector::resumable(name, children))
}

/// Creates an AND-mode parallel node.
#[inline]
pub fn parallel_all<C: 'static>(
    name: &str,
    children: Vec<Box<dyn Behavior<C>>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Parallel::all(name, children))
}

/// Creates an OR-mode parallel node.
#[inline]
pub fn parallel_any<C: 'static>(
    name: &str,
    children: Vec<Box<dyn Behavior<C>>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Parallel::any(name, children))
}

/// Creates a random selector seeded with `seed`.
#[inline]
pub fn random_selector<C: 'static>(
    name: &str,
    seed: u64,
    children: Vec<Box<dyn Behavior<C>>>,
) -> Box<dyn Behavior<C>> {
    Box::new(RandomSelector::with_seed(name, seed, children))
}

/// Creates an inverter node.
///
/// Shorthand for `Box::new(Inverter::new(name, child))`.
#[inline]
pub fn inverter<C: 'static>(name: &str, child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Inverter::new(name, child))
}

/// Creates a repeater node.
#[inline]
pub fn repeater<C: 'static>(
    name: &str,
    times: u32,
    child: Box<dyn Behavior<C>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Repeater::new(name, times, child))
}

/// Creates a conditional leaf.
#[inline]
pub fn condition<C: 'static, F>(name: &str, predicate: F) -> Box<dyn Behavior<C>>
where
    F: FnMut(&mut Tick<'_, C>) -> bool + Send + 'static,
{
    Box::new(Conditional::new(name, predicate))
}

/// Creates an action leaf.
#[inline]
pub fn action<C: 'static, F>(name: &str, action: F) -> Box<dyn Behavior<C>>
where
    F: FnMut(&mut Tick<'_, C>) -> NodeState + Send + 'static,
{
    Box::new(Action::new(name, action))
}

/// Creates an action leaf with a constant utility score.
#[inline]
pub fn static_utility<C: 'static, F>(name: &str, score: f32, action: F) -> Box<dyn Behavior<C>>
where
    F: FnMut(&mut Tick<'_, C>) -> NodeState + Send + 'static,
{
    Box::new(StaticUtilityNode::new(name, score, action))
}

/// Creates an action leaf whose utility is computed by `scorer` on demand.
#[inline]
pub fn dynamic_utility<C: 'static, S, F>(name: &str, scorer: S, action: F) -> Box<dyn Behavior<C>>
where
    S: FnMut(&mut Tick<'_, C>) -> f32 + Send + 'static,
    F: FnMut(&mut Tick<'_, C>) -> NodeState + Send + 'static,
{
    Box::new(DynamicUtilityNode::new(name, scorer, action))
}
