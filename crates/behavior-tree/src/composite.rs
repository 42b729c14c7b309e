//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors:
//!
//! - [`Sequence`]: AND logic, resumes at the running child
//! - [`Selector`]: OR logic, prioritized (rescans from the first child) or
//!   resumable
//! - [`Parallel`]: ticks every child each tick and combines the results
//! - [`RandomSelector`]: commits to one random child per episode
//! - [`UtilitySelector`]: commits to the highest-scoring child per episode
//!
//! None of these abort a child that was left Running when the composite moved
//! on; that child simply resumes the next time it is evaluated.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Behavior, NodeCore, NodeState, Tick, UtilityFn};

/// Executes child behaviors in order until one fails.
///
/// # Semantics
///
/// A `Sequence` evaluates its children from left to right, starting at its
/// cursor:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Running`, the sequence returns `Running` and resumes
///   at the **same child** next tick
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// The cursor returns to the first child at every fresh episode. An empty
/// sequence succeeds.
pub struct Sequence<C> {
    core: NodeCore<C>,
    cursor: usize,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    pub fn new(name: impl Into<String>, children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self {
            core: NodeCore::with_children(name, children),
            cursor: 0,
        }
    }

    /// Index of the child evaluated next.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn core(&self) -> &NodeCore<C> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore<C> {
        &mut self.core
    }

    fn on_initialize(&mut self, _tick: &mut Tick<'_, C>) {
        self.cursor = 0;
    }

    fn on_evaluate(&mut self, tick: &mut Tick<'_, C>) -> NodeState {
        let children = self.core.children_mut();
        while self.cursor < children.len() {
            match children[self.cursor].evaluate(tick) {
                NodeState::Success => self.cursor += 1,
                NodeState::Failure => return NodeState::Failure,
                NodeState::Running => return NodeState::Running,
            }
        }
        NodeState::Success
    }
}

/// Executes child behaviors in order until one succeeds.
///
/// # Semantics
///
/// - If a child returns `Success`, the selector returns `Success`
/// - If a child returns `Running`, the selector returns `Running`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// A **prioritized** selector ([`Selector::new`]) restarts its scan from the
/// first child on every evaluation, so a higher-priority child that becomes
/// viable preempts a running lower-priority one. A **resumable** selector
/// ([`Selector::resumable`]) continues from the child that was Running on the
/// previous tick. Both start from the first child at every fresh episode. An
/// empty selector fails.
pub struct Selector<C> {
    core: NodeCore<C>,
    cursor: usize,
    prioritized: bool,
}

impl<C> Selector<C> {
    /// Creates a prioritized selector.
    pub fn new(name: impl Into<String>, children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self {
            core: NodeCore::with_children(name, children),
            cursor: 0,
            prioritized: true,
        }
    }

    /// Creates a selector that resumes at the previously running child.
    pub fn resumable(name: impl Into<String>, children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self {
            prioritized: false,
            ..Self::new(name, children)
        }
    }

    pub fn is_prioritized(&self) -> bool {
        self.prioritized
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn core(&self) -> &NodeCore<C> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore<C> {
        &mut self.core
    }

    fn on_initialize(&mut self, _tick: &mut Tick<'_, C>) {
        self.cursor = 0;
    }

    fn on_evaluate(&mut self, tick: &mut Tick<'_, C>) -> NodeState {
        if self.prioritized {
            self.cursor = 0;
        }

        let children = self.core.children_mut();
        while self.cursor < children.len() {
            match children[self.cursor].evaluate(tick) {
                NodeState::Success => return NodeState::Success,
                NodeState::Running => return NodeState::Running,
                NodeState::Failure => self.cursor += 1,
            }
        }
        NodeState::Failure
    }
}

/// Evaluates every child on every tick and combines their states.
///
/// # Semantics
///
/// With `require_all_success` (AND mode):
/// - `Failure` if any child failed this tick
/// - `Success` if every child succeeded this tick
/// - `Running` otherwise
///
/// Without it (OR mode):
/// - `Success` if at least one child succeeded this tick
/// - `Failure` if every child failed this tick
/// - `Running` otherwise
///
/// Children are evaluated sequentially in attachment order; no child is
/// skipped, even after the outcome is already decided. A parallel node with
/// no children fails.
pub struct Parallel<C> {
    core: NodeCore<C>,
    require_all_success: bool,
}

impl<C> Parallel<C> {
    pub fn new(
        name: impl Into<String>,
        require_all_success: bool,
        children: Vec<Box<dyn Behavior<C>>>,
    ) -> Self {
        Self {
            core: NodeCore::with_children(name, children),
            require_all_success,
        }
    }

    /// AND mode: succeeds only when every child succeeds on the same tick.
    pub fn all(name: impl Into<String>, children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self::new(name, true, children)
    }

    /// OR mode: succeeds as soon as any child succeeds.
    pub fn any(name: impl Into<String>, children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self::new(name, false, children)
    }
}

impl<C> Behavior<C> for Parallel<C> {
    fn core(&self) -> &NodeCore<C> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore<C> {
        &mut self.core
    }

    fn on_evaluate(&mut self, tick: &mut Tick<'_, C>) -> NodeState {
        if self.core.child_count() == 0 {
            tracing::warn!(node = %self.core.name(), "parallel node has no children");
            return NodeState::Failure;
        }

        let children = self.core.children_mut();
        let total = children.len();
        let mut successes = 0;
        let mut failures = 0;
        for child in children.iter_mut() {
            match child.evaluate(tick) {
                NodeState::Success => successes += 1,
                NodeState::Failure => failures += 1,
                NodeState::Running => {}
            }
        }

        if self.require_all_success {
            if failures > 0 {
                NodeState::Failure
            } else if successes == total {
                NodeState::Success
            } else {
                NodeState::Running
            }
        } else if successes > 0 {
            NodeState::Success
        } else if failures == total {
            NodeState::Failure
        } else {
            NodeState::Running
        }
    }
}

/// Picks one child uniformly at random per episode.
///
/// The chosen child is evaluated on every tick until it terminates; a new
/// child is drawn only when the next episode starts. An empty random selector
/// fails.
pub struct RandomSelector<C> {
    core: NodeCore<C>,
    rng: StdRng,
    selected: Option<usize>,
}

impl<C> RandomSelector<C> {
    /// Creates a random selector seeded from the operating system.
    pub fn new(name: impl Into<String>, children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self::from_rng(name, StdRng::from_entropy(), children)
    }

    /// Creates a random selector with a reproducible sequence of choices.
    pub fn with_seed(
        name: impl Into<String>,
        seed: u64,
        children: Vec<Box<dyn Behavior<C>>>,
    ) -> Self {
        Self::from_rng(name, StdRng::seed_from_u64(seed), children)
    }

    fn from_rng(name: impl Into<String>, rng: StdRng, children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self {
            core: NodeCore::with_children(name, children),
            rng,
            selected: None,
        }
    }

    /// Child committed to in the current episode.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}

impl<C> Behavior<C> for RandomSelector<C> {
    fn core(&self) -> &NodeCore<C> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore<C> {
        &mut self.core
    }

    fn on_initialize(&mut self, _tick: &mut Tick<'_, C>) {
        let count = self.core.child_count();
        self.selected = (count > 0).then(|| self.rng.gen_range(0..count));
    }

    fn on_evaluate(&mut self, tick: &mut Tick<'_, C>) -> NodeState {
        let children = self.core.children_mut();
        match self.selected.filter(|&index| index < children.len()) {
            Some(index) => children[index].evaluate(tick),
            None => NodeState::Failure,
        }
    }
}

enum Scorer<C> {
    /// Explicit scoring closure attached with the child.
    Explicit(UtilityFn<C>),
    /// Ask the child itself through [`Behavior::utility`].
    Intrinsic,
}

/// Executes the child with the highest utility score.
///
/// # Semantics
///
/// At the start of every episode each child's scoring function is called once
/// and the child with the **strictly highest** score is selected; ties go to
/// the lowest index, and NaN scores are never selected. Only the selected
/// child is evaluated until it terminates, after which the next episode
/// re-scores.
///
/// Children and scorers are attached in pairs through
/// [`add_child`](Self::add_child) or [`add_scored`](Self::add_scored). A
/// child attached any other way leaves the selector without a scorer for it;
/// the mismatch is detected at evaluation and the selector fails, as it does
/// when it has no children or nothing is selectable.
///
/// # Example
///
/// ```
/// use behavior_tree::{NodeState, StaticUtilityNode, Tick, TreeState, UtilitySelector, Behavior};
///
/// let mut selector = UtilitySelector::<u32>::new("activity")
///     .with_scored(Box::new(StaticUtilityNode::new("rest", 0.2, |_: &mut Tick<'_, u32>| {
///         NodeState::Success
///     })))
///     .with_child(
///         Box::new(StaticUtilityNode::new("eat", 0.0, |tick: &mut Tick<'_, u32>| {
///             *tick.agent_mut() += 1;
///             NodeState::Success
///         })),
///         |_: &mut Tick<'_, u32>| 0.9,
///     );
///
/// let mut meals = 0;
/// let mut state = TreeState::new();
/// assert_eq!(selector.evaluate(&mut Tick::new(&mut meals, &mut state)), NodeState::Success);
/// assert_eq!(meals, 1);
/// ```
pub struct UtilitySelector<C> {
    core: NodeCore<C>,
    scorers: Vec<Scorer<C>>,
    selected: Option<usize>,
}

impl<C> UtilitySelector<C> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            core: NodeCore::new(name),
            scorers: Vec::new(),
            selected: None,
        }
    }

    /// Attaches `child` scored by `utility`.
    pub fn add_child<F>(&mut self, child: Box<dyn Behavior<C>>, utility: F)
    where
        F: FnMut(&mut Tick<'_, C>) -> f32 + Send + 'static,
    {
        self.core.attach(child);
        self.scorers.push(Scorer::Explicit(Box::new(utility)));
    }

    /// Attaches a utility leaf scored by its own [`Behavior::utility`].
    pub fn add_scored(&mut self, child: Box<dyn Behavior<C>>) {
        self.core.attach(child);
        self.scorers.push(Scorer::Intrinsic);
    }

    pub fn with_child<F>(mut self, child: Box<dyn Behavior<C>>, utility: F) -> Self
    where
        F: FnMut(&mut Tick<'_, C>) -> f32 + Send + 'static,
    {
        self.add_child(child, utility);
        self
    }

    pub fn with_scored(mut self, child: Box<dyn Behavior<C>>) -> Self {
        self.add_scored(child);
        self
    }

    /// Child committed to in the current episode.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, tick: &mut Tick<'_, C>) -> Option<usize> {
        let children = self.core.children_mut();
        if children.is_empty() || children.len() != self.scorers.len() {
            tracing::warn!(
                children = children.len(),
                scorers = self.scorers.len(),
                "utility selector has no children or unmatched scorers"
            );
            return None;
        }

        let mut best: Option<(usize, f32)> = None;
        for (index, (child, scorer)) in children
            .iter_mut()
            .zip(self.scorers.iter_mut())
            .enumerate()
        {
            let score = match scorer {
                Scorer::Explicit(utility) => Some(utility(tick)),
                Scorer::Intrinsic => child.utility(tick),
            };
            let Some(score) = score.filter(|score| !score.is_nan()) else {
                continue;
            };
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((index, score));
            }
        }

        if let Some((index, score)) = best {
            tracing::debug!(
                node = %self.core.name(),
                index,
                score,
                "utility selector picked child"
            );
        }
        best.map(|(index, _)| index)
    }
}

impl<C> Behavior<C> for UtilitySelector<C> {
    fn core(&self) -> &NodeCore<C> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore<C> {
        &mut self.core
    }

    fn on_initialize(&mut self, tick: &mut Tick<'_, C>) {
        self.selected = self.select(tick);
    }

    fn on_evaluate(&mut self, tick: &mut Tick<'_, C>) -> NodeState {
        let children = self.core.children_mut();
        match self.selected.filter(|&index| index < children.len()) {
            Some(index) => children[index].evaluate(tick),
            None => NodeState::Failure,
        }
    }
}
