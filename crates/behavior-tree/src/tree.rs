//! Per-tick driver that owns a root node and its shared state.

use crate::{ActiveNode, Behavior, Blackboard, NodeId, NodeState, Root, Tick, TreeState};

/// A behavior tree: one [`Root`], one [`Blackboard`] and the bookkeeping
/// needed to drive it once per simulation step.
///
/// The embedding agent calls [`update`](Self::update) once per step with its
/// own context. Trees are fully independent of each other.
///
/// # Example
///
/// ```
/// use behavior_tree::{Action, BehaviorTree, NodeState, Tick};
///
/// let mut tree = BehaviorTree::new(
///     Box::new(Action::new("step", |tick: &mut Tick<'_, u32>| {
///         *tick.agent_mut() += 1;
///         NodeState::Running
///     })),
///     true,
/// );
///
/// let mut steps = 0;
/// assert_eq!(tree.update(&mut steps), NodeState::Running);
/// assert_eq!(steps, 1);
/// assert_eq!(tree.active_nodes().len(), 2);
/// assert_eq!(tree.debug_log().len(), 2);
/// ```
pub struct BehaviorTree<C> {
    root: Root<C>,
    state: TreeState,
    active: bool,
    debug: bool,
    debug_log: Vec<String>,
    ticks: u64,
}

impl<C> BehaviorTree<C> {
    /// Creates an active tree whose root delegates to `root_child`.
    pub fn new(root_child: Box<dyn Behavior<C>>, debug: bool) -> Self {
        Self {
            root: Root::new(root_child),
            state: TreeState::new(),
            active: true,
            debug,
            debug_log: Vec::new(),
            ticks: 0,
        }
    }

    /// Evaluates the root once.
    ///
    /// An inactive tree returns `Failure` without evaluating any node. Node
    /// episodes that were Running when the tree was paused are left as they
    /// are and resume once it is reactivated.
    pub fn update(&mut self, agent: &mut C) -> NodeState {
        if !self.active {
            return NodeState::Failure;
        }

        self.ticks += 1;
        self.state.clear_active();
        if self.debug {
            self.debug_log.push(format!("[tick {}] update", self.ticks));
        }

        let result = self.root.evaluate(&mut Tick::new(agent, &mut self.state));

        if self.debug {
            self.debug_log.push(format!(
                "[tick {}] result={} active={}",
                self.ticks,
                result,
                self.state.active_count()
            ));
        }
        tracing::debug!(
            tick = self.ticks,
            %result,
            active = self.state.active_count(),
            "behavior tree updated"
        );

        result
    }

    /// Pauses (`false`) or resumes (`true`) the tree.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enables or disables the debug transcript. Never affects evaluation.
    pub fn set_debug_mode(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Debug transcript, oldest line first.
    pub fn debug_log(&self) -> &[String] {
        &self.debug_log
    }

    pub fn clear_debug_log(&mut self) {
        self.debug_log.clear();
    }

    pub fn blackboard(&self) -> &Blackboard {
        self.state.blackboard()
    }

    pub fn blackboard_mut(&mut self) -> &mut Blackboard {
        self.state.blackboard_mut()
    }

    /// Nodes that were Running at the end of the latest update.
    ///
    /// Intended for visualization; do not drive game logic from it.
    pub fn active_nodes(&self) -> Vec<ActiveNode> {
        self.state.active_nodes()
    }

    pub fn is_node_active(&self, id: NodeId) -> bool {
        self.state.is_node_active(id)
    }

    /// Number of updates that actually evaluated the tree.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn root(&self) -> &Root<C> {
        &self.root
    }

    /// Mutable root access for attaching nodes at runtime.
    pub fn root_mut(&mut self) -> &mut Root<C> {
        &mut self.root
    }

    pub fn state(&self) -> &TreeState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Conditional, Selector, Sequence};

    #[derive(Default)]
    struct Agent {
        calls: u32,
        hungry: bool,
    }

    fn counting(state: NodeState) -> Box<dyn Behavior<Agent>> {
        Box::new(Action::new("count", move |tick: &mut Tick<'_, Agent>| {
            tick.agent_mut().calls += 1;
            state
        }))
    }

    fn forage_tree(debug: bool) -> BehaviorTree<Agent> {
        BehaviorTree::new(
            Box::new(Selector::new(
                "forage",
                vec![
                    Box::new(Sequence::new(
                        "eat",
                        vec![
                            Box::new(Conditional::new("hungry", |tick: &mut Tick<'_, Agent>| {
                                tick.agent().hungry
                            })),
                            counting(NodeState::Running),
                        ],
                    )),
                    counting(NodeState::Success),
                ],
            )),
            debug,
        )
    }

    #[test]
    fn inactive_tree_never_touches_leaves() {
        let mut tree = BehaviorTree::new(counting(NodeState::Success), false);
        let mut agent = Agent::default();

        tree.set_active(false);
        for _ in 0..5 {
            assert_eq!(tree.update(&mut agent), NodeState::Failure);
        }

        assert_eq!(agent.calls, 0);
        assert_eq!(tree.tick_count(), 0);

        tree.set_active(true);
        assert_eq!(tree.update(&mut agent), NodeState::Success);
        assert_eq!(agent.calls, 1);
    }

    #[test]
    fn active_nodes_reflect_latest_tick() {
        let mut tree = forage_tree(false);
        let mut agent = Agent {
            hungry: true,
            ..Agent::default()
        };

        assert_eq!(tree.update(&mut agent), NodeState::Running);
        let mut names: Vec<String> = tree.active_nodes().into_iter().map(|n| n.name).collect();
        names.sort();
        assert_eq!(names, vec!["Root", "count", "eat", "forage"]);

        // Running nodes are listed once no matter how many ticks they span.
        tree.update(&mut agent);
        assert_eq!(tree.active_nodes().len(), 4);
    }

    #[test]
    fn active_set_is_rebuilt_every_update() {
        let mut tree = BehaviorTree::new(
            Box::new(Selector::new(
                "graze",
                vec![
                    Box::new(Conditional::new("full", |tick: &mut Tick<'_, Agent>| {
                        !tick.agent().hungry
                    })),
                    counting(NodeState::Running),
                ],
            )),
            false,
        );
        let mut agent = Agent {
            hungry: true,
            ..Agent::default()
        };

        assert_eq!(tree.update(&mut agent), NodeState::Running);
        assert_eq!(tree.active_nodes().len(), 3);

        // The running leaf is skipped this tick, so it no longer shows up.
        agent.hungry = false;
        assert_eq!(tree.update(&mut agent), NodeState::Success);
        assert!(tree.active_nodes().is_empty());
    }

    #[test]
    fn debug_mode_only_changes_the_transcript() {
        let mut quiet = forage_tree(false);
        let mut chatty = forage_tree(true);
        let mut quiet_agent = Agent::default();
        let mut chatty_agent = Agent::default();

        for hungry in [false, true, true, false] {
            quiet_agent.hungry = hungry;
            chatty_agent.hungry = hungry;
            assert_eq!(quiet.update(&mut quiet_agent), chatty.update(&mut chatty_agent));
        }

        assert_eq!(quiet_agent.calls, chatty_agent.calls);
        assert!(quiet.debug_log().is_empty());
        assert_eq!(chatty.debug_log().len(), 8);
        assert_eq!(chatty.debug_log()[0], "[tick 1] update");
        assert_eq!(chatty.debug_log()[1], "[tick 1] result=Success active=0");

        chatty.clear_debug_log();
        assert!(chatty.debug_log().is_empty());
    }

    #[test]
    fn blackboard_is_shared_by_all_nodes() {
        let mut tree = BehaviorTree::new(
            Box::new(Sequence::new(
                "relay",
                vec![
                    Box::new(Action::new("write", |tick: &mut Tick<'_, Agent>| {
                        tick.blackboard_mut().set_value("meal", 3u32);
                        tick.set_data("legacy", true);
                        NodeState::Success
                    })),
                    Box::new(Conditional::new("read", |tick: &mut Tick<'_, Agent>| {
                        tick.blackboard().try_get_value::<u32>("meal") == Some(&3)
                            && tick.get_data::<bool>("legacy") == Some(&true)
                    })),
                ],
            )),
            false,
        );
        let mut agent = Agent::default();

        assert_eq!(tree.update(&mut agent), NodeState::Success);
        assert_eq!(tree.blackboard().try_get_value::<u32>("meal"), Some(&3));

        tree.blackboard_mut().clear();
        assert!(tree.blackboard().is_empty());
    }

    #[test]
    fn root_attached_after_construction_is_evaluated_lazily() {
        let mut tree = BehaviorTree::new(counting(NodeState::Failure), false);
        let mut agent = Agent::default();

        // Root only delegates to its first child.
        tree.root_mut().attach(counting(NodeState::Success));
        assert_eq!(tree.update(&mut agent), NodeState::Failure);
        assert_eq!(agent.calls, 1);
    }
}
