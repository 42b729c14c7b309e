//! State returned by behavior nodes.

use std::fmt;

/// The result of evaluating a behavior node for one tick.
///
/// # Tick Semantics
///
/// `Running` is not a suspended computation. It is the value a node returns
/// when its work spans several ticks; the node keeps whatever continuation
/// state it needs (cursors, counters, node memory) and is evaluated again on
/// the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeState {
    /// The behavior has not finished yet and wants to be evaluated again.
    Running,

    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action finished.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be performed.
    Failure,
}

impl NodeState {
    /// Returns `true` if this state is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, NodeState::Running)
    }

    /// Returns `true` if this state is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, NodeState::Success)
    }

    /// Returns `true` if this state is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, NodeState::Failure)
    }

    /// Returns `true` for `Success` and `Failure`, the states that end an episode.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }

    /// Swaps Success and Failure. `Running` is returned unchanged.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            NodeState::Success => NodeState::Failure,
            NodeState::Failure => NodeState::Success,
            NodeState::Running => NodeState::Running,
        }
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NodeState::Running => "Running",
            NodeState::Success => "Success",
            NodeState::Failure => "Failure",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert_swaps_terminal_states_only() {
        assert_eq!(NodeState::Success.invert(), NodeState::Failure);
        assert_eq!(NodeState::Failure.invert(), NodeState::Success);
        assert_eq!(NodeState::Running.invert(), NodeState::Running);
    }

    #[test]
    fn terminal_states() {
        assert!(NodeState::Success.is_terminal());
        assert!(NodeState::Failure.is_terminal());
        assert!(!NodeState::Running.is_terminal());
    }
}
