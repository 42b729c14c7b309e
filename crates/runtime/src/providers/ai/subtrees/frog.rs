//! The frog's brain.

use behavior_tree::builder::{inverter, selector, sequence};
use behavior_tree::{BehaviorTree, UtilitySelector};
use game_core::World;

use crate::providers::ai::nodes::{frog_dead, hunt, shoot, wander};

use super::Subtree;
use super::patterns::escape_when_threatened;

/// Builds the frog's behavior tree.
///
/// Does nothing once dead. Otherwise escapes nearby snakes first, and when
/// safe picks the most useful of hunting, shooting and wandering.
pub fn frog_tree(debug: bool) -> BehaviorTree<World> {
    let brain = sequence(
        "frog",
        vec![
            inverter("alive", frog_dead()),
            selector("survive", vec![escape_when_threatened(), frog_activity()]),
        ],
    );
    BehaviorTree::new(brain, debug)
}

/// Utility choice between hunting flies, shooting snakes and wandering.
pub fn frog_activity() -> Subtree {
    Box::new(
        UtilitySelector::new("activity")
            .with_scored(hunt())
            .with_scored(shoot())
            .with_scored(wander()),
    )
}
