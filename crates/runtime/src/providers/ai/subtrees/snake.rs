//! A snake's brain.

use behavior_tree::BehaviorTree;
use behavior_tree::builder::selector;
use game_core::{GameConfig, World};

use super::patterns::{
    bite_when_close, chase_when_in_aggro, hold_when_stunned, patrol, return_when_far,
};

/// Per-snake tree parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnakeBrainConfig {
    /// Seed for the patrol choice.
    pub seed: u64,
    pub linger_ticks: u32,
    pub debug: bool,
}

impl SnakeBrainConfig {
    /// Derives a distinct patrol seed for snake `index` from the game seed.
    pub fn for_snake(config: &GameConfig, index: usize) -> Self {
        Self {
            seed: config.seed.wrapping_add(index as u64 + 1),
            linger_ticks: config.snake.linger_steps,
            debug: false,
        }
    }
}

/// Builds the behavior tree controlling snake `index`.
///
/// Priorities, highest first: stay put while stunned, bite, chase the frog,
/// return home, patrol.
pub fn snake_tree(index: usize, brain: SnakeBrainConfig) -> BehaviorTree<World> {
    let root = selector(
        "snake",
        vec![
            hold_when_stunned(index),
            bite_when_close(index),
            chase_when_in_aggro(index),
            return_when_far(index),
            patrol(index, brain.seed, brain.linger_ticks),
        ],
    );
    BehaviorTree::new(root, brain.debug)
}
