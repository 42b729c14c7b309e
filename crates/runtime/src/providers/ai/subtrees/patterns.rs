//! Basic guarded patterns shared by the swamp brains.
//!
//! Patterns follow the `action_when_condition()` naming convention where a
//! condition guards an action.

use behavior_tree::builder::{parallel_all, random_selector, repeater, sequence};
use game_core::World;

use crate::providers::ai::nodes::{
    Linger, bite, chase, far_from_home, flee, frog_alive, frog_in_aggro_range, frog_in_bite_range,
    go_home, hold_still, snake_in_flee_radius, snake_stunned, wander_near_home,
};

use super::Subtree;

// ============================================================================
// Frog patterns
// ============================================================================

/// Flee while a snake is inside the flee radius.
pub fn escape_when_threatened() -> Subtree {
    sequence("escape", vec![snake_in_flee_radius(), flee()])
}

// ============================================================================
// Snake patterns
// ============================================================================

/// Hold still while stunned.
pub fn hold_when_stunned(index: usize) -> Subtree {
    sequence("stunned", vec![snake_stunned(index), hold_still(index)])
}

/// Bite the frog when it is in range and the fangs are ready.
pub fn bite_when_close(index: usize) -> Subtree {
    sequence("bite", vec![frog_in_bite_range(index), bite(index)])
}

/// Chase the frog while it is in aggro range, for as long as it lives.
pub fn chase_when_in_aggro(index: usize) -> Subtree {
    sequence(
        "chase",
        vec![
            frog_in_aggro_range(index),
            parallel_all("pursue", vec![chase(index), frog_alive()]),
        ],
    )
}

/// Head home after straying too far.
pub fn return_when_far(index: usize) -> Subtree {
    sequence("return home", vec![far_from_home(index), go_home(index)])
}

/// Randomly either walks two patrol legs or lingers for `linger_ticks`.
pub fn patrol(index: usize, seed: u64, linger_ticks: u32) -> Subtree {
    random_selector(
        "patrol",
        seed,
        vec![
            repeater("patrol legs", 2, wander_near_home(index)),
            Box::new(Linger::<World>::new("linger", linger_ticks)),
        ],
    )
}
