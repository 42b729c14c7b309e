//! Condition nodes for swamp behavior trees.
//!
//! Condition nodes check the world and return Success or Failure. They never
//! issue commands.

use behavior_tree::builder::condition;
use behavior_tree::Tick;
use game_core::World;

use crate::providers::ai::subtrees::Subtree;

/// Succeeds once the frog has died.
pub fn frog_dead() -> Subtree {
    condition("frog dead", |tick: &mut Tick<'_, World>| {
        !tick.agent().frog().is_alive()
    })
}

/// Succeeds while the frog is alive.
pub fn frog_alive() -> Subtree {
    condition("frog alive", |tick: &mut Tick<'_, World>| {
        tick.agent().frog().is_alive()
    })
}

/// Succeeds when an active snake is inside the frog's flee radius.
pub fn snake_in_flee_radius() -> Subtree {
    condition("snake in flee radius", |tick: &mut Tick<'_, World>| {
        let world = tick.agent();
        let frog = world.frog().position;
        world
            .threats_within(frog, world.config().frog.flee_radius)
            .next()
            .is_some()
    })
}

/// Succeeds while snake `index` is stunned.
pub fn snake_stunned(index: usize) -> Subtree {
    condition("stunned", move |tick: &mut Tick<'_, World>| {
        tick.agent()
            .snake(index)
            .is_some_and(|snake| snake.is_stunned())
    })
}

/// Succeeds when snake `index` is off cooldown and the live frog is within
/// bite range.
pub fn frog_in_bite_range(index: usize) -> Subtree {
    condition("frog in bite range", move |tick: &mut Tick<'_, World>| {
        let world = tick.agent();
        let frog = world.frog();
        let range = world.config().snake.bite_range;
        world.snake(index).is_some_and(|snake| {
            frog.is_alive() && snake.can_bite() && snake.position.distance(frog.position) <= range
        })
    })
}

/// Succeeds when the live frog is within aggro range of snake `index` and
/// still inside the snake's leash around home.
pub fn frog_in_aggro_range(index: usize) -> Subtree {
    condition("frog in aggro range", move |tick: &mut Tick<'_, World>| {
        let world = tick.agent();
        let frog = world.frog();
        let snake_config = &world.config().snake;
        world.snake(index).is_some_and(|snake| {
            frog.is_alive()
                && snake.position.distance(frog.position) <= snake_config.aggro_range
                && snake.home.distance(frog.position) <= snake_config.leash_radius
        })
    })
}

/// Succeeds when snake `index` has strayed beyond its patrol radius.
pub fn far_from_home(index: usize) -> Subtree {
    condition("far from home", move |tick: &mut Tick<'_, World>| {
        let world = tick.agent();
        let radius = world.config().snake.patrol_radius;
        world
            .snake(index)
            .is_some_and(|snake| snake.position.distance(snake.home) > radius)
    })
}
