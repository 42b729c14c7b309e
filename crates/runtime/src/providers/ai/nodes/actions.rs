//! Action nodes for swamp behavior trees.
//!
//! Actions translate a decision into world commands. Movement actions keep
//! returning `Running` while the agent travels and remember their goal in the
//! tree's blackboard, scoped by a category from
//! [`memo`](crate::providers::ai::memo).

use behavior_tree::builder::{action, dynamic_utility, static_utility};
use behavior_tree::{Blackboard, NodeState, Tick};
use game_core::{EntityId, Vec2, World};

use crate::providers::ai::memo::{Fleeing, Hunting, Patrol, TARGET, Wandering};
use crate::providers::ai::subtrees::Subtree;

/// Utility of wandering. Anything the frog can actually do scores higher.
pub const WANDER_UTILITY: f32 = 0.1;

/// Utility of firing a bubble when a snake is in range.
pub const SHOOT_UTILITY: f32 = 2.0;

/// Distance at which hunting a fly is worth half as much as one in reach.
const HUNT_FALLOFF: f32 = 100.0;

// ============================================================================
// Frog actions
// ============================================================================

/// Runs away from every snake inside the flee radius.
///
/// Running while any snake is still close, Success once the frog is clear.
pub fn flee() -> Subtree {
    action("flee", |tick: &mut Tick<'_, World>| {
        let (world, blackboard) = tick.split_mut();
        let Some(target) = flee_target(world) else {
            blackboard.remove_value_for::<Fleeing>(TARGET);
            world.set_frog_target(None);
            return NodeState::Success;
        };

        tracing::debug!(x = target.x, y = target.y, "frog fleeing");
        blackboard.set_value_for::<Fleeing, _>(TARGET, target);
        world.set_frog_target(Some(target));
        NodeState::Running
    })
}

/// Point to run to, or `None` when no snake is close.
///
/// Aims away from the threats, weighted by proximity, and bends toward the
/// arena center when a wall would pin the frog.
pub fn flee_target(world: &World) -> Option<Vec2> {
    let frog = world.frog().position;
    let config = &world.config().frog;

    let mut threatened = false;
    let mut away = Vec2::ZERO;
    for snake in world.threats_within(frog, config.flee_radius) {
        threatened = true;
        let offset = frog - snake.position;
        let weight = 1.0 - offset.length() / config.flee_radius;
        away += offset.normalized() * weight.max(0.05);
    }
    if !threatened {
        return None;
    }

    let to_center = (world.center() - frog).normalized();
    let mut direction = away.normalized();
    if direction == Vec2::ZERO {
        direction = to_center;
    }

    let target = world.clamp_to_arena(frog + direction * config.flee_distance);
    if target.distance(frog) < config.flee_distance * 0.5 {
        let bent = (direction + to_center).normalized();
        return Some(world.clamp_to_arena(frog + bent * config.flee_distance));
    }
    Some(target)
}

/// Chases the nearest fly until it is eaten.
///
/// Scores higher the closer the nearest fly is. The hunted fly is remembered
/// under the [`Hunting`] category; the action succeeds once that fly is gone
/// and fails when there is nothing to hunt.
pub fn hunt() -> Subtree {
    dynamic_utility("hunt", hunt_utility, |tick: &mut Tick<'_, World>| {
        let (world, blackboard) = tick.split_mut();
        let frog = world.frog().position;

        let prey = match blackboard.try_get_value_for::<Hunting, EntityId>(TARGET) {
            Some(&fly) => match world.fly(fly) {
                Some(fly) => fly.position,
                None => {
                    tracing::debug!(%fly, "hunted fly gone");
                    blackboard.remove_value_for::<Hunting>(TARGET);
                    world.set_frog_target(None);
                    return NodeState::Success;
                }
            },
            None => match world.nearest_fly(frog) {
                Some((fly, distance)) => {
                    tracing::debug!(%fly, distance, "frog picked a fly");
                    blackboard.set_value_for::<Hunting, _>(TARGET, fly);
                    match world.fly(fly) {
                        Some(fly) => fly.position,
                        None => return NodeState::Failure,
                    }
                }
                None => return NodeState::Failure,
            },
        };

        world.set_frog_target(Some(prey));
        NodeState::Running
    })
}

/// `1 / (1 + d / falloff)` for the nearest fly at distance `d`; 0 with no flies.
pub fn hunt_utility(tick: &mut Tick<'_, World>) -> f32 {
    let world = tick.agent();
    world
        .nearest_fly(world.frog().position)
        .map_or(0.0, |(_, distance)| 1.0 / (1.0 + distance / HUNT_FALLOFF))
}

/// Fires a bubble at the nearest snake in shooting range.
pub fn shoot() -> Subtree {
    dynamic_utility("shoot", shoot_utility, |tick: &mut Tick<'_, World>| {
        let world = tick.agent_mut();
        let frog = world.frog().position;
        let Some(target) = shooting_target(world) else {
            return NodeState::Failure;
        };

        if world.fire_bubble(target - frog) {
            tracing::debug!(x = target.x, y = target.y, "frog shot a bubble");
            NodeState::Success
        } else {
            NodeState::Failure
        }
    })
}

/// [`SHOOT_UTILITY`] when the bubble is ready and a snake is in range, else 0.
pub fn shoot_utility(tick: &mut Tick<'_, World>) -> f32 {
    let world = tick.agent();
    if world.frog().bubble_ready() && shooting_target(world).is_some() {
        SHOOT_UTILITY
    } else {
        0.0
    }
}

fn shooting_target(world: &World) -> Option<Vec2> {
    let frog = world.frog().position;
    let range = world.config().frog.shoot_range;
    world
        .threats_within(frog, range)
        .map(|snake| snake.position)
        .min_by(|a, b| a.distance(frog).total_cmp(&b.distance(frog)))
}

/// Strolls to a random nearby point. Constant low utility.
pub fn wander() -> Subtree {
    static_utility("wander", WANDER_UTILITY, |tick: &mut Tick<'_, World>| {
        let (world, blackboard) = tick.split_mut();
        let frog = world.frog().position;
        let radius = world.config().frog.wander_radius;
        travel::<Wandering>(
            world,
            blackboard,
            frog,
            |world| world.random_point_near(frog, radius),
            |world, target| world.set_frog_target(target),
        )
    })
}

// ============================================================================
// Snake actions
// ============================================================================

/// Stops snake `index` in place for this tick.
pub fn hold_still(index: usize) -> Subtree {
    action("hold still", move |tick: &mut Tick<'_, World>| {
        if tick.agent_mut().set_snake_target(index, None) {
            NodeState::Success
        } else {
            NodeState::Failure
        }
    })
}

/// Snake `index` bites the frog.
pub fn bite(index: usize) -> Subtree {
    action("bite", move |tick: &mut Tick<'_, World>| {
        if tick.agent_mut().bite(index) {
            tracing::debug!(snake = index, "snake bit the frog");
            NodeState::Success
        } else {
            NodeState::Failure
        }
    })
}

/// Chases the frog.
///
/// Running while closing in, Success on reaching bite range, Failure when the
/// frog is dead or has left the snake's leash.
pub fn chase(index: usize) -> Subtree {
    action("chase", move |tick: &mut Tick<'_, World>| {
        let world = tick.agent_mut();
        let frog = world.frog().clone();
        let config = world.config().snake.clone();
        let Some(snake) = world.snake(index) else {
            return NodeState::Failure;
        };

        if !frog.is_alive() || snake.home.distance(frog.position) > config.leash_radius {
            world.set_snake_target(index, None);
            return NodeState::Failure;
        }
        if snake.position.distance(frog.position) <= config.bite_range {
            world.set_snake_target(index, None);
            return NodeState::Success;
        }

        world.set_snake_target(index, Some(frog.position));
        NodeState::Running
    })
}

/// Slithers back to the home point. Running until arrival.
pub fn go_home(index: usize) -> Subtree {
    action("go home", move |tick: &mut Tick<'_, World>| {
        let world = tick.agent_mut();
        let arrive = world.config().arena.arrive_radius;
        let Some(snake) = world.snake(index) else {
            return NodeState::Failure;
        };
        let home = snake.home;

        if snake.position.distance(home) <= arrive {
            world.set_snake_target(index, None);
            NodeState::Success
        } else {
            world.set_snake_target(index, Some(home));
            NodeState::Running
        }
    })
}

/// Patrols to a random point near home. Running until arrival.
pub fn wander_near_home(index: usize) -> Subtree {
    action("wander near home", move |tick: &mut Tick<'_, World>| {
        let (world, blackboard) = tick.split_mut();
        let radius = world.config().snake.patrol_radius;
        let Some(snake) = world.snake(index) else {
            return NodeState::Failure;
        };
        let (position, home) = (snake.position, snake.home);

        travel::<Patrol>(
            world,
            blackboard,
            position,
            |world| world.random_point_near(home, radius),
            |world, target| {
                world.set_snake_target(index, target);
            },
        )
    })
}

/// Moves toward a goal remembered under category `K`, picking one with
/// `pick` when none is remembered. Success (and forgets the goal) on arrival.
fn travel<K: 'static>(
    world: &mut World,
    blackboard: &mut Blackboard,
    position: Vec2,
    pick: impl FnOnce(&mut World) -> Vec2,
    steer: impl FnOnce(&mut World, Option<Vec2>),
) -> NodeState {
    let target = match blackboard.try_get_value_for::<K, Vec2>(TARGET) {
        Some(&target) => target,
        None => {
            let target = pick(world);
            blackboard.set_value_for::<K, _>(TARGET, target);
            target
        }
    };

    if position.distance(target) <= world.config().arena.arrive_radius {
        blackboard.remove_value_for::<K>(TARGET);
        steer(world, None);
        NodeState::Success
    } else {
        steer(world, Some(target));
        NodeState::Running
    }
}
