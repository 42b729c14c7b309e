//! Blackboard categories used by the swamp brains.
//!
//! Every brain stores its current movement goal under the same key text,
//! [`TARGET`], scoped by what the goal is for. Hunting and wandering can
//! therefore both remember a "target" without overwriting each other.

/// Shared key text for per-activity goals.
pub const TARGET: &str = "target";

/// Fly the frog is currently hunting (`EntityId`).
pub struct Hunting;

/// Point the frog is wandering to (`Vec2`).
pub struct Wandering;

/// Point the frog is fleeing to (`Vec2`).
pub struct Fleeing;

/// Point a snake is patrolling to (`Vec2`).
pub struct Patrol;
