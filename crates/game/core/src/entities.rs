//! Swamp inhabitants: the frog, snakes, flies and the frog's bubbles.

use std::fmt;

use crate::config::FrogConfig;
use crate::math::Vec2;

/// Identifier for snakes and flies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The player-less protagonist. Eats flies, fires bubbles, flees snakes.
#[derive(Clone, Debug, PartialEq)]
pub struct Frog {
    pub position: Vec2,
    /// Movement target set by the frog's brain.
    pub target: Option<Vec2>,
    pub speed: f32,
    pub health: u32,
    pub max_health: u32,
    pub flies_eaten: u32,
    /// Seconds until the next bubble may be fired.
    pub bubble_cooldown: f32,
    pub alive: bool,
}

impl Frog {
    pub fn new(position: Vec2, config: &FrogConfig) -> Self {
        Self {
            position,
            target: None,
            speed: config.speed,
            health: config.max_health,
            max_health: config.max_health,
            flies_eaten: 0,
            bubble_cooldown: 0.0,
            alive: true,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn bubble_ready(&self) -> bool {
        self.alive && self.bubble_cooldown <= 0.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Snake {
    pub id: EntityId,
    pub position: Vec2,
    /// Patrol anchor; snakes never chase further than their leash from it.
    pub home: Vec2,
    pub target: Option<Vec2>,
    pub speed: f32,
    pub bite_cooldown: f32,
    pub stunned_for: f32,
}

impl Snake {
    pub fn new(id: EntityId, home: Vec2, speed: f32) -> Self {
        Self {
            id,
            position: home,
            home,
            target: None,
            speed,
            bite_cooldown: 0.0,
            stunned_for: 0.0,
        }
    }

    #[inline]
    pub fn is_stunned(&self) -> bool {
        self.stunned_for > 0.0
    }

    /// True when the snake is neither stunned nor recovering from a bite.
    #[inline]
    pub fn can_bite(&self) -> bool {
        !self.is_stunned() && self.bite_cooldown <= 0.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Fly {
    pub id: EntityId,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Projectile fired by the frog. Stuns the first snake it touches.
#[derive(Clone, Debug, PartialEq)]
pub struct Bubble {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Remaining lifetime in seconds.
    pub ttl: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_cannot_bite_while_stunned_or_cooling_down() {
        let mut snake = Snake::new(EntityId(1), Vec2::ZERO, 10.0);
        assert!(snake.can_bite());

        snake.stunned_for = 0.5;
        assert!(!snake.can_bite());

        snake.stunned_for = 0.0;
        snake.bite_cooldown = 0.1;
        assert!(!snake.can_bite());
    }

    #[test]
    fn dead_frog_cannot_shoot() {
        let mut frog = Frog::new(Vec2::ZERO, &FrogConfig::default());
        assert!(frog.bubble_ready());

        frog.alive = false;
        assert!(!frog.bubble_ready());
    }
}
