//! Advances the world by one fixed step.
//!
//! Order within a step: cooldowns, movement (frog, snakes, flies, bubbles),
//! bubble hits, fly eating. Events raised by commands since the previous step
//! are returned first.

use crate::entities::{Fly, Snake};
use crate::event::GameEvent;
use crate::math::Vec2;
use crate::world::World;

impl World {
    /// Advances the simulation by `dt` seconds and returns what happened.
    pub fn step(&mut self, dt: f32) -> Vec<GameEvent> {
        let mut events = std::mem::take(&mut self.pending);
        self.elapsed += dt;
        self.steps += 1;

        self.tick_cooldowns(dt);
        self.move_frog(dt);
        self.move_snakes(dt);
        self.move_flies(dt);
        self.move_bubbles(dt, &mut events);
        self.eat_flies(&mut events);

        events
    }

    fn tick_cooldowns(&mut self, dt: f32) {
        self.frog.bubble_cooldown = (self.frog.bubble_cooldown - dt).max(0.0);
        for snake in &mut self.snakes {
            snake.bite_cooldown = (snake.bite_cooldown - dt).max(0.0);
            snake.stunned_for = (snake.stunned_for - dt).max(0.0);
        }
    }

    fn move_frog(&mut self, dt: f32) {
        if !self.frog.alive {
            return;
        }
        if let Some(target) = self.frog.target {
            let next = self
                .frog
                .position
                .move_towards(target, self.frog.speed * dt);
            self.frog.position = self.clamp_to_arena(next);
        }
    }

    fn move_snakes(&mut self, dt: f32) {
        let bounds = self.bounds();
        for snake in self.snakes.iter_mut().filter(|snake| !snake.is_stunned()) {
            slither(snake, dt, bounds);
        }
    }

    fn move_flies(&mut self, dt: f32) {
        let bounds = self.bounds();
        for fly in &mut self.flies {
            drift(fly, dt, bounds);
        }
    }

    fn move_bubbles(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        let bounds = self.bounds();
        let hit_radius = self.config.frog.bubble_radius;
        let stun = self.config.snake.stun_duration;

        let snakes = &mut self.snakes;
        self.bubbles.retain_mut(|bubble| {
            bubble.position += bubble.velocity * dt;
            bubble.ttl -= dt;
            if bubble.ttl <= 0.0 || bubble.position.clamp(Vec2::ZERO, bounds) != bubble.position {
                return false;
            }

            let hit = snakes.iter_mut().find(|snake| {
                !snake.is_stunned() && snake.position.distance(bubble.position) <= hit_radius
            });
            match hit {
                Some(snake) => {
                    snake.stunned_for = stun;
                    snake.target = None;
                    events.push(GameEvent::SnakeStunned { snake: snake.id });
                    false
                }
                None => true,
            }
        });
    }

    fn eat_flies(&mut self, events: &mut Vec<GameEvent>) {
        if !self.frog.alive {
            return;
        }

        let eat_radius = self.config.frog.eat_radius;
        let frog_position = self.frog.position;
        let eaten: Vec<usize> = self
            .flies
            .iter()
            .enumerate()
            .filter(|(_, fly)| fly.position.distance(frog_position) <= eat_radius)
            .map(|(index, _)| index)
            .collect();

        for index in eaten {
            self.frog.flies_eaten += 1;
            events.push(GameEvent::FlyEaten {
                fly: self.flies[index].id,
                total: self.frog.flies_eaten,
            });
            self.respawn_fly(index);
        }
    }

    /// Replaces an eaten fly with a fresh one elsewhere in the arena.
    fn respawn_fly(&mut self, index: usize) {
        let position = self.random_point();
        let velocity = self.random_fly_velocity();
        let id = self.allocate_id();
        self.flies[index] = Fly {
            id,
            position,
            velocity,
        };
    }

    fn bounds(&self) -> Vec2 {
        Vec2::new(self.config.arena.width, self.config.arena.height)
    }
}

fn slither(snake: &mut Snake, dt: f32, bounds: Vec2) {
    if let Some(target) = snake.target {
        snake.position = snake
            .position
            .move_towards(target, snake.speed * dt)
            .clamp(Vec2::ZERO, bounds);
    }
}

/// Straight-line drift that bounces off the arena walls.
fn drift(fly: &mut Fly, dt: f32, bounds: Vec2) {
    let mut next = fly.position + fly.velocity * dt;
    if next.x < 0.0 || next.x > bounds.x {
        fly.velocity.x = -fly.velocity.x;
        next.x = next.x.clamp(0.0, bounds.x);
    }
    if next.y < 0.0 || next.y > bounds.y {
        fly.velocity.y = -fly.velocity.y;
        next.y = next.y.clamp(0.0, bounds.y);
    }
    fly.position = next;
}
