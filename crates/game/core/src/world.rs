//! Swamp world state, sensors and the commands issued by agent brains.
//!
//! Brains read the world through the sensor methods and act only through
//! commands (`set_*_target`, [`World::fire_bubble`], [`World::bite`]). Commands
//! take effect immediately; movement and contact rules run in
//! [`World::step`](crate::engine).

use std::f32::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::entities::{Bubble, EntityId, Fly, Frog, Snake};
use crate::event::GameEvent;
use crate::math::Vec2;

pub struct World {
    pub(crate) config: GameConfig,
    pub(crate) frog: Frog,
    pub(crate) snakes: Vec<Snake>,
    pub(crate) flies: Vec<Fly>,
    pub(crate) bubbles: Vec<Bubble>,
    pub(crate) rng: StdRng,
    pub(crate) pending: Vec<GameEvent>,
    pub(crate) elapsed: f32,
    pub(crate) steps: u64,
    next_id: u32,
}

impl World {
    /// Populates a swamp: the frog in the middle, `snakes` snakes on a ring
    /// around it and `config.fly.count` flies at random positions.
    pub fn new(config: GameConfig, snakes: usize) -> Self {
        let mut world = Self::empty(config);

        let center = world.center();
        let ring = world.config.arena.width.min(world.config.arena.height) * 0.4;
        for index in 0..snakes {
            let angle = index as f32 * TAU / snakes as f32;
            let home = center + Vec2::new(angle.cos(), angle.sin()) * ring;
            world.add_snake(home);
        }

        for _ in 0..world.config.fly.count {
            let position = world.random_point();
            let velocity = world.random_fly_velocity();
            world.add_fly(position, velocity);
        }

        world
    }

    /// A swamp holding only the frog, at the arena center.
    pub fn empty(config: GameConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        let center = Vec2::new(config.arena.width * 0.5, config.arena.height * 0.5);
        let frog = Frog::new(center, &config.frog);

        Self {
            config,
            frog,
            snakes: Vec::new(),
            flies: Vec::new(),
            bubbles: Vec::new(),
            rng,
            pending: Vec::new(),
            elapsed: 0.0,
            steps: 0,
            next_id: 1,
        }
    }

    /// Adds a snake resting at `home` and returns its index.
    pub fn add_snake(&mut self, home: Vec2) -> usize {
        let id = self.allocate_id();
        let home = self.clamp_to_arena(home);
        let speed = self.config.snake.speed;
        self.snakes.push(Snake::new(id, home, speed));
        self.snakes.len() - 1
    }

    pub fn add_fly(&mut self, position: Vec2, velocity: Vec2) -> EntityId {
        let id = self.allocate_id();
        let position = self.clamp_to_arena(position);
        self.flies.push(Fly {
            id,
            position,
            velocity,
        });
        id
    }

    pub(crate) fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    // ------------------------------------------------------------------
    // sensors

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn frog(&self) -> &Frog {
        &self.frog
    }

    /// Direct frog access for scenario setup.
    pub fn frog_mut(&mut self) -> &mut Frog {
        &mut self.frog
    }

    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    pub fn snake(&self, index: usize) -> Option<&Snake> {
        self.snakes.get(index)
    }

    /// Direct snake access for scenario setup.
    pub fn snake_mut(&mut self, index: usize) -> Option<&mut Snake> {
        self.snakes.get_mut(index)
    }

    pub fn flies(&self) -> &[Fly] {
        &self.flies
    }

    pub fn fly(&self, id: EntityId) -> Option<&Fly> {
        self.flies.iter().find(|fly| fly.id == id)
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    /// Simulated seconds since the world was created.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn step_count(&self) -> u64 {
        self.steps
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.config.arena.width * 0.5,
            self.config.arena.height * 0.5,
        )
    }

    /// Index and distance of the snake closest to `from`.
    pub fn nearest_snake(&self, from: Vec2) -> Option<(usize, f32)> {
        self.snakes
            .iter()
            .enumerate()
            .map(|(index, snake)| (index, snake.position.distance(from)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Id and distance of the fly closest to `from`.
    pub fn nearest_fly(&self, from: Vec2) -> Option<(EntityId, f32)> {
        self.flies
            .iter()
            .map(|fly| (fly.id, fly.position.distance(from)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Snakes closer to `from` than `radius`, excluding stunned ones.
    pub fn threats_within(&self, from: Vec2, radius: f32) -> impl Iterator<Item = &Snake> {
        self.snakes
            .iter()
            .filter(move |snake| !snake.is_stunned() && snake.position.distance(from) < radius)
    }

    pub fn clamp_to_arena(&self, point: Vec2) -> Vec2 {
        point.clamp(
            Vec2::ZERO,
            Vec2::new(self.config.arena.width, self.config.arena.height),
        )
    }

    /// Uniformly random point inside the arena.
    pub fn random_point(&mut self) -> Vec2 {
        let x = self.rng.gen_range(0.0..=self.config.arena.width);
        let y = self.rng.gen_range(0.0..=self.config.arena.height);
        Vec2::new(x, y)
    }

    /// Random point between half and the full `radius` away from `center`,
    /// clamped to the arena.
    pub fn random_point_near(&mut self, center: Vec2, radius: f32) -> Vec2 {
        let radius = radius.max(0.0);
        let angle = self.rng.gen_range(0.0..TAU);
        let distance = self.rng.gen_range(radius * 0.5..=radius);
        self.clamp_to_arena(center + Vec2::new(angle.cos(), angle.sin()) * distance)
    }

    pub(crate) fn random_fly_velocity(&mut self) -> Vec2 {
        let angle = self.rng.gen_range(0.0..TAU);
        Vec2::new(angle.cos(), angle.sin()) * self.config.fly.speed
    }

    // ------------------------------------------------------------------
    // commands

    /// Sets where the frog walks. Ignored once the frog is dead.
    pub fn set_frog_target(&mut self, target: Option<Vec2>) {
        if self.frog.alive {
            let clamped = target.map(|point| self.clamp_to_arena(point));
            self.frog.target = clamped;
        }
    }

    /// Sets where a snake slithers. Returns false for an unknown index.
    pub fn set_snake_target(&mut self, index: usize, target: Option<Vec2>) -> bool {
        let clamped = target.map(|point| self.clamp_to_arena(point));
        match self.snakes.get_mut(index) {
            Some(snake) => {
                snake.target = clamped;
                true
            }
            None => false,
        }
    }

    /// Fires a bubble from the frog along `direction`.
    ///
    /// Returns false when the frog is dead, the bubble is still cooling down
    /// or `direction` is zero.
    pub fn fire_bubble(&mut self, direction: Vec2) -> bool {
        let direction = direction.normalized();
        if !self.frog.bubble_ready() || direction == Vec2::ZERO {
            return false;
        }

        let frog = &self.config.frog;
        self.bubbles.push(Bubble {
            position: self.frog.position,
            velocity: direction * frog.bubble_speed,
            ttl: frog.bubble_lifetime,
        });
        self.frog.bubble_cooldown = frog.bubble_cooldown;
        self.pending.push(GameEvent::BubbleFired {
            position: self.frog.position,
        });
        true
    }

    /// Snake `index` bites the frog.
    ///
    /// Lands only when the snake can bite, the frog is alive and within bite
    /// range. A landed bite starts the snake's cooldown and costs the frog one
    /// health point; the frog dies at zero.
    pub fn bite(&mut self, index: usize) -> bool {
        let bite_range = self.config.snake.bite_range;
        let bite_cooldown = self.config.snake.bite_cooldown;
        let frog_position = self.frog.position;
        let Some(snake) = self.snakes.get_mut(index) else {
            return false;
        };
        if !self.frog.alive
            || !snake.can_bite()
            || snake.position.distance(frog_position) > bite_range
        {
            return false;
        }

        snake.bite_cooldown = bite_cooldown;
        self.frog.health = self.frog.health.saturating_sub(1);
        self.pending.push(GameEvent::FrogBitten {
            snake: snake.id,
            health: self.frog.health,
        });

        if self.frog.health == 0 {
            self.frog.alive = false;
            self.frog.target = None;
            self.pending.push(GameEvent::FrogDied);
        }
        true
    }
}
