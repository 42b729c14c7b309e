//! Headless swamp world shared by the runtime and tools.
//!
//! `game-core` owns the rules of the swamp: a frog that eats flies and fires
//! bubbles, snakes that bite, and flies that drift around the arena. It knows
//! nothing about AI; brains observe a [`World`] through its sensors and act
//! through its commands, then [`World::step`] advances time.
pub mod config;
pub mod engine;
pub mod entities;
pub mod error;
pub mod event;
pub mod math;
pub mod world;

#[cfg(feature = "serde")]
pub use config::ConfigLoader;
pub use config::{ArenaConfig, FlyConfig, FrogConfig, GameConfig, SnakeConfig};
pub use entities::{Bubble, EntityId, Fly, Frog, Snake};
pub use error::{ConfigError, ConfigResult};
pub use event::GameEvent;
pub use math::Vec2;
pub use world::World;
