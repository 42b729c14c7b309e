//! Game configuration and its TOML loader.

#[cfg(feature = "serde")]
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};

/// Tunable parameters for one swamp simulation.
///
/// Distances are in arena units, speeds in units per second and durations in
/// seconds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Seed for every random decision (spawns, fly drift, wander targets).
    pub seed: u64,
    /// Simulated seconds per step.
    pub step_seconds: f32,
    pub arena: ArenaConfig,
    pub frog: FrogConfig,
    pub snake: SnakeConfig,
    pub fly: FlyConfig,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
    /// Distance at which a mover counts as having reached its target.
    pub arrive_radius: f32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FrogConfig {
    pub speed: f32,
    pub max_health: u32,
    pub eat_radius: f32,
    /// Snakes closer than this make the frog flee.
    pub flee_radius: f32,
    /// How far ahead of itself the frog aims when fleeing.
    pub flee_distance: f32,
    pub shoot_range: f32,
    pub bubble_speed: f32,
    pub bubble_lifetime: f32,
    /// Contact distance between a bubble and a snake.
    pub bubble_radius: f32,
    pub bubble_cooldown: f32,
    pub wander_radius: f32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SnakeConfig {
    pub speed: f32,
    pub aggro_range: f32,
    pub bite_range: f32,
    pub bite_cooldown: f32,
    /// Maximum distance from home a snake will chase.
    pub leash_radius: f32,
    pub patrol_radius: f32,
    pub stun_duration: f32,
    /// Steps a snake lingers between patrol legs.
    pub linger_steps: u32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlyConfig {
    pub count: usize,
    pub speed: f32,
}

impl GameConfig {
    pub const DEFAULT_SEED: u64 = 7;
    pub const DEFAULT_STEP_SECONDS: f32 = 1.0 / 30.0;

    pub fn new() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
            step_seconds: Self::DEFAULT_STEP_SECONDS,
            arena: ArenaConfig::default(),
            frog: FrogConfig::default(),
            snake: SnakeConfig::default(),
            fly: FlyConfig::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks the invariants the simulation relies on.
    pub fn validate(&self) -> ConfigResult<()> {
        positive("step_seconds", self.step_seconds)?;
        positive("arena.width", self.arena.width)?;
        positive("arena.height", self.arena.height)?;
        positive("arena.arrive_radius", self.arena.arrive_radius)?;
        positive("frog.speed", self.frog.speed)?;
        positive("frog.eat_radius", self.frog.eat_radius)?;
        positive("frog.flee_radius", self.frog.flee_radius)?;
        positive("frog.shoot_range", self.frog.shoot_range)?;
        positive("frog.bubble_speed", self.frog.bubble_speed)?;
        positive("frog.bubble_lifetime", self.frog.bubble_lifetime)?;
        positive("frog.bubble_radius", self.frog.bubble_radius)?;
        positive("snake.speed", self.snake.speed)?;
        positive("snake.aggro_range", self.snake.aggro_range)?;
        positive("snake.bite_range", self.snake.bite_range)?;
        positive("snake.leash_radius", self.snake.leash_radius)?;

        if self.frog.max_health == 0 {
            return Err(ConfigError::Invalid {
                field: "frog.max_health",
                reason: "must be at least 1".into(),
            });
        }
        if self.fly.count == 0 {
            return Err(ConfigError::Invalid {
                field: "fly.count",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            arrive_radius: 4.0,
        }
    }
}

impl Default for FrogConfig {
    fn default() -> Self {
        Self {
            speed: 120.0,
            max_health: 3,
            eat_radius: 12.0,
            flee_radius: 90.0,
            flee_distance: 120.0,
            shoot_range: 160.0,
            bubble_speed: 300.0,
            bubble_lifetime: 1.0,
            bubble_radius: 14.0,
            bubble_cooldown: 1.5,
            wander_radius: 120.0,
        }
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            speed: 80.0,
            aggro_range: 180.0,
            bite_range: 16.0,
            bite_cooldown: 1.0,
            leash_radius: 260.0,
            patrol_radius: 80.0,
            stun_duration: 2.0,
            linger_steps: 30,
        }
    }
}

impl Default for FlyConfig {
    fn default() -> Self {
        Self {
            count: 6,
            speed: 40.0,
        }
    }
}

fn positive(field: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be a positive number, got {}", value),
        })
    }
}

/// Loader for game configuration from TOML files.
#[cfg(feature = "serde")]
pub struct ConfigLoader;

#[cfg(feature = "serde")]
impl ConfigLoader {
    /// Loads and validates a [`GameConfig`] from a TOML file.
    ///
    /// Missing fields fall back to their defaults.
    pub fn load(path: &Path) -> ConfigResult<GameConfig> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses and validates a [`GameConfig`] from TOML text.
    pub fn parse(content: &str) -> ConfigResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_values() {
        let mut config = GameConfig::default();
        config.snake.bite_range = 0.0;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "snake.bite_range",
                ..
            })
        ));
    }

    #[test]
    fn rejects_empty_swamp() {
        let mut config = GameConfig::default();
        config.fly.count = 0;

        assert!(config.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ConfigLoader::parse(
            r#"
            seed = 99

            [frog]
            speed = 150.0

            [fly]
            count = 3
            "#,
        )
        .expect("config parses");

        assert_eq!(config.seed, 99);
        assert_eq!(config.frog.speed, 150.0);
        assert_eq!(config.frog.max_health, FrogConfig::default().max_health);
        assert_eq!(config.fly.count, 3);
        assert_eq!(config.snake, SnakeConfig::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn load_reads_file_and_validates() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[arena]\nwidth = -5.0").expect("write config");

        assert!(matches!(
            ConfigLoader::load(file.path()),
            Err(ConfigError::Invalid {
                field: "arena.width",
                ..
            })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn load_reports_missing_file() {
        let missing = Path::new("/definitely/not/here/swamp.toml");
        assert!(matches!(
            ConfigLoader::load(missing),
            Err(ConfigError::Read { .. })
        ));
    }
}
