//! Headless run configuration read from the environment.
use std::env;
use std::path::PathBuf;

use game_core::{ConfigLoader, ConfigResult, GameConfig};
use runtime::AgentRef;

/// What to simulate and how to report it.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// TOML file with game tuning; defaults are used when absent.
    pub config_path: Option<PathBuf>,
    pub steps: u64,
    /// Overrides the seed from the game config.
    pub seed: Option<u64>,
    pub snakes: usize,
    /// Brain whose debug transcript is printed after the run.
    pub debug_tree: Option<AgentRef>,
    pub ai_enabled: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            steps: Self::DEFAULT_STEPS,
            seed: None,
            snakes: Self::DEFAULT_SNAKES,
            debug_tree: None,
            ai_enabled: true,
        }
    }
}

impl SimConfig {
    pub const DEFAULT_STEPS: u64 = 900;
    pub const DEFAULT_SNAKES: usize = 3;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SWAMP_CONFIG` - Path to a TOML game config (default: built-in tuning)
    /// - `SWAMP_STEPS` - Number of fixed steps to run (default: 900)
    /// - `SWAMP_SEED` - RNG seed override (default: from game config)
    /// - `SWAMP_SNAKES` - Number of snakes (default: 3)
    /// - `SWAMP_DEBUG_TREE` - `frog` or `snake:<index>` to print a debug transcript
    /// - `SWAMP_BT` - `0`/`false` disables every brain (default: enabled)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.config_path = env::var("SWAMP_CONFIG").ok().map(PathBuf::from);

        if let Some(steps) = read_env::<u64>("SWAMP_STEPS") {
            config.steps = steps;
        }

        config.seed = read_env::<u64>("SWAMP_SEED");

        if let Some(snakes) = read_env::<usize>("SWAMP_SNAKES") {
            config.snakes = snakes;
        }

        if let Ok(agent) = env::var("SWAMP_DEBUG_TREE") {
            match agent.parse::<AgentRef>() {
                Ok(agent) => config.debug_tree = Some(agent),
                Err(reason) => tracing::warn!("ignoring SWAMP_DEBUG_TREE: {}", reason),
            }
        }

        if let Ok(value) = env::var("SWAMP_BT") {
            config.ai_enabled = parse_switch(&value);
        }

        config
    }

    /// Loads the game config this run uses, applying the seed override.
    pub fn game_config(&self) -> ConfigResult<GameConfig> {
        let mut game = match &self.config_path {
            Some(path) => ConfigLoader::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(seed) = self.seed {
            game.seed = seed;
        }
        game.validate()?;
        Ok(game)
    }
}

/// `0`, `false`, `off` and `no` switch a feature off; anything else keeps it on.
fn parse_switch(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn switch_values() {
        assert!(!parse_switch("0"));
        assert!(!parse_switch(" False "));
        assert!(!parse_switch("off"));
        assert!(parse_switch("1"));
        assert!(parse_switch("yes"));
    }

    #[test]
    fn defaults_use_builtin_tuning() {
        let config = SimConfig::default();

        assert_eq!(config.game_config().expect("defaults"), GameConfig::default());
        assert!(config.ai_enabled);
    }

    #[test]
    fn seed_override_beats_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "seed = 5\n[fly]\ncount = 2").expect("write config");

        let config = SimConfig {
            config_path: Some(file.path().to_path_buf()),
            seed: Some(99),
            ..SimConfig::default()
        };
        let game = config.game_config().expect("config loads");

        assert_eq!(game.seed, 99);
        assert_eq!(game.fly.count, 2);
    }

    #[test]
    fn sample_config_is_valid() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/swamp.toml");
        let config = SimConfig {
            config_path: Some(path),
            ..SimConfig::default()
        };

        assert!(config.game_config().is_ok());
    }
}
