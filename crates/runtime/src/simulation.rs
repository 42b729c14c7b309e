//! Fixed-step driver that ticks every brain and then advances the world.

use std::fmt;
use std::str::FromStr;

use behavior_tree::BehaviorTree;
use game_core::{GameConfig, GameEvent, World};

use crate::error::{ParseAgentError, Result, SimulationError};
use crate::providers::ai::{SnakeBrainConfig, frog_tree, snake_tree};

/// Names one agent's brain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AgentRef {
    Frog,
    Snake(usize),
}

impl fmt::Display for AgentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentRef::Frog => write!(f, "frog"),
            AgentRef::Snake(index) => write!(f, "snake:{}", index),
        }
    }
}

impl FromStr for AgentRef {
    type Err = ParseAgentError;

    /// Parses `frog` or `snake:<index>`.
    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("frog") {
            return Ok(AgentRef::Frog);
        }
        value
            .strip_prefix("snake:")
            .and_then(|index| index.parse().ok())
            .map(AgentRef::Snake)
            .ok_or_else(|| ParseAgentError {
                input: value.to_owned(),
            })
    }
}

/// Outcome of [`Simulation::run`].
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationSummary {
    pub steps: u64,
    pub elapsed: f32,
    pub flies_eaten: u32,
    pub frog_health: u32,
    pub frog_alive: bool,
    pub bites: u32,
    pub stuns: u32,
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} steps ({:.1}s): frog {} with {} health, {} flies eaten, {} bites taken, {} snakes stunned",
            self.steps,
            self.elapsed,
            if self.frog_alive { "alive" } else { "dead" },
            self.frog_health,
            self.flies_eaten,
            self.bites,
            self.stuns,
        )
    }
}

/// A swamp world plus one behavior tree per agent.
///
/// Each [`step`](Self::step) ticks the frog's brain, then every snake's brain
/// in index order, then advances the world by one fixed step. Given the same
/// config the whole run is reproducible.
pub struct Simulation {
    world: World,
    frog_brain: BehaviorTree<World>,
    snake_brains: Vec<BehaviorTree<World>>,
    ai_enabled: bool,
    bites: u32,
    stuns: u32,
}

impl Simulation {
    /// Builds a populated swamp with `snakes` snakes.
    pub fn new(config: GameConfig, snakes: usize) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_world(World::new(config, snakes)))
    }

    /// Wraps an existing world, giving every snake in it a brain.
    pub fn from_world(world: World) -> Self {
        let snake_brains = (0..world.snakes().len())
            .map(|index| snake_tree(index, SnakeBrainConfig::for_snake(world.config(), index)))
            .collect();

        Self {
            frog_brain: frog_tree(false),
            snake_brains,
            world,
            ai_enabled: true,
            bites: 0,
            stuns: 0,
        }
    }

    /// Runs one fixed step and returns what happened in it.
    pub fn step(&mut self) -> Vec<GameEvent> {
        self.frog_brain.update(&mut self.world);
        for brain in &mut self.snake_brains {
            brain.update(&mut self.world);
        }

        let dt = self.world.config().step_seconds;
        let events = self.world.step(dt);
        let step = self.world.step_count();
        for event in &events {
            match event {
                GameEvent::BubbleFired { .. } => tracing::debug!(step, %event, "game event"),
                GameEvent::FrogBitten { .. } => {
                    self.bites += 1;
                    tracing::info!(step, %event, "game event");
                }
                GameEvent::SnakeStunned { .. } => {
                    self.stuns += 1;
                    tracing::info!(step, %event, "game event");
                }
                _ => tracing::info!(step, %event, "game event"),
            }
        }
        events
    }

    /// Runs `steps` steps and summarizes the outcome.
    pub fn run(&mut self, steps: u64) -> SimulationSummary {
        for _ in 0..steps {
            self.step();
        }
        let summary = self.summary();
        tracing::info!(%summary, "simulation finished");
        summary
    }

    pub fn summary(&self) -> SimulationSummary {
        let frog = self.world.frog();
        SimulationSummary {
            steps: self.world.step_count(),
            elapsed: self.world.elapsed(),
            flies_eaten: frog.flies_eaten,
            frog_health: frog.health,
            frog_alive: frog.is_alive(),
            bites: self.bites,
            stuns: self.stuns,
        }
    }

    /// Pauses or resumes every brain. The world keeps stepping either way.
    pub fn set_ai_enabled(&mut self, enabled: bool) {
        self.ai_enabled = enabled;
        self.frog_brain.set_active(enabled);
        for brain in &mut self.snake_brains {
            brain.set_active(enabled);
        }
    }

    pub fn ai_enabled(&self) -> bool {
        self.ai_enabled
    }

    /// Enables the debug transcript of one brain.
    pub fn set_debug(&mut self, agent: AgentRef, debug: bool) -> Result<()> {
        let snakes = self.snake_brains.len();
        self.brain_mut(agent)
            .ok_or(SimulationError::UnknownAgent { agent, snakes })?
            .set_debug_mode(debug);
        Ok(())
    }

    pub fn brain(&self, agent: AgentRef) -> Option<&BehaviorTree<World>> {
        match agent {
            AgentRef::Frog => Some(&self.frog_brain),
            AgentRef::Snake(index) => self.snake_brains.get(index),
        }
    }

    pub fn brain_mut(&mut self, agent: AgentRef) -> Option<&mut BehaviorTree<World>> {
        match agent {
            AgentRef::Frog => Some(&mut self.frog_brain),
            AgentRef::Snake(index) => self.snake_brains.get_mut(index),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct world access for scenario setup.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
