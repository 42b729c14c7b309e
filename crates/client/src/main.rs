//! Headless swamp simulation.
//!
//! Runs the frog and snake brains against a seeded swamp for a fixed number of
//! steps, then prints a summary. Configuration comes from the environment (see
//! [`config::SimConfig::from_env`]); a `.env` file is honored.
//!
//! ```bash
//! SWAMP_STEPS=1800 SWAMP_DEBUG_TREE=snake:0 RUST_LOG=debug cargo run -p swamp-cli
//! ```
mod config;
mod report;

use anyhow::{Context, Result};
use config::SimConfig;
use runtime::Simulation;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let sim_config = SimConfig::from_env();
    let game_config = sim_config
        .game_config()
        .context("failed to load game config")?;

    tracing::info!(
        seed = game_config.seed,
        steps = sim_config.steps,
        snakes = sim_config.snakes,
        ai = sim_config.ai_enabled,
        "starting swamp"
    );

    let mut simulation = Simulation::new(game_config, sim_config.snakes)?;
    simulation.set_ai_enabled(sim_config.ai_enabled);
    if let Some(agent) = sim_config.debug_tree {
        simulation.set_debug(agent, true)?;
    }

    simulation.run(sim_config.steps);

    let stdout = std::io::stdout();
    report::write_report(&mut stdout.lock(), &simulation, sim_config.debug_tree)?;
    Ok(())
}
