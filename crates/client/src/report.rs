//! Plain-text run report written to stdout.
use std::io::{self, Write};

use runtime::{AgentRef, Simulation};

pub fn write_report(
    out: &mut impl Write,
    simulation: &Simulation,
    debug: Option<AgentRef>,
) -> io::Result<()> {
    let summary = simulation.summary();
    writeln!(out, "swamp: {}", summary)?;

    let world = simulation.world();
    let frog = world.frog();
    writeln!(out, "  frog at ({:.1}, {:.1})", frog.position.x, frog.position.y)?;
    for (index, snake) in world.snakes().iter().enumerate() {
        writeln!(
            out,
            "  snake:{} {} at ({:.1}, {:.1}){}",
            index,
            snake.id,
            snake.position.x,
            snake.position.y,
            if snake.is_stunned() { " stunned" } else { "" }
        )?;
    }

    if let Some(agent) = debug {
        if let Some(brain) = simulation.brain(agent) {
            writeln!(out, "debug transcript for {}:", agent)?;
            for line in brain.debug_log() {
                writeln!(out, "  {}", line)?;
            }
            let active: Vec<String> = brain
                .active_nodes()
                .into_iter()
                .map(|node| node.name)
                .collect();
            writeln!(out, "  active: [{}]", active.join(", "))?;
        }
    }
    Ok(())
}
