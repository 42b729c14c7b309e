use game_core::{GameConfig, GameEvent, Vec2, World};
use runtime::{AgentRef, Simulation};

fn swamp() -> World {
    World::empty(GameConfig::default())
}

fn active_names(simulation: &Simulation, agent: AgentRef) -> Vec<String> {
    simulation
        .brain(agent)
        .expect("brain")
        .active_nodes()
        .into_iter()
        .map(|node| node.name)
        .collect()
}

#[test]
fn frog_flees_from_a_nearby_snake() {
    let mut world = swamp();
    let start = world.frog().position;
    world.add_snake(start + Vec2::new(40.0, 0.0));
    let mut simulation = Simulation::from_world(world);

    simulation.step();
    assert!(active_names(&simulation, AgentRef::Frog).contains(&"flee".to_string()));

    for _ in 0..10 {
        simulation.step();
    }
    let frog = simulation.world().frog().position;
    assert!(frog.x < start.x, "frog should run away from the snake");
    assert!(simulation.world().frog().is_alive());
}

#[test]
fn frog_hunts_and_eats_a_fly() {
    let mut world = swamp();
    let start = world.frog().position;
    world.add_fly(start + Vec2::new(60.0, 0.0), Vec2::ZERO);
    let mut simulation = Simulation::from_world(world);

    let mut eaten = false;
    for _ in 0..60 {
        let events = simulation.step();
        if events
            .iter()
            .any(|event| matches!(event, GameEvent::FlyEaten { .. }))
        {
            eaten = true;
            break;
        }
    }

    assert!(eaten, "frog never reached the fly");
    assert_eq!(simulation.summary().flies_eaten, 1);
}

#[test]
fn snake_chases_and_bites_a_passive_frog() {
    let mut world = swamp();
    let frog = world.frog().position;
    world.add_snake(frog + Vec2::new(120.0, 0.0));
    let mut simulation = Simulation::from_world(world);
    simulation
        .brain_mut(AgentRef::Frog)
        .expect("frog brain")
        .set_active(false);

    simulation.step();
    assert!(active_names(&simulation, AgentRef::Snake(0)).contains(&"chase".to_string()));

    let mut bitten = false;
    for _ in 0..120 {
        let events = simulation.step();
        if events
            .iter()
            .any(|event| matches!(event, GameEvent::FrogBitten { .. }))
        {
            bitten = true;
            break;
        }
    }

    assert!(bitten, "snake never bit the frog");
    let summary = simulation.summary();
    assert_eq!(summary.bites, 1);
    assert_eq!(summary.frog_health, GameConfig::default().frog.max_health - 1);
}

#[test]
fn frog_stuns_a_snake_in_shooting_range() {
    let mut world = swamp();
    let frog = world.frog().position;
    world.add_snake(frog + Vec2::new(130.0, 0.0));
    let mut simulation = Simulation::from_world(world);

    let mut stunned = false;
    for _ in 0..60 {
        let events = simulation.step();
        if events
            .iter()
            .any(|event| matches!(event, GameEvent::SnakeStunned { .. }))
        {
            stunned = true;
            break;
        }
    }
    assert!(stunned, "bubble never hit the snake");

    let held = simulation.world().snakes()[0].position;
    for _ in 0..10 {
        simulation.step();
    }
    assert_eq!(simulation.world().snakes()[0].position, held);
}

#[test]
fn disabled_ai_issues_no_commands() {
    let mut simulation = Simulation::new(GameConfig::default(), 2).expect("valid config");
    let frog = simulation.world().frog().position;
    let homes: Vec<Vec2> = simulation.world().snakes().iter().map(|s| s.home).collect();

    simulation.set_ai_enabled(false);
    for _ in 0..30 {
        simulation.step();
    }

    assert!(!simulation.ai_enabled());
    assert_eq!(simulation.world().frog().position, frog);
    let positions: Vec<Vec2> = simulation
        .world()
        .snakes()
        .iter()
        .map(|s| s.position)
        .collect();
    assert_eq!(positions, homes);
    assert_eq!(
        simulation.brain(AgentRef::Frog).expect("frog").tick_count(),
        0
    );

    simulation.set_ai_enabled(true);
    simulation.step();
    assert_eq!(
        simulation.brain(AgentRef::Snake(1)).expect("snake").tick_count(),
        1
    );
}

#[test]
fn debug_transcript_records_each_update() {
    let mut simulation = Simulation::new(GameConfig::default(), 1).expect("valid config");
    simulation
        .set_debug(AgentRef::Frog, true)
        .expect("frog exists");

    simulation.step();
    simulation.step();

    let log = simulation.brain(AgentRef::Frog).expect("frog").debug_log();
    assert_eq!(log.len(), 4);
    assert_eq!(log[0], "[tick 1] update");
    assert!(log[1].starts_with("[tick 1] result="));
    assert_eq!(log[2], "[tick 2] update");
}

#[test]
fn dead_frog_brain_goes_quiet() {
    let mut world = swamp();
    world.add_fly(world.frog().position + Vec2::new(50.0, 0.0), Vec2::ZERO);
    world.frog_mut().alive = false;
    let mut simulation = Simulation::from_world(world);

    simulation.step();

    assert!(active_names(&simulation, AgentRef::Frog).is_empty());
    assert_eq!(simulation.world().frog().target, None);
}
