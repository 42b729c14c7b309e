use behavior_tree::builder::{
    action, condition, dynamic_utility, inverter, parallel_all, parallel_any, random_selector,
    repeater, resumable_selector, selector, sequence, static_utility,
};
use behavior_tree::{Behavior, BehaviorTree, NodeState, Tick, UtilitySelector};

#[derive(Default)]
struct Guard {
    alarm: bool,
    steps: u32,
    shouts: u32,
    naps: u32,
}

fn step(tick: &mut Tick<'_, Guard>) -> NodeState {
    tick.agent_mut().steps += 1;
    NodeState::Success
}

fn guard_tree() -> BehaviorTree<Guard> {
    let respond = sequence(
        "respond",
        vec![
            condition("alarm", |tick: &mut Tick<'_, Guard>| tick.agent().alarm),
            parallel_all(
                "shout and run",
                vec![
                    action("shout", |tick: &mut Tick<'_, Guard>| {
                        tick.agent_mut().shouts += 1;
                        NodeState::Success
                    }),
                    inverter(
                        "not asleep",
                        condition("asleep", |_: &mut Tick<'_, Guard>| false),
                    ),
                ],
            ),
        ],
    );
    let routine = random_selector(
        "routine",
        3,
        vec![
            repeater("walk", 2, action("step", step)),
            repeater("walk more", 2, action("step", step)),
        ],
    );
    BehaviorTree::new(selector("guard", vec![respond, routine]), false)
}

#[test]
fn alarm_preempts_the_routine() {
    let mut tree = guard_tree();
    let mut guard = Guard::default();

    // Two steps complete one repeater episode.
    assert_eq!(tree.update(&mut guard), NodeState::Running);
    assert_eq!(tree.update(&mut guard), NodeState::Success);
    assert_eq!(guard.steps, 2);

    guard.alarm = true;
    assert_eq!(tree.update(&mut guard), NodeState::Success);
    assert_eq!(guard.shouts, 1);
    assert_eq!(guard.steps, 2);
}

#[test]
fn seeded_routines_replay() {
    let mut a = guard_tree();
    let mut b = guard_tree();
    let mut guard_a = Guard::default();
    let mut guard_b = Guard::default();

    for _ in 0..20 {
        assert_eq!(a.update(&mut guard_a), b.update(&mut guard_b));
    }
    assert_eq!(guard_a.steps, guard_b.steps);
}

#[test]
fn utility_helpers_pick_the_best_scored_leaf() {
    let activity = UtilitySelector::new("activity")
        .with_scored(static_utility("nap", 0.3, |tick: &mut Tick<'_, Guard>| {
            tick.agent_mut().naps += 1;
            NodeState::Success
        }))
        .with_scored(dynamic_utility(
            "patrol",
            |tick: &mut Tick<'_, Guard>| if tick.agent().alarm { 1.0 } else { 0.0 },
            step,
        ));
    let mut tree = BehaviorTree::new(Box::new(activity) as Box<dyn Behavior<Guard>>, false);
    let mut guard = Guard::default();

    assert_eq!(tree.update(&mut guard), NodeState::Success);
    assert_eq!((guard.naps, guard.steps), (1, 0));

    guard.alarm = true;
    assert_eq!(tree.update(&mut guard), NodeState::Success);
    assert_eq!((guard.naps, guard.steps), (1, 1));
}

fn sound_alarm() -> Box<dyn Behavior<Guard>> {
    sequence(
        "sound alarm",
        vec![
            condition("alarm", |tick: &mut Tick<'_, Guard>| tick.agent().alarm),
            action("shout", |tick: &mut Tick<'_, Guard>| {
                tick.agent_mut().shouts += 1;
                NodeState::Success
            }),
        ],
    )
}

#[test]
fn resumable_guard_finishes_the_walk_first() {
    let mut tree = BehaviorTree::new(
        resumable_selector(
            "guard",
            vec![sound_alarm(), repeater("walk", 2, action("step", step))],
        ),
        false,
    );
    let mut guard = Guard::default();

    assert_eq!(tree.update(&mut guard), NodeState::Running);
    assert_eq!(guard.steps, 1);

    // The running walk keeps the selector's cursor past the alarm check.
    guard.alarm = true;
    assert_eq!(tree.update(&mut guard), NodeState::Success);
    assert_eq!((guard.steps, guard.shouts), (2, 0));

    assert_eq!(tree.update(&mut guard), NodeState::Success);
    assert_eq!((guard.steps, guard.shouts), (2, 1));
}

#[test]
fn any_mode_succeeds_when_one_child_does() {
    let mut tree = BehaviorTree::new(
        parallel_any(
            "look out",
            vec![sound_alarm(), repeater("walk", 2, action("step", step))],
        ),
        false,
    );
    let mut guard = Guard::default();

    assert_eq!(tree.update(&mut guard), NodeState::Running);
    assert_eq!(tree.update(&mut guard), NodeState::Success);
    assert_eq!(guard.steps, 2);

    // Every child still runs once the outcome is decided.
    guard.alarm = true;
    assert_eq!(tree.update(&mut guard), NodeState::Success);
    assert_eq!((guard.steps, guard.shouts), (3, 1));
}
