use bevy::prelude::*;
use gasbox2d::{ConfigUpdate, GasBoxPlugin, SimCommand, SimulationState};

fn app() -> App {
    let mut app = App::new();
    app.add_plugins(GasBoxPlugin {
        seed: Some(42),
        ..default()
    });
    app
}

#[test]
fn plugin_steps_once_per_update() {
    let mut app = app();
    app.update();
    app.update();
    assert_eq!(app.world().resource::<SimulationState>().frame(), 2);
}

#[test]
fn commands_apply_before_the_step() {
    let mut app = app();
    app.world_mut().write_message(SimCommand::AddGas);
    app.world_mut()
        .write_message(SimCommand::Configure(ConfigUpdate::new().strength_threshold(1.0)));
    app.update();

    let state = app.world().resource::<SimulationState>();
    assert_eq!(state.frame(), 1);
    // Five particles arrived and ruptured the weakened box in the same frame.
    assert!(state.phase().is_exploding());
    assert_eq!(state.explosion_stats().map(|s| s.particle_count), Some(5));
}

#[test]
fn rejected_command_does_not_stop_the_app() {
    let mut app = app();
    app.world_mut().write_message(SimCommand::AddParticles(0));
    app.update();
    let state = app.world().resource::<SimulationState>();
    assert!(state.particles().is_empty());
    assert_eq!(state.frame(), 1);
}
