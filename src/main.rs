use bevy::prelude::*;
use gasbox2d::math::{Real, Vector};
use gasbox2d::{ConfigUpdate, ExplosionPhase, GasBoxPlugin, SimCommand, SimulationState};

const TEMPERATURE_STEP: Real = 10.0;
const STRENGTH_STEP: Real = 50.0;
const SIZE_STEP: Real = 20.0;

#[derive(Component)]
struct ReadoutText;

fn init(mut commands: Commands) {
    commands.spawn(Camera2d);
    commands.spawn((
        ReadoutText,
        Text::new(""),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
    ));
}

/// Container-local (y down, origin top-left) to world (y up, box centered).
fn to_world(state: &SimulationState, position: Vector) -> Vec2 {
    let center = state.container().center();
    Vec2::new((position.x - center.x) as f32, (center.y - position.y) as f32)
}

fn controls(
    input: Res<ButtonInput<KeyCode>>,
    state: Res<SimulationState>,
    mut commands: MessageWriter<SimCommand>,
) {
    let container = state.container();
    if input.just_pressed(KeyCode::Space) {
        commands.write(SimCommand::AddGas);
    }
    if input.just_pressed(KeyCode::KeyR) {
        commands.write(SimCommand::Reset);
    }
    if input.just_pressed(KeyCode::KeyP) {
        commands.write(SimCommand::TogglePause);
    }
    if input.pressed(KeyCode::ArrowUp) {
        commands.write(SimCommand::Configure(
            ConfigUpdate::new().temperature(state.temperature() + TEMPERATURE_STEP),
        ));
    }
    if input.pressed(KeyCode::ArrowDown) {
        commands.write(SimCommand::Configure(
            ConfigUpdate::new().temperature(state.temperature() - TEMPERATURE_STEP),
        ));
    }
    if input.just_pressed(KeyCode::ArrowRight) {
        commands.write(SimCommand::Configure(
            ConfigUpdate::new().strength_threshold(container.strength_threshold + STRENGTH_STEP),
        ));
    }
    if input.just_pressed(KeyCode::ArrowLeft) {
        commands.write(SimCommand::Configure(
            ConfigUpdate::new().strength_threshold(container.strength_threshold - STRENGTH_STEP),
        ));
    }
    if input.pressed(KeyCode::Equal) {
        commands.write(SimCommand::Configure(
            ConfigUpdate::new().container_size(container.width + SIZE_STEP, container.height + SIZE_STEP),
        ));
    }
    if input.pressed(KeyCode::Minus) {
        commands.write(SimCommand::Configure(
            ConfigUpdate::new().container_size(container.width - SIZE_STEP, container.height - SIZE_STEP),
        ));
    }
}

fn draw_gas_box(state: Res<SimulationState>, mut gizmos: Gizmos) {
    let container = state.container();
    let phase = state.phase();
    if phase.is_idle() {
        let size = Vec2::new(container.width as f32, container.height as f32);
        gizmos.rect_2d(Isometry2d::IDENTITY, size, Color::srgb(0.8, 0.8, 0.85));
    }
    if let ExplosionPhase::Exploding { .. } = phase {
        let blast = phase.fraction(state.params().explosion_duration) as f32;
        let radius = blast * container.width.max(container.height) as f32;
        gizmos.circle_2d(Isometry2d::IDENTITY, radius, Color::srgba(1.0, 0.6, 0.1, 1.0 - blast));
    }

    for particle in state.particles() {
        let alpha = particle.alpha().unwrap_or(1.0).clamp(0.0, 1.0) as f32;
        let color = Color::hsla(particle.hue as f32, 0.7, 0.6, alpha);
        gizmos.circle_2d(
            Isometry2d::from_translation(to_world(&state, particle.position)),
            particle.radius() as f32,
            color,
        );
    }

    for fragment in state.fragments() {
        let isometry = Isometry2d::new(
            to_world(&state, fragment.position),
            Rot2::radians(-fragment.rotation as f32),
        );
        let color = Color::hsla(fragment.hue as f32, 0.2, 0.7, fragment.alpha.clamp(0.0, 1.0) as f32);
        gizmos.rect_2d(isometry, fragment.size.as_vec2(), color);
    }
}

fn update_readout(state: Res<SimulationState>, mut text: Query<&mut Text, With<ReadoutText>>) {
    let Ok(mut text) = text.single_mut() else {
        return;
    };
    let readout = state.readout();
    let mut content = format!(
        "PV = nRT\nn = {:.3} mol  T = {:.0} K  V = {:.4} m³\nP = {:.1} kPa (max {:.0} kPa, {})",
        readout.moles,
        readout.temperature_kelvin,
        readout.volume_m3,
        readout.pressure_kpa,
        readout.strength_threshold_kpa,
        readout.band.label(),
    );
    if readout.band.is_warning() && !readout.ruptured {
        content.push_str(&format!(
            "\nWARNING: pressure at {:.0}% of container strength",
            readout.pressure_ratio * 100.0
        ));
    }
    if let Some(stats) = state.explosion_stats() {
        content.push_str(&format!(
            "\nRUPTURED at {:.1} kPa, V = {:.4} m³, {} particles",
            stats.pressure_kpa, stats.volume_m3, stats.particle_count
        ));
    }
    text.0 = content;
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(GasBoxPlugin::default())
        .add_systems(Startup, init)
        .add_systems(Update, (controls, draw_gas_box, update_readout))
        .run();
}
