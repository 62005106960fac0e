use std::ops::Range;

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{
    ConfigUpdate, DEFAULT_CONTAINER_HEIGHT, DEFAULT_CONTAINER_WIDTH, DEFAULT_STRENGTH_KPA,
    DEFAULT_TEMPERATURE_K, DebrisContainment, MIN_DECAY_RATE, MIN_PARTICLE_RADIUS,
    STANDARD_PRESSURE_KPA, SimParams, SpawnPattern, clamp_min, clamp_unit, sanitize_range,
};
use crate::error::{Error, Result};
use crate::gas::{GasLawReadout, PressureBand, ideal_gas};
use crate::math::{Real, Vector, clamp_or_center, from_angle, zero_vector};
use crate::solver::{contain_within_bounds, integrate_all, resolve_collisions};

use super::explosion::{self, ExplosionPhase, ExplosionStats};
use super::{Container, Fragment, Particle, ParticleKind, ParticleSet, RandomSource, RngSource};

const GAS_HUE: Range<Real> = 200.0..260.0;
/// Gas spawns within this fraction of the container's smaller side from the center.
const SPAWN_RADIUS_FRACTION: Real = 0.1;
/// Initial velocity components are `(u - 0.5) * T / VELOCITY_TEMPERATURE_SCALE`.
const VELOCITY_TEMPERATURE_SCALE: Real = 100.0;

/// Commands the UI issues between frames.
#[derive(Message, Clone, Debug, PartialEq)]
pub enum SimCommand {
    Configure(ConfigUpdate),
    AddParticles(usize),
    /// Add the configured batch size.
    AddGas,
    Reset,
    ResizeParticles(Real),
    SetPaused(bool),
    TogglePause,
}

/// What one `step` produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepReport {
    pub frame: u64,
    pub pressure_kpa: Real,
    pub volume_m3: Real,
    pub phase: ExplosionPhase,
    pub band: PressureBand,
    pub gas_count: usize,
    pub debris_count: usize,
    pub fragment_count: usize,
    /// The container ruptured during this step.
    pub ruptured: bool,
}

/// Aggregate simulation state for the gas box.
///
/// The renderer reads it through the accessors and changes it only through
/// commands; nothing outside the kernel writes its fields.
#[derive(Resource)]
pub struct SimulationState {
    params: SimParams,
    container: Container,
    temperature_kelvin: Real,
    particles: ParticleSet,
    fragments: Vec<Fragment>,
    pressure_kpa: Real,
    phase: ExplosionPhase,
    stats: Option<ExplosionStats>,
    rng: Box<dyn RandomSource>,
    paused: bool,
    frame: u64,
    particle_remap: Vec<Option<usize>>,
}

impl SimulationState {
    /// Fresh state seeded from the OS.
    pub fn new(params: SimParams) -> Self {
        Self::with_random_source(params, Box::new(RngSource::new(StdRng::from_os_rng())))
    }

    /// Fresh state whose whole run is reproducible from `seed`.
    pub fn with_seed(params: SimParams, seed: u64) -> Self {
        Self::with_random_source(params, Box::new(RngSource::new(StdRng::seed_from_u64(seed))))
    }

    pub fn with_random_source(params: SimParams, rng: Box<dyn RandomSource>) -> Self {
        let container = Container::new(
            DEFAULT_CONTAINER_WIDTH,
            DEFAULT_CONTAINER_HEIGHT,
            DEFAULT_STRENGTH_KPA,
        )
        .with_depth_factor(params.depth_factor);
        Self {
            params,
            container,
            temperature_kelvin: DEFAULT_TEMPERATURE_K,
            particles: ParticleSet::new(),
            fragments: Vec::new(),
            pressure_kpa: STANDARD_PRESSURE_KPA,
            phase: ExplosionPhase::Idle,
            stats: None,
            rng,
            paused: false,
            frame: 0,
            particle_remap: Vec::new(),
        }
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn temperature(&self) -> Real {
        self.temperature_kelvin
    }

    pub fn particles(&self) -> &[Particle] {
        self.particles.particles()
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn pressure_kpa(&self) -> Real {
        self.pressure_kpa
    }

    pub fn volume(&self) -> Real {
        self.container.volume()
    }

    pub fn phase(&self) -> ExplosionPhase {
        self.phase
    }

    pub fn explosion_stats(&self) -> Option<&ExplosionStats> {
        self.stats.as_ref()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn gas_count(&self) -> usize {
        self.particles.gas_count()
    }

    pub fn moles(&self) -> Real {
        ideal_gas::moles(self.gas_count(), self.params.moles_per_particle)
    }

    pub fn pressure_band(&self) -> PressureBand {
        PressureBand::classify(self.pressure_kpa, self.container.strength_threshold)
    }

    /// Old -> new particle indices from the last step that dropped debris.
    /// Empty when nothing was removed.
    pub fn particle_remap(&self) -> &[Option<usize>] {
        &self.particle_remap
    }

    pub fn readout(&self) -> GasLawReadout {
        let strength = self.container.strength_threshold;
        GasLawReadout {
            moles: self.moles(),
            temperature_kelvin: self.temperature_kelvin,
            volume_m3: self.volume(),
            pressure_kpa: self.pressure_kpa,
            strength_threshold_kpa: strength,
            pressure_ratio: self.pressure_kpa / strength,
            band: self.pressure_band(),
            ruptured: !self.phase.is_idle(),
        }
    }

    /// Append a prepared particle as-is. Returns its index.
    pub fn insert_particle(&mut self, particle: Particle) -> usize {
        self.particles.push(particle)
    }

    /// Apply a `configure{...}` command. Out-of-range values are clamped.
    pub fn configure(&mut self, update: ConfigUpdate) {
        let min = self.params.min_config_value;

        if let Some(kelvin) = update.temperature_kelvin {
            let kelvin = self.clamped("temperature", kelvin, min);
            self.set_temperature(kelvin);
        }
        if let Some(width) = update.container_width {
            self.container.width = self.clamped("container width", width, min);
        }
        if let Some(height) = update.container_height {
            self.container.height = self.clamped("container height", height, min);
        }
        if let Some(origin) = update.container_origin {
            if origin.is_finite() {
                self.container.origin = origin;
            } else {
                warn!("ignoring non-finite container origin {origin}");
            }
        }
        if let Some(strength) = update.strength_threshold {
            self.container.strength_threshold = self.clamped("strength threshold", strength, min);
        }
        if let Some(range) = update.particle_radius_range {
            self.params.particle_radius_range = sanitize_range(range, MIN_PARTICLE_RADIUS);
        }
        if let Some(restitution) = update.restitution {
            self.params.restitution = clamp_unit(restitution);
        }
        if let Some(restitution) = update.wall_restitution {
            self.params.wall_restitution = clamp_unit(restitution);
        }
        if let Some(range) = update.debris_decay_range {
            self.params.debris_decay_range = sanitize_range(range, MIN_DECAY_RATE);
        }
    }

    fn clamped(&self, name: &str, value: Real, min: Real) -> Real {
        let clamped = clamp_min(value, min);
        if clamped != value {
            warn!("{name} {value} clamped to {clamped}");
        }
        clamped
    }

    /// Gas velocities follow `sqrt(new / previous)` while the box is intact.
    fn set_temperature(&mut self, kelvin: Real) {
        let previous = self.temperature_kelvin;
        if self.phase.is_idle() && previous > 0.0 && kelvin != previous {
            let scale = (kelvin / previous).sqrt();
            for particle in self.particles.iter_mut().filter(|p| p.is_gas()) {
                particle.velocity *= scale;
            }
        }
        self.temperature_kelvin = kelvin;
    }

    /// Add `count` gas particles. Returns the new gas count.
    pub fn add_particles(&mut self, count: usize) -> Result<usize> {
        if count == 0 {
            return Err(Error::InvalidParam("particle count must be > 0".into()));
        }
        if !self.phase.is_idle() {
            warn!("rejecting {count} particles: container has ruptured");
            return Err(Error::Ruptured);
        }

        // Grown as drawn; `count` comes straight from UI commands.
        let mut batch = Vec::new();
        for _ in 0..count {
            batch.push(spawn_gas(
                &self.container,
                &self.params,
                self.temperature_kelvin,
                self.rng.as_mut(),
            )?);
        }
        self.particles.insert_batch(batch);

        let gas = self.gas_count();
        debug!("added {count} gas particles ({gas} total)");
        Ok(gas)
    }

    /// Rewrite every particle's radius.
    pub fn resize_particles(&mut self, radius: Real) {
        self.particles.resize_all(radius, self.params.mass_density);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Drop all particles and fragments and restore default temperature,
    /// placement, dimensions and strength. Tunables and the random stream carry over.
    pub fn reset(&mut self) {
        self.particles.clear();
        self.fragments.clear();
        self.temperature_kelvin = DEFAULT_TEMPERATURE_K;
        self.container.origin = zero_vector();
        self.container.width = DEFAULT_CONTAINER_WIDTH;
        self.container.height = DEFAULT_CONTAINER_HEIGHT;
        self.container.strength_threshold = DEFAULT_STRENGTH_KPA;
        self.pressure_kpa = STANDARD_PRESSURE_KPA;
        self.phase = ExplosionPhase::Idle;
        self.stats = None;
        self.paused = false;
        self.particle_remap.clear();
        info!("gas box reset");
    }

    pub fn apply(&mut self, command: SimCommand) -> Result<()> {
        match command {
            SimCommand::Configure(update) => self.configure(update),
            SimCommand::AddParticles(count) => {
                self.add_particles(count)?;
            }
            SimCommand::AddGas => {
                self.add_particles(self.params.particles_per_add)?;
            }
            SimCommand::Reset => self.reset(),
            SimCommand::ResizeParticles(radius) => self.resize_particles(radius),
            SimCommand::SetPaused(paused) => self.set_paused(paused),
            SimCommand::TogglePause => self.set_paused(!self.paused),
        }
        Ok(())
    }

    /// Rupture the container now. A no-op (returning false) unless `Idle`.
    pub fn explode(&mut self) -> Result<bool> {
        if !self.phase.is_idle() {
            return Ok(false);
        }

        let stats = ExplosionStats {
            volume_m3: self.volume(),
            pressure_kpa: self.pressure_kpa,
            particle_count: self.particles.gas_count(),
        };
        explosion::rupture(
            &mut self.particles,
            &mut self.fragments,
            self.container.center(),
            self.pressure_kpa,
            &self.params,
            self.rng.as_mut(),
        )?;
        self.phase = ExplosionPhase::Exploding { progress: 0 };
        self.stats = Some(stats);

        info!(
            "container ruptured at {:.1} kPa (volume {:.4} m³, {} particles)",
            stats.pressure_kpa, stats.volume_m3, stats.particle_count
        );
        Ok(true)
    }

    /// Advance one tick of `dt` frames.
    pub fn step(&mut self, dt: Real) -> Result<StepReport> {
        if self.paused {
            return Ok(self.report(false));
        }
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.frame += 1;

        if self.phase.advance(self.params.explosion_duration) {
            info!("explosion finished after {} frames", self.params.explosion_duration);
        }

        let max_speed = self.params.max_speed(self.temperature_kelvin);
        integrate_all(self.particles.particles_mut(), dt, &self.params, max_speed);

        if self.phase.is_idle() {
            resolve_collisions(self.particles.particles_mut(), self.params.restitution);
        }

        for particle in self.particles.iter_mut() {
            if is_contained(particle, self.phase, self.params.debris_containment) {
                contain_within_bounds(particle, &self.container, self.params.wall_restitution);
            }
        }

        for fragment in self.fragments.iter_mut() {
            fragment.integrate(dt, self.params.fragment_gravity);
        }
        self.fragments.retain(|fragment| !fragment.is_faded());
        self.particle_remap = self.particles.remove_faded();

        self.pressure_kpa = ideal_gas::pressure_kpa(
            self.particles.gas_count(),
            self.params.moles_per_particle,
            self.temperature_kelvin,
            self.container.volume(),
        );

        let ruptured = self.phase.is_idle()
            && self.pressure_kpa > self.container.strength_threshold
            && self.explode()?;

        Ok(self.report(ruptured))
    }

    fn report(&self, ruptured: bool) -> StepReport {
        StepReport {
            frame: self.frame,
            pressure_kpa: self.pressure_kpa,
            volume_m3: self.volume(),
            phase: self.phase,
            band: self.pressure_band(),
            gas_count: self.particles.gas_count(),
            debris_count: self.particles.debris_count(),
            fragment_count: self.fragments.len(),
            ruptured,
        }
    }
}

/// Whether the walls still hold `particle` in `phase`.
fn is_contained(particle: &Particle, phase: ExplosionPhase, policy: DebrisContainment) -> bool {
    match (phase, particle.kind) {
        (ExplosionPhase::Idle, _) => true,
        (ExplosionPhase::Exploding { .. }, ParticleKind::Gas) => true,
        (ExplosionPhase::Exploded, ParticleKind::Gas) => false,
        (ExplosionPhase::Exploding { .. }, ParticleKind::Debris { .. }) => {
            policy != DebrisContainment::Escape
        }
        (ExplosionPhase::Exploded, ParticleKind::Debris { .. }) => {
            policy == DebrisContainment::Always
        }
    }
}

fn spawn_gas(
    container: &Container,
    params: &SimParams,
    temperature: Real,
    rng: &mut dyn RandomSource,
) -> Result<Particle> {
    let radius = rng.in_range(&params.particle_radius_range)?;
    let (min, max) = container.inner_bounds(radius);

    let position = match params.spawn_pattern {
        SpawnPattern::Center => {
            let spawn_radius = container.width.min(container.height) * SPAWN_RADIUS_FRACTION;
            let angle = rng.angle()?;
            let distance = rng.next_unit()? * spawn_radius;
            let raw = container.center() + from_angle(angle) * distance;
            Vector::new(
                clamp_or_center(raw.x, min.x, max.x),
                clamp_or_center(raw.y, min.y, max.y),
            )
        }
        SpawnPattern::Uniform => {
            let raw = Vector::new(
                min.x + (max.x - min.x) * rng.next_unit()?,
                min.y + (max.y - min.y) * rng.next_unit()?,
            );
            Vector::new(
                clamp_or_center(raw.x, min.x, max.x),
                clamp_or_center(raw.y, min.y, max.y),
            )
        }
    };

    let speed_scale = temperature / VELOCITY_TEMPERATURE_SCALE;
    let velocity = Vector::new(rng.centered()? * speed_scale, rng.centered()? * speed_scale);
    let hue = rng.in_range(&GAS_HUE)?;

    Ok(Particle::new(position, radius, params.mass_density)
        .with_velocity(velocity)
        .with_hue(hue))
}

/// Apply queued UI commands before the frame's step.
pub fn apply_sim_commands(mut state: ResMut<SimulationState>, mut commands: MessageReader<SimCommand>) {
    for command in commands.read() {
        if let Err(err) = state.apply(command.clone()) {
            warn!("gas box command {command:?} rejected: {err}");
        }
    }
}

/// One frame of the gas box.
pub fn step_simulation(mut state: ResMut<SimulationState>) {
    if let Err(err) = state.step(1.0) {
        error!("gas box step failed: {err}");
    }
}
