use std::ops::Range;

use super::constants::*;
use crate::math::{Real, Vector};

/// Where freshly added gas particles appear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpawnPattern {
    /// Within a small disc around the container center.
    #[default]
    Center,
    /// Anywhere inside the walls.
    Uniform,
}

/// Whether debris is still held by the walls once the container ruptures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DebrisContainment {
    /// Debris leaves the box as soon as it ruptures.
    #[default]
    Escape,
    /// Debris bounces inside while `Exploding`, escapes once `Exploded`.
    ContainedBlast,
    /// Debris is always contained.
    Always,
}

/// Tunables for the gas box kernel.
#[derive(Clone, Debug)]
pub struct SimParams {
    /// Coefficient of restitution for particle-particle impulses.
    pub restitution: Real,
    /// Damping applied to the normal velocity on a wall bounce.
    pub wall_restitution: Real,
    /// Per-frame multiplicative drag on gas particles.
    pub gas_damping: Real,
    /// Per-frame downward acceleration on debris (y grows downward).
    pub debris_gravity: Real,
    /// Per-frame downward acceleration on container fragments.
    pub fragment_gravity: Real,
    /// `max_speed = temperature / max_speed_divisor`.
    pub max_speed_divisor: Real,
    pub particle_radius_range: Range<Real>,
    pub mass_density: Real,
    pub moles_per_particle: Real,
    pub depth_factor: Real,

    pub explosion_power_scale: Real,
    pub explosion_power_min: Real,
    pub explosion_power_max: Real,
    /// Upward kick added to converted gas at rupture.
    pub explosion_upward_bias: Real,
    /// Frames spent in `Exploding` before `Exploded`.
    pub explosion_duration: u32,
    pub debris_count: usize,
    pub fragment_count: usize,
    pub debris_decay_range: Range<Real>,
    pub fragment_decay_range: Range<Real>,

    pub particles_per_add: usize,
    pub spawn_pattern: SpawnPattern,
    pub debris_containment: DebrisContainment,
    pub min_config_value: Real,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            restitution: 0.8,
            wall_restitution: 0.9,
            gas_damping: 0.999,
            debris_gravity: 0.05,
            fragment_gravity: 0.1,
            max_speed_divisor: MAX_SPEED_DIVISOR,
            particle_radius_range: 3.0..6.0,
            mass_density: MASS_DENSITY,
            moles_per_particle: MOLES_PER_PARTICLE,
            depth_factor: DEPTH_FACTOR,
            explosion_power_scale: 50.0,
            explosion_power_min: 5.0,
            explosion_power_max: 30.0,
            explosion_upward_bias: 2.0,
            explosion_duration: 60,
            debris_count: 20,
            fragment_count: 12,
            debris_decay_range: 0.01..0.03,
            fragment_decay_range: 0.005..0.015,
            particles_per_add: 5,
            spawn_pattern: SpawnPattern::Center,
            debris_containment: DebrisContainment::Escape,
            min_config_value: MIN_CONFIG_VALUE,
        }
    }
}

impl SimParams {
    /// Perfectly elastic particle collisions, no drag.
    pub fn elastic() -> Self {
        Self {
            restitution: 1.0,
            gas_damping: 1.0,
            ..Self::default()
        }
    }

    pub fn with_restitution(mut self, restitution: Real) -> Self {
        self.restitution = restitution.clamp(0.0, 1.0);
        self
    }

    pub fn with_spawn_pattern(mut self, pattern: SpawnPattern) -> Self {
        self.spawn_pattern = pattern;
        self
    }

    pub fn with_debris_containment(mut self, policy: DebrisContainment) -> Self {
        self.debris_containment = policy;
        self
    }

    pub fn with_explosion_duration(mut self, frames: u32) -> Self {
        self.explosion_duration = frames;
        self
    }

    /// Maximum particle speed at `temperature`.
    #[inline]
    pub fn max_speed(&self, temperature: Real) -> Real {
        temperature / self.max_speed_divisor
    }
}

/// A `configure{...}` command. Every field is optional and applied on its own.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigUpdate {
    pub temperature_kelvin: Option<Real>,
    pub container_width: Option<Real>,
    pub container_height: Option<Real>,
    pub container_origin: Option<Vector>,
    pub strength_threshold: Option<Real>,
    pub particle_radius_range: Option<Range<Real>>,
    pub restitution: Option<Real>,
    pub wall_restitution: Option<Real>,
    pub debris_decay_range: Option<Range<Real>>,
}

impl ConfigUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn temperature(mut self, kelvin: Real) -> Self {
        self.temperature_kelvin = Some(kelvin);
        self
    }

    pub fn container_size(mut self, width: Real, height: Real) -> Self {
        self.container_width = Some(width);
        self.container_height = Some(height);
        self
    }

    pub fn container_width(mut self, width: Real) -> Self {
        self.container_width = Some(width);
        self
    }

    pub fn container_height(mut self, height: Real) -> Self {
        self.container_height = Some(height);
        self
    }

    pub fn container_origin(mut self, origin: Vector) -> Self {
        self.container_origin = Some(origin);
        self
    }

    pub fn strength_threshold(mut self, kpa: Real) -> Self {
        self.strength_threshold = Some(kpa);
        self
    }

    pub fn particle_radius_range(mut self, range: Range<Real>) -> Self {
        self.particle_radius_range = Some(range);
        self
    }

    pub fn restitution(mut self, restitution: Real) -> Self {
        self.restitution = Some(restitution);
        self
    }

    pub fn wall_restitution(mut self, restitution: Real) -> Self {
        self.wall_restitution = Some(restitution);
        self
    }

    pub fn debris_decay_range(mut self, range: Range<Real>) -> Self {
        self.debris_decay_range = Some(range);
        self
    }
}

/// Raise `value` to `min` when it is below it or not a number.
pub fn clamp_min(value: Real, min: Real) -> Real {
    if value.is_nan() || value < min {
        min
    } else {
        value
    }
}

/// Order a range's ends and floor both at `min`.
pub fn sanitize_range(range: Range<Real>, min: Real) -> Range<Real> {
    let a = clamp_min(range.start, min);
    let b = clamp_min(range.end, min);
    if a <= b { a..b } else { b..a }
}

/// Clamp a coefficient into `[0, 1]`; NaN becomes 0.
pub fn clamp_unit(value: Real) -> Real {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_gas_box_model() {
        let params = SimParams::default();
        assert_eq!(params.restitution, 0.8);
        assert_eq!(params.explosion_duration, 60);
        assert_eq!(params.max_speed(300.0), 6.0);
    }

    #[test]
    fn restitution_builder_clamps() {
        assert_eq!(SimParams::default().with_restitution(1.7).restitution, 1.0);
        assert_eq!(SimParams::default().with_restitution(-0.2).restitution, 0.0);
    }

    #[test]
    fn ranges_are_ordered_and_floored() {
        assert_eq!(sanitize_range(6.0..2.0, 0.5), 2.0..6.0);
        assert_eq!(sanitize_range(-1.0..2.0, 0.5), 0.5..2.0);
        assert_eq!(clamp_min(Real::NAN, 1.0), 1.0);
        assert_eq!(clamp_unit(Real::NAN), 0.0);
    }

    #[test]
    fn config_update_sets_only_named_fields() {
        let update = ConfigUpdate::new().temperature(450.0).strength_threshold(50.0);
        assert_eq!(update.temperature_kelvin, Some(450.0));
        assert_eq!(update.strength_threshold, Some(50.0));
        assert!(update.container_width.is_none());
        assert!(update.restitution.is_none());
    }
}
