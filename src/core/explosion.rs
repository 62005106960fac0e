//! Container rupture
//!
//! `Idle -> Exploding { progress } -> Exploded`, never backward. The rupture
//! turns every gas particle into outward-flying debris and throws out extra
//! debris and shell fragments from the container center.

use std::ops::Range;

use crate::config::SimParams;
use crate::core::{Fragment, Particle, ParticleSet, RandomSource};
use crate::error::Result;
use crate::math::{Real, Vector, from_angle, safe_normalize};

const GAS_TO_DEBRIS_SPREAD: Real = 0.5;
const DEBRIS_RADIUS: Range<Real> = 2.0..5.0;
const DEBRIS_SPEED_SPREAD: Real = 15.0;
const DEBRIS_UPWARD_THRUST: Real = 5.0;
const DEBRIS_HUE: Range<Real> = 0.0..60.0;

const FRAGMENT_SPEED: Range<Real> = 4.0..12.0;
const FRAGMENT_UPWARD_THRUST: Real = 3.0;
const FRAGMENT_WIDTH: Range<Real> = 10.0..40.0;
const FRAGMENT_HEIGHT: Range<Real> = 4.0..10.0;
const FRAGMENT_SPIN: Real = 0.3;
const FRAGMENT_HUE: Range<Real> = 190.0..220.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExplosionPhase {
    #[default]
    Idle,
    /// Frames elapsed since rupture.
    Exploding { progress: u32 },
    Exploded,
}

impl ExplosionPhase {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[inline]
    pub fn is_exploding(&self) -> bool {
        matches!(self, Self::Exploding { .. })
    }

    /// `Exploding` progress as a fraction of `duration`; 0 before, 1 after.
    pub fn fraction(&self, duration: u32) -> Real {
        match *self {
            Self::Idle => 0.0,
            Self::Exploding { progress } if duration > 0 => {
                (progress as Real / duration as Real).min(1.0)
            }
            Self::Exploding { .. } | Self::Exploded => 1.0,
        }
    }

    /// Count one frame of the blast. Returns true on the frame it completes.
    pub fn advance(&mut self, duration: u32) -> bool {
        if let Self::Exploding { progress } = self {
            let next = progress.saturating_add(1);
            if next >= duration {
                *self = Self::Exploded;
                return true;
            }
            *progress = next;
        }
        false
    }
}

/// Snapshot taken at the moment of rupture, for reporting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExplosionStats {
    pub volume_m3: Real,
    pub pressure_kpa: Real,
    pub particle_count: usize,
}

/// Blast speed for a rupture at `pressure_kpa`, clamped to the configured band.
#[inline]
pub fn explosion_power(pressure_kpa: Real, params: &SimParams) -> Real {
    let power = pressure_kpa / params.explosion_power_scale;
    if power.is_nan() {
        return params.explosion_power_max;
    }
    power.clamp(params.explosion_power_min, params.explosion_power_max)
}

/// Turn gas into debris and spawn the blast's extra debris and fragments.
pub fn rupture(
    particles: &mut ParticleSet,
    fragments: &mut Vec<Fragment>,
    center: Vector,
    pressure_kpa: Real,
    params: &SimParams,
    rng: &mut dyn RandomSource,
) -> Result<()> {
    let power = explosion_power(pressure_kpa, params);
    let lift = Vector::new(0.0, params.explosion_upward_bias);

    for particle in particles.iter_mut().filter(|p| p.is_gas()) {
        let direction = match safe_normalize(particle.position - center) {
            Some(direction) => direction,
            None => from_angle(rng.angle()?),
        };
        let force = power * (1.0 + rng.next_unit()? * GAS_TO_DEBRIS_SPREAD);
        let decay_rate = rng.in_range(&params.debris_decay_range)?;
        let hue = rng.in_range(&DEBRIS_HUE)?;
        particle.make_debris(direction * force - lift, decay_rate, hue);
    }

    let mut debris = Vec::with_capacity(params.debris_count);
    for _ in 0..params.debris_count {
        let radius = rng.in_range(&DEBRIS_RADIUS)?;
        let velocity = Vector::new(
            rng.centered()? * DEBRIS_SPEED_SPREAD,
            rng.centered()? * DEBRIS_SPEED_SPREAD - DEBRIS_UPWARD_THRUST,
        );
        let decay_rate = rng.in_range(&params.debris_decay_range)?;
        let hue = rng.in_range(&DEBRIS_HUE)?;
        let mut particle = Particle::new(center, radius, params.mass_density);
        particle.make_debris(velocity, decay_rate, hue);
        debris.push(particle);
    }
    particles.insert_batch(debris);

    fragments.reserve(params.fragment_count);
    for _ in 0..params.fragment_count {
        let direction = from_angle(rng.angle()?);
        let speed = rng.in_range(&FRAGMENT_SPEED)?;
        fragments.push(Fragment {
            position: center,
            velocity: direction * speed - Vector::new(0.0, FRAGMENT_UPWARD_THRUST),
            size: Vector::new(rng.in_range(&FRAGMENT_WIDTH)?, rng.in_range(&FRAGMENT_HEIGHT)?),
            rotation: rng.angle()?,
            rotation_speed: rng.centered()? * FRAGMENT_SPIN,
            alpha: 1.0,
            decay_rate: rng.in_range(&params.fragment_decay_range)?,
            hue: rng.in_range(&FRAGMENT_HUE)?,
        });
    }

    Ok(())
}
