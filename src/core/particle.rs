//! Gas particles and the debris they turn into
//!
//! A particle's mass is always derived from its radius; the two are only
//! changed together through [`Particle::set_radius`].

use crate::config::{MIN_DECAY_RATE, MIN_PARTICLE_RADIUS};
use crate::math::{Real, Vector, zero_vector};

/// What a particle currently is.
///
/// Only debris carries fade-out state, so physics code never sees an alpha on
/// a gas molecule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParticleKind {
    Gas,
    Debris { alpha: Real, decay_rate: Real },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vector,
    pub velocity: Vector,
    pub kind: ParticleKind,
    /// Display hue in degrees. Cosmetic.
    pub hue: Real,
    radius: Real,
    mass: Real,
}

impl Particle {
    pub fn new(position: Vector, radius: Real, mass_density: Real) -> Self {
        let mut particle = Self {
            position,
            velocity: zero_vector(),
            kind: ParticleKind::Gas,
            hue: 0.0,
            radius: MIN_PARTICLE_RADIUS,
            mass: 0.0,
        };
        particle.set_radius(radius, mass_density);
        particle
    }

    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_hue(mut self, hue: Real) -> Self {
        self.hue = hue;
        self
    }

    /// Builder form of [`Particle::make_debris`] with an explicit alpha.
    pub fn into_debris(mut self, alpha: Real, decay_rate: Real) -> Self {
        self.kind = ParticleKind::Debris {
            alpha,
            decay_rate: decay_rate.max(MIN_DECAY_RATE),
        };
        self
    }

    /// Turn this particle into fully opaque debris flying at `velocity`.
    pub fn make_debris(&mut self, velocity: Vector, decay_rate: Real, hue: Real) {
        self.velocity = velocity;
        self.hue = hue;
        self.kind = ParticleKind::Debris {
            alpha: 1.0,
            decay_rate: decay_rate.max(MIN_DECAY_RATE),
        };
    }

    #[inline(always)]
    pub fn radius(&self) -> Real {
        self.radius
    }

    #[inline(always)]
    pub fn mass(&self) -> Real {
        self.mass
    }

    /// Set the radius (floored at [`MIN_PARTICLE_RADIUS`]) and re-derive mass.
    pub fn set_radius(&mut self, radius: Real, mass_density: Real) {
        self.radius = if radius.is_finite() {
            radius.max(MIN_PARTICLE_RADIUS)
        } else {
            MIN_PARTICLE_RADIUS
        };
        self.mass = self.radius * mass_density.max(Real::EPSILON);
    }

    #[inline(always)]
    pub fn is_gas(&self) -> bool {
        matches!(self.kind, ParticleKind::Gas)
    }

    #[inline(always)]
    pub fn is_debris(&self) -> bool {
        matches!(self.kind, ParticleKind::Debris { .. })
    }

    pub fn alpha(&self) -> Option<Real> {
        match self.kind {
            ParticleKind::Gas => None,
            ParticleKind::Debris { alpha, .. } => Some(alpha),
        }
    }

    /// Debris that has fully faded out and should be dropped.
    #[inline]
    pub fn is_faded(&self) -> bool {
        matches!(self.kind, ParticleKind::Debris { alpha, .. } if alpha <= 0.0)
    }

    #[inline]
    pub fn momentum(&self) -> Vector {
        self.velocity * self.mass
    }

    #[inline]
    pub fn kinetic_energy(&self) -> Real {
        0.5 * self.mass * self.velocity.length_squared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mass_follows_radius() {
        let mut p = Particle::new(Vector::new(1.0, 2.0), 4.0, 0.5);
        assert_eq!(p.mass(), 2.0);
        p.set_radius(6.0, 0.5);
        assert_eq!(p.radius(), 6.0);
        assert_eq!(p.mass(), 3.0);
    }

    #[test]
    fn radius_never_reaches_zero() {
        let p = Particle::new(Vector::ZERO, 0.0, 0.5);
        assert!(p.radius() > 0.0);
        assert!(p.mass() > 0.0);
        let q = Particle::new(Vector::ZERO, Real::NAN, 0.5);
        assert_eq!(q.radius(), MIN_PARTICLE_RADIUS);
    }

    #[test]
    fn gas_has_no_alpha() {
        let p = Particle::new(Vector::ZERO, 3.0, 0.5);
        assert!(p.is_gas());
        assert_eq!(p.alpha(), None);
        assert!(!p.is_faded());
    }

    #[test]
    fn make_debris_resets_alpha() {
        let mut p = Particle::new(Vector::ZERO, 3.0, 0.5);
        p.make_debris(Vector::new(5.0, -2.0), 0.0, 30.0);
        assert!(p.is_debris());
        assert_eq!(p.alpha(), Some(1.0));
        match p.kind {
            ParticleKind::Debris { decay_rate, .. } => assert!(decay_rate > 0.0),
            ParticleKind::Gas => panic!("expected debris"),
        }
        assert_eq!(p.velocity, Vector::new(5.0, -2.0));
    }

    #[test]
    fn kinetic_energy_computed() {
        let p = Particle::new(Vector::ZERO, 4.0, 0.5).with_velocity(Vector::new(3.0, 4.0));
        // m = 2, |v|^2 = 25
        assert!((p.kinetic_energy() - 25.0).abs() < 1e-12);
        assert_eq!(p.momentum(), Vector::new(6.0, 8.0));
    }
}
