//! Per-particle integration
//!
//! Moves a particle by its velocity, applies the kind-specific forces (drag
//! on gas, gravity and fading on debris), then caps its speed.

use crate::config::SimParams;
use crate::core::{Particle, ParticleKind};
use crate::math::{Real, clamp_length_max};

/// Advance `particle` by `dt` frames.
///
/// Both kinds are capped at `max_speed`; a resting particle is left as is.
pub fn integrate(particle: &mut Particle, dt: Real, params: &SimParams, max_speed: Real) {
    particle.position += particle.velocity * dt;

    match &mut particle.kind {
        ParticleKind::Gas => {
            particle.velocity *= params.gas_damping.powf(dt);
        }
        ParticleKind::Debris { alpha, decay_rate } => {
            particle.velocity.y += params.debris_gravity * dt;
            *alpha -= *decay_rate * dt;
        }
    }

    particle.velocity = clamp_length_max(particle.velocity, max_speed);
}

pub fn integrate_all(particles: &mut [Particle], dt: Real, params: &SimParams, max_speed: Real) {
    for particle in particles.iter_mut() {
        integrate(particle, dt, params, max_speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector;
    use approx::assert_relative_eq;

    fn gas(velocity: Vector) -> Particle {
        Particle::new(Vector::new(50.0, 50.0), 3.0, 0.5).with_velocity(velocity)
    }

    #[test]
    fn gas_moves_and_damps() {
        let params = SimParams::default();
        let mut p = gas(Vector::new(2.0, -1.0));
        integrate(&mut p, 1.0, &params, 100.0);
        assert_eq!(p.position, Vector::new(52.0, 49.0));
        assert_relative_eq!(p.velocity.x, 2.0 * 0.999, epsilon = 1e-12);
        assert_relative_eq!(p.velocity.y, -0.999, epsilon = 1e-12);
    }

    #[test]
    fn gas_speed_is_clamped_preserving_direction() {
        let params = SimParams::elastic();
        let mut p = gas(Vector::new(30.0, 40.0));
        integrate(&mut p, 1.0, &params, params.max_speed(300.0));
        assert_relative_eq!(p.velocity.length(), 6.0, epsilon = 1e-12);
        assert_relative_eq!(p.velocity.x / p.velocity.y, 0.75, epsilon = 1e-12);
    }

    #[test]
    fn resting_gas_is_not_rescaled() {
        let params = SimParams::default();
        let mut p = gas(Vector::ZERO);
        integrate(&mut p, 1.0, &params, 0.0);
        assert_eq!(p.velocity, Vector::ZERO);
        assert!(p.velocity.is_finite());
    }

    #[test]
    fn debris_falls_and_fades() {
        let params = SimParams::default();
        let mut p = gas(Vector::new(2.0, 0.0)).into_debris(1.0, 0.02);
        integrate(&mut p, 1.0, &params, 100.0);
        assert_eq!(p.velocity.x, 2.0);
        assert_relative_eq!(p.velocity.y, params.debris_gravity, epsilon = 1e-12);
        assert_relative_eq!(p.alpha().unwrap_or_default(), 0.98, epsilon = 1e-12);
    }

    #[test]
    fn debris_speed_is_clamped() {
        let params = SimParams::default();
        let max_speed = params.max_speed(300.0);
        let mut p = gas(Vector::new(20.0, 0.0)).into_debris(1.0, 0.02);
        integrate(&mut p, 1.0, &params, max_speed);
        assert_relative_eq!(p.velocity.length(), max_speed, epsilon = 1e-12);
        assert!(p.velocity.x > 0.0 && p.velocity.y > 0.0);
    }
}
