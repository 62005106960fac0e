//! Container-shell shards thrown out at rupture. Purely cosmetic, but owned by
//! the simulation so their lifetime is deterministic.

use crate::math::{Real, Vector};

#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub position: Vector,
    pub velocity: Vector,
    /// Width and height of the shard.
    pub size: Vector,
    pub rotation: Real,
    pub rotation_speed: Real,
    pub alpha: Real,
    pub decay_rate: Real,
    /// Display hue in degrees.
    pub hue: Real,
}

impl Fragment {
    /// Advance one tick: move, fall, spin and fade.
    pub fn integrate(&mut self, dt: Real, gravity: Real) {
        self.position += self.velocity * dt;
        self.velocity.y += gravity * dt;
        self.rotation += self.rotation_speed * dt;
        self.alpha -= self.decay_rate * dt;
    }

    #[inline]
    pub fn is_faded(&self) -> bool {
        self.alpha <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_falls_spins_and_fades() {
        let mut fragment = Fragment {
            position: Vector::new(10.0, 10.0),
            velocity: Vector::new(2.0, -1.0),
            size: Vector::new(20.0, 5.0),
            rotation: 0.0,
            rotation_speed: 0.1,
            alpha: 1.0,
            decay_rate: 0.25,
            hue: 200.0,
        };
        fragment.integrate(1.0, 0.1);
        assert_eq!(fragment.position, Vector::new(12.0, 9.0));
        assert!((fragment.velocity.y + 0.9).abs() < 1e-12);
        assert!((fragment.rotation - 0.1).abs() < 1e-12);
        assert!(!fragment.is_faded());
        for _ in 0..3 {
            fragment.integrate(1.0, 0.1);
        }
        assert!(fragment.is_faded());
    }
}
