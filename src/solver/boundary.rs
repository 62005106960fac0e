//! Wall containment
//!
//! A particle whose center is within one radius of a wall is pushed back inside
//! and its normal velocity is turned inward and damped. Axes are independent.

use crate::core::{Container, Particle};
use crate::math::{Real, clamp_or_center};

/// Contain one axis. Returns true when a wall was hit.
#[inline]
fn contain_axis(position: &mut Real, velocity: &mut Real, min: Real, max: Real, restitution: Real) -> bool {
    if *position < min {
        *position = clamp_or_center(*position, min, max);
        if *velocity < 0.0 {
            *velocity = -*velocity * restitution;
        }
        true
    } else if *position > max {
        *position = clamp_or_center(*position, min, max);
        if *velocity > 0.0 {
            *velocity = -*velocity * restitution;
        }
        true
    } else {
        false
    }
}

/// Keep `particle` inside `container`. Returns true when it touched a wall.
pub fn contain_within_bounds(particle: &mut Particle, container: &Container, restitution: Real) -> bool {
    let (min, max) = container.inner_bounds(particle.radius());
    let hit_x = contain_axis(
        &mut particle.position.x,
        &mut particle.velocity.x,
        min.x,
        max.x,
        restitution,
    );
    let hit_y = contain_axis(
        &mut particle.position.y,
        &mut particle.velocity.y,
        min.y,
        max.y,
        restitution,
    );
    hit_x || hit_y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector;
    use approx::assert_relative_eq;

    fn container() -> Container {
        Container::new(100.0, 80.0, 1000.0).with_origin(Vector::new(10.0, 10.0))
    }

    #[test]
    fn reflects_off_left_wall() {
        let mut p = Particle::new(Vector::new(11.0, 50.0), 3.0, 0.5).with_velocity(Vector::new(-2.0, 1.0));
        assert!(contain_within_bounds(&mut p, &container(), 0.9));
        assert_eq!(p.position.x, 13.0);
        assert_relative_eq!(p.velocity.x, 1.8, epsilon = 1e-12);
        assert_eq!(p.velocity.y, 1.0);
    }

    #[test]
    fn reflects_off_bottom_and_right_corner() {
        let mut p = Particle::new(Vector::new(120.0, 95.0), 3.0, 0.5).with_velocity(Vector::new(4.0, 2.0));
        assert!(contain_within_bounds(&mut p, &container(), 0.9));
        assert_eq!(p.position, Vector::new(107.0, 87.0));
        assert_relative_eq!(p.velocity.x, -3.6, epsilon = 1e-12);
        assert_relative_eq!(p.velocity.y, -1.8, epsilon = 1e-12);
    }

    #[test]
    fn inward_velocity_is_not_flipped() {
        let mut p = Particle::new(Vector::new(11.0, 50.0), 3.0, 0.5).with_velocity(Vector::new(2.0, 0.0));
        contain_within_bounds(&mut p, &container(), 0.9);
        assert_eq!(p.velocity.x, 2.0);
    }

    #[test]
    fn interior_particle_untouched() {
        let mut p = Particle::new(Vector::new(50.0, 50.0), 3.0, 0.5).with_velocity(Vector::new(-2.0, 1.0));
        assert!(!contain_within_bounds(&mut p, &container(), 0.9));
        assert_eq!(p.position, Vector::new(50.0, 50.0));
    }

    #[test]
    fn box_narrower_than_particle_centers_it() {
        let narrow = Container::new(4.0, 100.0, 1000.0);
        let mut p = Particle::new(Vector::new(0.0, 50.0), 3.0, 0.5);
        contain_within_bounds(&mut p, &narrow, 0.9);
        assert_eq!(p.position.x, 2.0);
    }
}
