//! Pairwise circle collisions
//!
//! Impulse-based resolution with restitution over every unordered pair in
//! ascending index order. O(n²); fine for the particle counts of a gas box
//! demo, and the ceiling if it ever needs to scale.

use crate::core::Particle;
use crate::math::Real;

/// What happened to a pair during resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Contact {
    /// Not overlapping.
    Apart,
    /// Centers coincide; no normal exists so the pair is left untouched.
    Coincident,
    /// Overlapping but already moving apart; only pushed out of overlap.
    Separating,
    /// Overlapping and closing; the impulse magnitude applied.
    Impulse(Real),
}

/// Resolve one pair. `a` and `b` must be distinct particles.
pub fn resolve_pair(a: &mut Particle, b: &mut Particle, restitution: Real) -> Contact {
    let delta = b.position - a.position;
    let distance = delta.length();
    let min_distance = a.radius() + b.radius();

    if distance >= min_distance {
        return Contact::Apart;
    }
    if distance == 0.0 {
        return Contact::Coincident;
    }

    let normal = delta / distance;
    let closing_speed = (b.velocity - a.velocity).dot(normal);

    let contact = if closing_speed < 0.0 {
        let inv_mass_sum = 1.0 / a.mass() + 1.0 / b.mass();
        let impulse = -(1.0 + restitution) * closing_speed / inv_mass_sum;
        a.velocity -= normal * (impulse / a.mass());
        b.velocity += normal * (impulse / b.mass());
        Contact::Impulse(impulse)
    } else {
        Contact::Separating
    };

    // Half the penetration each, so the pair ends up exactly touching.
    let correction = normal * (0.5 * (min_distance - distance));
    a.position -= correction;
    b.position += correction;

    contact
}

/// Resolve every overlapping pair once. Returns how many pairs received an
/// impulse.
pub fn resolve_collisions(particles: &mut [Particle], restitution: Real) -> usize {
    let mut impulses = 0;
    for i in 0..particles.len() {
        let (head, tail) = particles.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if let Contact::Impulse(_) = resolve_pair(a, b, restitution) {
                impulses += 1;
            }
        }
    }
    impulses
}
