use crate::core::Particle;
use crate::math::Real;

/// Owning collection of gas and debris particles.
///
/// Indices are stable between steps except when faded debris is removed; the
/// removal returns an old -> new index mapping for anyone holding indices.
#[derive(Clone, Debug, Default)]
pub struct ParticleSet {
    particles: Vec<Particle>,
}

impl ParticleSet {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.particles.iter_mut()
    }

    pub fn push(&mut self, particle: Particle) -> usize {
        let index = self.particles.len();
        self.particles.push(particle);
        index
    }

    pub fn insert_batch(&mut self, mut batch: Vec<Particle>) {
        self.particles.append(&mut batch);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn gas_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_gas()).count()
    }

    pub fn debris_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_debris()).count()
    }

    /// Rewrite every particle's radius, re-deriving mass.
    pub fn resize_all(&mut self, radius: Real, mass_density: Real) {
        for particle in self.particles.iter_mut() {
            particle.set_radius(radius, mass_density);
        }
    }

    /// Drop debris whose alpha reached zero.
    ///
    /// Returns an empty mapping when nothing was removed, otherwise one entry
    /// per old index: `Some(new_index)` for survivors, `None` for removed.
    pub fn remove_faded(&mut self) -> Vec<Option<usize>> {
        if !self.particles.iter().any(|particle| particle.is_faded()) {
            return Vec::new();
        }

        let old_len = self.particles.len();
        let mut mapping = vec![None; old_len];
        let mut survivors = Vec::with_capacity(old_len);

        for (old_idx, particle) in self.particles.drain(..).enumerate() {
            if !particle.is_faded() {
                mapping[old_idx] = Some(survivors.len());
                survivors.push(particle);
            }
        }

        self.particles = survivors;
        mapping
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector;

    fn gas(x: Real) -> Particle {
        Particle::new(Vector::new(x, 0.0), 3.0, 0.5)
    }

    #[test]
    fn remove_faded_keeps_order_and_maps_indices() {
        let mut set = ParticleSet::new();
        set.push(gas(0.0));
        set.push(gas(1.0).into_debris(0.0, 0.02));
        set.push(gas(2.0).into_debris(0.5, 0.02));
        set.push(gas(3.0));

        let mapping = set.remove_faded();
        assert_eq!(mapping, vec![Some(0), None, Some(1), Some(2)]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.particles()[2].position.x, 3.0);
        assert_eq!(set.gas_count(), 2);
        assert_eq!(set.debris_count(), 1);
    }

    #[test]
    fn remove_faded_without_faded_is_empty() {
        let mut set = ParticleSet::new();
        set.insert_batch(vec![gas(0.0), gas(1.0)]);
        assert!(set.remove_faded().is_empty());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn resize_all_rewrites_mass() {
        let mut set = ParticleSet::new();
        set.insert_batch(vec![gas(0.0), gas(1.0)]);
        set.resize_all(8.0, 0.5);
        assert!(set.iter().all(|p| p.radius() == 8.0 && p.mass() == 4.0));
    }
}
