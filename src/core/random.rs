//! Injectable uniform random source.
//!
//! Everything the kernel randomizes (spawn positions, initial velocities,
//! blast spread) draws from one [`RandomSource`], so a fixed seed reproduces a
//! whole run.

use std::f64::consts::TAU;
use std::ops::Range;

use rand::TryRngCore;

use crate::error::{Error, Result};
use crate::math::Real;

pub trait RandomSource: Send + Sync {
    /// Uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> Result<Real>;

    /// Uniform float in `range` (the start when the range is empty).
    fn in_range(&mut self, range: &Range<Real>) -> Result<Real> {
        Ok(range.start + (range.end - range.start) * self.next_unit()?)
    }

    /// Uniform float in `[-0.5, 0.5)`.
    fn centered(&mut self) -> Result<Real> {
        Ok(self.next_unit()? - 0.5)
    }

    /// Uniform angle in `[0, 2π)`.
    fn angle(&mut self) -> Result<Real> {
        Ok(self.next_unit()? * TAU)
    }
}

/// Adapts any `rand` generator, fallible or not.
pub struct RngSource<R> {
    rng: R,
}

impl<R> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: TryRngCore + Send + Sync> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> Result<Real> {
        let bits = self
            .rng
            .try_next_u64()
            .map_err(|e| Error::RandomSource(e.to_string()))?;
        // 53 high bits -> [0, 1)
        Ok((bits >> 11) as Real * (1.0 / (1u64 << 53) as Real))
    }
}

/// Replays a fixed list of values, cycling. Handy for scripted scenarios.
#[derive(Clone, Debug)]
pub struct SequenceSource {
    values: Vec<Real>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<Real>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> Result<Real> {
        if self.values.is_empty() {
            return Err(Error::RandomSource("sequence is empty".into()));
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        Ok(value.clamp(0.0, 1.0 - Real::EPSILON))
    }
}
