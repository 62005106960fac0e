//! The confining box. Coordinates are container-local with y growing downward.

use crate::config::{DEPTH_FACTOR, PIXELS_PER_METER};
use crate::math::{Real, Vector};

#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    pub origin: Vector,
    pub width: Real,
    pub height: Real,
    /// Pressure (kPa) above which the container ruptures.
    pub strength_threshold: Real,
    pub depth_factor: Real,
}

impl Container {
    pub fn new(width: Real, height: Real, strength_threshold: Real) -> Self {
        Self {
            origin: Vector::ZERO,
            width,
            height,
            strength_threshold,
            depth_factor: DEPTH_FACTOR,
        }
    }

    pub fn with_origin(mut self, origin: Vector) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_depth_factor(mut self, depth_factor: Real) -> Self {
        self.depth_factor = depth_factor;
        self
    }

    /// Abstract 3D volume in m³: the 2D box in meters times a fixed depth.
    #[inline]
    pub fn volume(&self) -> Real {
        (self.width / PIXELS_PER_METER) * (self.height / PIXELS_PER_METER) * self.depth_factor
    }

    #[inline]
    pub fn size(&self) -> Vector {
        Vector::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vector {
        self.origin + self.size() * 0.5
    }

    #[inline]
    pub fn max_corner(&self) -> Vector {
        self.origin + self.size()
    }

    /// Range a circle of `radius` may occupy with its center: `[min, max]`.
    ///
    /// For a box narrower than the circle, `min > max` on that axis.
    #[inline]
    pub fn inner_bounds(&self, radius: Real) -> (Vector, Vector) {
        (
            self.origin + Vector::splat(radius),
            self.max_corner() - Vector::splat(radius),
        )
    }

    pub fn contains_circle(&self, position: Vector, radius: Real) -> bool {
        let (min, max) = self.inner_bounds(radius);
        position.x >= min.x && position.x <= max.x && position.y >= min.y && position.y <= max.y
    }
}
