use bevy::math::DVec2;

pub type Real = f64;

pub type Vector = DVec2;

#[inline(always)]
pub fn zero_vector() -> Vector {
    DVec2::ZERO
}

/// Unit vector along `v`, or `None` when `v` has no usable direction.
#[inline]
pub fn safe_normalize(v: Vector) -> Option<Vector> {
    let length = v.length();
    if length > 0.0 && length.is_finite() {
        Some(v / length)
    } else {
        None
    }
}

/// Rescale `v` to exactly `max` when it is longer, keeping its direction.
///
/// A zero-length vector is returned untouched.
#[inline]
pub fn clamp_length_max(v: Vector, max: Real) -> Vector {
    let length = v.length();
    if length > max && length > 0.0 {
        v * (max / length)
    } else {
        v
    }
}

/// Unit vector at `angle` radians from +x.
#[inline(always)]
pub fn from_angle(angle: Real) -> Vector {
    DVec2::new(angle.cos(), angle.sin())
}

/// Clamp a scalar into `[min, max]`, collapsing to the midpoint when the
/// interval is inverted (a box narrower than a particle).
#[inline]
pub fn clamp_or_center(value: Real, min: Real, max: Real) -> Real {
    if min > max {
        0.5 * (min + max)
    } else {
        value.clamp(min, max)
    }
}
