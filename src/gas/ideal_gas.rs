use crate::config::{IDEAL_GAS_CONSTANT, STANDARD_PRESSURE_KPA, VOLUME_EPSILON};
use crate::math::Real;

/// Amount of gas represented by `particle_count` simulated molecules.
#[inline]
pub fn moles(particle_count: usize, moles_per_particle: Real) -> Real {
    particle_count as Real * moles_per_particle
}

/// Ideal-gas pressure in kPa.
///
/// A collapsed container (`volume <= 0`) is infinitely pressurized and always
/// ruptures. An empty container sits at ambient pressure.
pub fn pressure_kpa(
    particle_count: usize,
    moles_per_particle: Real,
    temperature_kelvin: Real,
    volume_m3: Real,
) -> Real {
    if volume_m3.is_nan() || volume_m3 <= 0.0 {
        return Real::INFINITY;
    }
    if particle_count == 0 {
        return STANDARD_PRESSURE_KPA;
    }
    let n = moles(particle_count, moles_per_particle);
    let pascals = n * IDEAL_GAS_CONSTANT * temperature_kelvin / volume_m3.max(VOLUME_EPSILON);
    pascals / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reference_pressure() {
        // n = 0.1 mol, T = 300 K, V = 0.009 m³
        let p = pressure_kpa(10, 0.01, 300.0, 0.009);
        assert_relative_eq!(p, 0.1 * 8.314 * 300.0 / 0.009 / 1000.0, max_relative = 1e-12);
        assert_relative_eq!(p, 27.713, epsilon = 1e-3);
    }

    #[test]
    fn pressure_rises_with_count_and_temperature() {
        let mut last = 0.0;
        for n in 1..50 {
            let p = pressure_kpa(n, 0.01, 300.0, 0.032);
            assert!(p > last);
            last = p;
        }
        assert!(pressure_kpa(10, 0.01, 600.0, 0.032) > pressure_kpa(10, 0.01, 300.0, 0.032));
    }

    #[test]
    fn collapsed_volume_is_infinite() {
        assert_eq!(pressure_kpa(10, 0.01, 300.0, 0.0), Real::INFINITY);
        assert_eq!(pressure_kpa(0, 0.01, 300.0, -1.0), Real::INFINITY);
        assert!(pressure_kpa(1, 0.01, 300.0, 0.0) > 1e300);
    }

    #[test]
    fn empty_box_is_ambient() {
        assert_eq!(pressure_kpa(0, 0.01, 300.0, 0.032), STANDARD_PRESSURE_KPA);
    }

    #[test]
    fn moles_scale_with_count() {
        assert_relative_eq!(moles(25, 0.01), 0.25, epsilon = 1e-15);
    }
}
