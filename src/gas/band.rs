use crate::config::STANDARD_PRESSURE_KPA;
use crate::math::Real;

/// Pressure relative to the rupture threshold, for display only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PressureBand {
    /// At or below atmospheric pressure.
    Nominal,
    /// Above atmospheric, under 60% of strength.
    Warm,
    /// 60-80% of strength.
    Elevated,
    /// 80-100% of strength.
    Critical,
    /// Above strength.
    Rupture,
}

impl PressureBand {
    pub fn classify(pressure_kpa: Real, strength_threshold: Real) -> Self {
        if pressure_kpa > strength_threshold {
            Self::Rupture
        } else if pressure_kpa > strength_threshold * 0.8 {
            Self::Critical
        } else if pressure_kpa > strength_threshold * 0.6 {
            Self::Elevated
        } else if pressure_kpa > STANDARD_PRESSURE_KPA {
            Self::Warm
        } else {
            Self::Nominal
        }
    }

    /// Whether the explanation panel should show a strength warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Critical | Self::Rupture)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Nominal => "nominal",
            Self::Warm => "warm",
            Self::Elevated => "elevated",
            Self::Critical => "critical",
            Self::Rupture => "rupture",
        }
    }
}

/// The numbers behind the PV = nRT explanation panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GasLawReadout {
    pub moles: Real,
    pub temperature_kelvin: Real,
    pub volume_m3: Real,
    pub pressure_kpa: Real,
    pub strength_threshold_kpa: Real,
    /// `pressure / strength`.
    pub pressure_ratio: Real,
    pub band: PressureBand,
    pub ruptured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_follow_thresholds() {
        let strength = 1000.0;
        assert_eq!(PressureBand::classify(1000.1, strength), PressureBand::Rupture);
        assert_eq!(PressureBand::classify(1000.0, strength), PressureBand::Critical);
        assert_eq!(PressureBand::classify(801.0, strength), PressureBand::Critical);
        assert_eq!(PressureBand::classify(700.0, strength), PressureBand::Elevated);
        assert_eq!(PressureBand::classify(200.0, strength), PressureBand::Warm);
        assert_eq!(PressureBand::classify(101.325, strength), PressureBand::Nominal);
        assert_eq!(PressureBand::classify(Real::INFINITY, strength), PressureBand::Rupture);
    }

    #[test]
    fn weak_container_skips_to_upper_bands() {
        // 60% of 50 kPa is below atmospheric, so the ratio bands win.
        assert_eq!(PressureBand::classify(35.0, 50.0), PressureBand::Elevated);
        assert!(PressureBand::classify(45.0, 50.0).is_warning());
        assert!(!PressureBand::Warm.is_warning());
    }
}
