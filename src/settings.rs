//! Run configuration, resolved once at the boundary and passed explicitly

use crate::units::DistanceUnit;

/// Resolved configuration for one invocation
///
/// There is no ambient or global state; the engine and renderers receive
/// everything they need through this struct.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Distance unit for output
    pub unit: DistanceUnit,
    /// Sphere radius, in `unit`
    pub radius: f64,
    /// Render JSON instead of text columns
    pub json: bool,
    /// Skip the NOAA declination lookup
    pub offline: bool,
}

impl Settings {
    /// Resolves the effective radius from the unit and an optional override
    ///
    /// An explicit radius always wins over the unit-implied Earth default,
    /// regardless of which flags were combined on the command line.
    pub fn new(unit: DistanceUnit, radius_override: Option<f64>, json: bool, offline: bool) -> Self {
        Settings {
            unit,
            radius: radius_override.unwrap_or_else(|| unit.default_radius()),
            json,
            offline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EARTH_RADIUS_KM;

    #[test]
    fn test_unit_default_radius() {
        let s = Settings::new(DistanceUnit::Kilometers, None, false, false);
        assert_eq!(s.radius, EARTH_RADIUS_KM);
    }

    #[test]
    fn test_explicit_radius_wins_over_unit_default() {
        let s = Settings::new(DistanceUnit::Kilometers, Some(1.0), false, false);
        assert_eq!(s.radius, 1.0);
        assert_eq!(s.unit, DistanceUnit::Kilometers);
    }
}
