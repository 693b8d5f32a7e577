//! Distance units and their default sphere radii

use std::fmt;

use serde::Serialize;

use crate::constants::{EARTH_RADIUS_KM, EARTH_RADIUS_MI, EARTH_RADIUS_NM};

/// The three supported distance units
///
/// Each unit carries Earth's mean radius expressed in that unit, so a
/// given coordinate pair produces distances in the fixed ratio of the
/// three radii when only the unit changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DistanceUnit {
    NauticalMiles,
    Kilometers,
    StatuteMiles,
}

impl DistanceUnit {
    /// Short label used in text output
    pub fn label(&self) -> &'static str {
        match self {
            DistanceUnit::NauticalMiles => "NM",
            DistanceUnit::Kilometers => "km",
            DistanceUnit::StatuteMiles => "mi",
        }
    }

    /// Earth's mean radius in this unit
    pub fn default_radius(&self) -> f64 {
        match self {
            DistanceUnit::NauticalMiles => EARTH_RADIUS_NM,
            DistanceUnit::Kilometers => EARTH_RADIUS_KM,
            DistanceUnit::StatuteMiles => EARTH_RADIUS_MI,
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
