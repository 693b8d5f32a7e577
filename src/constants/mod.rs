//! Constants for spherical geodesy calculations

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;

// Unit conversions
/// Kilometers per international nautical mile
pub const KM_PER_NM: f64 = 1.852;
/// Kilometers per statute mile
pub const KM_PER_MI: f64 = 1.609_344;

// Earth radii (IUGG mean radius, expressed in each supported unit)
/// Earth's mean radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6_371.008_8;
/// Earth's mean radius in nautical miles
pub const EARTH_RADIUS_NM: f64 = EARTH_RADIUS_KM / KM_PER_NM;
/// Earth's mean radius in statute miles
pub const EARTH_RADIUS_MI: f64 = EARTH_RADIUS_KM / KM_PER_MI;
