//! Geographic coordinates and the flat-pair parsing boundary
//!
//! A [`Coordinate`] stores latitude and longitude in decimal degrees and
//! derives its unit-sphere representation once at construction. The derived
//! point is what all distance and bearing math operates on, so repeated
//! degree/radian conversions never accumulate error.

use serde::Serialize;

use crate::{CircumpolarError, Result};

pub mod cartesian;

use cartesian::Cartesian3;

/// A geographic point on the sphere
///
/// Latitude and longitude are decimal degrees, negative for south and west.
/// No bounds validation is performed: out-of-range values (e.g. a latitude
/// of 100°) are accepted and yield mathematically defined but
/// geographically meaningless results. The fields are private and there are
/// no setters, so the derived unit-sphere point can never drift out of sync
/// with the stored angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
    #[serde(skip)]
    point: Cartesian3,
}

impl Coordinate {
    /// Creates a coordinate and derives its unit-sphere point
    ///
    /// # Examples
    ///
    /// ```rust
    /// use circumpolar::Coordinate;
    ///
    /// let london = Coordinate::new(51.5, -0.1);
    /// assert_eq!(london.latitude(), 51.5);
    /// assert_eq!(london.longitude(), -0.1);
    /// ```
    pub fn new(lat: f64, lon: f64) -> Self {
        Coordinate {
            lat,
            lon,
            point: Cartesian3::from_geographic(lat, lon),
        }
    }

    /// Latitude in decimal degrees
    pub fn latitude(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees
    pub fn longitude(&self) -> f64 {
        self.lon
    }

    /// The derived unit-sphere representation of this point
    pub fn unit_point(&self) -> &Cartesian3 {
        &self.point
    }
}

/// Turns a flat sequence of numbers into coordinates
///
/// This is the parsing/counting boundary for the geodesy engine: values
/// are consumed pairwise as `lat lon lat lon ...`, an odd count or fewer
/// than two pairs is rejected as an input error, and the engine downstream
/// can assume at least a reference and one target.
pub fn from_flat_pairs(values: &[f64]) -> Result<Vec<Coordinate>> {
    if values.len() % 2 != 0 {
        return Err(CircumpolarError::InputError(format!(
            "coordinates come in lat/lon pairs, got {} values",
            values.len()
        )));
    }
    if values.len() < 4 {
        return Err(CircumpolarError::InputError(
            "need at least a reference and one target (4 values)".to_string(),
        ));
    }

    Ok(values
        .chunks_exact(2)
        .map(|pair| Coordinate::new(pair[0], pair[1]))
        .collect())
}
