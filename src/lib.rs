//! Circumpolar: great-circle distances and compass bearings on a sphere
//!
//! This crate computes great-circle distances and initial bearings from a
//! reference coordinate to one or more target coordinates, modeling Earth
//! as an idealized sphere. Coordinates are carried as unit-sphere vectors
//! internally so the angular math stays stable near the poles and the
//! antimeridian. The magnetic declination at the reference point can be
//! fetched from NOAA's geomagnetic calculator for display alongside the
//! computed true headings.

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod declination;
pub mod geodesy;
pub mod output;
pub mod settings;
pub mod units;

// Re-export commonly used types
pub use coordinates::Coordinate;
pub use geodesy::{DistanceResult, GeodesyEngine};
pub use settings::Settings;
pub use units::DistanceUnit;

/// Main error type for the circumpolar library
#[derive(Debug, Error)]
pub enum CircumpolarError {
    #[error("Input error: {0}")]
    InputError(String),

    #[error("Declination lookup error: {0}")]
    DeclinationError(String),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for circumpolar operations
pub type Result<T> = std::result::Result<T, CircumpolarError>;
