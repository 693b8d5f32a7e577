//! # Cartesian Unit-Vector Module
//!
//! Three-dimensional Cartesian vectors used as the intermediate
//! representation for all angular computations on the sphere.
//!
//! ## Coordinate System Convention
//!
//! This implementation follows geographic conventions:
//! - **X-axis**: Points toward (lat = 0°, lon = 0°), the equator at the prime meridian
//! - **Y-axis**: Points toward (lat = 0°, lon = 90° E)
//! - **Z-axis**: Points toward the geographic north pole (lat = +90°)
//!
//! Working on unit vectors rather than raw degrees keeps the distance and
//! bearing formulas free of singularities at the poles and discontinuities
//! at the antimeridian.

use nalgebra::Vector3;
use std::f64::consts::PI;

use crate::constants::DEG2RAD;

/// Three-dimensional Cartesian vector in the geographic frame
///
/// Represents a point or direction in 3D space. Latitude/longitude pairs
/// map onto unit vectors via [`Cartesian3::from_geographic`]; all angular
/// operations (dot, cross, angular distance) are delegated to
/// [`nalgebra::Vector3`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cartesian3 {
    /// X-component (toward lat 0°, lon 0°)
    pub x: f64,
    /// Y-component (toward lat 0°, lon 90° E)
    pub y: f64,
    /// Z-component (toward the north pole)
    pub z: f64,
}

impl Cartesian3 {
    /// Creates a new Cartesian vector from raw components
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// Creates a unit vector from geographic coordinates in degrees
    ///
    /// # Mathematical Conversion
    ///
    /// - `x = cos(lat) * cos(lon)`
    /// - `y = cos(lat) * sin(lon)`
    /// - `z = sin(lat)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use circumpolar::coordinates::cartesian::Cartesian3;
    ///
    /// // North pole
    /// let pole = Cartesian3::from_geographic(90.0, 0.0);
    /// assert!(pole.x.abs() < 1e-15);
    /// assert!(pole.y.abs() < 1e-15);
    /// assert!((pole.z - 1.0).abs() < 1e-15);
    /// ```
    pub fn from_geographic(lat_deg: f64, lon_deg: f64) -> Self {
        let lat = lat_deg * DEG2RAD;
        let lon = lon_deg * DEG2RAD;
        let cos_lat = lat.cos();
        Cartesian3 {
            x: cos_lat * lon.cos(),
            y: cos_lat * lon.sin(),
            z: lat.sin(),
        }
    }

    /// Calculates the magnitude (length) of the vector
    pub fn magnitude(&self) -> f64 {
        self.to_vector3().norm()
    }

    /// Returns a normalized (unit) vector in the same direction
    ///
    /// Returns `None` if the magnitude is zero.
    pub fn normalize(&self) -> Option<Cartesian3> {
        let mag = self.magnitude();
        if mag == 0.0 {
            None
        } else {
            Some(Cartesian3 {
                x: self.x / mag,
                y: self.y / mag,
                z: self.z / mag,
            })
        }
    }

    /// Calculates the dot product with another vector
    pub fn dot(&self, other: &Cartesian3) -> f64 {
        self.to_vector3().dot(&other.to_vector3())
    }

    /// Calculates the cross product with another vector
    ///
    /// For two points on the sphere, the cross product is normal to the
    /// great circle through them, which is what the turn-angle bearing
    /// primitive is built from.
    pub fn cross(&self, other: &Cartesian3) -> Cartesian3 {
        Cartesian3::from_vector3(self.to_vector3().cross(&other.to_vector3()))
    }

    /// Calculates the angular distance to another vector
    ///
    /// Both vectors are treated as directions from the origin; magnitudes
    /// are divided out, so the inputs need not be unit length. Returns an
    /// angle in radians in `[0, π]`, or `0.0` when either vector is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use circumpolar::coordinates::cartesian::Cartesian3;
    /// use std::f64::consts::PI;
    ///
    /// let equator = Cartesian3::from_geographic(0.0, 0.0);
    /// let pole = Cartesian3::from_geographic(90.0, 0.0);
    /// assert!((equator.angular_distance(&pole) - PI / 2.0).abs() < 1e-15);
    /// ```
    pub fn angular_distance(&self, other: &Cartesian3) -> f64 {
        let mag_product = self.magnitude() * other.magnitude();
        if mag_product == 0.0 {
            return 0.0;
        }

        let cos_angle = self.dot(other) / mag_product;

        // Clamp to guard acos against rounding just outside [-1, 1]
        if cos_angle >= 1.0 {
            0.0
        } else if cos_angle <= -1.0 {
            PI
        } else {
            cos_angle.acos()
        }
    }

    /// Converts to a nalgebra `Vector3` for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from a nalgebra `Vector3`
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}
