//! The geodesy engine: great-circle distances and initial bearings
//!
//! The engine is purely functional over its inputs. Distances come from the
//! angular separation of two unit-sphere points scaled by a caller-supplied
//! radius; bearings come from the spherical turn angle at the reference
//! point between the direction to the north pole and the direction to the
//! target, mapped onto the compass convention (0° = true north, clockwise).

use serde::Serialize;

use crate::constants::RAD2DEG;
use crate::coordinates::cartesian::Cartesian3;
use crate::coordinates::Coordinate;

/// The geographic north pole (lat 90°, lon 0°) as a unit vector
const NORTH_POLE: Cartesian3 = Cartesian3 {
    x: 0.0,
    y: 0.0,
    z: 1.0,
};

/// Distance and heading of one target relative to the reference coordinate
#[derive(Debug, Clone, Serialize)]
pub struct DistanceResult {
    /// The target coordinate
    pub coord: Coordinate,
    /// Great-circle distance in the caller's unit
    pub distance: f64,
    /// Initial bearing in degrees `[0, 360)`, clockwise from true north
    pub heading: f64,
    /// Position in the input order (0 is the reference itself)
    pub index: usize,
}

/// Stateless engine for pairwise distance and bearing computation
pub struct GeodesyEngine;

impl GeodesyEngine {
    /// Great-circle distance between two coordinates, scaled by `radius`
    ///
    /// The angular separation is measured between the points' unit-sphere
    /// vectors, so the result is total for all finite inputs, including
    /// coincident and antipodal pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use circumpolar::{Coordinate, GeodesyEngine};
    /// use std::f64::consts::PI;
    ///
    /// let origin = Coordinate::new(0.0, 0.0);
    /// let east = Coordinate::new(0.0, 90.0);
    /// let quarter = GeodesyEngine::distance(&origin, &east, 1.0);
    /// assert!((quarter - PI / 2.0).abs() < 1e-12);
    /// ```
    pub fn distance(reference: &Coordinate, target: &Coordinate, radius: f64) -> f64 {
        reference.unit_point().angular_distance(target.unit_point()) * radius
    }

    /// Initial bearing from `reference` toward `target`
    ///
    /// Returns degrees in `[0, 360)`, measured clockwise from true north at
    /// the reference point. Computed as `-(turn_angle(pole, reference,
    /// target) - 180)`: walking from the pole to the reference and turning
    /// toward the target, a straight-ahead continuation (no turn) means the
    /// target lies due south, and a full reversal means due north.
    ///
    /// When the target coincides with the reference (or is exactly
    /// antipodal) the turn angle is degenerate; the degenerate normal makes
    /// the turn come out as 0, so this returns a stable 180.0 rather than
    /// flagging an error.
    pub fn bearing(reference: &Coordinate, target: &Coordinate) -> f64 {
        let turn = turn_angle(&NORTH_POLE, reference.unit_point(), target.unit_point());
        (-(turn - 180.0)).rem_euclid(360.0)
    }

    /// Computes one [`DistanceResult`] per input coordinate, in input order
    ///
    /// The first coordinate is the reference; its own entry (index 0) is
    /// included with distance 0 and heading 0 by definition.
    pub fn compute_all(coordinates: &[Coordinate], radius: f64) -> Vec<DistanceResult> {
        let reference = &coordinates[0];
        coordinates
            .iter()
            .enumerate()
            .map(|(index, coord)| {
                if index == 0 {
                    DistanceResult {
                        coord: *coord,
                        distance: 0.0,
                        heading: 0.0,
                        index,
                    }
                } else {
                    DistanceResult {
                        coord: *coord,
                        distance: Self::distance(reference, coord, radius),
                        heading: Self::bearing(reference, coord),
                        index,
                    }
                }
            })
            .collect()
    }
}

/// Signed spherical turn angle at `b`, going from the direction of `a` to
/// the direction of `c`, in degrees
///
/// The magnitude is the angle between the great-circle normals `a x b` and
/// `b x c`; the sign follows the orientation of the triple (positive =
/// counterclockwise as seen from outside the sphere). Range `(-180, 180]`.
/// Degenerate triples (a vanishing normal) yield 0.
fn turn_angle(a: &Cartesian3, b: &Cartesian3, c: &Cartesian3) -> f64 {
    let bc = b.cross(c);
    let unsigned = a.cross(b).angular_distance(&bc) * RAD2DEG;
    if a.dot(&bc) < 0.0 {
        -unsigned
    } else {
        unsigned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EARTH_RADIUS_KM;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rstest::rstest;
    use std::f64::consts::PI;

    fn london() -> Coordinate {
        Coordinate::new(51.5, -0.1)
    }

    fn new_york() -> Coordinate {
        Coordinate::new(40.7, -74.0)
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        for (lat, lon) in [(0.0, 0.0), (51.5, -0.1), (-89.9, 179.9), (90.0, 0.0)] {
            let c = Coordinate::new(lat, lon);
            assert_eq!(GeodesyEngine::distance(&c, &c, EARTH_RADIUS_KM), 0.0);
        }
    }

    #[test]
    fn test_distance_symmetry() {
        let a = london();
        let b = new_york();
        assert_eq!(
            GeodesyEngine::distance(&a, &b, EARTH_RADIUS_KM),
            GeodesyEngine::distance(&b, &a, EARTH_RADIUS_KM),
        );
    }

    #[test]
    fn test_distance_scales_linearly_with_radius() {
        let a = london();
        let b = new_york();
        let unit = GeodesyEngine::distance(&a, &b, 1.0);
        for r in [0.5, 1.0, 6371.0088, 1e6] {
            assert_relative_eq!(
                GeodesyEngine::distance(&a, &b, r),
                unit * r,
                max_relative = 1e-15
            );
        }
    }

    #[test]
    fn test_quarter_sphere_east() {
        let origin = Coordinate::new(0.0, 0.0);
        let east = Coordinate::new(0.0, 90.0);
        assert_abs_diff_eq!(
            GeodesyEngine::distance(&origin, &east, 1.0),
            PI / 2.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(GeodesyEngine::bearing(&origin, &east), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_quarter_sphere_north() {
        let origin = Coordinate::new(0.0, 0.0);
        let pole = Coordinate::new(90.0, 0.0);
        assert_abs_diff_eq!(
            GeodesyEngine::distance(&origin, &pole, 2.0),
            PI,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(GeodesyEngine::bearing(&origin, &pole), 0.0, epsilon = 1e-9);
    }

    #[rstest]
    #[case(0.0, 90.0, 90.0)] // due east
    #[case(0.0, -90.0, 270.0)] // due west
    #[case(-90.0, 0.0, 180.0)] // due south (the pole)
    #[case(45.0, 90.0, 45.0)] // north-east quadrant
    #[case(-45.0, 90.0, 135.0)] // south-east quadrant
    fn test_bearing_from_origin(#[case] lat: f64, #[case] lon: f64, #[case] expected: f64) {
        let origin = Coordinate::new(0.0, 0.0);
        let target = Coordinate::new(lat, lon);
        assert_abs_diff_eq!(
            GeodesyEngine::bearing(&origin, &target),
            expected,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_bearing_always_in_range() {
        let reference = london();
        for lat in [-85.0, -40.0, 0.0, 40.0, 85.0] {
            for lon in [-170.0, -74.0, 0.0, 90.0, 179.0] {
                let b = GeodesyEngine::bearing(&reference, &Coordinate::new(lat, lon));
                assert!((0.0..360.0).contains(&b), "bearing {} out of range", b);
            }
        }
    }

    #[test]
    fn test_coincident_target_policy() {
        // Documented degenerate-case policy: a target equal to the
        // reference yields a stable 180.
        let c = london();
        assert_eq!(GeodesyEngine::bearing(&c, &c), 180.0);
    }

    #[test]
    fn test_antipodal_distance() {
        let a = Coordinate::new(30.0, 45.0);
        let b = Coordinate::new(-30.0, -135.0);
        assert_abs_diff_eq!(GeodesyEngine::distance(&a, &b, 1.0), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_london_to_new_york() {
        let distance = GeodesyEngine::distance(&london(), &new_york(), EARTH_RADIUS_KM);
        assert_relative_eq!(distance, 5570.0, max_relative = 0.01);

        let bearing = GeodesyEngine::bearing(&london(), &new_york());
        assert_abs_diff_eq!(bearing, 288.34, epsilon = 0.1);
    }

    #[test]
    fn test_compute_all_preserves_order() {
        let coords = [london(), new_york(), Coordinate::new(35.7, 139.7)];
        let results = GeodesyEngine::compute_all(&coords, EARTH_RADIUS_KM);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].index, 0);
        assert_eq!(results[0].distance, 0.0);
        assert_eq!(results[0].heading, 0.0);
        assert_eq!(results[1].index, 1);
        assert_eq!(results[2].index, 2);
        assert!(results[1].distance > 0.0);
        assert_eq!(results[2].coord, coords[2]);
    }

    #[test]
    fn test_compute_all_tolerates_minimal_input() {
        let coords = [london(), new_york()];
        let results = GeodesyEngine::compute_all(&coords, 1.0);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_idempotence_bit_identical() {
        let a = london();
        let b = new_york();
        let first = (
            GeodesyEngine::distance(&a, &b, EARTH_RADIUS_KM),
            GeodesyEngine::bearing(&a, &b),
        );
        for _ in 0..10 {
            let again = (
                GeodesyEngine::distance(&a, &b, EARTH_RADIUS_KM),
                GeodesyEngine::bearing(&a, &b),
            );
            assert_eq!(first, again);
        }
    }

    #[test]
    fn test_result_serialization_shape() {
        let results = GeodesyEngine::compute_all(&[london(), new_york()], EARTH_RADIUS_KM);
        let json = serde_json::to_value(&results[1]).unwrap();
        assert_eq!(json["index"], 1);
        assert_eq!(json["coord"]["lat"], 40.7);
        assert!(json["distance"].as_f64().unwrap() > 5000.0);
        assert!(json["heading"].as_f64().is_some());
    }
}
