//! # Ellipsoidal geodesy
//!
//! Interpolating a vessel position between two reports must follow the **geodesic** joining
//! them: a linear blend of latitude/longitude drifts away from the true path because degrees
//! of longitude shrink with latitude. This module defines the [`GeodesicEngine`] seam used by
//! the [`Interpolator`](crate::interpolation::Interpolator) and its default WGS84
//! implementation.
//!
//! ## Operations
//!
//! * **inverse** – two points → forward azimuth, back azimuth and distance,
//! * **forward** – origin, azimuth and distance → destination and back azimuth.
//!
//! Arguments are ordered **longitude first**, as in most GIS toolkits. Azimuths are in degrees
//! clockwise from north, distances in meters.
//!
//! ## Failures
//!
//! Invalid coordinates (non-finite values, latitudes outside ±90°) or non-finite solver
//! outputs are reported as [`AisTrackError::GeodesicFailure`]. Callers in the interpolation
//! layer turn these into an absent result.
//!
//! ## See also
//!
//! * [`haversine_distance`] – Spherical great-circle distance used by the anomaly criterion.
use geo::{Distance, Haversine, Point};
use geographiclib_rs::{DirectGeodesic, Geodesic, InverseGeodesic};

use crate::{
    aistrack_errors::AisTrackError,
    constants::{Degree, Meter},
};

/// Solution of the inverse geodesic problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseSolution {
    /// Azimuth at the first point, towards the second one
    pub azimuth: Degree,
    /// Azimuth at the second point, pointing back to the first one
    pub back_azimuth: Degree,
    /// Geodesic distance between the two points
    pub distance: Meter,
}

/// Solution of the direct (forward) geodesic problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardSolution {
    pub lon: Degree,
    pub lat: Degree,
    /// Azimuth at the destination, pointing back to the origin
    pub back_azimuth: Degree,
}

/// Geodesic solver on an ellipsoidal earth model.
///
/// Implementations must be pure: the same arguments always give the same answer, and they
/// may be shared between threads. Any geodesy library with WGS84 accuracy can stand behind
/// this trait.
pub trait GeodesicEngine: Send + Sync {
    /// Solve the inverse problem between `(lon1, lat1)` and `(lon2, lat2)`.
    fn inverse(
        &self,
        lon1: Degree,
        lat1: Degree,
        lon2: Degree,
        lat2: Degree,
    ) -> Result<InverseSolution, AisTrackError>;

    /// Travel `distance` meters from `(lon, lat)` along `azimuth`.
    fn forward(
        &self,
        lon: Degree,
        lat: Degree,
        azimuth: Degree,
        distance: Meter,
    ) -> Result<ForwardSolution, AisTrackError>;
}

/// Karney's geodesic algorithms on the WGS84 ellipsoid (via `geographiclib-rs`).
#[derive(Debug, Clone)]
pub struct Wgs84Geodesic {
    geod: Geodesic,
}

impl Wgs84Geodesic {
    pub fn new() -> Self {
        Wgs84Geodesic {
            geod: Geodesic::wgs84(),
        }
    }
}

impl Default for Wgs84Geodesic {
    fn default() -> Self {
        Self::new()
    }
}

/// Reverse an azimuth and wrap it to (-180°, 180°].
#[inline]
fn reverse_azimuth(azimuth: Degree) -> Degree {
    let back = (azimuth + 180.0).rem_euclid(360.0);
    if back > 180.0 {
        back - 360.0
    } else {
        back
    }
}

fn check_position(lon: Degree, lat: Degree) -> Result<(), AisTrackError> {
    if !lon.is_finite() || !lat.is_finite() || lat.abs() > 90.0 {
        return Err(AisTrackError::GeodesicFailure(format!(
            "invalid position lon={lon}, lat={lat}"
        )));
    }
    Ok(())
}

impl GeodesicEngine for Wgs84Geodesic {
    fn inverse(
        &self,
        lon1: Degree,
        lat1: Degree,
        lon2: Degree,
        lat2: Degree,
    ) -> Result<InverseSolution, AisTrackError> {
        check_position(lon1, lat1)?;
        check_position(lon2, lat2)?;

        // The 3-tuple form yields (azi1, azi2, a12) without the distance
        let (s12, azi1, azi2, _a12): (f64, f64, f64, f64) =
            self.geod.inverse(lat1, lon1, lat2, lon2);
        if !(s12.is_finite() && azi1.is_finite() && azi2.is_finite()) {
            return Err(AisTrackError::GeodesicFailure(format!(
                "inverse problem did not converge between ({lon1}, {lat1}) and ({lon2}, {lat2})"
            )));
        }

        Ok(InverseSolution {
            azimuth: azi1,
            back_azimuth: reverse_azimuth(azi2),
            distance: s12,
        })
    }

    fn forward(
        &self,
        lon: Degree,
        lat: Degree,
        azimuth: Degree,
        distance: Meter,
    ) -> Result<ForwardSolution, AisTrackError> {
        check_position(lon, lat)?;
        if !azimuth.is_finite() || !distance.is_finite() {
            return Err(AisTrackError::GeodesicFailure(format!(
                "invalid azimuth {azimuth} or distance {distance}"
            )));
        }

        let (lat2, lon2, azi2): (f64, f64, f64) = self.geod.direct(lat, lon, azimuth, distance);
        if !(lat2.is_finite() && lon2.is_finite() && azi2.is_finite()) {
            return Err(AisTrackError::GeodesicFailure(format!(
                "direct problem failed from ({lon}, {lat}) along {azimuth}° for {distance} m"
            )));
        }

        Ok(ForwardSolution {
            lon: lon2,
            lat: lat2,
            back_azimuth: reverse_azimuth(azi2),
        })
    }
}

/// Great-circle distance in meters between two positions, on a spherical earth.
///
/// Cheaper than the ellipsoidal inverse problem and accurate enough to compare implied
/// speeds against a threshold.
#[inline]
pub fn haversine_distance(lon1: Degree, lat1: Degree, lon2: Degree, lat2: Degree) -> Meter {
    Haversine::distance(Point::new(lon1, lat1), Point::new(lon2, lat2))
}

#[cfg(test)]
mod geodesy_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_inverse_along_equator() {
        let geod = Wgs84Geodesic::new();
        let sol = geod.inverse(0.0, 0.0, 1.0, 0.0).unwrap();

        // One degree of longitude on the WGS84 equator
        assert_relative_eq!(sol.distance, 111_319.490_793, epsilon = 1e-3);
        assert_relative_eq!(sol.azimuth, 90.0, epsilon = 1e-9);
        assert_relative_eq!(sol.back_azimuth, -90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_inverse_along_meridian() {
        let geod = Wgs84Geodesic::new();
        let sol = geod.inverse(5.0, 10.0, 5.0, 11.0).unwrap();
        assert_relative_eq!(sol.azimuth, 0.0, epsilon = 1e-9);
        assert_relative_eq!(sol.back_azimuth.abs(), 180.0, epsilon = 1e-9);
        assert!(sol.distance > 110_000.0 && sol.distance < 111_000.0);
    }

    #[test]
    fn test_forward_reaches_inverse_target() {
        let geod = Wgs84Geodesic::new();
        let inv = geod.inverse(-4.48, 48.38, -1.55, 47.21).unwrap();
        let fwd = geod
            .forward(-4.48, 48.38, inv.azimuth, inv.distance)
            .unwrap();

        assert_relative_eq!(fwd.lon, -1.55, epsilon = 1e-9);
        assert_relative_eq!(fwd.lat, 47.21, epsilon = 1e-9);
        assert_relative_eq!(fwd.back_azimuth, inv.back_azimuth, epsilon = 1e-9);
    }

    #[test]
    fn test_half_distance_lands_on_midpoint() {
        let geod = Wgs84Geodesic::new();
        let inv = geod.inverse(0.0, 0.0, 0.1, 0.0).unwrap();
        assert_relative_eq!(inv.distance, 11_131.949_079, epsilon = 1e-3);

        let mid = geod
            .forward(0.0, 0.0, inv.azimuth, inv.distance / 2.0)
            .unwrap();
        assert_relative_eq!(mid.lon, 0.05, epsilon = 1e-9);
        assert_relative_eq!(mid.lat, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_distance_forward() {
        let geod = Wgs84Geodesic::new();
        let fwd = geod.forward(12.5, -33.0, 45.0, 0.0).unwrap();
        assert_relative_eq!(fwd.lon, 12.5, epsilon = 1e-12);
        assert_relative_eq!(fwd.lat, -33.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_inputs_fail() {
        let geod = Wgs84Geodesic::new();
        assert!(matches!(
            geod.inverse(0.0, 91.0, 1.0, 0.0),
            Err(AisTrackError::GeodesicFailure(_))
        ));
        assert!(geod.inverse(f64::NAN, 0.0, 1.0, 0.0).is_err());
        assert!(geod.forward(0.0, 0.0, f64::INFINITY, 10.0).is_err());
        assert!(geod.forward(0.0, 0.0, 10.0, f64::NAN).is_err());
    }

    #[test]
    fn test_reverse_azimuth_wraps() {
        assert_relative_eq!(reverse_azimuth(0.0), 180.0);
        assert_relative_eq!(reverse_azimuth(90.0), -90.0);
        assert_relative_eq!(reverse_azimuth(-90.0), 90.0);
        assert_relative_eq!(reverse_azimuth(179.0), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_haversine_distance_one_degree() {
        // Mean earth radius used by geo: 6_371_008.8 m
        let d = haversine_distance(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(d, 6_371_008.8_f64.to_radians(), epsilon = 1e-6);
    }
}
