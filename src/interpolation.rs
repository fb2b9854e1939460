//! # Report interpolation
//!
//! Estimate the state of a vessel at an arbitrary timestamp from the two real reports that
//! bracket it.
//!
//! ## Procedure
//!
//! Given a target time `t` and a time-ordered track:
//!
//! 1. `bpos` is the last report with `timestamp ≤ t`, `apos` the first with `timestamp > t`.
//!    Without both, `t` cannot be bracketed.
//! 2. If the two reports are more than `max_bracket_gap` apart, the track has a real data gap
//!    there and nothing is estimated.
//! 3. With `f = (t − t_b) / (t_a − t_b)`, the position travels a fraction `f` of the geodesic
//!    from `bpos` to `apos` (inverse then forward problem).
//! 4. Speed, course, heading and rate of turn are blended linearly: `b + f·(a − b)`.
//! 5. The navigational status is categorical: `bpos`'s status while `f ≤ 0.5`, `apos`'s after.
//!
//! Every failure, including a geodesic solver error, yields `None`. Interpolation failure is
//! an expected outcome at this layer and the caller decides what to drop.
//!
//! ## Example
//!
//! ```rust
//! use aistrack::interpolation::Interpolator;
//! use aistrack::observations::Observation;
//!
//! let track = vec![
//!     Observation::new(1, 0, 48.0, -5.0, 10.0, 90.0, 90.0, 0.0, 0),
//!     Observation::new(1, 600, 48.0, -4.9, 12.0, 92.0, 91.0, 0.0, 0),
//! ];
//! let interpolator = Interpolator::wgs84();
//!
//! let mid = interpolator.interpolate(300, &track).unwrap();
//! assert_eq!(mid.timestamp, 300);
//! assert!((mid.sog - 11.0).abs() < 1e-12);
//! assert!(interpolator.interpolate(600, &track).is_none());
//! ```
use crate::{
    constants::{Seconds, Timestamp, INTERPOLATION_GAP_MAX},
    geodesy::{GeodesicEngine, Wgs84Geodesic},
    observations::Observation,
};

/// Time-bracketed interpolator backed by a [`GeodesicEngine`].
#[derive(Debug, Clone)]
pub struct Interpolator<G = Wgs84Geodesic> {
    geodesic: G,
    max_bracket_gap: Seconds,
}

impl Interpolator<Wgs84Geodesic> {
    /// WGS84 interpolator with the default 2 h bracket window.
    pub fn wgs84() -> Self {
        Interpolator::new(Wgs84Geodesic::new(), INTERPOLATION_GAP_MAX)
    }
}

impl Default for Interpolator<Wgs84Geodesic> {
    fn default() -> Self {
        Self::wgs84()
    }
}

impl<G: GeodesicEngine> Interpolator<G> {
    /// Build an interpolator.
    ///
    /// Arguments
    /// -----------------
    /// * `geodesic`: The solver used for the position blend.
    /// * `max_bracket_gap`: Largest time gap (s) allowed between the two bracketing reports.
    pub fn new(geodesic: G, max_bracket_gap: Seconds) -> Self {
        Interpolator {
            geodesic,
            max_bracket_gap,
        }
    }

    pub fn max_bracket_gap(&self) -> Seconds {
        self.max_bracket_gap
    }

    /// Estimate the report of the vessel at time `t`.
    ///
    /// Arguments
    /// -----------------
    /// * `t`: Target timestamp (s).
    /// * `track`: Reports of a single vessel, sorted by non-decreasing timestamp.
    ///
    /// Return
    /// ----------
    /// * `Some(Observation)` stamped exactly at `t`, carrying the track's vessel identifier.
    /// * `None` if `t` is before the first report or at/after the last one, if the
    ///   bracketing reports are more than `max_bracket_gap` apart, or if the geodesic
    ///   computation fails.
    pub fn interpolate(&self, t: Timestamp, track: &[Observation]) -> Option<Observation> {
        // Number of reports with timestamp <= t; relies on the track being sorted.
        let split = track.partition_point(|obs| obs.timestamp <= t);
        if split == 0 || split == track.len() {
            return None;
        }
        let before = &track[split - 1];
        let after = &track[split];

        let dt_full = after.timestamp - before.timestamp;
        if dt_full.abs() > self.max_bracket_gap {
            return None;
        }
        let f = (t - before.timestamp) as f64 / dt_full as f64;

        let inv = self
            .geodesic
            .inverse(before.lon, before.lat, after.lon, after.lat)
            .ok()?;
        let pos = self
            .geodesic
            .forward(before.lon, before.lat, inv.azimuth, inv.distance * f)
            .ok()?;

        let blend = |b: f64, a: f64| b + f * (a - b);
        let nav_status = if f <= 0.5 {
            before.nav_status
        } else {
            after.nav_status
        };

        Some(Observation {
            lat: pos.lat,
            lon: pos.lon,
            sog: blend(before.sog, after.sog),
            cog: blend(before.cog, after.cog),
            heading: blend(before.heading, after.heading),
            rot: blend(before.rot, after.rot),
            nav_status,
            timestamp: t,
            mmsi: track[0].mmsi,
        })
    }
}

/// Interpolate with the default WGS84 interpolator.
///
/// Convenience wrapper over [`Interpolator::interpolate`]; build an [`Interpolator`] once
/// when calling this in a loop.
pub fn interpolate(t: Timestamp, track: &[Observation]) -> Option<Observation> {
    Interpolator::wgs84().interpolate(t, track)
}
