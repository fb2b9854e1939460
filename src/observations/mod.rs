//! # Vessel position reports
//!
//! The [`Observation`] struct is the fixed-width record every other module consumes: one
//! decoded AIS position report with kinematic fields, a navigational status code, an integer
//! timestamp and the vessel identifier.
//!
//! Tracks are plain `Vec<Observation>` (see [`Track`](crate::constants::Track)), ordered by
//! non-decreasing timestamp. Helpers in this module inspect a track without mutating it.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    aistrack_errors::AisTrackError,
    constants::{Degree, Knot, Mmsi, NavStatus, Seconds, Timestamp},
};

/// A decoded AIS position report.
///
/// # Fields
///
/// * `lat` - Latitude in degrees (WGS84)
/// * `lon` - Longitude in degrees (WGS84)
/// * `sog` - Speed over ground in knots
/// * `cog` - Course over ground in degrees
/// * `heading` - True heading in degrees
/// * `rot` - Rate of turn, as reported
/// * `nav_status` - Navigational status code
/// * `timestamp` - Report time in integer seconds
/// * `mmsi` - Vessel identifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub lat: Degree,
    pub lon: Degree,
    pub sog: Knot,
    pub cog: Degree,
    pub heading: Degree,
    pub rot: f64,
    pub nav_status: NavStatus,
    pub timestamp: Timestamp,
    pub mmsi: Mmsi,
}

impl Observation {
    /// Create a new report.
    ///
    /// Arguments
    /// ---------
    /// * `mmsi`: the vessel identifier
    /// * `timestamp`: the report time in seconds
    /// * `lat`, `lon`: the position in degrees
    /// * `sog`, `cog`, `heading`, `rot`: the kinematic state
    /// * `nav_status`: the navigational status code
    ///
    /// Return
    /// ------
    /// * a new Observation struct
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mmsi: Mmsi,
        timestamp: Timestamp,
        lat: Degree,
        lon: Degree,
        sog: Knot,
        cog: Degree,
        heading: Degree,
        rot: f64,
        nav_status: NavStatus,
    ) -> Self {
        Observation {
            lat,
            lon,
            sog,
            cog,
            heading,
            rot,
            nav_status,
            timestamp,
            mmsi,
        }
    }

    /// Return a copy of this report moved to another position and time, all other fields kept.
    pub fn at(&self, timestamp: Timestamp, lat: Degree, lon: Degree) -> Self {
        Observation {
            lat,
            lon,
            timestamp,
            ..*self
        }
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "AIS report (MMSI {})", self.mmsi)?;
            writeln!(f, "  timestamp  : {} s", self.timestamp)?;
            writeln!(f, "  position   : {:.6}°, {:.6}°", self.lat, self.lon)?;
            writeln!(f, "  sog / cog  : {:.1} kn / {:.1}°", self.sog, self.cog)?;
            writeln!(f, "  heading    : {:.1}°", self.heading)?;
            writeln!(f, "  rot        : {:.1}", self.rot)?;
            write!(f, "  nav status : {}", self.nav_status)
        } else {
            write!(
                f,
                "[{}] t={} lat={:.5} lon={:.5} sog={:.1} cog={:.1} hdg={:.1} rot={:.1} nav={}",
                self.mmsi,
                self.timestamp,
                self.lat,
                self.lon,
                self.sog,
                self.cog,
                self.heading,
                self.rot,
                self.nav_status
            )
        }
    }
}

/// Time elapsed between the first and the last report of a track.
///
/// Returns `0` for empty or single-report tracks.
pub fn track_duration(track: &[Observation]) -> Seconds {
    match (track.first(), track.last()) {
        (Some(first), Some(last)) => last.timestamp - first.timestamp,
        _ => 0,
    }
}

/// Check that a track is usable by the interpolator and the pipeline.
///
/// A valid track has non-decreasing timestamps and a single vessel identifier.
///
/// Errors
/// ----------
/// * [`AisTrackError::UnsortedTrack`] if two consecutive reports go back in time.
/// * [`AisTrackError::MixedVesselTrack`] if the track mixes several vessels.
pub fn validate_track(track: &[Observation]) -> Result<(), AisTrackError> {
    let Some(first) = track.first() else {
        return Ok(());
    };
    for pair in track.windows(2) {
        if pair[1].mmsi != first.mmsi {
            return Err(AisTrackError::MixedVesselTrack(first.mmsi));
        }
        if pair[1].timestamp < pair[0].timestamp {
            return Err(AisTrackError::UnsortedTrack(first.mmsi));
        }
    }
    Ok(())
}
