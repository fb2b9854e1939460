//! Speed-based anomaly criterion.
//!
//! Two reports of the same vessel are mutually anomalous when the speed needed to travel
//! between them exceeds a plausible maximum (30 knots by default). Reports sharing a timestamp
//! are anomalous only if they disagree on the position.
use itertools::Itertools;

use super::{detect_outliers, AnomalyMatrix};
use crate::{
    constants::{Knot, Track, MPS_TO_KNOTS},
    geodesy::haversine_distance,
    observations::Observation,
};

/// Implied speed (knots) needed to go from `a` to `b`.
///
/// Returns `None` when both reports share a timestamp.
#[inline]
pub fn implied_speed(a: &Observation, b: &Observation) -> Option<Knot> {
    let dt = (b.timestamp - a.timestamp).abs();
    if dt == 0 {
        return None;
    }
    let dist = haversine_distance(a.lon, a.lat, b.lon, b.lat);
    Some(dist / dt as f64 * MPS_TO_KNOTS)
}

/// Build the anomaly matrix of a track.
///
/// Arguments
/// -----------------
/// * `track`: Reports of a single vessel (order does not matter).
/// * `speed_max`: Largest plausible speed in knots.
///
/// Return
/// ----------
/// * A symmetric `n × n` binary matrix with a zero diagonal, ready for
///   [`detect_outliers`].
pub fn speed_anomaly_matrix(track: &[Observation], speed_max: Knot) -> AnomalyMatrix {
    let n = track.len();
    let mut anomalies = AnomalyMatrix::zeros(n, n);

    for (r, s) in (0..n).tuple_combinations() {
        let anomalous = match implied_speed(&track[r], &track[s]) {
            Some(speed) => speed > speed_max,
            None => track[r].lat != track[s].lat || track[r].lon != track[s].lon,
        };
        if anomalous {
            anomalies[(r, s)] = 1;
            anomalies[(s, r)] = 1;
        }
    }

    anomalies
}

/// Remove the reports flagged as outliers by the speed criterion.
///
/// Arguments
/// -----------------
/// * `track`: Reports of a single vessel.
/// * `speed_max`: Largest plausible speed in knots.
///
/// Return
/// ----------
/// * A new track holding the non-flagged reports, in their original order.
///
/// See also
/// ------------
/// * [`speed_anomaly_matrix`] – The pairwise criterion.
/// * [`detect_outliers`] – Koyak's elimination.
pub fn remove_outliers(track: &[Observation], speed_max: Knot) -> Track {
    let flags = detect_outliers(&speed_anomaly_matrix(track, speed_max));
    let kept: Track = track
        .iter()
        .zip(&flags)
        .filter(|(_, &outlier)| !outlier)
        .map(|(obs, _)| *obs)
        .collect();

    if kept.len() < track.len() {
        log::debug!(
            "removed {} outlier(s) out of {} reports",
            track.len() - kept.len(),
            track.len()
        );
    }
    kept
}
