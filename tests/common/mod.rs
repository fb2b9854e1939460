#![allow(dead_code)]
use aistrack::constants::{Mmsi, Track};
use aistrack::observations::Observation;
use approx::assert_relative_eq;

/// Vessel steaming east along a parallel, one report every `step` seconds.
///
/// Speed, course and heading vary slowly so that linear blends are observable.
pub fn eastbound_track(mmsi: Mmsi, start: i64, step: i64, n: usize) -> Track {
    (0..n as i64)
        .map(|i| {
            let t = start + i * step;
            Observation::new(
                mmsi,
                t,
                54.0,
                10.0 + t as f64 * 4e-5,
                9.0 + (i % 5) as f64 * 0.1,
                90.0 + (i % 3) as f64,
                91.0 + (i % 3) as f64,
                (i % 4) as f64 - 1.5,
                0,
            )
        })
        .collect()
}

/// Concatenate tracks of the same vessel.
pub fn join(parts: &[Track]) -> Track {
    parts.concat()
}

pub fn assert_observation_close(actual: &Observation, expected: &Observation, epsilon: f64) {
    assert_eq!(actual.timestamp, expected.timestamp);
    assert_eq!(actual.mmsi, expected.mmsi);
    assert_eq!(actual.nav_status, expected.nav_status);
    assert_relative_eq!(actual.lat, expected.lat, epsilon = epsilon);
    assert_relative_eq!(actual.lon, expected.lon, epsilon = epsilon);
    assert_relative_eq!(actual.sog, expected.sog, epsilon = epsilon);
    assert_relative_eq!(actual.cog, expected.cog, epsilon = epsilon);
    assert_relative_eq!(actual.heading, expected.heading, epsilon = epsilon);
    assert_relative_eq!(actual.rot, expected.rot, epsilon = epsilon);
}
