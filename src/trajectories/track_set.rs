use std::{fmt, fs::File, io::Read};

use camino::Utf8Path;

use super::csv_reader::read_observations;
use crate::{
    aistrack_errors::AisTrackError,
    constants::{Mmsi, Track, VesselTrackSet},
    observations::{validate_track, Observation},
};

/// Distribution of the number of reports per track.
///
/// Percentiles use the nearest-rank index `round(q × (N − 1))`, which stays well defined for
/// very small sets.
///
/// Display
/// -----------------
/// * `{}` – `min=2, p25=4, median=8, p95=15, max=20`
/// * `{:#}` – aligned multi-line summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackLengthStats {
    pub min: usize,
    pub p25: usize,
    pub median: usize,
    pub p95: usize,
    pub max: usize,
}

impl fmt::Display for TrackLengthStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Reports per track")?;
            writeln!(f, "-----------------")?;
            writeln!(f, "min    : {}", self.min)?;
            writeln!(f, "p25    : {}", self.p25)?;
            writeln!(f, "median : {}", self.median)?;
            writeln!(f, "p95    : {}", self.p95)?;
            write!(f, "max    : {}", self.max)
        } else {
            write!(
                f,
                "min={}, p25={}, median={}, p95={}, max={}",
                self.min, self.p25, self.median, self.p95, self.max
            )
        }
    }
}

/// Building, validating and summarizing a [`VesselTrackSet`].
pub trait TrackSetExt: Sized {
    /// Group decoded reports by vessel into a new set.
    ///
    /// Reports may come in any order; each track is then sorted by timestamp.
    fn new_from_observations<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = Observation>;

    /// Append decoded reports to the set and re-sort the affected tracks.
    fn add_observations<I>(&mut self, observations: I)
    where
        I: IntoIterator<Item = Observation>;

    /// Read a CSV file of decoded reports into a new set.
    ///
    /// Errors
    /// ----------
    /// * [`AisTrackError::IoError`] if the file cannot be opened.
    /// * [`AisTrackError::CsvError`] / [`AisTrackError::InvalidRecord`] on bad content.
    fn new_from_csv(path: &Utf8Path) -> Result<Self, AisTrackError>;

    /// Append the reports of a CSV file to the set.
    fn add_from_csv(&mut self, path: &Utf8Path) -> Result<(), AisTrackError>;

    /// Read decoded reports from any CSV source into a new set.
    fn new_from_csv_reader<R: Read>(reader: R) -> Result<Self, AisTrackError>;

    /// Check that every track is sorted and holds only the vessel it is keyed by.
    ///
    /// Errors
    /// ----------
    /// * [`AisTrackError::UnsortedTrack`] for a track going back in time.
    /// * [`AisTrackError::MixedVesselTrack`] for a report of another vessel.
    fn validate(&self) -> Result<(), AisTrackError>;

    /// Total number of reports across all tracks.
    fn total_observations(&self) -> usize;

    /// Number of vessels in the set.
    fn number_of_tracks(&self) -> usize;

    /// Distribution of reports per track, `None` for an empty set.
    fn track_length_stats(&self) -> Option<TrackLengthStats>;
}

impl TrackSetExt for VesselTrackSet {
    fn new_from_observations<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = Observation>,
    {
        let mut set = VesselTrackSet::default();
        set.add_observations(observations);
        set
    }

    fn add_observations<I>(&mut self, observations: I)
    where
        I: IntoIterator<Item = Observation>,
    {
        // Only tracks receiving an out-of-order report need a sort
        let mut touched: Vec<Mmsi> = Vec::new();
        for obs in observations {
            let track: &mut Track = self.entry(obs.mmsi).or_default();
            if track.last().is_some_and(|l| l.timestamp > obs.timestamp) {
                touched.push(obs.mmsi);
            }
            track.push(obs);
        }

        touched.sort_unstable();
        touched.dedup();
        for mmsi in touched {
            if let Some(track) = self.get_mut(&mmsi) {
                track.sort_by_key(|o| o.timestamp);
            }
        }
    }

    fn new_from_csv(path: &Utf8Path) -> Result<Self, AisTrackError> {
        let mut set = VesselTrackSet::default();
        set.add_from_csv(path)?;
        Ok(set)
    }

    fn add_from_csv(&mut self, path: &Utf8Path) -> Result<(), AisTrackError> {
        let file = File::open(path)?;
        let observations = read_observations(file)?;
        log::info!("read {} report(s) from {path}", observations.len());
        self.add_observations(observations);
        Ok(())
    }

    fn new_from_csv_reader<R: Read>(reader: R) -> Result<Self, AisTrackError> {
        Ok(Self::new_from_observations(read_observations(reader)?))
    }

    fn validate(&self) -> Result<(), AisTrackError> {
        for (mmsi, track) in self {
            validate_track(track)?;
            if track.first().is_some_and(|o| o.mmsi != *mmsi) {
                return Err(AisTrackError::MixedVesselTrack(*mmsi));
            }
        }
        Ok(())
    }

    #[inline]
    fn total_observations(&self) -> usize {
        self.values().map(Vec::len).sum()
    }

    #[inline]
    fn number_of_tracks(&self) -> usize {
        self.len()
    }

    fn track_length_stats(&self) -> Option<TrackLengthStats> {
        let mut counts: Vec<usize> = self.values().map(Vec::len).collect();
        if counts.is_empty() {
            return None;
        }
        counts.sort_unstable();

        let n = counts.len();
        let rank = |q: f64| {
            let idx = (q * (n as f64 - 1.0)).round() as usize;
            counts[idx.min(n - 1)]
        };

        Some(TrackLengthStats {
            min: counts[0],
            p25: rank(0.25),
            median: rank(0.50),
            p95: rank(0.95),
            max: counts[n - 1],
        })
    }
}

#[cfg(test)]
mod track_set_test {
    use super::*;

    fn report(mmsi: Mmsi, t: i64) -> Observation {
        Observation::new(mmsi, t, 60.0, 25.0, 5.0, 180.0, 180.0, 0.0, 0)
    }

    #[test]
    fn test_grouping_and_sorting() {
        let set = VesselTrackSet::new_from_observations(vec![
            report(1, 50),
            report(2, 10),
            report(1, 20),
            report(1, 30),
            report(2, 5),
        ]);

        assert_eq!(set.number_of_tracks(), 2);
        assert_eq!(set.total_observations(), 5);
        let times: Vec<i64> = set[&1].iter().map(|o| o.timestamp).collect();
        assert_eq!(times, vec![20, 30, 50]);
        assert_eq!(set[&2][0].timestamp, 5);
        assert!(set.validate().is_ok());
    }

    #[test]
    fn test_add_observations_keeps_order() {
        let mut set = VesselTrackSet::new_from_observations(vec![report(7, 0), report(7, 100)]);
        set.add_observations(vec![report(7, 50), report(8, 1)]);

        let times: Vec<i64> = set[&7].iter().map(|o| o.timestamp).collect();
        assert_eq!(times, vec![0, 50, 100]);
        assert_eq!(set.number_of_tracks(), 2);
    }

    #[test]
    fn test_validate_detects_unsorted_track() {
        let mut set = VesselTrackSet::default();
        set.insert(3, vec![report(3, 10), report(3, 0)]);
        assert_eq!(set.validate(), Err(AisTrackError::UnsortedTrack(3)));

        let mut set = VesselTrackSet::default();
        set.insert(4, vec![report(5, 0)]);
        assert_eq!(set.validate(), Err(AisTrackError::MixedVesselTrack(4)));
    }

    #[test]
    fn test_track_length_stats() {
        assert_eq!(VesselTrackSet::default().track_length_stats(), None);

        let mut set = VesselTrackSet::default();
        for (mmsi, n) in [(1, 2), (2, 4), (3, 8), (4, 15), (5, 20)] {
            set.insert(mmsi, (0..n).map(|t| report(mmsi, t)).collect());
        }
        let stats = set.track_length_stats().unwrap();
        assert_eq!(
            stats,
            TrackLengthStats {
                min: 2,
                p25: 4,
                median: 8,
                p95: 20,
                max: 20
            }
        );
        assert_eq!(
            format!("{stats}"),
            "min=2, p25=4, median=8, p95=20, max=20"
        );
    }

    #[test]
    fn test_missing_csv_file() {
        let err = VesselTrackSet::new_from_csv(Utf8Path::new("does/not/exist.csv"));
        assert!(matches!(err, Err(AisTrackError::IoError(_))));
    }
}
