//! # Segmentation pipeline
//!
//! Turn raw per-vessel tracks into fixed-length, uniformly-sampled segments.
//!
//! ## Stages
//!
//! Each track goes through four strictly sequential stages; tracks never share state.
//!
//! 1. **Voyage splitting** – [`split_voyages`] cuts the track at every gap strictly larger than
//!    `max_voyage_gap`. No report is dropped.
//! 2. **Voyage filtering** – [`keep_voyage`] drops voyages with fewer than `min_voyage_len`
//!    reports or lasting less than `min_voyage_duration`.
//! 3. **Resampling** – [`resample_voyage`] interpolates the voyage every `resolution` seconds
//!    from its first timestamp (included) to its last one (excluded). A single failed
//!    interpolation discards the **whole** voyage: a truncated trajectory is never emitted.
//! 4. **Re-splitting** – [`resplit`] cuts the sampled track into consecutive chunks of
//!    `segment_len` samples and keeps only complete chunks.
//!
//! With the default [`SegmentationParams`], a 13 h gap-free voyage resamples into 156
//! samples and yields a single 144-sample segment; the trailing 12 samples are dropped.
//!
//! ## Execution
//!
//! [`SegmentationPipeline::run`] processes every track and returns a flat list of segments
//! in input order. Stage counters are logged with `log::info!` and available through
//! [`SegmentationPipeline::run_with_report`].
//!
//! Feature flags
//! -----------------
//! * `parallel` – tracks are processed on the `rayon` thread pool. The output is identical.
//! * `progress` – an `indicatif` progress bar follows the tracks.
//!
//! ## Example
//!
//! ```rust
//! use aistrack::constants::Track;
//! use aistrack::observations::Observation;
//! use aistrack::segmentation::{SegmentationParams, SegmentationPipeline};
//!
//! // 13 hours at one report per minute, drifting east
//! let track: Track = (0..=13 * 60)
//!     .map(|i| Observation::new(7, i * 60, 10.0, 20.0 + i as f64 * 1e-3, 8.0, 90.0, 90.0, 0.0, 0))
//!     .collect();
//!
//! let pipeline = SegmentationPipeline::new(SegmentationParams::default());
//! let segments = pipeline.run([&track]);
//! assert_eq!(segments.len(), 1);
//! assert_eq!(segments[0].len(), 144);
//! ```
use itertools::Itertools;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    constants::{SampledTrack, Seconds, Segment, Track, Voyage},
    geodesy::{GeodesicEngine, Wgs84Geodesic},
    interpolation::Interpolator,
    observations::{track_duration, Observation},
};

pub mod params;
#[cfg(feature = "progress")]
mod progress_bar;
pub mod report;

pub use params::{SegmentationParams, SegmentationParamsBuilder};
pub use report::SegmentationReport;

/// Stage 1: split a track into voyages at every gap strictly larger than `max_gap` seconds.
///
/// Return
/// ----------
/// * The voyages in time order. Their concatenation is the input track; an empty track
///   yields no voyage.
pub fn split_voyages(track: &[Observation], max_gap: Seconds) -> Vec<Voyage> {
    let cuts = track
        .iter()
        .tuple_windows()
        .positions(|(a, b)| b.timestamp - a.timestamp > max_gap)
        .map(|i| i + 1);

    let mut voyages = Vec::new();
    let mut start = 0;
    for cut in cuts {
        voyages.push(track[start..cut].to_vec());
        start = cut;
    }
    if start < track.len() {
        voyages.push(track[start..].to_vec());
    }
    voyages
}

/// Stage 2: whether a voyage is long enough, both in reports and in time.
pub fn keep_voyage(voyage: &[Observation], params: &SegmentationParams) -> bool {
    voyage.len() >= params.min_voyage_len
        && track_duration(voyage) >= params.min_voyage_duration
}

/// Stage 3: resample a voyage on a regular time grid.
///
/// Arguments
/// -----------------
/// * `voyage`: A time-ordered voyage.
/// * `interpolator`: The interpolator estimating each sample.
/// * `resolution`: Grid step in seconds (> 0).
///
/// Return
/// ----------
/// * `Some(samples)` at `t0, t0 + resolution, …` for every grid time strictly before the last
///   report.
/// * `None` as soon as one grid time cannot be interpolated, or for an empty voyage.
pub fn resample_voyage<G: GeodesicEngine>(
    voyage: &[Observation],
    interpolator: &Interpolator<G>,
    resolution: Seconds,
) -> Option<SampledTrack> {
    let first = voyage.first()?.timestamp;
    let last = voyage.last()?.timestamp;
    let step = usize::try_from(resolution).ok().filter(|&s| s > 0)?;

    (first..last)
        .step_by(step)
        .map(|t| interpolator.interpolate(t, voyage))
        .collect()
}

/// Stage 4: cut a sampled track into complete segments of `segment_len` samples.
///
/// The final chunk is dropped when shorter than `segment_len`.
pub fn resplit(sampled: &[Observation], segment_len: usize) -> Vec<Segment> {
    if segment_len == 0 {
        return Vec::new();
    }
    sampled
        .chunks_exact(segment_len)
        .map(<[Observation]>::to_vec)
        .collect()
}

/// Segments and counters produced from a single track.
#[derive(Debug, Clone, Default)]
pub struct TrackSegmentation {
    pub segments: Vec<Segment>,
    pub report: SegmentationReport,
}

/// The four-stage batch transform from raw tracks to segments.
#[derive(Debug, Clone)]
pub struct SegmentationPipeline<G = Wgs84Geodesic> {
    params: SegmentationParams,
    interpolator: Interpolator<G>,
}

impl SegmentationPipeline<Wgs84Geodesic> {
    /// Pipeline on the WGS84 ellipsoid.
    pub fn new(params: SegmentationParams) -> Self {
        Self::with_geodesic(params, Wgs84Geodesic::new())
    }
}

impl Default for SegmentationPipeline<Wgs84Geodesic> {
    fn default() -> Self {
        Self::new(SegmentationParams::default())
    }
}

impl<G: GeodesicEngine> SegmentationPipeline<G> {
    /// Pipeline interpolating positions with a custom [`GeodesicEngine`].
    pub fn with_geodesic(params: SegmentationParams, geodesic: G) -> Self {
        let interpolator = Interpolator::new(geodesic, params.max_interpolation_gap);
        SegmentationPipeline {
            params,
            interpolator,
        }
    }

    pub fn params(&self) -> &SegmentationParams {
        &self.params
    }

    pub fn interpolator(&self) -> &Interpolator<G> {
        &self.interpolator
    }

    /// Run the four stages on a single track.
    ///
    /// Arguments
    /// -----------------
    /// * `track`: Reports of one vessel, sorted by non-decreasing timestamp.
    ///
    /// Return
    /// ----------
    /// * The complete segments of this track and the stage counters.
    pub fn process_track(&self, track: &[Observation]) -> TrackSegmentation {
        let p = &self.params;
        let mut report = SegmentationReport {
            tracks: 1,
            observations: track.len(),
            ..Default::default()
        };
        let mut segments = Vec::new();

        let voyages = split_voyages(track, p.max_voyage_gap);
        report.voyages = voyages.len();

        for voyage in voyages.iter().filter(|v| keep_voyage(v, p)) {
            report.voyages_kept += 1;

            match resample_voyage(voyage, &self.interpolator, p.resolution) {
                Some(sampled) => {
                    report.sampled_tracks += 1;
                    segments.extend(resplit(&sampled, p.segment_len));
                }
                None => {
                    report.sampled_discarded += 1;
                    log::debug!(
                        "vessel {}: voyage starting at {} discarded, interpolation failed",
                        voyage[0].mmsi,
                        voyage[0].timestamp
                    );
                }
            }
        }

        report.segments = segments.len();
        TrackSegmentation { segments, report }
    }

    /// Segment every track and return the flat list of segments.
    ///
    /// Arguments
    /// -----------------
    /// * `tracks`: The input tracks, e.g. `track_set.values()` for a
    ///   [`VesselTrackSet`](crate::constants::VesselTrackSet).
    ///
    /// Return
    /// ----------
    /// * All complete segments, in input order.
    ///
    /// See also
    /// ------------
    /// * [`SegmentationPipeline::run_with_report`] – Same, with the stage counters.
    pub fn run<'a, I>(&self, tracks: I) -> Vec<Segment>
    where
        I: IntoIterator<Item = &'a Track>,
    {
        self.run_with_report(tracks).0
    }

    /// Segment every track and return the segments with the merged stage counters.
    pub fn run_with_report<'a, I>(&self, tracks: I) -> (Vec<Segment>, SegmentationReport)
    where
        I: IntoIterator<Item = &'a Track>,
    {
        let tracks: Vec<&Track> = tracks.into_iter().collect();

        #[cfg(feature = "progress")]
        let pb = progress_bar::track_progress_bar(tracks.len());

        let work = |track: &&Track| {
            let outcome = self.process_track(track);
            #[cfg(feature = "progress")]
            pb.inc(1);
            outcome
        };

        #[cfg(feature = "parallel")]
        let outcomes: Vec<TrackSegmentation> = tracks.par_iter().map(work).collect();
        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<TrackSegmentation> = tracks.iter().map(work).collect();

        #[cfg(feature = "progress")]
        pb.finish_and_clear();

        let mut report = SegmentationReport::default();
        let mut segments = Vec::new();
        for outcome in outcomes {
            report += outcome.report;
            segments.extend(outcome.segments);
        }

        log::info!(
            "split {} track(s) ({} reports) into {} voyage(s)",
            report.tracks,
            report.observations,
            report.voyages
        );
        log::info!(
            "kept {} voyage(s) of at least {} reports and {} s",
            report.voyages_kept,
            self.params.min_voyage_len,
            self.params.min_voyage_duration
        );
        log::info!(
            "resampled {} voyage(s) every {} s, discarded {}",
            report.sampled_tracks,
            self.params.resolution,
            report.sampled_discarded
        );
        log::info!(
            "re-split into {} segment(s) of {} samples",
            report.segments,
            self.params.segment_len
        );

        (segments, report)
    }
}
