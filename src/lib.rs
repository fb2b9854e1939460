//! # aistrack
//!
//! Clean and segment vessel trajectories built from decoded AIS position reports.
//!
//! * [`outliers`] – Koyak's greedy outlier identification over a pairwise anomaly matrix,
//!   with a speed-based anomaly criterion.
//! * [`interpolation`] – Geodesic interpolation of a vessel report at any bracketed timestamp.
//! * [`segmentation`] – Voyage splitting, filtering, 5-minute resampling and re-splitting into
//!   12-hour segments.
//! * [`trajectories`] – Per-vessel track sets: grouping, CSV ingestion, statistics.
//!
//! ```rust
//! use aistrack::{Observation, SegmentationPipeline, TrackSetExt, VesselTrackSet};
//!
//! let reports = (0..=13 * 60).map(|i: i64| {
//!     Observation::new(227_000_001, i * 60, 43.3, 5.3 + i as f64 * 2e-4, 6.0, 90.0, 90.0, 0.0, 0)
//! });
//! let tracks = VesselTrackSet::new_from_observations(reports);
//!
//! let segments = SegmentationPipeline::default().run(tracks.values());
//! assert_eq!(segments.len(), 1);
//! ```
pub mod aistrack_errors;
pub mod constants;
pub mod geodesy;
pub mod interpolation;
pub mod observations;
pub mod outliers;
pub mod segmentation;
pub mod trajectories;

pub use aistrack_errors::AisTrackError;
pub use constants::{Mmsi, SampledTrack, Segment, Track, VesselTrackSet, Voyage};
pub use geodesy::{GeodesicEngine, Wgs84Geodesic};
pub use interpolation::{interpolate, Interpolator};
pub use observations::Observation;
pub use outliers::{
    detect_outliers,
    speed_criterion::{remove_outliers, speed_anomaly_matrix},
    AnomalyMatrix,
};
pub use segmentation::{SegmentationParams, SegmentationPipeline, SegmentationReport};
pub use trajectories::track_set::{TrackLengthStats, TrackSetExt};
