//! # Per-vessel tracks: ingestion, grouping and statistics
//!
//! The input of the [segmentation pipeline](crate::segmentation) is a
//! [`VesselTrackSet`]: one time-ordered [`Track`](crate::constants::Track) per vessel, keyed
//! by [`Mmsi`](crate::constants::Mmsi) and hashed with `ahash`.
//!
//! Modules
//! -----------------
//! * [`track_set`] – The [`TrackSetExt`](track_set::TrackSetExt) trait: build or extend a set
//!   from decoded reports (in memory or CSV), validate it, and summarize track lengths.
//! * *(crate-private)* `csv_reader` – CSV parsing of decoded reports.
//!
//! Ordering
//! -----------------
//! Every `new_*` / `add_*` method re-sorts the affected tracks by timestamp with a **stable**
//! sort, so reports sharing a timestamp keep their arrival order. No deduplication is done.
//!
//! Quick-Start
//! -----------------
//! ```rust,no_run
//! use camino::Utf8Path;
//! use aistrack::constants::VesselTrackSet;
//! use aistrack::segmentation::SegmentationPipeline;
//! use aistrack::trajectories::track_set::TrackSetExt;
//!
//! # fn run() -> Result<(), aistrack::aistrack_errors::AisTrackError> {
//! let tracks = VesselTrackSet::new_from_csv(Utf8Path::new("reports.csv"))?;
//! let segments = SegmentationPipeline::default().run(tracks.values());
//! eprintln!("{} tracks → {} segments", tracks.number_of_tracks(), segments.len());
//! # Ok(()) }
//! ```
mod csv_reader;
pub mod track_set;
