//! # Constants and type definitions for aistrack
//!
//! This module centralizes the **contract constants** of the segmentation pipeline, the
//! **unit conversions** used by the anomaly criterion, and the **common type aliases**
//! shared by every module of the crate.
//!
//! ## Overview
//!
//! - Pipeline constants (gap thresholds, minimum voyage size, resolution, segment length)
//! - Unit conversions (knots ↔ meters per second)
//! - Core type aliases (timestamps, angles, distances, vessel identifiers)
//! - Container types for tracks and their derived sequences
//!
//! The pipeline constants are part of the behavioral contract: changing them changes which
//! segments are produced. They are the defaults of
//! [`SegmentationParams`](crate::segmentation::SegmentationParams).

use crate::observations::Observation;
use std::collections::HashMap;

// -------------------------------------------------------------------------------------------------
// Pipeline constants
// -------------------------------------------------------------------------------------------------

/// Largest time gap (s) allowed between two consecutive reports of the same voyage (2 h)
pub const VOYAGE_GAP_MAX: Seconds = 2 * 3600;

/// Minimum number of reports a voyage must hold to be kept
pub const VOYAGE_MIN_LEN: usize = 20;

/// Minimum duration (s) of a kept voyage (4 h)
pub const VOYAGE_MIN_DURATION: Seconds = 4 * 3600;

/// Resampling resolution (s) of a sampled track (5 min)
pub const RESOLUTION: Seconds = 5 * 60;

/// Largest time gap (s) between the two reports bracketing an interpolation (2 h)
pub const INTERPOLATION_GAP_MAX: Seconds = 2 * 3600;

/// Maximum segment duration in hours
pub const DURATION_MAX_HOURS: usize = 12;

/// Number of samples per segment (12 h at 5 min resolution)
pub const SEGMENT_LEN: usize = DURATION_MAX_HOURS * 12;

/// Speed (knots) above which two reports are considered mutually anomalous
pub const SPEED_MAX: Knot = 30.0;

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// Meters in one international nautical mile
pub const NAUTICAL_MILE: Meter = 1852.0;

/// Seconds in one hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Meters per second → knots
pub const MPS_TO_KNOTS: f64 = SECONDS_PER_HOUR / NAUTICAL_MILE;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Distance in meters
pub type Meter = f64;
/// Speed in knots
pub type Knot = f64;
/// Unix-like timestamp in integer seconds
pub type Timestamp = i64;
/// Time span in integer seconds
pub type Seconds = i64;
/// Maritime Mobile Service Identity, the vessel identifier carried by every report
pub type Mmsi = u32;
/// Navigational status code (AIS categorical value, 0–15)
pub type NavStatus = u8;

// -------------------------------------------------------------------------------------------------
// Data containers
// -------------------------------------------------------------------------------------------------

/// Time-ordered reports of a single vessel.
pub type Track = Vec<Observation>;

/// Gap-free contiguous slice of a [`Track`].
pub type Voyage = Vec<Observation>;

/// Voyage resampled on a fixed time grid.
pub type SampledTrack = Vec<Observation>;

/// Fixed-length slice of a [`SampledTrack`], the final output unit of the pipeline.
pub type Segment = Vec<Observation>;

/// Per-vessel tracks keyed by [`Mmsi`], hashed with `ahash`.
pub type VesselTrackSet = HashMap<Mmsi, Track, ahash::RandomState>;
