//! Tunable parameters of the segmentation pipeline, with a validating builder.
use std::fmt;

use crate::{
    aistrack_errors::AisTrackError,
    constants::{
        Seconds, INTERPOLATION_GAP_MAX, RESOLUTION, SEGMENT_LEN, VOYAGE_GAP_MAX,
        VOYAGE_MIN_DURATION, VOYAGE_MIN_LEN,
    },
};

/// Configuration of [`SegmentationPipeline`](crate::segmentation::SegmentationPipeline).
///
/// Fields
/// -----------------
/// **Voyage splitting / filtering**
/// * `max_voyage_gap` – a gap strictly larger than this (s) between two consecutive reports
///   ends a voyage.
/// * `min_voyage_len` – voyages with fewer reports are dropped.
/// * `min_voyage_duration` – voyages lasting less than this (s) are dropped.
///
/// **Resampling**
/// * `resolution` – step (s) of the resampling grid.
/// * `max_interpolation_gap` – largest gap (s) between the two reports bracketing an
///   interpolated sample.
///
/// **Re-splitting**
/// * `segment_len` – number of samples in an output segment; shorter remainders are dropped.
///
/// Defaults
/// -----------------
/// * `max_voyage_gap`: 7200 s (2 h)
/// * `min_voyage_len`: 20
/// * `min_voyage_duration`: 14400 s (4 h)
/// * `resolution`: 300 s (5 min)
/// * `max_interpolation_gap`: 7200 s (2 h)
/// * `segment_len`: 144 (12 h at 5 min)
///
/// These defaults are the reference contract; segments produced with other values are not
/// comparable with reference datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentationParams {
    pub max_voyage_gap: Seconds,
    pub min_voyage_len: usize,
    pub min_voyage_duration: Seconds,
    pub resolution: Seconds,
    pub max_interpolation_gap: Seconds,
    pub segment_len: usize,
}

impl SegmentationParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a [`SegmentationParamsBuilder`] initialized with the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aistrack::segmentation::SegmentationParams;
    ///
    /// let params = SegmentationParams::builder()
    ///     .resolution(60)
    ///     .segment_len(720)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(params.min_voyage_len, 20);
    /// ```
    pub fn builder() -> SegmentationParamsBuilder {
        SegmentationParamsBuilder::new()
    }
}

impl Default for SegmentationParams {
    fn default() -> Self {
        SegmentationParams {
            max_voyage_gap: VOYAGE_GAP_MAX,
            min_voyage_len: VOYAGE_MIN_LEN,
            min_voyage_duration: VOYAGE_MIN_DURATION,
            resolution: RESOLUTION,
            max_interpolation_gap: INTERPOLATION_GAP_MAX,
            segment_len: SEGMENT_LEN,
        }
    }
}

/// Builder for [`SegmentationParams`], with validation.
#[derive(Debug, Clone, Default)]
pub struct SegmentationParamsBuilder {
    params: SegmentationParams,
}

impl SegmentationParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: SegmentationParams::default(),
        }
    }

    pub fn max_voyage_gap(mut self, v: Seconds) -> Self {
        self.params.max_voyage_gap = v;
        self
    }
    pub fn min_voyage_len(mut self, v: usize) -> Self {
        self.params.min_voyage_len = v;
        self
    }
    pub fn min_voyage_duration(mut self, v: Seconds) -> Self {
        self.params.min_voyage_duration = v;
        self
    }
    pub fn resolution(mut self, v: Seconds) -> Self {
        self.params.resolution = v;
        self
    }
    pub fn max_interpolation_gap(mut self, v: Seconds) -> Self {
        self.params.max_interpolation_gap = v;
        self
    }
    pub fn segment_len(mut self, v: usize) -> Self {
        self.params.segment_len = v;
        self
    }

    /// Validate and produce the [`SegmentationParams`].
    ///
    /// Validation rules
    /// -----------------
    /// * `resolution > 0` – the resampling walk must advance.
    /// * `max_voyage_gap`, `min_voyage_duration`, `max_interpolation_gap` ≥ 0.
    /// * `min_voyage_len ≥ 1`, `segment_len ≥ 1`.
    ///
    /// Returns
    /// -----------------
    /// * `Err(AisTrackError::InvalidSegmentationParameter)` naming the first broken rule.
    pub fn build(self) -> Result<SegmentationParams, AisTrackError> {
        let p = &self.params;

        if p.resolution <= 0 {
            return Err(AisTrackError::InvalidSegmentationParameter(
                "resolution must be > 0".into(),
            ));
        }
        if p.max_voyage_gap < 0 || p.min_voyage_duration < 0 || p.max_interpolation_gap < 0 {
            return Err(AisTrackError::InvalidSegmentationParameter(
                "time parameters must be non-negative".into(),
            ));
        }
        if p.min_voyage_len == 0 {
            return Err(AisTrackError::InvalidSegmentationParameter(
                "min_voyage_len must be >= 1".into(),
            ));
        }
        if p.segment_len == 0 {
            return Err(AisTrackError::InvalidSegmentationParameter(
                "segment_len must be >= 1".into(),
            ));
        }

        Ok(self.params)
    }
}

impl fmt::Display for SegmentationParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            const PARAM_COL: usize = 34;
            writeln!(f, "Segmentation Parameters")?;
            writeln!(f, "-----------------------")?;

            macro_rules! line {
                ($fmt:expr, $val:expr, $comment:expr) => {{
                    let s = format!($fmt, $val);
                    let pad = " ".repeat(PARAM_COL.saturating_sub(s.len()).max(1));
                    writeln!(f, "  {}{}# {}", s, pad, $comment)
                }};
            }

            line!(
                "max_voyage_gap        = {}",
                self.max_voyage_gap,
                "Gap (s) that ends a voyage"
            )?;
            line!(
                "min_voyage_len        = {}",
                self.min_voyage_len,
                "Minimum reports per voyage"
            )?;
            line!(
                "min_voyage_duration   = {}",
                self.min_voyage_duration,
                "Minimum voyage duration (s)"
            )?;
            line!(
                "resolution            = {}",
                self.resolution,
                "Resampling step (s)"
            )?;
            line!(
                "max_interpolation_gap = {}",
                self.max_interpolation_gap,
                "Largest bracketing gap (s)"
            )?;
            line!(
                "segment_len           = {}",
                self.segment_len,
                "Samples per segment"
            )?;
            Ok(())
        } else {
            write!(
                f,
                "SegmentationParams(gap={}s, min_len={}, min_dur={}s, res={}s, interp_gap={}s, seg_len={})",
                self.max_voyage_gap,
                self.min_voyage_len,
                self.min_voyage_duration,
                self.resolution,
                self.max_interpolation_gap,
                self.segment_len
            )
        }
    }
}
