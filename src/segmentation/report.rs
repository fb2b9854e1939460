//! Per-stage counters of a segmentation run.
use std::fmt;
use std::ops::AddAssign;

/// Number of items entering and leaving each pipeline stage.
///
/// Counters of independent tracks add up, so per-track reports can be merged in any order
/// with `+=`.
///
/// Display
/// -----------------
/// * `{}` – single line for logs, e.g.
///   `tracks=3, voyages=5, kept=4, sampled=3, discarded=1, segments=7`
/// * `{:#}` – multi-line summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentationReport {
    /// Input tracks
    pub tracks: usize,
    /// Input reports, summed over all tracks
    pub observations: usize,
    /// Voyages after splitting
    pub voyages: usize,
    /// Voyages surviving the length/duration filter
    pub voyages_kept: usize,
    /// Voyages fully resampled
    pub sampled_tracks: usize,
    /// Voyages discarded because one sample could not be interpolated
    pub sampled_discarded: usize,
    /// Output segments
    pub segments: usize,
}

impl AddAssign for SegmentationReport {
    fn add_assign(&mut self, rhs: Self) {
        self.tracks += rhs.tracks;
        self.observations += rhs.observations;
        self.voyages += rhs.voyages;
        self.voyages_kept += rhs.voyages_kept;
        self.sampled_tracks += rhs.sampled_tracks;
        self.sampled_discarded += rhs.sampled_discarded;
        self.segments += rhs.segments;
    }
}

impl fmt::Display for SegmentationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Segmentation summary")?;
            writeln!(f, "--------------------")?;
            writeln!(f, "tracks            : {}", self.tracks)?;
            writeln!(f, "reports           : {}", self.observations)?;
            writeln!(f, "voyages           : {}", self.voyages)?;
            writeln!(f, "voyages kept      : {}", self.voyages_kept)?;
            writeln!(f, "sampled tracks    : {}", self.sampled_tracks)?;
            writeln!(f, "sampled discarded : {}", self.sampled_discarded)?;
            write!(f, "segments          : {}", self.segments)
        } else {
            write!(
                f,
                "tracks={}, voyages={}, kept={}, sampled={}, discarded={}, segments={}",
                self.tracks,
                self.voyages,
                self.voyages_kept,
                self.sampled_tracks,
                self.sampled_discarded,
                self.segments
            )
        }
    }
}
