//! Progress bar over the tracks of a segmentation run (feature `progress`).
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str =
    "{bar:40.cyan/blue} {pos}/{len} tracks ({percent:>3}%) | {per_sec} | ETA {eta_precise}";

/// Bar of `len` tracks, ticking on its own every 200 ms.
pub(crate) fn track_progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len.max(1) as u64);
    pb.set_style(
        ProgressStyle::with_template(TEMPLATE).unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb.enable_steady_tick(Duration::from_millis(200));
    pb
}
