use std::env;

use aistrack::aistrack_errors::AisTrackError;
use aistrack::constants::{VesselTrackSet, SPEED_MAX};
use aistrack::outliers::speed_criterion::remove_outliers;
use aistrack::segmentation::{SegmentationParams, SegmentationPipeline};
use aistrack::trajectories::track_set::TrackSetExt;
use camino::Utf8Path;

/// Segment the vessel tracks of a CSV file of decoded AIS reports.
///
/// Usage:
///   segment_csv [CSV] [--clean] [--verbose]
/// Example:
///   segment_csv tests/data/ais_sample.csv --clean --verbose
///
/// With `--clean`, speed outliers are removed from every track before segmentation.
fn main() -> Result<(), AisTrackError> {
    let mut args = env::args().skip(1).collect::<Vec<_>>();
    let mut take_flag = |flag: &str| match args.iter().position(|a| a == flag) {
        Some(pos) => {
            args.remove(pos);
            true
        }
        None => false,
    };
    let clean = take_flag("--clean");
    let verbose = take_flag("--verbose");

    let path = args
        .first()
        .cloned()
        .unwrap_or_else(|| "tests/data/ais_sample.csv".to_string());

    let mut tracks = VesselTrackSet::new_from_csv(Utf8Path::new(&path))?;
    tracks.validate()?;

    if clean {
        let before = tracks.total_observations();
        for track in tracks.values_mut() {
            *track = remove_outliers(track, SPEED_MAX);
        }
        eprintln!(
            "[segment_csv] removed {} outlier(s)",
            before - tracks.total_observations()
        );
    }

    let pipeline = SegmentationPipeline::new(SegmentationParams::default());
    let (segments, report) = pipeline.run_with_report(tracks.values());

    println!(
        "{} vessel(s), {} report(s)",
        tracks.number_of_tracks(),
        tracks.total_observations()
    );
    if let Some(stats) = tracks.track_length_stats() {
        println!("{stats:#}");
    }
    println!("{report:#}");

    if verbose {
        eprintln!("[segment_csv] {:#}", pipeline.params());
        for segment in &segments {
            let (first, last) = (&segment[0], &segment[segment.len() - 1]);
            eprintln!(
                "[segment_csv] {} : {} → {} ({} samples)",
                first.mmsi,
                first.timestamp,
                last.timestamp,
                segment.len()
            );
        }
    }

    Ok(())
}
