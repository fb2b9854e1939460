use thiserror::Error;

use crate::constants::Mmsi;

#[derive(Error, Debug)]
pub enum AisTrackError {
    #[error("Invalid segmentation parameter: {0}")]
    InvalidSegmentationParameter(String),

    #[error("Geodesic computation failed: {0}")]
    GeodesicFailure(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid record at line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    #[error("Track of vessel {0} is not sorted by timestamp")]
    UnsortedTrack(Mmsi),

    #[error("Track of vessel {0} holds reports of another vessel")]
    MixedVesselTrack(Mmsi),
}

impl PartialEq for AisTrackError {
    fn eq(&self, other: &Self) -> bool {
        use AisTrackError::*;
        match (self, other) {
            (InvalidSegmentationParameter(a), InvalidSegmentationParameter(b)) => a == b,
            (GeodesicFailure(a), GeodesicFailure(b)) => a == b,

            // Foreign errors are not comparable: same variant means equal
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,

            (
                InvalidRecord {
                    line: la,
                    reason: ra,
                },
                InvalidRecord {
                    line: lb,
                    reason: rb,
                },
            ) => la == lb && ra == rb,
            (UnsortedTrack(a), UnsortedTrack(b)) => a == b,
            (MixedVesselTrack(a), MixedVesselTrack(b)) => a == b,

            _ => false,
        }
    }
}
