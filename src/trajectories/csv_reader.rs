//! CSV ingestion of decoded AIS reports.
//!
//! Expected header (any column order):
//!
//! ```text
//! lat,lon,sog,cog,heading,rot,nav_status,timestamp,mmsi
//! ```
//!
//! Reports flagged by AIS as "position not available" (latitude 91° or longitude 181°) carry
//! no position and are skipped. Other out-of-range or non-finite positions are rejected with
//! [`AisTrackError::InvalidRecord`].
use std::io::Read;

use crate::{aistrack_errors::AisTrackError, constants::Degree, observations::Observation};

/// AIS default latitude meaning "not available"
const LAT_NOT_AVAILABLE: Degree = 91.0;
/// AIS default longitude meaning "not available"
const LON_NOT_AVAILABLE: Degree = 181.0;

fn check_record(obs: &Observation, line: u64) -> Result<(), AisTrackError> {
    let invalid = |reason: String| AisTrackError::InvalidRecord { line, reason };

    if !obs.lat.is_finite() || obs.lat.abs() > 90.0 {
        return Err(invalid(format!("latitude out of range: {}", obs.lat)));
    }
    if !obs.lon.is_finite() || obs.lon.abs() > 180.0 {
        return Err(invalid(format!("longitude out of range: {}", obs.lon)));
    }
    Ok(())
}

/// Read every report of a CSV source.
///
/// Arguments
/// -----------------
/// * `reader`: Any CSV byte source with a header row.
///
/// Return
/// ----------
/// * The reports in file order, "position not available" reports excluded.
///
/// Errors
/// ----------
/// * [`AisTrackError::CsvError`] on malformed CSV or a field that does not parse.
/// * [`AisTrackError::InvalidRecord`] on an impossible position.
pub(crate) fn read_observations<R: Read>(reader: R) -> Result<Vec<Observation>, AisTrackError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut observations = Vec::new();
    let mut skipped = 0usize;
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        let obs: Observation = record.deserialize(Some(&headers))?;

        if obs.lat == LAT_NOT_AVAILABLE || obs.lon == LON_NOT_AVAILABLE {
            skipped += 1;
            continue;
        }
        check_record(&obs, line)?;
        observations.push(obs);
    }

    if skipped > 0 {
        log::debug!("skipped {skipped} report(s) without position");
    }
    Ok(observations)
}
