//! Batch file ingest with fail-fast header validation.

use std::io::Read;

use tracing::debug;

use farecast_core::constants::EXPECTED_COLUMNS;
use farecast_core::errors::{BatchError, FarecastResult};
use farecast_core::models::TripRecord;

/// Read a whole batch file into memory.
///
/// The header row must equal the ten-column trained schema exactly —
/// same names, same order, nothing extra. Any malformed row aborts the
/// read; there is no partial processing.
pub fn read_records<R: Read>(input: R) -> FarecastResult<Vec<TripRecord>> {
    let mut reader = csv::Reader::from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| BatchError::ReadFailed {
            reason: e.to_string(),
        })?
        .clone();
    validate_header(&headers)?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: TripRecord = row.map_err(|e| BatchError::ReadFailed {
            reason: e.to_string(),
        })?;
        records.push(record);
    }

    debug!(rows = records.len(), "batch file parsed");
    Ok(records)
}

fn validate_header(headers: &csv::StringRecord) -> Result<(), BatchError> {
    for (position, expected) in EXPECTED_COLUMNS.iter().enumerate() {
        match headers.get(position) {
            Some(found) if found == *expected => {}
            Some(found) => {
                return Err(BatchError::HeaderMismatch {
                    position,
                    expected: expected.to_string(),
                    found: found.to_string(),
                })
            }
            None => {
                return Err(BatchError::HeaderMismatch {
                    position,
                    expected: expected.to_string(),
                    found: "<missing>".to_string(),
                })
            }
        }
    }
    if headers.len() > EXPECTED_COLUMNS.len() {
        return Err(BatchError::HeaderMismatch {
            position: EXPECTED_COLUMNS.len(),
            expected: "<end of header>".to_string(),
            found: headers
                .get(EXPECTED_COLUMNS.len())
                .unwrap_or_default()
                .to_string(),
        });
    }
    Ok(())
}
