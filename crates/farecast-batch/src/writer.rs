//! Augmented batch output: the original table plus one prediction
//! column, encoded as a self-contained payload for download.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use farecast_core::constants::{EXPECTED_COLUMNS, PREDICTION_COLUMN};
use farecast_core::errors::{BatchError, FarecastResult};
use farecast_core::models::TripRecord;

/// Render the batch with its predictions appended as
/// `Predicted_Trip_Price`, one value per row, input order preserved.
///
/// Floats use the shortest round-trip representation, so re-reading
/// the output reproduces the in-memory predictions bit-identically.
pub fn write_augmented(records: &[TripRecord], predictions: &[f64]) -> FarecastResult<Vec<u8>> {
    if records.len() != predictions.len() {
        return Err(BatchError::RowCountMismatch {
            records: records.len(),
            predictions: predictions.len(),
        }
        .into());
    }

    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header: Vec<&str> = EXPECTED_COLUMNS.to_vec();
    header.push(PREDICTION_COLUMN);
    writer.write_record(&header).map_err(write_failed)?;

    for (record, price) in records.iter().zip(predictions) {
        let mut fields = record.to_fields().to_vec();
        fields.push(price.to_string());
        writer.write_record(&fields).map_err(write_failed)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| BatchError::WriteFailed {
            reason: e.to_string(),
        })?;
    debug!(rows = records.len(), bytes = bytes.len(), "augmented batch encoded");
    Ok(bytes)
}

/// Wrap the CSV bytes in a `data:` URI, ready to hand to a download
/// link with no server-side file involved.
pub fn to_download_uri(bytes: &[u8]) -> String {
    format!("data:text/csv;base64,{}", STANDARD.encode(bytes))
}

fn write_failed(e: csv::Error) -> BatchError {
    BatchError::WriteFailed {
        reason: e.to_string(),
    }
}
