/// Batch file ingest and augmentation errors.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to read batch file: {reason}")]
    ReadFailed { reason: String },

    #[error("batch header mismatch at column {position}: expected '{expected}', found '{found}'")]
    HeaderMismatch {
        position: usize,
        expected: String,
        found: String,
    },

    #[error("batch has {records} records but {predictions} predictions")]
    RowCountMismatch { records: usize, predictions: usize },

    #[error("failed to encode batch output: {reason}")]
    WriteFailed { reason: String },
}
