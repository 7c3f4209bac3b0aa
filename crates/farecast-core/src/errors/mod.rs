//! Error taxonomy for the Farecast system.
//!
//! Each subsystem has its own error enum; `FarecastError` is the
//! umbrella every fallible public operation returns. Failures are
//! contained at the boundary of the operation that raised them and
//! converted to user-facing diagnostics, never allowed to take the
//! process down.

mod artifact_error;
mod batch_error;
mod prediction_error;
mod schema_error;

pub use artifact_error::ArtifactError;
pub use batch_error::BatchError;
pub use prediction_error::PredictionError;
pub use schema_error::SchemaError;

/// Convenience alias used across all Farecast crates.
pub type FarecastResult<T> = Result<T, FarecastError>;

/// Umbrella error for the whole system.
#[derive(Debug, thiserror::Error)]
pub enum FarecastError {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Prediction(#[from] PredictionError),

    #[error(transparent)]
    Batch(#[from] BatchError),
}
