/// Prediction faults.
///
/// Every fault during inference — unseen category, feature arity
/// mismatch, empty pipeline — is reported uniformly through the single
/// `Failed` variant; callers get one message, not a subtype to branch
/// on. A failure is terminal for the submission, never for the process.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("prediction failed: {reason}")]
    Failed { reason: String },
}
