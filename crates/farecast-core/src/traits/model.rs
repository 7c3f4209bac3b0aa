use crate::errors::FarecastResult;
use crate::models::{ModelDiagnostics, TripRecord};

/// Capability interface over a trained price model.
///
/// Orchestration code depends on this trait only — never on a concrete
/// pipeline's internals. Any model is a black-box function from trip
/// records to prices plus a best-effort description of itself.
pub trait IPriceModel: Send + Sync {
    /// Predict the price of a single trip.
    fn predict_one(&self, record: &TripRecord) -> FarecastResult<f64>;

    /// Predict prices for a batch of trips, one value per record,
    /// input order preserved.
    fn predict_batch(&self, records: &[TripRecord]) -> FarecastResult<Vec<f64>>;

    /// Describe the model's final stage. Never fails.
    fn describe(&self) -> ModelDiagnostics;

    /// Human-readable model name.
    fn name(&self) -> &str;
}
