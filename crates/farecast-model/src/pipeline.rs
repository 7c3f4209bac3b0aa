//! The deserialized pipeline: a named, ordered sequence of stages,
//! the last of which is the regressor.
//!
//! Orchestration code consumes this only through `IPriceModel`; the
//! stage internals stay private to this crate's modules.

use serde::{Deserialize, Serialize};

use farecast_core::errors::{FarecastResult, PredictionError};
use farecast_core::models::{ModelDiagnostics, TripRecord};
use farecast_core::traits::IPriceModel;

use crate::diagnostics;
use crate::preprocess::ColumnPreprocessor;
use crate::regressor::{ConstantRegressor, LinearRegressor, StumpEnsemble};

/// A trained pipeline, immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineArtifact {
    pub steps: Vec<PipelineStep>,
}

/// One named stage in the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineStep {
    pub name: String,
    #[serde(flatten)]
    pub stage: Stage,
}

/// The stage kinds a pipeline may carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum Stage {
    ColumnPreprocessor(ColumnPreprocessor),
    LinearRegressor(LinearRegressor),
    StumpEnsemble(StumpEnsemble),
    ConstantRegressor(ConstantRegressor),
}

impl Stage {
    /// Stable kind name, used in diagnostics output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Stage::ColumnPreprocessor(_) => "column_preprocessor",
            Stage::LinearRegressor(_) => "linear_regressor",
            Stage::StumpEnsemble(_) => "stump_ensemble",
            Stage::ConstantRegressor(_) => "constant_regressor",
        }
    }
}

impl PipelineArtifact {
    /// Run one record through every stage.
    ///
    /// Any fault — empty pipeline, misplaced stage, unseen category,
    /// feature arity mismatch — surfaces as a single uniform
    /// `PredictionError::Failed` carrying the underlying message.
    pub fn predict_record(&self, record: &TripRecord) -> FarecastResult<f64> {
        let (last, front) = self.steps.split_last().ok_or_else(|| PredictionError::Failed {
            reason: "pipeline has no stages".to_string(),
        })?;

        // Without a preprocessing stage the regressor sees the raw
        // numeric fields. Regressors that depend on encoded categorical
        // features then fail on arity, which is the intended fault.
        let mut features: Vec<f64> = record.numeric_values().to_vec();
        for step in front {
            match &step.stage {
                Stage::ColumnPreprocessor(pp) => features = pp.transform(record)?,
                other => {
                    return Err(PredictionError::Failed {
                        reason: format!(
                            "stage '{}' ({}) appears before the final stage but is not a transformer",
                            step.name,
                            other.kind_name()
                        ),
                    }
                    .into())
                }
            }
        }

        match &last.stage {
            Stage::LinearRegressor(r) => r.predict(&features),
            Stage::StumpEnsemble(r) => r.predict(&features),
            Stage::ConstantRegressor(r) => Ok(r.predict()),
            Stage::ColumnPreprocessor(_) => Err(PredictionError::Failed {
                reason: format!("final stage '{}' is not a regressor", last.name),
            }
            .into()),
        }
    }

    /// Kind name of the final (regressor) stage, or a placeholder for
    /// an empty pipeline.
    pub fn regressor_kind(&self) -> &'static str {
        self.steps
            .last()
            .map(|s| s.stage.kind_name())
            .unwrap_or("empty_pipeline")
    }
}

impl IPriceModel for PipelineArtifact {
    fn predict_one(&self, record: &TripRecord) -> FarecastResult<f64> {
        self.predict_record(record)
    }

    fn predict_batch(&self, records: &[TripRecord]) -> FarecastResult<Vec<f64>> {
        records.iter().map(|r| self.predict_record(r)).collect()
    }

    fn describe(&self) -> ModelDiagnostics {
        diagnostics::describe(self)
    }

    fn name(&self) -> &str {
        self.regressor_kind()
    }
}
