//! Best-effort description of the artifact's final stage.

use farecast_core::models::ModelDiagnostics;

use crate::pipeline::{PipelineArtifact, Stage};

/// Describe the final stage, assumed to be the regressor.
///
/// Surfaces coefficients or feature importances verbatim when the
/// regressor exposes them; otherwise reports that no diagnostics are
/// available. Never fails — an untraversable stage sequence becomes a
/// `TraversalFailed` report.
pub fn describe(artifact: &PipelineArtifact) -> ModelDiagnostics {
    let Some(last) = artifact.steps.last() else {
        return ModelDiagnostics::TraversalFailed {
            reason: "pipeline has no stages".to_string(),
        };
    };

    let model = last.stage.kind_name().to_string();
    match &last.stage {
        Stage::LinearRegressor(r) => ModelDiagnostics::Coefficients {
            model,
            values: r.coefficients.clone(),
        },
        Stage::StumpEnsemble(r) => ModelDiagnostics::FeatureImportances {
            model,
            values: r.feature_importances.clone(),
        },
        Stage::ConstantRegressor(_) | Stage::ColumnPreprocessor(_) => {
            ModelDiagnostics::Unavailable { model }
        }
    }
}
