use serde::{Deserialize, Serialize};

/// Read-only, best-effort description of the artifact's final stage.
///
/// Raw numeric arrays only — no attempt is made to align values with
/// feature names. Informational for a diagnostics panel; affects no
/// other component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelDiagnostics {
    /// Linear regressor: per-feature coefficients, verbatim.
    Coefficients { model: String, values: Vec<f64> },
    /// Tree-style regressor: per-feature importances, verbatim.
    FeatureImportances { model: String, values: Vec<f64> },
    /// The regressor exposes neither coefficients nor importances.
    Unavailable { model: String },
    /// The stage sequence itself could not be traversed.
    TraversalFailed { reason: String },
}
