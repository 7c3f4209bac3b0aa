//! Regressor stages: the final stage of every well-formed pipeline.

use serde::{Deserialize, Serialize};

use farecast_core::errors::{FarecastResult, PredictionError};

/// Linear model over the encoded feature vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegressor {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearRegressor {
    pub fn predict(&self, features: &[f64]) -> FarecastResult<f64> {
        if self.coefficients.len() != features.len() {
            return Err(PredictionError::Failed {
                reason: format!(
                    "regressor expects {} features, got {}",
                    self.coefficients.len(),
                    features.len()
                ),
            }
            .into());
        }
        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(c, x)| c * x)
            .sum();
        Ok(dot + self.intercept)
    }
}

/// One decision stump: a single threshold split on one feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stump {
    pub feature: usize,
    pub threshold: f64,
    pub left: f64,
    pub right: f64,
}

/// Additive ensemble of stumps with per-feature importances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StumpEnsemble {
    pub base_score: f64,
    pub stumps: Vec<Stump>,
    pub feature_importances: Vec<f64>,
}

impl StumpEnsemble {
    pub fn predict(&self, features: &[f64]) -> FarecastResult<f64> {
        let mut score = self.base_score;
        for stump in &self.stumps {
            let x = features.get(stump.feature).ok_or_else(|| {
                PredictionError::Failed {
                    reason: format!(
                        "stump references feature {} but only {} are available",
                        stump.feature,
                        features.len()
                    ),
                }
            })?;
            score += if *x < stump.threshold {
                stump.left
            } else {
                stump.right
            };
        }
        Ok(score)
    }
}

/// Baseline regressor that always answers the same value. Exposes
/// neither coefficients nor importances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstantRegressor {
    pub value: f64,
}

impl ConstantRegressor {
    pub fn predict(&self) -> f64 {
        self.value
    }
}
