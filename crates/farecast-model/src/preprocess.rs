//! The column preprocessing stage: numeric standardization plus
//! one-hot categorical encoding with the vocabularies learned at
//! training time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use farecast_core::constants::{CATEGORICAL_COLUMNS, CATEGORICAL_TRANSFORMER_KEY};
use farecast_core::errors::{FarecastResult, PredictionError};
use farecast_core::models::TripRecord;

/// Named sub-transformers, conventionally keyed `num` and `cat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnPreprocessor {
    pub named_transformers: BTreeMap<String, Transformer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "transformer", rename_all = "snake_case")]
pub enum Transformer {
    StandardScaler(StandardScaler),
    OneHotEncoder(OneHotEncoder),
}

/// Per-column centering and scaling for the numeric fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub means: Vec<f64>,
    pub scales: Vec<f64>,
}

/// Ordered per-column category arrays for the categorical fields.
/// Index position, not name, ties an array to its column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneHotEncoder {
    pub categories: Vec<Vec<String>>,
}

impl ColumnPreprocessor {
    /// Encode one record into the feature vector the regressor was
    /// trained on: scaled numerics first, then one one-hot block per
    /// categorical column.
    pub fn transform(&self, record: &TripRecord) -> FarecastResult<Vec<f64>> {
        let numeric = record.numeric_values();
        let mut features = Vec::with_capacity(numeric.len());

        match self.named_transformers.get("num") {
            Some(Transformer::StandardScaler(scaler)) => {
                features.extend(scaler.apply(&numeric)?);
            }
            // No numeric transformer: raw values pass through.
            _ => features.extend_from_slice(&numeric),
        }

        if let Some(Transformer::OneHotEncoder(encoder)) =
            self.named_transformers.get(CATEGORICAL_TRANSFORMER_KEY)
        {
            encoder.encode_into(record, &mut features)?;
        }

        Ok(features)
    }
}

impl StandardScaler {
    fn apply(&self, values: &[f64]) -> FarecastResult<Vec<f64>> {
        if self.means.len() != values.len() || self.scales.len() != values.len() {
            return Err(PredictionError::Failed {
                reason: format!(
                    "numeric scaler covers {} columns, record has {}",
                    self.means.len(),
                    values.len()
                ),
            }
            .into());
        }
        Ok(values
            .iter()
            .zip(self.means.iter().zip(&self.scales))
            .map(|(&x, (&mean, &scale))| {
                // Zero scale: constant training column, center only.
                if scale == 0.0 {
                    x - mean
                } else {
                    (x - mean) / scale
                }
            })
            .collect())
    }
}

impl OneHotEncoder {
    fn encode_into(&self, record: &TripRecord, features: &mut Vec<f64>) -> FarecastResult<()> {
        let values = record.categorical_values();
        if self.categories.len() != values.len() {
            return Err(PredictionError::Failed {
                reason: format!(
                    "categorical encoder covers {} columns, record has {}",
                    self.categories.len(),
                    values.len()
                ),
            }
            .into());
        }
        for ((column, value), vocabulary) in
            CATEGORICAL_COLUMNS.iter().zip(values).zip(&self.categories)
        {
            let hit = vocabulary.iter().position(|c| c == value).ok_or_else(|| {
                PredictionError::Failed {
                    reason: format!("unseen category '{value}' in column '{column}'"),
                }
            })?;
            features.extend((0..vocabulary.len()).map(|i| if i == hit { 1.0 } else { 0.0 }));
        }
        Ok(())
    }
}
