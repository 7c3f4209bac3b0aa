//! Recovery of the categorical vocabularies the pipeline was trained
//! with.
//!
//! The artifact is assumed, not guaranteed, to expose a stage named
//! `preprocessor` holding a sub-transformer keyed `cat` whose ordered
//! category arrays map positionally onto the four categorical columns.
//! Extraction degrades to empty vocabularies on any mismatch; it never
//! fails the process.

use tracing::warn;

use farecast_core::constants::{
    CATEGORICAL_COLUMNS, CATEGORICAL_TRANSFORMER_KEY, PREPROCESSOR_STEP,
};
use farecast_core::errors::{ArtifactError, SchemaError};
use farecast_core::models::CategoricalVocabulary;

use crate::pipeline::{PipelineArtifact, Stage};
use crate::preprocess::{OneHotEncoder, Transformer};

/// Recover the four vocabularies, or the empty degraded state.
///
/// An empty result means "no valid selectable values": a form renders
/// its categorical fields with no options instead of crashing.
pub fn extract_vocabularies(artifact: &PipelineArtifact) -> CategoricalVocabulary {
    try_extract_vocabularies(artifact).unwrap_or_else(|e| {
        warn!(error = %e, "vocabulary extraction degraded to empty vocabularies");
        CategoricalVocabulary::empty()
    })
}

/// Recover the four vocabularies, surfacing the precise mismatch.
pub fn try_extract_vocabularies(
    artifact: &PipelineArtifact,
) -> Result<CategoricalVocabulary, SchemaError> {
    let encoder = find_categorical_encoder(artifact)?;
    let categories = &encoder.categories;
    if categories.len() != CATEGORICAL_COLUMNS.len() {
        return Err(SchemaError::ExtractionFailed {
            reason: format!(
                "expected {} category arrays, found {}",
                CATEGORICAL_COLUMNS.len(),
                categories.len()
            ),
        });
    }

    // Positional assignment: array index, not column name, is the
    // contract the trained encoder stores.
    Ok(CategoricalVocabulary {
        time_of_day: categories[0].clone(),
        day_of_week: categories[1].clone(),
        traffic_conditions: categories[2].clone(),
        weather: categories[3].clone(),
    })
}

/// Load-time check of the positional contract: if a categorical
/// encoder is present anywhere, its array count must be exactly four.
pub fn verify_vocabulary_arity(artifact: &PipelineArtifact) -> Result<(), ArtifactError> {
    for step in &artifact.steps {
        if let Stage::ColumnPreprocessor(pp) = &step.stage {
            for transformer in pp.named_transformers.values() {
                if let Transformer::OneHotEncoder(encoder) = transformer {
                    if encoder.categories.len() != CATEGORICAL_COLUMNS.len() {
                        return Err(ArtifactError::VocabularyArity {
                            expected: CATEGORICAL_COLUMNS.len(),
                            found: encoder.categories.len(),
                        });
                    }
                }
            }
        }
    }
    Ok(())
}

fn find_categorical_encoder(artifact: &PipelineArtifact) -> Result<&OneHotEncoder, SchemaError> {
    let step = artifact
        .steps
        .iter()
        .find(|s| s.name == PREPROCESSOR_STEP)
        .ok_or_else(|| SchemaError::StepMissing {
            step: PREPROCESSOR_STEP.to_string(),
        })?;

    let Stage::ColumnPreprocessor(pp) = &step.stage else {
        return Err(SchemaError::ExtractionFailed {
            reason: format!(
                "stage '{}' is a {}, not a column preprocessor",
                step.name,
                step.stage.kind_name()
            ),
        });
    };

    match pp.named_transformers.get(CATEGORICAL_TRANSFORMER_KEY) {
        Some(Transformer::OneHotEncoder(encoder)) => Ok(encoder),
        Some(_) => Err(SchemaError::ExtractionFailed {
            reason: format!(
                "sub-transformer '{CATEGORICAL_TRANSFORMER_KEY}' exposes no category arrays"
            ),
        }),
        None => Err(SchemaError::TransformerMissing {
            key: CATEGORICAL_TRANSFORMER_KEY.to_string(),
        }),
    }
}
