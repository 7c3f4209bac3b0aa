/// Vocabulary-extraction errors.
///
/// These never escalate past the extractor: the total entry point
/// degrades to empty vocabularies and logs the message instead.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("pipeline has no stage named '{step}'")]
    StepMissing { step: String },

    #[error("preprocessing stage has no sub-transformer keyed '{key}'")]
    TransformerMissing { key: String },

    #[error("vocabulary extraction failed: {reason}")]
    ExtractionFailed { reason: String },
}
