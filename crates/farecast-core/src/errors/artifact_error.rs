/// Artifact-loading errors.
///
/// `Clone` because load outcomes are memoized process-wide and a cached
/// failure is handed back verbatim on every subsequent load of the same
/// path.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact file not found: {path}")]
    NotFound { path: String },

    #[error("failed to deserialize artifact {path}: {reason}")]
    DeserializeFailed { path: String, reason: String },

    #[error(
        "artifact exposes {found} categorical vocabulary arrays, expected exactly {expected}"
    )]
    VocabularyArity { expected: usize, found: usize },
}
