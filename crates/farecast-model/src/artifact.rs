//! On-disk artifact format: a JSON pair of `(pipeline, version)`.
//!
//! The training side persists the pipeline together with the version
//! of the library that produced it. Only the pipeline is retained; the
//! version string is logged and dropped.

use serde::Deserialize;
use tracing::debug;

use farecast_core::errors::ArtifactError;

use crate::pipeline::PipelineArtifact;

#[derive(Debug, Deserialize)]
struct ArtifactPair(PipelineArtifact, String);

/// Parse the raw bytes of an artifact file.
pub fn parse_artifact(bytes: &[u8], path: &str) -> Result<PipelineArtifact, ArtifactError> {
    let ArtifactPair(pipeline, version) =
        serde_json::from_slice(bytes).map_err(|e| ArtifactError::DeserializeFailed {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
    debug!(path, %version, stages = pipeline.steps.len(), "artifact deserialized");
    Ok(pipeline)
}
