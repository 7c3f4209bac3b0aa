//! Process-wide memoized artifact loading.
//!
//! The artifact is the only long-lived shared resource in the system:
//! loaded at most once per path, read-only afterwards, shared as an
//! `Arc` across interactions without locking. Load outcomes — success
//! or failure — are memoized, so the same path never re-reads the
//! file; `invalidate` drops an entry when the file is replaced.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;
use tracing::{error, info};

use farecast_core::errors::{ArtifactError, FarecastResult};

use crate::artifact;
use crate::pipeline::PipelineArtifact;

type CacheEntry = Result<Arc<PipelineArtifact>, ArtifactError>;

static ARTIFACT_CACHE: Lazy<RwLock<HashMap<PathBuf, CacheEntry>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Load the artifact at `path`, memoized.
///
/// Total: every failure is logged as a user-facing diagnostic and
/// collapsed to `None`. A caller holding `None` must disable
/// model-backed interaction rather than attempt doomed predictions.
pub fn load(path: impl AsRef<Path>) -> Option<Arc<PipelineArtifact>> {
    match try_load(path) {
        Ok(artifact) => Some(artifact),
        Err(e) => {
            error!(error = %e, "failed to load model artifact");
            None
        }
    }
}

/// Load the artifact at `path`, memoized, surfacing the precise error.
pub fn try_load(path: impl AsRef<Path>) -> FarecastResult<Arc<PipelineArtifact>> {
    let key = path.as_ref().to_path_buf();

    let cached = ARTIFACT_CACHE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
        .cloned();
    if let Some(entry) = cached {
        return entry.map_err(Into::into);
    }

    let outcome = load_from_disk(&key);
    ARTIFACT_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(key, outcome.clone());
    outcome.map_err(Into::into)
}

/// Drop the memoized entry for one path. The next `load` re-reads the
/// file, so a replaced artifact can be picked up without a restart.
pub fn invalidate(path: impl AsRef<Path>) {
    ARTIFACT_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .remove(path.as_ref());
}

/// Drop every memoized entry.
pub fn invalidate_all() {
    ARTIFACT_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
}

fn load_from_disk(path: &Path) -> CacheEntry {
    let path_display = path.display().to_string();
    if !path.exists() {
        return Err(ArtifactError::NotFound { path: path_display });
    }

    let bytes = std::fs::read(path).map_err(|e| ArtifactError::DeserializeFailed {
        path: path_display.clone(),
        reason: e.to_string(),
    })?;
    let pipeline = artifact::parse_artifact(&bytes, &path_display)?;

    // The positional vocabulary contract is a versioned assumption:
    // verify it here so a malformed artifact fails loudly at load
    // instead of silently mislabeling categories later.
    crate::schema::verify_vocabulary_arity(&pipeline)?;

    info!(
        path = %path_display,
        regressor = pipeline.regressor_kind(),
        "model artifact loaded"
    );
    Ok(Arc::new(pipeline))
}
