//! # farecast-model
//!
//! Everything between the serialized pipeline artifact on disk and a
//! predicted trip price:
//!
//! - `loader` — deserializes the `(pipeline, version)` pair, memoizes
//!   the result process-wide, and never lets a load fault escape.
//! - `schema` — recovers the categorical vocabularies the pipeline was
//!   trained with, degrading to empty vocabularies on any structural
//!   mismatch.
//! - `pipeline` — the stage sequence itself and the prediction walk.
//!   Implements `IPriceModel` from farecast-core.
//! - `diagnostics` — best-effort description of the final stage.

pub mod artifact;
pub mod diagnostics;
pub mod loader;
pub mod pipeline;
pub mod preprocess;
pub mod regressor;
pub mod schema;

pub use diagnostics::describe;
pub use loader::{invalidate, invalidate_all, load, try_load};
pub use pipeline::{PipelineArtifact, PipelineStep, Stage};
pub use schema::{extract_vocabularies, try_extract_vocabularies};
