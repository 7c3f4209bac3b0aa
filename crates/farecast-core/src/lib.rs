//! # farecast-core
//!
//! Foundation crate for the Farecast trip price prediction system.
//! Defines the trip record schema, categorical vocabularies, errors,
//! config, and the model capability trait.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::FarecastConfig;
pub use errors::{FarecastError, FarecastResult};
pub use models::{CategoricalVocabulary, ModelDiagnostics, TripRecord};
pub use traits::IPriceModel;
