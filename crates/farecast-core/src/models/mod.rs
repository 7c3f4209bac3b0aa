mod diagnostics;
mod trip;
mod vocabulary;

pub use diagnostics::ModelDiagnostics;
pub use trip::TripRecord;
pub use vocabulary::CategoricalVocabulary;
