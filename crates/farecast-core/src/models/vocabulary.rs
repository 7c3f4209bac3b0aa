use serde::{Deserialize, Serialize};

/// Permitted values for the four categorical trip fields, recovered
/// from the artifact's preprocessing stage.
///
/// Invariant: either all four vocabularies come from the same
/// successful extraction, or all four are empty. Partial population
/// would let a form silently accept an invalid category, so the
/// extractor never produces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalVocabulary {
    pub time_of_day: Vec<String>,
    pub day_of_week: Vec<String>,
    pub traffic_conditions: Vec<String>,
    pub weather: Vec<String>,
}

impl CategoricalVocabulary {
    /// The degraded "no valid selectable values" state.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when every vocabulary is empty (extraction degraded).
    pub fn is_empty(&self) -> bool {
        self.time_of_day.is_empty()
            && self.day_of_week.is_empty()
            && self.traffic_conditions.is_empty()
            && self.weather.is_empty()
    }

    /// Vocabularies in positional order, parallel to
    /// `constants::CATEGORICAL_COLUMNS`.
    pub fn as_slices(&self) -> [&[String]; 4] {
        [
            &self.time_of_day,
            &self.day_of_week,
            &self.traffic_conditions,
            &self.weather,
        ]
    }
}
