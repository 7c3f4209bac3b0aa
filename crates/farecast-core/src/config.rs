//! System configuration, loaded from TOML with full defaults.

use serde::{Deserialize, Serialize};

mod defaults {
    pub const DEFAULT_ARTIFACT_PATH: &str = "taxi_pricing_best_model.json";

    pub const DEFAULT_TRIP_DISTANCE_KM: f64 = 5.0;
    pub const DEFAULT_PASSENGER_COUNT: u32 = 1;
    pub const DEFAULT_BASE_FARE: f64 = 3.0;
    pub const DEFAULT_PER_KM_RATE: f64 = 0.8;
    pub const DEFAULT_PER_MINUTE_RATE: f64 = 0.2;
    pub const DEFAULT_TRIP_DURATION_MINUTES: f64 = 12.0;
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FarecastConfig {
    pub artifact: ArtifactConfig,
    pub form: FormConfig,
}

impl FarecastConfig {
    /// Parse a TOML document. Missing sections and fields fall back to
    /// their defaults, so the empty string yields the default config.
    pub fn from_toml(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }
}

/// Where the serialized pipeline artifact lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactConfig {
    /// Filesystem path of the serialized `(pipeline, version)` pair.
    pub path: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_ARTIFACT_PATH.to_string(),
        }
    }
}

/// Seed values a presentation layer uses for the single-record form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub trip_distance_km: f64,
    pub passenger_count: u32,
    pub base_fare: f64,
    pub per_km_rate: f64,
    pub per_minute_rate: f64,
    pub trip_duration_minutes: f64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            trip_distance_km: defaults::DEFAULT_TRIP_DISTANCE_KM,
            passenger_count: defaults::DEFAULT_PASSENGER_COUNT,
            base_fare: defaults::DEFAULT_BASE_FARE,
            per_km_rate: defaults::DEFAULT_PER_KM_RATE,
            per_minute_rate: defaults::DEFAULT_PER_MINUTE_RATE,
            trip_duration_minutes: defaults::DEFAULT_TRIP_DURATION_MINUTES,
        }
    }
}
