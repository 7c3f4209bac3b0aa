use serde::{Deserialize, Serialize};

/// One trip, matching the ten-column schema the pipeline was trained
/// on. Serde names are the exact header tokens, so a batch CSV row
/// deserializes straight into this type.
///
/// Created per submission, consumed once, not retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    #[serde(rename = "Trip_Distance_km")]
    pub trip_distance_km: f64,
    #[serde(rename = "Time_of_Day")]
    pub time_of_day: String,
    #[serde(rename = "Day_of_Week")]
    pub day_of_week: String,
    #[serde(rename = "Passenger_Count")]
    pub passenger_count: u32,
    #[serde(rename = "Traffic_Conditions")]
    pub traffic_conditions: String,
    #[serde(rename = "Weather")]
    pub weather: String,
    #[serde(rename = "Base_Fare")]
    pub base_fare: f64,
    #[serde(rename = "Per_Km_Rate")]
    pub per_km_rate: f64,
    #[serde(rename = "Per_Minute_Rate")]
    pub per_minute_rate: f64,
    #[serde(rename = "Trip_Duration_Minutes")]
    pub trip_duration_minutes: f64,
}

impl TripRecord {
    /// Numeric field values in `NUMERIC_COLUMNS` order.
    pub fn numeric_values(&self) -> [f64; 6] {
        [
            self.trip_distance_km,
            f64::from(self.passenger_count),
            self.base_fare,
            self.per_km_rate,
            self.per_minute_rate,
            self.trip_duration_minutes,
        ]
    }

    /// Categorical field values in `CATEGORICAL_COLUMNS` order.
    pub fn categorical_values(&self) -> [&str; 4] {
        [
            &self.time_of_day,
            &self.day_of_week,
            &self.traffic_conditions,
            &self.weather,
        ]
    }

    /// All ten fields rendered as strings in schema column order.
    ///
    /// Float fields use the shortest round-trip representation, so a
    /// written value parses back bit-identical.
    pub fn to_fields(&self) -> [String; 10] {
        [
            self.trip_distance_km.to_string(),
            self.time_of_day.clone(),
            self.day_of_week.clone(),
            self.passenger_count.to_string(),
            self.traffic_conditions.clone(),
            self.weather.clone(),
            self.base_fare.to_string(),
            self.per_km_rate.to_string(),
            self.per_minute_rate.to_string(),
            self.trip_duration_minutes.to_string(),
        ]
    }
}
