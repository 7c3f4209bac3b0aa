/// Farecast system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The exact column set and order the pipeline was trained on.
/// Any single record or batch file must match this schema verbatim.
pub const EXPECTED_COLUMNS: [&str; 10] = [
    "Trip_Distance_km",
    "Time_of_Day",
    "Day_of_Week",
    "Passenger_Count",
    "Traffic_Conditions",
    "Weather",
    "Base_Fare",
    "Per_Km_Rate",
    "Per_Minute_Rate",
    "Trip_Duration_Minutes",
];

/// Numeric columns, in the order the preprocessor scales them.
pub const NUMERIC_COLUMNS: [&str; 6] = [
    "Trip_Distance_km",
    "Passenger_Count",
    "Base_Fare",
    "Per_Km_Rate",
    "Per_Minute_Rate",
    "Trip_Duration_Minutes",
];

/// Categorical columns, in the positional order the trained encoder
/// stores its per-column category arrays: 0 → Time_of_Day,
/// 1 → Day_of_Week, 2 → Traffic_Conditions, 3 → Weather.
pub const CATEGORICAL_COLUMNS: [&str; 4] = [
    "Time_of_Day",
    "Day_of_Week",
    "Traffic_Conditions",
    "Weather",
];

/// Conventional name of the preprocessing stage inside the pipeline.
pub const PREPROCESSOR_STEP: &str = "preprocessor";

/// Conventional key of the categorical sub-transformer inside the
/// preprocessing stage.
pub const CATEGORICAL_TRANSFORMER_KEY: &str = "cat";

/// Column appended to a batch table in the augmented output.
pub const PREDICTION_COLUMN: &str = "Predicted_Trip_Price";
