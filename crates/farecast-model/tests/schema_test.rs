use std::collections::BTreeMap;

use farecast_core::errors::SchemaError;
use farecast_model::pipeline::{PipelineArtifact, PipelineStep, Stage};
use farecast_model::preprocess::{ColumnPreprocessor, OneHotEncoder, StandardScaler, Transformer};
use farecast_model::regressor::ConstantRegressor;
use farecast_model::schema;

fn vocab(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn preprocessor_step(name: &str, categories: Vec<Vec<String>>) -> PipelineStep {
    let mut transformers = BTreeMap::new();
    transformers.insert(
        "cat".to_string(),
        Transformer::OneHotEncoder(OneHotEncoder { categories }),
    );
    PipelineStep {
        name: name.to_string(),
        stage: Stage::ColumnPreprocessor(ColumnPreprocessor {
            named_transformers: transformers,
        }),
    }
}

fn regressor_step() -> PipelineStep {
    PipelineStep {
        name: "regressor".to_string(),
        stage: Stage::ConstantRegressor(ConstantRegressor { value: 0.0 }),
    }
}

fn trained_categories() -> Vec<Vec<String>> {
    vec![
        vocab(&["Morning", "Afternoon", "Evening"]),
        vocab(&[
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ]),
        vocab(&["Low", "Medium", "High"]),
        vocab(&["Clear", "Rain", "Snow"]),
    ]
}

#[test]
fn vocabularies_are_recovered_in_positional_order() {
    let artifact = PipelineArtifact {
        steps: vec![
            preprocessor_step("preprocessor", trained_categories()),
            regressor_step(),
        ],
    };

    let vocab = schema::extract_vocabularies(&artifact);
    assert_eq!(vocab.time_of_day.len(), 3);
    assert_eq!(vocab.day_of_week.len(), 7);
    assert_eq!(vocab.traffic_conditions.len(), 3);
    assert_eq!(vocab.weather.len(), 3);
    assert_eq!(vocab.time_of_day[0], "Morning");
    assert_eq!(vocab.day_of_week[4], "Friday");
    assert_eq!(vocab.weather[2], "Snow");
}

#[test]
fn missing_preprocessor_step_degrades_to_empty_vocabularies() {
    // Stage exists but carries an unconventional name.
    let artifact = PipelineArtifact {
        steps: vec![
            preprocessor_step("column_transform", trained_categories()),
            regressor_step(),
        ],
    };

    let vocab = schema::extract_vocabularies(&artifact);
    assert!(vocab.is_empty());

    let err = schema::try_extract_vocabularies(&artifact).unwrap_err();
    assert!(matches!(err, SchemaError::StepMissing { .. }));
    assert!(err.to_string().contains("preprocessor"));
}

#[test]
fn missing_cat_transformer_degrades_to_empty_vocabularies() {
    let mut transformers = BTreeMap::new();
    transformers.insert(
        "num".to_string(),
        Transformer::StandardScaler(StandardScaler {
            means: vec![0.0; 6],
            scales: vec![1.0; 6],
        }),
    );
    let artifact = PipelineArtifact {
        steps: vec![
            PipelineStep {
                name: "preprocessor".to_string(),
                stage: Stage::ColumnPreprocessor(ColumnPreprocessor {
                    named_transformers: transformers,
                }),
            },
            regressor_step(),
        ],
    };

    assert!(schema::extract_vocabularies(&artifact).is_empty());
    assert!(matches!(
        schema::try_extract_vocabularies(&artifact),
        Err(SchemaError::TransformerMissing { .. })
    ));
}

#[test]
fn cat_key_without_category_arrays_degrades_to_empty_vocabularies() {
    let mut transformers = BTreeMap::new();
    transformers.insert(
        "cat".to_string(),
        Transformer::StandardScaler(StandardScaler {
            means: vec![0.0; 6],
            scales: vec![1.0; 6],
        }),
    );
    let artifact = PipelineArtifact {
        steps: vec![
            PipelineStep {
                name: "preprocessor".to_string(),
                stage: Stage::ColumnPreprocessor(ColumnPreprocessor {
                    named_transformers: transformers,
                }),
            },
            regressor_step(),
        ],
    };

    assert!(schema::extract_vocabularies(&artifact).is_empty());
    assert!(matches!(
        schema::try_extract_vocabularies(&artifact),
        Err(SchemaError::ExtractionFailed { .. })
    ));
}

#[test]
fn wrong_array_count_never_partially_populates() {
    let artifact = PipelineArtifact {
        steps: vec![
            preprocessor_step(
                "preprocessor",
                vec![vocab(&["Morning"]), vocab(&["Monday"]), vocab(&["Low"])],
            ),
            regressor_step(),
        ],
    };

    // Three of four arrays present: all four vocabularies stay empty.
    let vocab = schema::extract_vocabularies(&artifact);
    assert!(vocab.is_empty());

    // And the load-time contract check rejects the same artifact.
    assert!(schema::verify_vocabulary_arity(&artifact).is_err());
}

#[test]
fn arity_check_accepts_a_well_formed_artifact() {
    let artifact = PipelineArtifact {
        steps: vec![
            preprocessor_step("preprocessor", trained_categories()),
            regressor_step(),
        ],
    };
    assert!(schema::verify_vocabulary_arity(&artifact).is_ok());

    // No encoder at all is also fine: nothing to verify.
    let bare = PipelineArtifact {
        steps: vec![regressor_step()],
    };
    assert!(schema::verify_vocabulary_arity(&bare).is_ok());
}
