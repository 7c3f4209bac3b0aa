use farecast_batch::{read_records, to_download_uri, write_augmented};
use farecast_core::constants::{EXPECTED_COLUMNS, PREDICTION_COLUMN};
use farecast_core::errors::{BatchError, FarecastError};
use farecast_core::models::TripRecord;

const VALID_HEADER: &str = "Trip_Distance_km,Time_of_Day,Day_of_Week,Passenger_Count,\
Traffic_Conditions,Weather,Base_Fare,Per_Km_Rate,Per_Minute_Rate,Trip_Duration_Minutes";

fn record(distance: f64) -> TripRecord {
    TripRecord {
        trip_distance_km: distance,
        time_of_day: "Morning".to_string(),
        day_of_week: "Monday".to_string(),
        passenger_count: 1,
        traffic_conditions: "Low".to_string(),
        weather: "Clear".to_string(),
        base_fare: 3.0,
        per_km_rate: 0.8,
        per_minute_rate: 0.2,
        trip_duration_minutes: 12.0,
    }
}

#[test]
fn well_formed_batch_reads_every_row_in_order() {
    let csv = format!(
        "{VALID_HEADER}\n\
         5,Morning,Monday,1,Low,Clear,3,0.8,0.2,12\n\
         8.25,Evening,Friday,3,High,Rain,3.5,0.9,0.25,31\n"
    );

    let records = read_records(csv.as_bytes()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].trip_distance_km, 5.0);
    assert_eq!(records[1].trip_distance_km, 8.25);
    assert_eq!(records[1].weather, "Rain");
    assert_eq!(records[1].passenger_count, 3);
}

#[test]
fn renamed_column_fails_fast_before_any_prediction() {
    let csv = "Trip_Distance_km,TimeOfDay,Day_of_Week,Passenger_Count,Traffic_Conditions,\
               Weather,Base_Fare,Per_Km_Rate,Per_Minute_Rate,Trip_Duration_Minutes\n\
               5,Morning,Monday,1,Low,Clear,3,0.8,0.2,12\n";

    let err = read_records(csv.as_bytes()).unwrap_err();
    match err {
        FarecastError::Batch(BatchError::HeaderMismatch {
            position,
            expected,
            found,
        }) => {
            assert_eq!(position, 1);
            assert_eq!(expected, "Time_of_Day");
            assert_eq!(found, "TimeOfDay");
        }
        other => panic!("expected header mismatch, got {other}"),
    }
}

#[test]
fn missing_column_fails_fast() {
    // Weather dropped entirely.
    let csv = "Trip_Distance_km,Time_of_Day,Day_of_Week,Passenger_Count,Traffic_Conditions,\
               Base_Fare,Per_Km_Rate,Per_Minute_Rate,Trip_Duration_Minutes\n";

    let err = read_records(csv.as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        FarecastError::Batch(BatchError::HeaderMismatch { position: 5, .. })
    ));
}

#[test]
fn extra_trailing_column_is_rejected() {
    let csv = format!("{VALID_HEADER},Tip_Amount\n");
    let err = read_records(csv.as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        FarecastError::Batch(BatchError::HeaderMismatch { position: 10, .. })
    ));
}

#[test]
fn malformed_row_aborts_with_no_partial_result() {
    let csv = format!(
        "{VALID_HEADER}\n\
         5,Morning,Monday,1,Low,Clear,3,0.8,0.2,12\n\
         not_a_number,Morning,Monday,1,Low,Clear,3,0.8,0.2,12\n"
    );

    let err = read_records(csv.as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        FarecastError::Batch(BatchError::ReadFailed { .. })
    ));
}

#[test]
fn augmented_output_appends_exactly_one_column() {
    let records = vec![record(5.0), record(7.5)];
    let predictions = vec![12.25, 18.5];

    let bytes = write_augmented(&records, &predictions).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let mut lines = text.lines();

    let header = lines.next().unwrap();
    let mut expected: Vec<&str> = EXPECTED_COLUMNS.to_vec();
    expected.push(PREDICTION_COLUMN);
    assert_eq!(header.split(',').collect::<Vec<_>>(), expected);

    let first: Vec<&str> = lines.next().unwrap().split(',').collect();
    assert_eq!(first.len(), 11);
    assert_eq!(first[0], "5");
    assert_eq!(first[10], "12.25");
}

#[test]
fn prediction_count_must_match_row_count() {
    let err = write_augmented(&[record(1.0)], &[1.0, 2.0]).unwrap_err();
    assert!(matches!(
        err,
        FarecastError::Batch(BatchError::RowCountMismatch {
            records: 1,
            predictions: 2
        })
    ));
}

#[test]
fn download_uri_is_a_base64_csv_payload() {
    let uri = to_download_uri(b"a,b\n1,2\n");
    assert!(uri.starts_with("data:text/csv;base64,"));
    assert!(!uri.contains('\n'));
}
