mod common;
use common::RACE_CSV;
use rlapdelta::core::calculator::pace::{
    DEFAULT_FUEL_COEFF, fuel_corrected_laps, is_pit_lap, stint_summaries,
};
use rlapdelta::core::calculator::ranking::{delta_from_pole, green_flag_laps, top_speeds};
use rlapdelta::data::read_laps;
use rlapdelta::errors::AppError;
use rlapdelta::models::lap::LapRecord;

fn race() -> Vec<LapRecord> {
    read_laps(RACE_CSV.as_bytes()).unwrap().laps
}

#[test]
fn pit_laps_are_flagged() {
    let laps = race();

    let pit: Vec<(String, u32)> = laps
        .iter()
        .filter(|l| is_pit_lap(l))
        .map(|l| (l.driver.clone(), l.lap_number))
        .collect();

    assert_eq!(pit, vec![("NOR".to_string(), 2), ("NOR".to_string(), 3)]);
}

#[test]
fn fuel_correction_adds_weight_per_lap() {
    let laps = fuel_corrected_laps("VER", &race(), DEFAULT_FUEL_COEFF).unwrap();

    let numbers: Vec<u32> = laps.iter().map(|l| l.lap_number).collect();
    assert_eq!(numbers, vec![2, 3]);
    assert!((laps[0].fuel_corrected_lap_time - 94.06).abs() < 1e-9);
    assert!((laps[1].fuel_corrected_lap_time - 93.62).abs() < 1e-9);
}

#[test]
fn lap_one_and_pit_laps_are_excluded() {
    let laps = fuel_corrected_laps("NOR", &race(), 0.1).unwrap();
    assert!(laps.is_empty());
}

#[test]
fn fuel_correction_needs_driver_data() {
    let err = fuel_corrected_laps("ALO", &race(), 0.06).unwrap_err();
    assert!(matches!(err, AppError::NoDataForDriver(_)));
}

#[test]
fn stints_are_summarised_in_order() {
    let laps = vec![
        LapRecord {
            stint: Some(2),
            compound: Some("HARD".into()),
            lap_time_s: Some(95.0),
            ..LapRecord::new("LEC", 20)
        },
        LapRecord {
            stint: Some(1),
            compound: Some("MEDIUM".into()),
            lap_time_s: Some(96.0),
            ..LapRecord::new("LEC", 5)
        },
        LapRecord {
            stint: Some(1),
            compound: Some("MEDIUM".into()),
            lap_time_s: Some(95.0),
            ..LapRecord::new("LEC", 6)
        },
    ];

    let corrected = fuel_corrected_laps("LEC", &laps, 0.0).unwrap();
    let stints = stint_summaries(&corrected);

    assert_eq!(stints.len(), 2);
    assert_eq!(stints[0].stint, Some(1));
    assert_eq!(stints[0].laps, 2);
    assert_eq!(stints[0].mean_corrected, 95.5);
    assert_eq!(stints[0].best_corrected, 95.0);
    assert_eq!(stints[1].compound.as_deref(), Some("HARD"));
}

#[test]
fn pole_delta_is_zero_for_fastest_driver() {
    let deltas = delta_from_pole(&race());

    let drivers: Vec<&str> = deltas.iter().map(|d| d.driver.as_str()).collect();
    assert_eq!(drivers, vec!["VER", "NOR", "HAM"]);
    assert_eq!(deltas[0].lap_time_delta_in_seconds, 0.0);
    assert_eq!(deltas[0].lap_number, 3);
    assert!((deltas[1].lap_time_delta_in_seconds - 0.1).abs() < 1e-9);
    assert!(delta_from_pole(&[]).is_empty());
}

#[test]
fn top_speeds_fastest_first() {
    let speeds = top_speeds(&race());

    let pairs: Vec<(&str, f64)> = speeds.iter().map(|s| (s.driver.as_str(), s.speed_st)).collect();
    assert_eq!(pairs, vec![("NOR", 324.1), ("VER", 322.0), ("HAM", 318.0)]);
}

#[test]
fn green_flag_filter_drops_yellow_laps() {
    let laps = race();
    let green = green_flag_laps(&laps);

    assert_eq!(green.len(), 7);
    assert!(green.iter().all(|l| l.track_status.as_deref() == Some("1")));
}
