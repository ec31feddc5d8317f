use rlapdelta::core::calculator::ideal::{ideal_lap, ideal_lap_all};
use rlapdelta::errors::AppError;
use rlapdelta::models::lap::LapRecord;

fn ver_laps() -> Vec<LapRecord> {
    vec![
        LapRecord::new("VER", 1)
            .with_identity("1", "Red Bull Racing")
            .with_sectors(21.0, 25.1, 22.0, 68.3),
        LapRecord::new("VER", 2)
            .with_identity("1", "Red Bull Racing")
            .with_sectors(20.8, 25.3, 21.9, 68.1),
    ]
}

#[test]
fn best_sectors_come_from_different_laps() {
    let row = ideal_lap("VER", &ver_laps()).unwrap();

    assert_eq!(row.best_s1, 20.8);
    assert_eq!(row.best_s2, 25.1);
    assert_eq!(row.best_s3, 21.9);
    assert_eq!(row.best_lap, 68.1);
    assert!((row.ideal_lap - 67.8).abs() < 1e-9);
    assert_eq!(row.improvement_margin, -0.3);
    assert_eq!(row.driver_number.as_deref(), Some("1"));
    assert_eq!(row.team.as_deref(), Some("Red Bull Racing"));
}

#[test]
fn ideal_lap_is_exact_sum_of_best_sectors() {
    let mut laps = ver_laps();
    laps.push(LapRecord::new("NOR", 1).with_sectors(20.9, 25.0, 22.1, 68.0));
    laps.push(LapRecord::new("NOR", 2).with_sectors(21.1, 24.95, 22.05, 68.1));

    for row in ideal_lap_all(&laps).unwrap() {
        assert_eq!(row.ideal_lap, row.best_s1 + row.best_s2 + row.best_s3);
        assert!(row.improvement_margin <= 0.0, "{}", row.driver);
    }
}

#[test]
fn unknown_driver_is_an_explicit_error() {
    let err = ideal_lap("HAM", &ver_laps()).unwrap_err();

    assert!(matches!(err, AppError::NoDataForDriver(ref d) if d == "HAM"));
    assert!(err.to_string().contains("No data for driver HAM"));
}

#[test]
fn missing_values_are_skipped() {
    let mut laps = ver_laps();
    let mut out_lap = LapRecord::new("VER", 3);
    out_lap.s1_s = Some(19.0);
    laps.push(out_lap);

    let row = ideal_lap("VER", &laps).unwrap();

    assert_eq!(row.best_s1, 19.0);
    assert_eq!(row.best_lap, 68.1);
}

#[test]
fn column_without_values_is_reported() {
    let laps = vec![LapRecord::new("HAM", 1)];

    let err = ideal_lap("HAM", &laps).unwrap_err();

    assert!(matches!(err, AppError::IncompleteLapData { ref column, .. } if column == "S1InSeconds"));
}

#[test]
fn identity_is_taken_from_first_known_value() {
    let mut laps = ver_laps();
    laps[0].driver_number = None;
    laps[0].team = None;

    let row = ideal_lap("VER", &laps).unwrap();

    assert_eq!(row.driver_number.as_deref(), Some("1"));
    assert_eq!(row.team.as_deref(), Some("Red Bull Racing"));
}

#[test]
fn summary_follows_first_appearance_and_skips_incomplete_drivers() {
    let laps = vec![
        LapRecord::new("NOR", 1).with_sectors(20.9, 25.0, 22.1, 68.0),
        LapRecord::new("HAM", 1),
        LapRecord::new("VER", 1).with_sectors(20.8, 25.1, 21.9, 67.8),
        LapRecord::new("NOR", 2).with_sectors(21.0, 25.0, 22.0, 68.0),
    ];

    let drivers: Vec<String> = ideal_lap_all(&laps)
        .unwrap()
        .into_iter()
        .map(|r| r.driver)
        .collect();

    assert_eq!(drivers, vec!["NOR", "VER"]);
}

#[test]
fn empty_dataset_gives_empty_summary() {
    assert!(ideal_lap_all(&[]).unwrap().is_empty());
}
