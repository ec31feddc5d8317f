mod common;
use common::{RACE_CSV, scratch, write_fixture};
use rlapdelta::data::{load_laps, read_laps};
use rlapdelta::errors::AppError;
use rlapdelta::utils::time::{delta_to_seconds, parse_duration};

#[test]
fn reads_fastf1_export() {
    let dataset = read_laps(RACE_CSV.as_bytes()).unwrap();

    assert_eq!(dataset.laps.len(), 8);
    assert!(dataset.has_column("LapStartTime"));

    let ver2 = &dataset.laps[1];
    assert_eq!(ver2.driver, "VER");
    assert_eq!(ver2.driver_number.as_deref(), Some("1"));
    assert_eq!(ver2.team.as_deref(), Some("Red Bull Racing"));
    assert_eq!(ver2.lap_number, 2);
    assert_eq!(ver2.position, Some(1));
    assert_eq!(ver2.lap_start_seconds(), Some(3516.0));
    assert_eq!(ver2.lap_time_s, Some(94.0));
    assert_eq!(ver2.s1_s, Some(29.8));
    assert_eq!(ver2.stint, Some(1));
    assert_eq!(ver2.compound.as_deref(), Some("MEDIUM"));
    assert_eq!(ver2.track_status.as_deref(), Some("1"));
    assert_eq!(ver2.speed_st, Some(322.0));
}

#[test]
fn missing_markers_become_none() {
    let dataset = read_laps(RACE_CSV.as_bytes()).unwrap();
    let ham2 = &dataset.laps[7];

    assert_eq!(ham2.position, None);
    assert_eq!(ham2.lap_time_s, None);
    assert_eq!(ham2.s1_s, None);
    assert_eq!(ham2.pit_in_time, None);
    assert_eq!(ham2.speed_st, None);
    assert!(ham2.lap_start_time.is_some());
}

#[test]
fn seconds_columns_win_over_durations() {
    let csv = "Driver,LapNumber,LapTime,LapTimeInSeconds,S1InSeconds\nVER,2,0 days 00:01:40.000000,94.25,29.8\n";

    let lap = &read_laps(csv.as_bytes()).unwrap().laps[0];

    assert_eq!(lap.lap_time_s, Some(94.25));
    assert_eq!(lap.s1_s, Some(29.8));
    assert_eq!(lap.s2_s, None);
}

#[test]
fn driver_and_lap_number_are_required() {
    let err = read_laps("Driver,Position\nVER,1\n".as_bytes()).unwrap_err();
    assert!(matches!(err, AppError::MissingColumn(ref c) if c == "LapNumber"));
}

#[test]
fn required_columns_are_checked_per_analysis() {
    let dataset = read_laps("Driver,LapNumber,LapTime\nVER,1,93.5\n".as_bytes()).unwrap();

    assert!(dataset.require_any(&["LapTimeInSeconds", "LapTime"]).is_ok());
    let err = dataset.require(&["Position", "LapStartTime"]).unwrap_err();
    assert_eq!(err.to_string(), "Missing required column: Position");
}

#[test]
fn bad_cells_are_reported_with_their_column() {
    let err = read_laps("Driver,LapNumber,LapStartTime\nVER,1,yesterday\n".as_bytes()).unwrap_err();
    assert!(matches!(err, AppError::InvalidDuration { ref column, .. } if column == "LapStartTime"));

    let err = read_laps(
        "Driver,LapNumber,LapStartTime\nVER,2,99999999999999999 days 00:00:00\n".as_bytes(),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidDuration { ref column, .. } if column == "LapStartTime"));

    let err = read_laps("Driver,LapNumber,PitInTime\nVER,2,1e300\n".as_bytes()).unwrap_err();
    assert!(matches!(err, AppError::InvalidDuration { ref column, .. } if column == "PitInTime"));

    let err = read_laps("Driver,LapNumber\nVER,1.5\n".as_bytes()).unwrap_err();
    assert!(matches!(err, AppError::InvalidNumber { ref column, .. } if column == "LapNumber"));
}

#[test]
fn position_zero_is_unclassified() {
    let dataset = read_laps("Driver,LapNumber,Position\nVER,2,1.0\nSAR,2,0.0\n".as_bytes()).unwrap();

    assert_eq!(dataset.laps[0].position, Some(1));
    assert_eq!(dataset.laps[1].position, None);
}

#[test]
fn header_only_file_is_an_empty_dataset() {
    let dataset = read_laps("Driver,LapNumber,Position,LapStartTime\n".as_bytes()).unwrap();
    assert!(dataset.is_empty());
    assert_eq!(dataset.columns.len(), 4);
}

#[test]
fn loads_from_disk() {
    let dir = scratch();
    let path = write_fixture(dir.path(), "race.csv", RACE_CSV);

    assert_eq!(load_laps(&path).unwrap().laps.len(), 8);
    assert!(matches!(
        load_laps(&dir.path().join("nope.csv")),
        Err(AppError::Io(_))
    ));
}

#[test]
fn duration_formats() {
    let secs = |s: &str| parse_duration(s).map(delta_to_seconds);

    assert_eq!(secs("0 days 00:01:30.500000"), Some(90.5));
    assert_eq!(secs("1 days 00:00:01"), Some(86_401.0));
    assert_eq!(secs("01:02:03.250"), Some(3723.25));
    assert_eq!(secs("1:23.456"), Some(83.456));
    assert_eq!(secs("83.456"), Some(83.456));
    assert_eq!(secs("-0 days 00:00:01.500000"), Some(-1.5));
    assert_eq!(secs(""), None);
    assert_eq!(secs("fast"), None);
    assert_eq!(secs("99999999999999999 days 00:00:00"), None);
    assert_eq!(secs("9999999999999:00:00"), None);
}
