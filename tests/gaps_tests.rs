use rlapdelta::core::calculator::gaps::compute_gaps;
use rlapdelta::models::lap::LapRecord;

fn lap(driver: &str, lap_number: u32, position: u32, start: f64) -> LapRecord {
    LapRecord::new(driver, lap_number)
        .with_position(position)
        .with_start(start)
}

fn gap_of(rows: &[rlapdelta::models::gap::LapGap], driver: &str, lap_number: u32) -> Option<f64> {
    rows.iter()
        .find(|g| g.lap.driver == driver && g.lap.lap_number == lap_number)
        .expect("row present")
        .gap_in_seconds
}

#[test]
fn two_drivers_two_laps() {
    let laps = vec![
        lap("A", 1, 1, 0.0),
        lap("A", 2, 1, 90.5),
        lap("B", 1, 2, 1.2),
        lap("B", 2, 2, 92.0),
    ];

    let gaps = compute_gaps(&laps);

    assert_eq!(gap_of(&gaps, "A", 1), Some(0.0));
    assert_eq!(gap_of(&gaps, "B", 1), Some(0.0));
    assert_eq!(gap_of(&gaps, "A", 2), Some(0.0));
    assert_eq!(gap_of(&gaps, "B", 2), Some(1.5));
}

#[test]
fn output_is_sorted_by_lap_then_position() {
    let laps = vec![
        lap("C", 2, 3, 95.0),
        lap("A", 1, 1, 0.0),
        lap("B", 2, 1, 91.0),
        lap("C", 1, 2, 0.4),
        lap("A", 2, 2, 92.0),
    ];

    let order: Vec<(u32, Option<u32>)> = compute_gaps(&laps)
        .iter()
        .map(|g| (g.lap.lap_number, g.lap.position))
        .collect();

    assert_eq!(
        order,
        vec![
            (1, Some(1)),
            (1, Some(2)),
            (2, Some(1)),
            (2, Some(2)),
            (2, Some(3)),
        ]
    );
}

#[test]
fn lap_one_is_always_zero_even_far_behind() {
    let laps = vec![lap("A", 1, 1, 0.0), lap("B", 1, 2, 3.0), lap("C", 1, 3, 9.0)];

    for g in compute_gaps(&laps) {
        assert_eq!(g.gap_in_seconds, Some(0.0), "{}", g.lap.driver);
    }
}

#[test]
fn gap_is_to_the_car_immediately_ahead() {
    let laps = vec![
        lap("A", 5, 1, 400.0),
        lap("B", 5, 2, 400.8),
        lap("C", 5, 3, 402.0),
    ];

    let gaps = compute_gaps(&laps);
    let c = gap_of(&gaps, "C", 5).unwrap();

    assert!((c - 1.2).abs() < 1e-9);
    assert!(gaps.iter().all(|g| g.gap_in_seconds.unwrap() >= 0.0));
}

#[test]
fn missing_position_gives_missing_gap_without_failing() {
    let laps = vec![
        lap("A", 3, 1, 200.0),
        LapRecord::new("R", 3).with_start(201.0),
        lap("B", 3, 2, 200.5),
    ];

    let gaps = compute_gaps(&laps);

    assert_eq!(gaps.len(), 3);
    // unknown positions sort last within the lap
    assert_eq!(gaps[2].lap.driver, "R");
    assert_eq!(gaps[2].gap_in_seconds, None);
    assert_eq!(gap_of(&gaps, "B", 3), Some(0.5));
}

#[test]
fn hole_in_running_order_uses_previous_row() {
    // P2 retired: P3 is measured against P1
    let laps = vec![lap("A", 4, 1, 300.0), lap("C", 4, 3, 302.5)];

    let gaps = compute_gaps(&laps);

    assert_eq!(gap_of(&gaps, "C", 4), Some(2.5));
}

#[test]
fn first_row_without_car_ahead_is_missing() {
    let laps = vec![lap("B", 2, 2, 92.0)];

    let gaps = compute_gaps(&laps);

    assert_eq!(gaps[0].gap_in_seconds, None);
}

#[test]
fn missing_start_time_gives_missing_gap() {
    let laps = vec![
        lap("A", 2, 1, 90.0),
        LapRecord::new("B", 2).with_position(2),
    ];

    let gaps = compute_gaps(&laps);

    assert_eq!(gap_of(&gaps, "B", 2), None);
}

#[test]
fn empty_dataset_gives_empty_result() {
    assert!(compute_gaps(&[]).is_empty());
}

#[test]
fn input_is_left_untouched() {
    let laps = vec![lap("B", 2, 2, 92.0), lap("A", 2, 1, 90.5)];
    let before = laps.clone();

    let _ = compute_gaps(&laps);

    assert_eq!(laps, before);
}
