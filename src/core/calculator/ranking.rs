//! Session rankings: delta to the fastest lap and speed-trap top speeds.

use crate::models::lap::LapRecord;
use crate::models::ranking::{PoleDelta, TopSpeed};

use super::ideal::drivers_in_order;

/// Laps run under green flag (`TrackStatus == "1"`).
pub fn green_flag_laps(laps: &[LapRecord]) -> Vec<&LapRecord> {
    laps.iter()
        .filter(|l| l.track_status.as_deref() == Some("1"))
        .collect()
}

/// Fastest lap of a driver, if any lap has a time.
fn fastest_lap<'a>(driver: &str, laps: &'a [LapRecord]) -> Option<&'a LapRecord> {
    laps.iter()
        .filter(|l| l.driver == driver && l.lap_time_s.is_some())
        .min_by(|a, b| {
            a.lap_time_s
                .unwrap_or(f64::INFINITY)
                .total_cmp(&b.lap_time_s.unwrap_or(f64::INFINITY))
        })
}

/// Each driver's fastest lap and its gap to the overall fastest, closest first.
pub fn delta_from_pole(laps: &[LapRecord]) -> Vec<PoleDelta> {
    let fastest: Vec<(&LapRecord, f64)> = drivers_in_order(laps)
        .into_iter()
        .filter_map(|d| fastest_lap(d, laps))
        .filter_map(|l| l.lap_time_s.map(|t| (l, t)))
        .collect();

    let Some(pole) = fastest.iter().map(|(_, t)| *t).min_by(f64::total_cmp) else {
        return Vec::new();
    };

    let mut deltas: Vec<PoleDelta> = fastest
        .into_iter()
        .map(|(lap, time)| PoleDelta {
            driver: lap.driver.clone(),
            team: lap.team.clone(),
            lap_number: lap.lap_number,
            lap_time_in_seconds: time,
            lap_time_delta_in_seconds: time - pole,
        })
        .collect();

    deltas.sort_by(|a, b| {
        a.lap_time_delta_in_seconds
            .total_cmp(&b.lap_time_delta_in_seconds)
    });
    deltas
}

/// Highest speed-trap reading per driver, fastest first.
pub fn top_speeds(laps: &[LapRecord]) -> Vec<TopSpeed> {
    let mut speeds: Vec<TopSpeed> = drivers_in_order(laps)
        .into_iter()
        .filter_map(|driver| {
            let own = laps.iter().filter(|l| l.driver == driver);
            let max = own
                .clone()
                .filter_map(|l| l.speed_st)
                .max_by(f64::total_cmp)?;
            Some(TopSpeed {
                driver: driver.to_string(),
                team: own.filter_map(|l| l.team.clone()).next(),
                speed_st: max,
            })
        })
        .collect();

    speeds.sort_by(|a, b| b.speed_st.total_cmp(&a.speed_st));
    speeds
}
