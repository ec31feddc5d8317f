//! Ideal lap: sum of a driver's best sectors, compared with the best lap actually driven.

use crate::errors::{AppError, AppResult};
use crate::models::ideal_lap::IdealLap;
use crate::models::lap::LapRecord;
use crate::utils::time::round_to;

/// Decimals kept on the improvement margin.
const MARGIN_DECIMALS: u32 = 3;

/// Minimum of one column over a driver's laps, skipping missing values.
fn best_of<F>(driver: &str, laps: &[&LapRecord], column: &str, field: F) -> AppResult<f64>
where
    F: Fn(&LapRecord) -> Option<f64>,
{
    laps.iter()
        .filter_map(|l| field(*l))
        .min_by(f64::total_cmp)
        .ok_or_else(|| AppError::IncompleteLapData {
            driver: driver.to_string(),
            column: column.to_string(),
        })
}

/// First non-missing value of an identity column; warns if later laps disagree.
fn first_known<F>(driver: &str, laps: &[&LapRecord], column: &str, field: F) -> Option<String>
where
    F: Fn(&LapRecord) -> Option<&String>,
{
    let mut values = laps.iter().filter_map(|l| field(*l));
    let first = values.next()?.clone();

    if let Some(other) = values.find(|v| **v != first) {
        log::warn!("{driver}: {column} is not constant ({first} vs {other}), using {first}");
    }

    Some(first)
}

/// Ideal lap for one driver.
///
/// Each sector is minimised independently, so the three bests may come from
/// different laps. Fails with `NoDataForDriver` when the driver has no laps.
pub fn ideal_lap(driver: &str, laps: &[LapRecord]) -> AppResult<IdealLap> {
    let own: Vec<&LapRecord> = laps.iter().filter(|l| l.driver == driver).collect();

    if own.is_empty() {
        return Err(AppError::NoDataForDriver(driver.to_string()));
    }

    let best_s1 = best_of(driver, &own, "S1InSeconds", |l| l.s1_s)?;
    let best_s2 = best_of(driver, &own, "S2InSeconds", |l| l.s2_s)?;
    let best_s3 = best_of(driver, &own, "S3InSeconds", |l| l.s3_s)?;
    let best_lap = best_of(driver, &own, "LapTimeInSeconds", |l| l.lap_time_s)?;

    let ideal = best_s1 + best_s2 + best_s3;

    Ok(IdealLap {
        driver: driver.to_string(),
        driver_number: first_known(driver, &own, "DriverNumber", |l| l.driver_number.as_ref()),
        team: first_known(driver, &own, "Team", |l| l.team.as_ref()),
        best_s1,
        best_s2,
        best_s3,
        best_lap,
        ideal_lap: ideal,
        improvement_margin: round_to(ideal - best_lap, MARGIN_DECIMALS),
    })
}

/// Drivers in order of first appearance.
pub fn drivers_in_order(laps: &[LapRecord]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for lap in laps {
        if !seen.contains(&lap.driver.as_str()) {
            seen.push(&lap.driver);
        }
    }
    seen
}

/// Ideal lap for every driver in the dataset, in order of first appearance.
///
/// Drivers without a single value in one of the timing columns (e.g. out on
/// lap 1) are skipped with a warning instead of failing the whole table.
pub fn ideal_lap_all(laps: &[LapRecord]) -> AppResult<Vec<IdealLap>> {
    let mut summary = Vec::new();

    for driver in drivers_in_order(laps) {
        match ideal_lap(driver, laps) {
            Ok(row) => summary.push(row),
            Err(AppError::IncompleteLapData { driver, column }) => {
                log::warn!("skipping {driver}: no values in {column}");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(summary)
}
