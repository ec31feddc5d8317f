//! Race pace helpers: pit-lap detection and fuel-corrected lap times per stint.

use crate::errors::{AppError, AppResult};
use crate::models::lap::LapRecord;
use crate::models::pace::{FuelCorrectedLap, StintSummary};
use chrono::TimeDelta;

/// Default fuel effect: seconds gained per lap as the tank empties.
pub const DEFAULT_FUEL_COEFF: f64 = 0.06;

/// A lap is a pit lap when the car entered or left the pit lane during it.
pub fn is_pit_lap(lap: &LapRecord) -> bool {
    let positive = |t: Option<TimeDelta>| t.is_some_and(|d| d > TimeDelta::zero());
    positive(lap.pit_in_time) || positive(lap.pit_out_time)
}

/// Clean laps of `driver` with the fuel-load correction applied.
///
/// Lap 1, pit laps and laps without a time are dropped. Each remaining lap
/// gets `lap_time + (lap_number - 1) * fuel_coeff`, so that laps run on a
/// heavy tank compare fairly with laps run at the end of the stint.
pub fn fuel_corrected_laps(
    driver: &str,
    laps: &[LapRecord],
    fuel_coeff: f64,
) -> AppResult<Vec<FuelCorrectedLap>> {
    let own: Vec<&LapRecord> = laps.iter().filter(|l| l.driver == driver).collect();

    if own.is_empty() {
        return Err(AppError::NoDataForDriver(driver.to_string()));
    }

    let corrected = own
        .into_iter()
        .filter(|l| l.lap_number != 1 && !is_pit_lap(l))
        .filter_map(|l| {
            let lap_time = l.lap_time_s?;
            Some(FuelCorrectedLap {
                driver: l.driver.clone(),
                lap_number: l.lap_number,
                stint: l.stint,
                compound: l.compound.clone(),
                lap_time_in_seconds: lap_time,
                fuel_corrected_lap_time: lap_time + f64::from(l.lap_number.saturating_sub(1)) * fuel_coeff,
            })
        })
        .collect();

    Ok(corrected)
}

/// Group corrected laps by stint (ascending), with lap count, mean and best.
pub fn stint_summaries(laps: &[FuelCorrectedLap]) -> Vec<StintSummary> {
    let mut stints: Vec<Option<u32>> = laps.iter().map(|l| l.stint).collect();
    stints.sort();
    stints.dedup();

    stints
        .into_iter()
        .map(|stint| {
            let in_stint: Vec<&FuelCorrectedLap> =
                laps.iter().filter(|l| l.stint == stint).collect();
            let total: f64 = in_stint.iter().map(|l| l.fuel_corrected_lap_time).sum();
            let best = in_stint
                .iter()
                .map(|l| l.fuel_corrected_lap_time)
                .fold(f64::INFINITY, f64::min);

            StintSummary {
                stint,
                compound: in_stint.iter().find_map(|l| l.compound.clone()),
                laps: in_stint.len(),
                mean_corrected: total / in_stint.len() as f64,
                best_corrected: best,
            }
        })
        .collect()
}
