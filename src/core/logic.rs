use crate::core::calculator::{gaps, ideal, pace, ranking};
use crate::data::LapDataset;
use crate::errors::AppResult;
use crate::models::{
    gap::LapGap,
    ideal_lap::IdealLap,
    pace::{FuelCorrectedLap, StintSummary},
    ranking::{PoleDelta, TopSpeed},
};

/// Column sets each analysis needs; `(a, b)` means either name will do.
const LAP_TIME: [&str; 2] = ["LapTimeInSeconds", "LapTime"];
const SECTORS: [[&str; 2]; 3] = [
    ["S1InSeconds", "Sector1Time"],
    ["S2InSeconds", "Sector2Time"],
    ["S3InSeconds", "Sector3Time"],
];

/// Entry points used by the CLI: check the columns, then run the calculator.
pub struct Core;

impl Core {
    pub fn gaps(dataset: &LapDataset) -> AppResult<Vec<LapGap>> {
        dataset.require(&["Position", "LapStartTime"])?;
        Ok(gaps::compute_gaps(&dataset.laps))
    }

    /// One driver when `driver` is set, every driver otherwise.
    pub fn ideal_laps(dataset: &LapDataset, driver: Option<&str>) -> AppResult<Vec<IdealLap>> {
        for columns in &SECTORS {
            dataset.require_any(columns)?;
        }
        dataset.require_any(&LAP_TIME)?;

        match driver {
            Some(d) => Ok(vec![ideal::ideal_lap(d, &dataset.laps)?]),
            None => ideal::ideal_lap_all(&dataset.laps),
        }
    }

    pub fn stints(
        dataset: &LapDataset,
        driver: &str,
        fuel_coeff: f64,
        green_only: bool,
    ) -> AppResult<(Vec<FuelCorrectedLap>, Vec<StintSummary>)> {
        dataset.require_any(&LAP_TIME)?;

        let laps = if green_only {
            dataset.require(&["TrackStatus"])?;
            let green: Vec<_> = ranking::green_flag_laps(&dataset.laps)
                .into_iter()
                .cloned()
                .collect();
            pace::fuel_corrected_laps(driver, &green, fuel_coeff)?
        } else {
            pace::fuel_corrected_laps(driver, &dataset.laps, fuel_coeff)?
        };
        let stints = pace::stint_summaries(&laps);
        Ok((laps, stints))
    }

    pub fn pole_deltas(dataset: &LapDataset) -> AppResult<Vec<PoleDelta>> {
        dataset.require_any(&LAP_TIME)?;
        Ok(ranking::delta_from_pole(&dataset.laps))
    }

    pub fn top_speeds(dataset: &LapDataset) -> AppResult<Vec<TopSpeed>> {
        dataset.require(&["SpeedST"])?;
        Ok(ranking::top_speeds(&dataset.laps))
    }
}
