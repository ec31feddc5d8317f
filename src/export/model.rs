// src/export/model.rs

use crate::models::{
    gap::LapGap,
    ideal_lap::IdealLap,
    pace::{FuelCorrectedLap, StintSummary},
    ranking::{PoleDelta, TopSpeed},
};
use crate::utils::time::format_session_time;
use serde::Serialize;

/// A result row that can be written by every exporter.
///
/// `headers()` must list the columns in the order serde serializes them, so
/// that CSV files of empty tables still carry the right header.
pub trait ExportRow: Serialize {
    fn headers() -> Vec<&'static str>;
    fn to_row(&self) -> Vec<String>;
}

fn opt<T: ToString>(v: &Option<T>) -> String {
    v.as_ref().map(ToString::to_string).unwrap_or_default()
}

/// Flat view of a `LapGap` (the gap table as written to disk).
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct GapExport {
    pub driver: String,
    pub driver_number: Option<String>,
    pub team: Option<String>,
    pub lap_number: u32,
    pub position: Option<u32>,
    pub lap_start_time: Option<String>,
    pub gap_in_seconds: Option<f64>,
}

impl From<&LapGap> for GapExport {
    fn from(g: &LapGap) -> Self {
        Self {
            driver: g.lap.driver.clone(),
            driver_number: g.lap.driver_number.clone(),
            team: g.lap.team.clone(),
            lap_number: g.lap.lap_number,
            position: g.lap.position,
            lap_start_time: g.lap.lap_start_time.map(format_session_time),
            gap_in_seconds: g.gap_in_seconds,
        }
    }
}

impl ExportRow for GapExport {
    fn headers() -> Vec<&'static str> {
        vec![
            "Driver",
            "DriverNumber",
            "Team",
            "LapNumber",
            "Position",
            "LapStartTime",
            "GapInSeconds",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.driver.clone(),
            opt(&self.driver_number),
            opt(&self.team),
            self.lap_number.to_string(),
            opt(&self.position),
            opt(&self.lap_start_time),
            opt(&self.gap_in_seconds),
        ]
    }
}

impl ExportRow for IdealLap {
    fn headers() -> Vec<&'static str> {
        vec![
            "Driver",
            "DriverNumber",
            "Team",
            "BestS1",
            "BestS2",
            "BestS3",
            "BestLap",
            "IdealLap",
            "ImprovementMargin",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.driver.clone(),
            opt(&self.driver_number),
            opt(&self.team),
            self.best_s1.to_string(),
            self.best_s2.to_string(),
            self.best_s3.to_string(),
            self.best_lap.to_string(),
            self.ideal_lap.to_string(),
            self.improvement_margin.to_string(),
        ]
    }
}

impl ExportRow for FuelCorrectedLap {
    fn headers() -> Vec<&'static str> {
        vec![
            "Driver",
            "LapNumber",
            "Stint",
            "Compound",
            "LapTimeInSeconds",
            "FuelCorrectedLapTime",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.driver.clone(),
            self.lap_number.to_string(),
            opt(&self.stint),
            opt(&self.compound),
            self.lap_time_in_seconds.to_string(),
            self.fuel_corrected_lap_time.to_string(),
        ]
    }
}

impl ExportRow for StintSummary {
    fn headers() -> Vec<&'static str> {
        vec!["Stint", "Compound", "Laps", "MeanCorrected", "BestCorrected"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            opt(&self.stint),
            opt(&self.compound),
            self.laps.to_string(),
            self.mean_corrected.to_string(),
            self.best_corrected.to_string(),
        ]
    }
}

impl ExportRow for PoleDelta {
    fn headers() -> Vec<&'static str> {
        vec![
            "Driver",
            "Team",
            "LapNumber",
            "LapTimeInSeconds",
            "LapTimeDeltaInSeconds",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.driver.clone(),
            opt(&self.team),
            self.lap_number.to_string(),
            self.lap_time_in_seconds.to_string(),
            self.lap_time_delta_in_seconds.to_string(),
        ]
    }
}

impl ExportRow for TopSpeed {
    fn headers() -> Vec<&'static str> {
        vec!["Driver", "Team", "SpeedST"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![self.driver.clone(), opt(&self.team), self.speed_st.to_string()]
    }
}
