use serde::Serialize;

/// A clean lap (no lap 1, no pit lap) with the fuel-load correction applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FuelCorrectedLap {
    pub driver: String,
    pub lap_number: u32,
    pub stint: Option<u32>,
    pub compound: Option<String>,
    pub lap_time_in_seconds: f64,
    pub fuel_corrected_lap_time: f64,
}

/// Aggregate of the fuel-corrected laps of one stint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StintSummary {
    pub stint: Option<u32>,
    pub compound: Option<String>,
    pub laps: usize,
    pub mean_corrected: f64,
    pub best_corrected: f64,
}
