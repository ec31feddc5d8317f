use serde::Serialize;

/// Best sectors of a driver, their sum and how it compares to the best real lap.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IdealLap {
    pub driver: String,
    pub driver_number: Option<String>,
    pub team: Option<String>,
    #[serde(rename = "BestS1")]
    pub best_s1: f64,
    #[serde(rename = "BestS2")]
    pub best_s2: f64,
    #[serde(rename = "BestS3")]
    pub best_s3: f64,
    pub best_lap: f64,
    pub ideal_lap: f64,
    /// `round(ideal_lap - best_lap, 3)`, never positive for consistent data.
    pub improvement_margin: f64,
}
