use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PoleDelta {
    pub driver: String,
    pub team: Option<String>,
    pub lap_number: u32,
    pub lap_time_in_seconds: f64,
    pub lap_time_delta_in_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TopSpeed {
    pub driver: String,
    pub team: Option<String>,
    #[serde(rename = "SpeedST")]
    pub speed_st: f64,
}
