use chrono::TimeDelta;

/// One row of a lap dataset: one car, one lap.
///
/// Field names follow the FastF1 `Laps` columns they are read from
/// (`Driver`, `LapNumber`, `Position`, `LapStartTime`, ...). Durations that
/// are only ever summed or compared are kept as seconds (`*_s`), timestamps
/// that get subtracted from each other stay as `TimeDelta`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LapRecord {
    pub driver: String,                  // ⇔ Driver (three-letter code)
    pub driver_number: Option<String>,   // ⇔ DriverNumber
    pub team: Option<String>,            // ⇔ Team
    pub lap_number: u32,                 // ⇔ LapNumber (1 = race start)
    pub position: Option<u32>,           // ⇔ Position (None for retired cars)
    pub lap_start_time: Option<TimeDelta>, // ⇔ LapStartTime (session time)
    pub lap_time_s: Option<f64>,         // ⇔ LapTimeInSeconds / LapTime
    pub s1_s: Option<f64>,               // ⇔ S1InSeconds / Sector1Time
    pub s2_s: Option<f64>,               // ⇔ S2InSeconds / Sector2Time
    pub s3_s: Option<f64>,               // ⇔ S3InSeconds / Sector3Time
    pub pit_in_time: Option<TimeDelta>,  // ⇔ PitInTime
    pub pit_out_time: Option<TimeDelta>, // ⇔ PitOutTime
    pub stint: Option<u32>,              // ⇔ Stint
    pub compound: Option<String>,        // ⇔ Compound (SOFT, MEDIUM, HARD, ...)
    pub track_status: Option<String>,    // ⇔ TrackStatus ("1" = green)
    pub speed_st: Option<f64>,           // ⇔ SpeedST (km/h at the speed trap)
}

impl LapRecord {
    /// Minimal record, everything optional left empty.
    pub fn new(driver: &str, lap_number: u32) -> Self {
        Self {
            driver: driver.to_string(),
            lap_number,
            ..Default::default()
        }
    }

    // Builders for records that do not come from a CSV (hand-made fixtures,
    // programmatic callers of the calculators).

    pub fn with_position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_start(mut self, seconds: f64) -> Self {
        self.lap_start_time = Some(crate::utils::time::seconds_to_delta(seconds));
        self
    }

    pub fn with_sectors(mut self, s1: f64, s2: f64, s3: f64, lap_time: f64) -> Self {
        self.s1_s = Some(s1);
        self.s2_s = Some(s2);
        self.s3_s = Some(s3);
        self.lap_time_s = Some(lap_time);
        self
    }

    pub fn with_identity(mut self, driver_number: &str, team: &str) -> Self {
        self.driver_number = Some(driver_number.to_string());
        self.team = Some(team.to_string());
        self
    }

    /// Lap start time as fractional seconds since session start.
    pub fn lap_start_seconds(&self) -> Option<f64> {
        self.lap_start_time.map(crate::utils::time::delta_to_seconds)
    }
}
