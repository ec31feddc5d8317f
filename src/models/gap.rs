use super::lap::LapRecord;

/// A lap record together with its gap to the car ahead at the start of the lap.
#[derive(Debug, Clone, PartialEq)]
pub struct LapGap {
    pub lap: LapRecord,
    /// `None` when the position is unknown or the gap cannot be computed.
    pub gap_in_seconds: Option<f64>,
}
