//! CSV reader for lap datasets exported from a timing library (FastF1 column names).

use crate::errors::{AppError, AppResult};
use crate::models::lap::LapRecord;
use crate::utils::time::{delta_to_seconds, parse_duration};
use chrono::TimeDelta;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Cells that pandas writes for missing values.
const MISSING_MARKERS: [&str; 6] = ["nan", "NaN", "NaT", "None", "<NA>", "null"];

/// A loaded dataset plus the column names found in the header.
#[derive(Debug, Clone, Default)]
pub struct LapDataset {
    pub columns: Vec<String>,
    pub laps: Vec<LapRecord>,
}

impl LapDataset {
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Fails unless every column in `names` is present.
    pub fn require(&self, names: &[&str]) -> AppResult<()> {
        match names.iter().find(|n| !self.has_column(n)) {
            Some(missing) => Err(AppError::MissingColumn(missing.to_string())),
            None => Ok(()),
        }
    }

    /// Fails unless at least one column in `names` is present.
    pub fn require_any(&self, names: &[&str]) -> AppResult<()> {
        if names.iter().any(|n| self.has_column(n)) {
            Ok(())
        } else {
            Err(AppError::MissingColumn(names.join(" or ")))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.laps.is_empty()
    }
}

/// Raw CSV row, every cell still text. Unknown columns are ignored by serde.
#[derive(Debug, Deserialize)]
struct RawLap {
    #[serde(rename = "Driver")]
    driver: String,
    #[serde(rename = "DriverNumber", default)]
    driver_number: Option<String>,
    #[serde(rename = "Team", default)]
    team: Option<String>,
    #[serde(rename = "LapNumber")]
    lap_number: String,
    #[serde(rename = "Position", default)]
    position: Option<String>,
    #[serde(rename = "LapStartTime", default)]
    lap_start_time: Option<String>,
    #[serde(rename = "LapTime", default)]
    lap_time: Option<String>,
    #[serde(rename = "Sector1Time", default)]
    sector1_time: Option<String>,
    #[serde(rename = "Sector2Time", default)]
    sector2_time: Option<String>,
    #[serde(rename = "Sector3Time", default)]
    sector3_time: Option<String>,
    #[serde(rename = "LapTimeInSeconds", default)]
    lap_time_in_seconds: Option<String>,
    #[serde(rename = "S1InSeconds", default)]
    s1_in_seconds: Option<String>,
    #[serde(rename = "S2InSeconds", default)]
    s2_in_seconds: Option<String>,
    #[serde(rename = "S3InSeconds", default)]
    s3_in_seconds: Option<String>,
    #[serde(rename = "PitInTime", default)]
    pit_in_time: Option<String>,
    #[serde(rename = "PitOutTime", default)]
    pit_out_time: Option<String>,
    #[serde(rename = "Stint", default)]
    stint: Option<String>,
    #[serde(rename = "Compound", default)]
    compound: Option<String>,
    #[serde(rename = "TrackStatus", default)]
    track_status: Option<String>,
    #[serde(rename = "SpeedST", default)]
    speed_st: Option<String>,
}

/// Load a lap dataset from a CSV file on disk.
pub fn load_laps(path: &Path) -> AppResult<LapDataset> {
    let file = File::open(path)?;
    let dataset = read_laps(file)?;
    log::debug!(
        "loaded {} laps ({} columns) from {}",
        dataset.laps.len(),
        dataset.columns.len(),
        path.display()
    );
    Ok(dataset)
}

/// Read a lap dataset from any CSV source.
pub fn read_laps<R: Read>(source: R) -> AppResult<LapDataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source);

    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut dataset = LapDataset {
        columns,
        laps: Vec::new(),
    };
    dataset.require(&["Driver", "LapNumber"])?;

    for row in rdr.deserialize::<RawLap>() {
        dataset.laps.push(convert(row?)?);
    }

    Ok(dataset)
}

/// Text row → typed record. `*InSeconds` columns win over the duration columns.
fn convert(raw: RawLap) -> AppResult<LapRecord> {
    let lap_number = parse_count("LapNumber", Some(&raw.lap_number))?
        .ok_or_else(|| AppError::InvalidNumber {
            column: "LapNumber".into(),
            value: raw.lap_number.clone(),
        })?;

    Ok(LapRecord {
        driver: raw.driver.trim().to_string(),
        driver_number: cell(raw.driver_number.as_ref()).map(str::to_string),
        team: cell(raw.team.as_ref()).map(str::to_string),
        lap_number,
        position: parse_position(raw.position.as_ref())?,
        lap_start_time: parse_delta("LapStartTime", raw.lap_start_time.as_ref())?,
        lap_time_s: seconds_column(
            "LapTimeInSeconds",
            raw.lap_time_in_seconds.as_ref(),
            "LapTime",
            raw.lap_time.as_ref(),
        )?,
        s1_s: seconds_column(
            "S1InSeconds",
            raw.s1_in_seconds.as_ref(),
            "Sector1Time",
            raw.sector1_time.as_ref(),
        )?,
        s2_s: seconds_column(
            "S2InSeconds",
            raw.s2_in_seconds.as_ref(),
            "Sector2Time",
            raw.sector2_time.as_ref(),
        )?,
        s3_s: seconds_column(
            "S3InSeconds",
            raw.s3_in_seconds.as_ref(),
            "Sector3Time",
            raw.sector3_time.as_ref(),
        )?,
        pit_in_time: parse_delta("PitInTime", raw.pit_in_time.as_ref())?,
        pit_out_time: parse_delta("PitOutTime", raw.pit_out_time.as_ref())?,
        stint: parse_count("Stint", raw.stint.as_ref())?,
        compound: cell(raw.compound.as_ref()).map(str::to_uppercase),
        track_status: cell(raw.track_status.as_ref()).map(str::to_string),
        speed_st: parse_float("SpeedST", raw.speed_st.as_ref())?,
    })
}

/// Normalise a cell: trimmed, and `None` for blanks and missing markers.
fn cell(value: Option<&String>) -> Option<&str> {
    let v = value?.trim();
    if v.is_empty() || MISSING_MARKERS.contains(&v) {
        None
    } else {
        Some(v)
    }
}

fn parse_float(column: &str, value: Option<&String>) -> AppResult<Option<f64>> {
    let Some(v) = cell(value) else {
        return Ok(None);
    };
    v.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(Some)
        .ok_or_else(|| AppError::InvalidNumber {
            column: column.into(),
            value: v.into(),
        })
}

/// Non-negative integer column. pandas writes nullable ints as floats (`3.0`).
fn parse_count(column: &str, value: Option<&String>) -> AppResult<Option<u32>> {
    let Some(f) = parse_float(column, value)? else {
        return Ok(None);
    };
    if f < 0.0 || f.fract() != 0.0 || f > u32::MAX as f64 {
        return Err(AppError::InvalidNumber {
            column: column.into(),
            value: f.to_string(),
        });
    }
    Ok(Some(f as u32))
}

/// Running order is 1-based; a `0` means the position was not classified.
fn parse_position(value: Option<&String>) -> AppResult<Option<u32>> {
    Ok(parse_count("Position", value)?.filter(|&p| p > 0))
}

fn parse_delta(column: &str, value: Option<&String>) -> AppResult<Option<TimeDelta>> {
    let Some(v) = cell(value) else {
        return Ok(None);
    };
    parse_duration(v)
        .map(Some)
        .ok_or_else(|| AppError::InvalidDuration {
            column: column.into(),
            value: v.into(),
        })
}

fn seconds_column(
    seconds_name: &str,
    seconds: Option<&String>,
    duration_name: &str,
    duration: Option<&String>,
) -> AppResult<Option<f64>> {
    if let Some(s) = parse_float(seconds_name, seconds)? {
        return Ok(Some(s));
    }
    Ok(parse_delta(duration_name, duration)?.map(delta_to_seconds))
}
