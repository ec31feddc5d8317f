//! Time utilities: parsing timing-sheet durations, seconds conversions, formatting lap times.

use chrono::TimeDelta;
use regex::Regex;
use std::sync::OnceLock;

/// `0 days 01:02:03.456000` (pandas), `01:02:03.456`, `1:23.456`, with optional sign.
fn duration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?P<sign>-)?(?:(?P<days>\d+) days?,? ?)?(?:(?P<h>\d+):)?(?P<m>\d{1,2}):(?P<s>\d{1,2}(?:\.\d+)?)$",
        )
        .expect("static duration regex")
    })
}

/// Parse a duration cell into a `TimeDelta`.
///
/// Accepted forms:
/// - `0 days 00:01:23.456000` (pandas timedelta)
/// - `01:23:45.678` / `1:23.456`
/// - `83.456` (plain seconds)
///
/// Returns `None` when the text matches none of them, or when the value
/// does not fit in a microsecond `TimeDelta`.
pub fn parse_duration(raw: &str) -> Option<TimeDelta> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(secs) = s.parse::<f64>() {
        return (secs.is_finite() && (secs * 1_000_000.0).abs() < i64::MAX as f64)
            .then(|| seconds_to_delta(secs));
    }

    let caps = duration_regex().captures(s)?;

    let days: i64 = caps.name("days").map_or(Ok(0), |m| m.as_str().parse()).ok()?;
    let hours: i64 = caps.name("h").map_or(Ok(0), |m| m.as_str().parse()).ok()?;
    let minutes: i64 = caps["m"].parse().ok()?;
    let seconds: f64 = caps["s"].parse().ok()?;

    let whole = days
        .checked_mul(86_400)?
        .checked_add(hours.checked_mul(3_600)?)?
        .checked_add(minutes.checked_mul(60)?)?;
    let total = whole as f64 + seconds;
    if total * 1_000_000.0 >= i64::MAX as f64 {
        return None;
    }

    Some(if caps.name("sign").is_some() {
        seconds_to_delta(-total)
    } else {
        seconds_to_delta(total)
    })
}

/// Fractional seconds → `TimeDelta`, at microsecond resolution.
pub fn seconds_to_delta(seconds: f64) -> TimeDelta {
    TimeDelta::microseconds((seconds * 1_000_000.0).round() as i64)
}

/// `TimeDelta` → fractional seconds (`total_seconds()` in timing-sheet terms).
pub fn delta_to_seconds(delta: TimeDelta) -> f64 {
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1_000_000.0,
        None => delta.num_milliseconds() as f64 / 1_000.0,
    }
}

/// Round to `decimals` places, half away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Lap time as `M:SS.mmm` (or `SS.mmm` under one minute).
pub fn format_lap_time(seconds: f64) -> String {
    let sign = if seconds < 0.0 { "-" } else { "" };
    let total_ms = (seconds.abs() * 1000.0).round() as i64;
    let mins = total_ms / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let ms = total_ms % 1000;

    if mins > 0 {
        format!("{}{}:{:02}.{:03}", sign, mins, secs, ms)
    } else {
        format!("{}{}.{:03}", sign, secs, ms)
    }
}

/// Session timestamp as `HH:MM:SS.mmm`.
pub fn format_session_time(delta: TimeDelta) -> String {
    let total_ms = delta.num_milliseconds();
    let sign = if total_ms < 0 { "-" } else { "" };
    let ms = total_ms.abs();
    format!(
        "{}{:02}:{:02}:{:02}.{:03}",
        sign,
        ms / 3_600_000,
        (ms % 3_600_000) / 60_000,
        (ms % 60_000) / 1000,
        ms % 1000
    )
}

/// Signed gap, e.g. `+1.500` / `-0.300`.
pub fn format_gap(seconds: f64, decimals: usize) -> String {
    if seconds > 0.0 {
        format!("+{:.*}", decimals, seconds)
    } else {
        format!("{:.*}", decimals, seconds)
    }
}
