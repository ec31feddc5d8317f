//! ANSI color helper utilities for terminal output.

use super::palette::{compound_color, driver_color, hex_to_rgb, team_color};
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Paint `text` with a `#RRGGBB` colour (24-bit escape). Plain text when
/// colours are disabled or the hex is not valid.
pub fn paint_hex(text: &str, hex: Option<&str>, enabled: bool) -> String {
    match hex.and_then(hex_to_rgb) {
        Some((r, g, b)) if enabled => Colour::RGB(r, g, b).bold().paint(text).to_string(),
        _ => text.to_string(),
    }
}

/// Driver code in the driver's colour, falling back to the team colour.
pub fn paint_driver(driver: &str, team: Option<&str>, enabled: bool) -> String {
    let hex = driver_color(driver).or_else(|| team.and_then(team_color));
    paint_hex(driver, hex, enabled)
}

pub fn paint_compound(compound: &str, enabled: bool) -> String {
    paint_hex(compound, compound_color(compound), enabled)
}

/// Delta color:
/// \>0 → red (slower)
/// \<0 → green (time available)
/// 0 → reset
pub fn color_for_delta(value: f64) -> &'static str {
    if value > 0.0 {
        RED
    } else if value < 0.0 {
        GREEN
    } else {
        RESET
    }
}

/// Wraps a value in the delta colour, grey for missing values.
pub fn colorize_delta(value: Option<f64>, text: &str, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    match value {
        Some(v) => format!("{}{}{}", color_for_delta(v), text, RESET),
        None => format!("{GREY}{text}{RESET}"),
    }
}

/// Grey for missing values, untouched otherwise.
pub fn grey_if_missing(text: &str, missing: bool, enabled: bool) -> String {
    if missing && enabled {
        format!("{GREY}{text}{RESET}")
    } else {
        text.to_string()
    }
}
