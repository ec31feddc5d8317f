//! Static colour tables for teams, drivers and tyre compounds (`#RRGGBB`).
//!
//! Two shades per driver: the primary one for a driver's real laps, the
//! secondary one for derived values (ideal lap next to best lap).

pub const TEAM_COLORS: &[(&str, &str)] = &[
    ("Alpine", "#F282B4"),
    ("Aston Martin", "#037A68"),
    ("Ferrari", "#821729"),
    ("Haas F1 Team", "#EB0A1E"),
    ("Kick Sauber", "#53FC18"),
    ("McLaren", "#FF8700"),
    ("Mercedes", "#C8CCCE"),
    ("Racing Bulls", "#FFFFFF"),
    ("Red Bull Racing", "#003773"),
    ("Williams", "#00A0DE"),
];

pub const DRIVER_COLORS: &[(&str, &str)] = &[
    // Red Bull Racing
    ("VER", "#002D5A"),
    ("TSU", "#003F7D"),
    // Ferrari
    ("LEC", "#9B1B30"),
    ("HAM", "#C81D37"),
    // Mercedes
    ("RUS", "#ACB2B5"),
    ("ANT", "#D0D3D4"),
    // McLaren
    ("NOR", "#FF9800"),
    ("PIA", "#FFB766"),
    // Aston Martin
    ("ALO", "#028061"),
    ("STR", "#03A678"),
    // Alpine
    ("GAS", "#FF66A1"),
    ("DOO", "#D94A90"),
    // Williams
    ("ALB", "#0096C9"),
    ("SAI", "#00B6F1"),
    // Racing Bulls
    ("HAD", "#E5E5E5"),
    ("LAW", "#F2F2F2"),
    // Kick Sauber
    ("HUL", "#4EF535"),
    ("BOR", "#26D401"),
    // Haas
    ("OCO", "#D91A26"),
    ("BEA", "#F52439"),
];

pub const DRIVER_COLORS_ALT: &[(&str, &str)] = &[
    ("VER", "#003366"),
    ("TSU", "#004B8D"),
    ("LEC", "#8B192B"),
    ("HAM", "#D32F45"),
    ("RUS", "#A0A5A8"),
    ("ANT", "#D9DDDE"),
    ("NOR", "#FF8A00"),
    ("PIA", "#FFC177"),
    ("ALO", "#026E55"),
    ("STR", "#04B386"),
    ("GAS", "#FF75AC"),
    ("DOO", "#C74383"),
    ("ALB", "#0088B5"),
    ("SAI", "#00C2FF"),
    ("HAD", "#DCDCDC"),
    ("LAW", "#FFFFFF"),
    ("HUL", "#46DC2F"),
    ("BOR", "#2EE001"),
    ("OCO", "#C11722"),
    ("BEA", "#FF2E45"),
];

pub const COMPOUND_COLORS: &[(&str, &str)] = &[
    ("SOFT", "#FF0000"),
    ("MEDIUM", "#FFFF00"),
    ("HARD", "#808080"),
];

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

pub fn team_color(team: &str) -> Option<&'static str> {
    lookup(TEAM_COLORS, team)
}

pub fn driver_color(driver: &str) -> Option<&'static str> {
    lookup(DRIVER_COLORS, driver)
}

pub fn driver_color_alt(driver: &str) -> Option<&'static str> {
    lookup(DRIVER_COLORS_ALT, driver)
}

/// Compound names are matched case-insensitively.
pub fn compound_color(compound: &str) -> Option<&'static str> {
    lookup(COMPOUND_COLORS, &compound.to_uppercase())
}

/// `#RRGGBB` → (r, g, b). `None` for anything else.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let h = hex.strip_prefix('#')?;
    if h.len() != 6 || !h.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&h[0..2], 16).ok()?;
    let g = u8::from_str_radix(&h[2..4], 16).ok()?;
    let b = u8::from_str_radix(&h[4..6], 16).ok()?;
    Some((r, g, b))
}
