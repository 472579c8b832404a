//! WMO weather code to display glyph mapping.

/// Placeholder shown for weather codes outside the known table.
pub const UNKNOWN_ICON: &str = "NOT FOUND";

/// Map a WMO weather code to its display glyph.
///
/// Codes outside the table yield [`UNKNOWN_ICON`] rather than an error; the
/// placeholder is meant to be visible in the rendered output.
pub fn weather_icon(code: u16) -> &'static str {
    match code {
        0 => "☀️",
        1 => "🌤",
        2 => "⛅️",
        3 => "☁️",
        45 | 48 => "🌫",
        51 | 56 | 61 | 66 | 80 => "🌦",
        53 | 55 | 63 | 65 | 57 | 67 | 81 | 82 => "🌧",
        71 | 73 | 75 | 77 | 85 | 86 => "🌨",
        95 => "🌩",
        96 | 99 => "⛈",
        _ => UNKNOWN_ICON,
    }
}
