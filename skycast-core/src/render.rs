//! Plain-text rendering of lookup results.

use crate::format::{day_label, temperature_range};
use crate::icon::weather_icon;
use crate::model::WeatherReport;
use crate::session::LookupState;

/// Render a report as the forecast block: a header naming the resolved
/// location, then one line per day with icon, day label, and range.
#[must_use]
pub fn render_report(report: &WeatherReport) -> String {
    let mut out = format!("Weather {}\n", report.location_name);

    for day in report.forecast.days() {
        out.push_str(&format!(
            "  {}  {:<5}  {}\n",
            weather_icon(day.weather_code),
            day_label(day.date, day.is_today),
            temperature_range(day.min_temperature, day.max_temperature),
        ));
    }

    out
}

/// Render whatever the session currently holds. Idle renders as nothing at
/// all; failures render as a single displayable line.
#[must_use]
pub fn render_state(state: &LookupState) -> String {
    match state {
        LookupState::Idle => String::new(),
        LookupState::Loading => "Loading...\n".to_string(),
        LookupState::Ready(report) => render_report(report),
        LookupState::Failed(message) => format!("{message}\n"),
    }
}
