//! Small display formatters for forecast rows.

use chrono::NaiveDate;

/// Short label for a forecast row: "Today" for the first entry, otherwise
/// the abbreviated weekday name of the date.
#[must_use]
pub fn day_label(date: NaiveDate, is_today: bool) -> String {
    if is_today {
        "Today".to_string()
    } else {
        date.format("%a").to_string()
    }
}

/// Display range for a day's temperatures: minimum rounded down, maximum
/// rounded up, whole degrees.
#[must_use]
pub fn temperature_range(min: f64, max: f64) -> String {
    format!("{}° - {}°", min.floor() as i64, max.ceil() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("valid test date")
    }

    #[test]
    fn today_label_ignores_the_date() {
        assert_eq!(day_label(date("2026-08-06"), true), "Today");
        assert_eq!(day_label(date("1999-12-31"), true), "Today");
    }

    #[test]
    fn other_days_use_short_weekday_names() {
        // 2026-08-06 is a Thursday, 2026-08-10 a Monday.
        assert_eq!(day_label(date("2026-08-06"), false), "Thu");
        assert_eq!(day_label(date("2026-08-10"), false), "Mon");
    }

    #[test]
    fn range_floors_min_and_ceils_max() {
        assert_eq!(temperature_range(3.7, 9.2), "3° - 9°");
    }

    #[test]
    fn range_handles_whole_and_negative_degrees() {
        assert_eq!(temperature_range(3.0, 9.0), "3° - 9°");
        assert_eq!(temperature_range(-4.3, -0.2), "-5° - 0°");
    }
}
