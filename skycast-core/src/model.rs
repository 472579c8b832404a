use chrono::NaiveDate;
use thiserror::Error;

/// Location taken from the first geocoding candidate.
///
/// Recomputed on each successful lookup and overwritten by the next one;
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// IANA timezone identifier, e.g. "Europe/Berlin".
    pub timezone: String,
    /// Canonical place name as reported by the geocoding service.
    pub name: String,
}

/// Raised when the four forecast series do not line up.
#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "forecast series have mismatched lengths: dates={dates}, codes={codes}, max={max}, min={min}"
)]
pub struct SeriesLengthMismatch {
    pub dates: usize,
    pub codes: usize,
    pub max: usize,
    pub min: usize,
}

/// Daily forecast as four parallel series indexed by day offset from today.
///
/// Index 0 is today. The only way to build one is [`DailyForecast::from_series`],
/// which rejects series of unequal length.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    dates: Vec<NaiveDate>,
    weather_codes: Vec<u16>,
    max_temperatures: Vec<f64>,
    min_temperatures: Vec<f64>,
}

impl DailyForecast {
    pub fn from_series(
        dates: Vec<NaiveDate>,
        weather_codes: Vec<u16>,
        max_temperatures: Vec<f64>,
        min_temperatures: Vec<f64>,
    ) -> Result<Self, SeriesLengthMismatch> {
        let len = dates.len();
        if weather_codes.len() != len
            || max_temperatures.len() != len
            || min_temperatures.len() != len
        {
            return Err(SeriesLengthMismatch {
                dates: len,
                codes: weather_codes.len(),
                max: max_temperatures.len(),
                min: min_temperatures.len(),
            });
        }

        Ok(Self { dates, weather_codes, max_temperatures, min_temperatures })
    }

    /// Number of forecast days.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn weather_codes(&self) -> &[u16] {
        &self.weather_codes
    }

    pub fn max_temperatures(&self) -> &[f64] {
        &self.max_temperatures
    }

    pub fn min_temperatures(&self) -> &[f64] {
        &self.min_temperatures
    }

    /// Iterate the forecast one day at a time, in presentation order.
    pub fn days(&self) -> impl Iterator<Item = DaySummary> + '_ {
        (0..self.dates.len()).map(move |i| DaySummary {
            date: self.dates[i],
            weather_code: self.weather_codes[i],
            max_temperature: self.max_temperatures[i],
            min_temperature: self.min_temperatures[i],
            is_today: i == 0,
        })
    }
}

/// One row of the forecast, ready for presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub weather_code: u16,
    pub max_temperature: f64,
    pub min_temperature: f64,
    pub is_today: bool,
}

/// Everything the presentation layer needs after a successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub location_name: String,
    pub forecast: DailyForecast,
}
