//! The lookup session: query handling, the fetch orchestration, and the
//! state machine the presentation layer renders from.

use crate::error::LookupError;
use crate::model::WeatherReport;
use crate::provider::{ForecastProvider, GeocodingProvider};

/// Minimum submitted length (in characters) that triggers a lookup.
pub const MIN_QUERY_CHARS: usize = 2;

/// Whether a submitted query is long enough to act on.
#[must_use]
pub fn triggers_lookup(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_CHARS
}

/// Identifier of one issued lookup. Later ids supersede earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestId(u64);

/// What the presentation layer sees.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LookupState {
    /// Nothing fetched yet.
    #[default]
    Idle,
    /// A lookup is in flight.
    Loading,
    /// The most recent lookup succeeded.
    Ready(WeatherReport),
    /// The most recent lookup failed; the message is displayable as-is.
    Failed(String),
}

impl LookupState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, LookupState::Loading)
    }

    #[must_use]
    pub fn report(&self) -> Option<&WeatherReport> {
        match self {
            LookupState::Ready(report) => Some(report),
            _ => None,
        }
    }
}

/// Resolve a place name and fetch its daily forecast.
///
/// The geocoding step picks the first candidate; its canonical name becomes
/// the report's display name.
pub async fn fetch_report(
    geocoder: &dyn GeocodingProvider,
    forecaster: &dyn ForecastProvider,
    query: &str,
) -> Result<WeatherReport, LookupError> {
    let location = geocoder.resolve(query).await?;
    let forecast = forecaster.daily(&location).await?;

    Ok(WeatherReport { location_name: location.name, forecast })
}

/// One user-facing lookup session.
///
/// All state transitions go through [`WeatherSession::submit`] and
/// [`WeatherSession::complete`]; a completion carrying anything but the
/// latest issued [`RequestId`] is discarded, so a slow, stale response can
/// neither overwrite newer data nor clear a newer request's loading state.
#[derive(Debug)]
pub struct WeatherSession {
    geocoder: Box<dyn GeocodingProvider>,
    forecaster: Box<dyn ForecastProvider>,
    query: String,
    state: LookupState,
    issued: u64,
}

impl WeatherSession {
    pub fn new(geocoder: Box<dyn GeocodingProvider>, forecaster: Box<dyn ForecastProvider>) -> Self {
        Self {
            geocoder,
            forecaster,
            query: String::new(),
            state: LookupState::default(),
            issued: 0,
        }
    }

    /// The raw query as last submitted, verbatim.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn state(&self) -> &LookupState {
        &self.state
    }

    /// Store the raw input verbatim and, when it is long enough to act on,
    /// issue a new request id and enter `Loading`.
    ///
    /// Short input issues no request and leaves the lookup state untouched.
    pub fn submit(&mut self, raw: &str) -> Option<RequestId> {
        self.query = raw.to_string();

        if !triggers_lookup(&self.query) {
            return None;
        }

        self.issued += 1;
        self.state = LookupState::Loading;
        Some(RequestId(self.issued))
    }

    /// Apply a finished lookup.
    ///
    /// The latest request always leaves `Loading`, success or failure;
    /// failures are logged and recorded as a displayable message.
    pub fn complete(&mut self, id: RequestId, outcome: Result<WeatherReport, LookupError>) {
        if id.0 != self.issued {
            tracing::debug!(request = id.0, latest = self.issued, "discarding stale lookup result");
            return;
        }

        match outcome {
            Ok(report) => {
                tracing::debug!(location = %report.location_name, days = report.forecast.len(), "lookup finished");
                self.state = LookupState::Ready(report);
            }
            Err(err) => {
                tracing::warn!(error = %err, query = %self.query, "lookup failed");
                self.state = LookupState::Failed(err.to_string());
            }
        }
    }

    /// Run one full lookup for `raw`: submit, fetch, apply the outcome.
    ///
    /// Input below the length threshold changes nothing.
    pub async fn lookup(&mut self, raw: &str) -> &LookupState {
        if let Some(id) = self.submit(raw) {
            let outcome =
                fetch_report(self.geocoder.as_ref(), self.forecaster.as_ref(), raw).await;
            self.complete(id, outcome);
        }

        self.state()
    }
}
