//! Open-Meteo implementations of the geocoding and forecast providers.
//!
//! Both endpoints are unauthenticated, idempotent GETs. Base URLs are
//! injected so tests can point the clients at a local mock server.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::error::{LookupError, Service};
use crate::model::{DailyForecast, ResolvedLocation};
use crate::provider::{ForecastProvider, GeocodingProvider};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Daily fields requested from the forecast endpoint, in series order.
const DAILY_FIELDS: &str = "weathercode,temperature_2m_max,temperature_2m_min";

fn build_client() -> Result<Client, reqwest::Error> {
    Client::builder().timeout(REQUEST_TIMEOUT).build()
}

fn network(service: Service) -> impl FnOnce(reqwest::Error) -> LookupError {
    move |source| LookupError::Network { service, source }
}

/// Geocoding client for the Open-Meteo search endpoint.
#[derive(Debug, Clone)]
pub struct OpenMeteoGeocoder {
    base_url: String,
    http: Client,
}

impl OpenMeteoGeocoder {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        Ok(Self { base_url: base_url.into(), http: build_client()? })
    }
}

#[async_trait]
impl GeocodingProvider for OpenMeteoGeocoder {
    async fn resolve(&self, query: &str) -> Result<ResolvedLocation, LookupError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[("name", query), ("count", "5"), ("language", "en"), ("format", "json")])
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(network(Service::Geocoding))?;

        let body = res.text().await.map_err(network(Service::Geocoding))?;

        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|err| LookupError::MalformedResponse {
                service: Service::Geocoding,
                detail: format!("{err} in body: {}", truncate_body(&body)),
            })?;

        let candidate = parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::LocationNotFound(query.to_string()))?;

        tracing::debug!(
            name = %candidate.name,
            latitude = candidate.latitude,
            longitude = candidate.longitude,
            "geocoded query"
        );

        Ok(ResolvedLocation {
            latitude: candidate.latitude,
            longitude: candidate.longitude,
            // The search endpoint occasionally omits the timezone; "auto"
            // tells the forecast endpoint to derive it from the coordinates.
            timezone: candidate.timezone.unwrap_or_else(|| "auto".to_string()),
            name: candidate.name,
        })
    }
}

/// Forecast client for the Open-Meteo daily forecast endpoint.
#[derive(Debug, Clone)]
pub struct OpenMeteoForecaster {
    base_url: String,
    forecast_days: u8,
    http: Client,
}

impl OpenMeteoForecaster {
    pub fn new(base_url: impl Into<String>, forecast_days: u8) -> Result<Self, reqwest::Error> {
        Ok(Self { base_url: base_url.into(), forecast_days, http: build_client()? })
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoForecaster {
    async fn daily(&self, location: &ResolvedLocation) -> Result<DailyForecast, LookupError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("timezone", location.timezone.clone()),
                ("daily", DAILY_FIELDS.to_string()),
                ("forecast_days", self.forecast_days.to_string()),
            ])
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(network(Service::Forecast))?;

        let body = res.text().await.map_err(network(Service::Forecast))?;

        let parsed: ForecastResponse =
            serde_json::from_str(&body).map_err(|err| LookupError::MalformedResponse {
                service: Service::Forecast,
                detail: format!("{err} in body: {}", truncate_body(&body)),
            })?;

        let daily = parsed.daily;
        let forecast = DailyForecast::from_series(
            daily.time,
            daily.weathercode,
            daily.temperature_max,
            daily.temperature_min,
        )
        .map_err(|err| LookupError::MalformedResponse {
            service: Service::Forecast,
            detail: err.to_string(),
        })?;

        tracing::debug!(days = forecast.len(), name = %location.name, "fetched daily forecast");

        Ok(forecast)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Option<Vec<SearchResult>>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    name: String,
    latitude: f64,
    longitude: f64,
    timezone: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<NaiveDate>,
    weathercode: Vec<u16>,
    #[serde(rename = "temperature_2m_max")]
    temperature_max: Vec<f64>,
    #[serde(rename = "temperature_2m_min")]
    temperature_min: Vec<f64>,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        let head: String = body.chars().take(MAX).collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}
