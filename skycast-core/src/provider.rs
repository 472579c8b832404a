use crate::error::LookupError;
use crate::model::{DailyForecast, ResolvedLocation};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod open_meteo;

/// Resolves a free-text place name to coordinates and metadata.
///
/// Implementations pick the best candidate themselves; callers only ever see
/// a single resolved location.
#[async_trait]
pub trait GeocodingProvider: Send + Sync + Debug {
    async fn resolve(&self, query: &str) -> Result<ResolvedLocation, LookupError>;
}

/// Fetches the daily forecast series for a resolved location.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn daily(&self, location: &ResolvedLocation) -> Result<DailyForecast, LookupError>;
}
