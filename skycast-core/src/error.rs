use thiserror::Error;

/// Which remote collaborator an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Geocoding,
    Forecast,
}

impl Service {
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Geocoding => "geocoding",
            Service::Forecast => "forecast",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures while resolving a place name and fetching its forecast.
///
/// Everything here is caught at the session boundary: it is logged, turned
/// into a displayable failure state, and never crashes the caller.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The geocoding service returned no candidates for the query.
    #[error("location not found: '{0}'")]
    LocationNotFound(String),

    /// A request did not complete (transport error or non-success status).
    #[error("{service} request failed")]
    Network {
        service: Service,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a shape we cannot use.
    #[error("unexpected {service} response: {detail}")]
    MalformedResponse { service: Service, detail: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_display_matches_as_str() {
        assert_eq!(Service::Geocoding.to_string(), "geocoding");
        assert_eq!(Service::Forecast.to_string(), "forecast");
    }

    #[test]
    fn location_not_found_names_the_query() {
        let err = LookupError::LocationNotFound("Atlantis".to_string());
        assert!(err.to_string().contains("Atlantis"));
    }

    #[test]
    fn malformed_response_names_the_service() {
        let err = LookupError::MalformedResponse {
            service: Service::Forecast,
            detail: "missing daily block".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("forecast"));
        assert!(msg.contains("missing daily block"));
    }
}
