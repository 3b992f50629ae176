use crate::models::{Coordinates, DetectLocationRequest, UserLocation};
use crate::services::geocoder::{search_cities, GeocodeError, Geocoder, MockGeocoder};
use moka::future::Cache;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Failure reported by a position source
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PositionError {
    #[error("{0}")]
    PermissionDenied(String),

    #[error("{0}")]
    PositionUnavailable(String),

    #[error("{0}")]
    Timeout(String),

    #[error("Geolocation is not supported by this client.")]
    Unsupported,
}

impl PositionError {
    /// Map a W3C GeolocationPositionError code and message
    pub fn from_code(code: u16, message: &str) -> Self {
        let text = |fallback: &str| {
            if message.is_empty() {
                fallback.to_string()
            } else {
                message.to_string()
            }
        };

        match code {
            1 => PositionError::PermissionDenied(text("User denied Geolocation")),
            3 => PositionError::Timeout(text("Timeout expired")),
            _ => PositionError::PositionUnavailable(text("Position unavailable")),
        }
    }
}

/// Errors surfaced to the user when location detection fails
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Geolocation is not supported by this client.")]
    Unsupported,

    #[error("Geolocation error: {0}")]
    Position(PositionError),

    #[error(transparent)]
    Geocode(#[from] GeocodeError),
}

impl From<PositionError> for LocationError {
    fn from(value: PositionError) -> Self {
        match value {
            PositionError::Unsupported => LocationError::Unsupported,
            other => LocationError::Position(other),
        }
    }
}

/// Options passed to the position source
#[derive(Debug, Clone, Copy)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout: Duration,
    /// A cached fix younger than this is reused
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::from_secs(300),
        }
    }
}

/// Something that can produce the device's current coordinates
pub trait PositionSource: Send + Sync {
    fn current_position(
        &self,
        options: &PositionOptions,
    ) -> impl Future<Output = Result<Coordinates, PositionError>> + Send;
}

/// A fix (or failure) the client already obtained and sent along
#[derive(Debug, Clone)]
pub struct ReportedPosition {
    outcome: Result<Coordinates, PositionError>,
}

impl ReportedPosition {
    pub fn new(outcome: Result<Coordinates, PositionError>) -> Self {
        Self { outcome }
    }
}

impl From<&DetectLocationRequest> for ReportedPosition {
    fn from(request: &DetectLocationRequest) -> Self {
        let outcome = match (&request.error, request.latitude, request.longitude) {
            (Some(error), _, _) => Err(PositionError::from_code(error.code, &error.message)),
            (None, Some(lat), Some(lng)) => Ok(Coordinates::new(lat, lng)),
            _ => Err(PositionError::Unsupported),
        };
        Self { outcome }
    }
}

impl PositionSource for ReportedPosition {
    async fn current_position(&self, _options: &PositionOptions) -> Result<Coordinates, PositionError> {
        self.outcome.clone()
    }
}

/// Detects a user's city from a position source
pub struct LocationService<G: Geocoder = MockGeocoder> {
    geocoder: G,
    options: PositionOptions,
    // Resolved locations per client, expiring after `options.maximum_age`
    recent: Cache<String, UserLocation>,
}

impl<G: Geocoder> LocationService<G> {
    pub fn new(geocoder: G, options: PositionOptions) -> Self {
        let recent = moka::future::CacheBuilder::new(10_000)
            .time_to_live(options.maximum_age.max(Duration::from_millis(1)))
            .build();

        Self {
            geocoder,
            options,
            recent,
        }
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    pub fn options(&self) -> PositionOptions {
        self.options
    }

    /// Resolve the user's location
    ///
    /// A location resolved for the same `client_id` within the maximum age is
    /// returned without consulting `source`.
    pub async fn detect<S: PositionSource>(
        &self,
        client_id: Option<&str>,
        source: &S,
    ) -> Result<UserLocation, LocationError> {
        let client_id = client_id.filter(|_| !self.options.maximum_age.is_zero());

        if let Some(id) = client_id {
            if let Some(cached) = self.recent.get(id).await {
                tracing::debug!("Reusing cached location for client {}", id);
                return Ok(cached);
            }
        }

        let coordinates =
            match tokio::time::timeout(self.options.timeout, source.current_position(&self.options))
                .await
            {
                Ok(result) => result?,
                Err(_) => {
                    return Err(PositionError::Timeout("Timeout expired".to_string()).into());
                }
            };

        let location = self.geocoder.reverse_geocode(coordinates).await?;

        if let Some(id) = client_id {
            self.recent.insert(id.to_string(), location.clone()).await;
        }

        tracing::info!("Location detected: {}", location.label());
        Ok(location)
    }

    /// Manual city suggestions for a search box
    pub fn search_cities(&self, query: &str) -> Vec<UserLocation> {
        search_cities(query)
    }
}
