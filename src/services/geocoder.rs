use crate::core::distance::calculate_distance;
use crate::models::{Coordinates, UserLocation};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// A named city with its centre point
#[derive(Debug, Clone, Copy)]
pub struct NamedCity {
    pub name: &'static str,
    pub state: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl NamedCity {
    const fn new(name: &'static str, state: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, state, lat, lng }
    }

    pub fn to_location(&self) -> UserLocation {
        UserLocation::new(self.name, self.state, self.lat, self.lng)
    }

    fn label(&self) -> String {
        format!("{}, {}", self.name, self.state)
    }
}

/// Cities the mock reverse geocoder can resolve to
pub const DETECTION_CITIES: [NamedCity; 7] = [
    NamedCity::new("San Francisco", "CA", 37.7749, -122.4194),
    NamedCity::new("New York", "NY", 40.7128, -74.0060),
    NamedCity::new("Los Angeles", "CA", 34.0522, -118.2437),
    NamedCity::new("Chicago", "IL", 41.8781, -87.6298),
    NamedCity::new("Austin", "TX", 30.2672, -97.7431),
    NamedCity::new("Seattle", "WA", 47.6062, -122.3321),
    NamedCity::new("Denver", "CO", 39.7392, -104.9903),
];

/// Cities offered for manual selection
pub const MAJOR_CITIES: [NamedCity; 11] = [
    NamedCity::new("San Francisco", "CA", 37.7749, -122.4194),
    NamedCity::new("New York", "NY", 40.7128, -74.0060),
    NamedCity::new("Los Angeles", "CA", 34.0522, -118.2437),
    NamedCity::new("Chicago", "IL", 41.8781, -87.6298),
    NamedCity::new("Austin", "TX", 30.2672, -97.7431),
    NamedCity::new("Seattle", "WA", 47.6062, -122.3321),
    NamedCity::new("Denver", "CO", 39.7392, -104.9903),
    NamedCity::new("Atlanta", "GA", 33.7490, -84.3880),
    NamedCity::new("Miami", "FL", 25.7617, -80.1918),
    NamedCity::new("Portland", "OR", 45.5152, -122.6784),
    NamedCity::new("Asheville", "NC", 35.5951, -82.5515),
];

/// Fallback point for listings whose city cannot be resolved
pub const DEFAULT_MAP_CENTER: Coordinates = Coordinates {
    lat: 37.7749,
    lng: -122.4194,
};

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("No known city near {lat}, {lng}")]
    NoMatch { lat: f64, lng: f64 },
}

/// Coordinate <-> city lookups
pub trait Geocoder: Send + Sync {
    /// Name the city at `coordinates`; the returned location keeps the input point
    fn reverse_geocode(
        &self,
        coordinates: Coordinates,
    ) -> impl Future<Output = Result<UserLocation, GeocodeError>> + Send;

    /// Centre point of a named city, if known
    fn locate_city(&self, city: &str, state: &str) -> Option<Coordinates>;
}

/// Offline geocoder over a fixed city list, with simulated latency
#[derive(Debug, Clone)]
pub struct MockGeocoder {
    delay: Duration,
}

impl MockGeocoder {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockGeocoder {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

/// Nearest city by rounded mile distance; ties keep the earlier entry
pub fn nearest_city(cities: &[NamedCity], coordinates: Coordinates) -> Option<&NamedCity> {
    let mut best: Option<(&NamedCity, u32)> = None;
    for city in cities {
        let distance = calculate_distance(coordinates.lat, coordinates.lng, city.lat, city.lng);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((city, distance)),
        }
    }
    best.map(|(city, _)| city)
}

impl Geocoder for MockGeocoder {
    async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<UserLocation, GeocodeError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let city = nearest_city(&DETECTION_CITIES, coordinates).ok_or(GeocodeError::NoMatch {
            lat: coordinates.lat,
            lng: coordinates.lng,
        })?;

        tracing::debug!(
            "Reverse geocoded {}, {} to {}",
            coordinates.lat,
            coordinates.lng,
            city.label()
        );

        Ok(UserLocation {
            city: city.name.to_string(),
            state: city.state.to_string(),
            coordinates,
        })
    }

    fn locate_city(&self, city: &str, state: &str) -> Option<Coordinates> {
        MAJOR_CITIES
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(city.trim()) && c.state.eq_ignore_ascii_case(state.trim()))
            .map(|c| Coordinates::new(c.lat, c.lng))
    }
}

/// Case-insensitive substring search over "City, ST" labels
pub fn search_cities(query: &str) -> Vec<UserLocation> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    MAJOR_CITIES
        .iter()
        .filter(|city| city.label().to_lowercase().contains(&needle))
        .map(NamedCity::to_location)
        .collect()
}
