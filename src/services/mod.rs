// Service exports
pub mod auth;
pub mod catalog;
pub mod geocoder;
pub mod listings;
pub mod location;
pub mod sessions;

pub use auth::{demo_organization, AuthError, AuthProvider, MockAuthProvider, DEMO_EMAIL, DEMO_PASSWORD};
pub use catalog::{load_seed_catalog, Catalog, CatalogError};
pub use geocoder::{
    nearest_city, search_cities, GeocodeError, Geocoder, MockGeocoder, NamedCity,
    DEFAULT_MAP_CENTER, DETECTION_CITIES, MAJOR_CITIES,
};
pub use listings::{ListingDraft, ListingError, ListingStore};
pub use location::{
    LocationError, LocationService, PositionError, PositionOptions, PositionSource,
    ReportedPosition,
};
pub use sessions::{bearer_token, SessionStore};
