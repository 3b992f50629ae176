// Route exports
pub mod activities;
pub mod locations;
pub mod organizations;

use actix_web::{http::StatusCode, web, HttpResponse};
use std::sync::Arc;

use crate::core::ActivityFinder;
use crate::models::ErrorResponse;
use crate::services::{Catalog, LocationService, MockAuthProvider, MockGeocoder, SessionStore};

/// Organization auth behind the API; handlers only use it through
/// [`crate::services::AuthProvider`]
pub type ApiAuthProvider = MockAuthProvider;

/// Geocoder behind location detection and listing placement; handlers only
/// use it through [`crate::services::Geocoder`]
pub type ApiGeocoder = MockGeocoder;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub finder: ActivityFinder,
    pub auth: Arc<ApiAuthProvider>,
    pub sessions: Arc<SessionStore>,
    pub locator: Arc<LocationService<ApiGeocoder>>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(activities::configure)
            .configure(locations::configure)
            .configure(organizations::configure),
    );
}

/// JSON error body with a matching status code
pub(crate) fn error_response(
    status: StatusCode,
    error: &str,
    message: impl Into<String>,
) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(error, message, status.as_u16()))
}

pub(crate) fn validation_failed(message: impl Into<String>) -> HttpResponse {
    error_response(StatusCode::BAD_REQUEST, "Validation failed", message)
}

pub(crate) fn not_found(message: impl Into<String>) -> HttpResponse {
    error_response(StatusCode::NOT_FOUND, "Not found", message)
}
