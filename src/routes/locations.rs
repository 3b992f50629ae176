use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse, Responder};

use crate::models::{CitySearchQuery, DetectLocationRequest};
use crate::routes::{error_response, AppState};
use crate::services::ReportedPosition;

/// Header identifying the client whose detected location may be reused
pub const CLIENT_ID_HEADER: &str = "X-Client-Id";

/// Configure location routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/locations/cities", web::get().to(search_cities))
        .route("/locations/detect", web::post().to(detect_location));
}

/// Manual city search
///
/// GET /api/v1/locations/cities?q=san
async fn search_cities(
    state: web::Data<AppState>,
    query: web::Query<CitySearchQuery>,
) -> impl Responder {
    HttpResponse::Ok().json(state.locator.search_cities(query.q.trim()))
}

/// Resolve a client-reported position to a city
///
/// POST /api/v1/locations/detect
///
/// Request body:
/// ```json
/// { "latitude": 30.2672, "longitude": -97.7431 }
/// ```
/// or, when the client's geolocation failed:
/// ```json
/// { "error": { "code": 1, "message": "User denied Geolocation" } }
/// ```
async fn detect_location(
    state: web::Data<AppState>,
    req: web::Json<DetectLocationRequest>,
    http_req: HttpRequest,
) -> impl Responder {
    let client_id = http_req
        .headers()
        .get(CLIENT_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty());

    let source = ReportedPosition::from(&req.into_inner());

    match state.locator.detect(client_id, &source).await {
        Ok(location) => HttpResponse::Ok().json(location),
        Err(e) => {
            tracing::warn!("Location detection failed: {}", e);
            error_response(StatusCode::UNPROCESSABLE_ENTITY, "Location unavailable", e.to_string())
        }
    }
}
