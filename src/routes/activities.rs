use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::distance_between;
use crate::models::{
    ActivityDetailResponse, BookingRequest, BookingResponse, Category, DetailQuery,
    HealthResponse, SearchQuery, SearchResponse,
};
use crate::routes::{not_found, validation_failed, AppState};

/// Configure catalog browsing and booking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/categories", web::get().to(list_categories))
        .route("/activities", web::get().to(search_activities))
        .route("/activities/{id}", web::get().to(get_activity))
        .route("/bookings", web::post().to(request_booking));
}

/// Dates are compared against the server's local calendar day
fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_size: state.catalog.len().await,
        timestamp: chrono::Utc::now(),
    })
}

/// Category filter options, starting with "All"
async fn list_categories() -> impl Responder {
    let categories: Vec<&str> = std::iter::once("All")
        .chain(Category::ALL.iter().map(Category::as_str))
        .collect();

    HttpResponse::Ok().json(categories)
}

/// Browse the catalog
///
/// GET /api/v1/activities?category=Adventure&price=50-75&groupSize=small&distance=25&date=this-week&lat=30.2672&lng=-97.7431&city=Austin&state=TX
///
/// Every filter defaults to "all". Results are sorted nearest-first when both
/// `lat` and `lng` are given. The open price bracket may be sent as `100%2B`
/// or as a bare `100+` (decoded to `100 `).
async fn search_activities(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let selection = query.selection();
    let location = query.location();

    let catalog = state.catalog.all_activities().await;
    let result = state
        .finder
        .find_activities(catalog, location.as_ref(), &selection, today());

    let mut summary = format!("{} activities found", result.count());
    if let Some(location) = location.as_ref().filter(|_| result.sorted_by_distance) {
        summary.push_str(&format!(" • Sorted by distance from {}", location.label()));
    }

    tracing::info!(
        "Search returned {} of {} activities (filters active: {})",
        result.count(),
        result.total_activities,
        selection.has_active_filters()
    );

    HttpResponse::Ok().json(SearchResponse {
        count: result.count(),
        total_activities: result.total_activities,
        sorted_by_distance: result.sorted_by_distance,
        has_active_filters: selection.has_active_filters(),
        activities: result.activities,
        location,
        summary,
    })
}

/// Activity detail
///
/// GET /api/v1/activities/{id}?lat=..&lng=..
async fn get_activity(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<DetailQuery>,
) -> impl Responder {
    let id = path.into_inner();

    let activity = match state.catalog.find(&id).await {
        Some(activity) => activity,
        None => return not_found(format!("Activity not found: {}", id)),
    };

    let distance = query
        .location()
        .map(|location| distance_between(&location.coordinates, &activity.coordinates));
    let next_available_date = activity.next_available_date(today());

    HttpResponse::Ok().json(ActivityDetailResponse {
        activity,
        distance,
        next_available_date,
    })
}

/// Booking request endpoint
///
/// POST /api/v1/bookings
///
/// Request body:
/// ```json
/// {
///   "activityId": "1",
///   "date": "2025-01-15",
///   "time": "10:00 AM"
/// }
/// ```
///
/// Nothing is reserved; the response only confirms the request was received.
async fn request_booking(
    state: web::Data<AppState>,
    req: web::Json<BookingRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors.to_string());
    }

    let activity = match state.catalog.find(&req.activity_id).await {
        Some(activity) => activity,
        None => return not_found(format!("Activity not found: {}", req.activity_id)),
    };

    let booking_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(
        "Booking request {} for activity {} (date: {:?}, time: {:?})",
        booking_id,
        activity.id,
        req.date,
        req.time
    );

    HttpResponse::Ok().json(BookingResponse {
        success: true,
        booking_id,
        message: format!(
            "Booking request sent for \"{}\"! Our team will contact you shortly.",
            activity.title
        ),
    })
}
