use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    ActivityUpdateRequest, AuthResponse, CreateActivityRequest, DashboardResponse,
    DashboardStats, ListingSummary, LoginRequest, Organization, SignupRequest,
};
use crate::routes::{error_response, not_found, validation_failed, AppState};
use crate::services::{
    bearer_token, AuthError, AuthProvider, Geocoder, ListingDraft, ListingError,
    DEFAULT_MAP_CENTER,
};

/// Configure organization auth and listing management routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/organizations/signup", web::post().to(signup))
        .route("/organizations/login", web::post().to(login))
        .route("/organizations/logout", web::post().to(logout))
        .route("/organizations/me", web::get().to(dashboard))
        .route("/organizations/me/activities", web::get().to(list_listings))
        .route("/organizations/me/activities", web::post().to(create_listing))
        .route("/organizations/me/activities/{id}", web::patch().to(edit_listing))
        .route("/organizations/me/activities/{id}", web::delete().to(delete_listing));
}

fn auth_error_response(err: &AuthError) -> HttpResponse {
    match err {
        AuthError::EmailTaken(_) => error_response(StatusCode::CONFLICT, "Conflict", err.to_string()),
        AuthError::InvalidSession => {
            error_response(StatusCode::UNAUTHORIZED, "Unauthorized", err.to_string())
        }
        _ => validation_failed(err.to_string()),
    }
}

fn listing_error_response(err: &ListingError) -> HttpResponse {
    match err {
        ListingError::NotFound(_) => not_found(err.to_string()),
        _ => validation_failed(err.to_string()),
    }
}

fn session_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
}

/// Resolve the signed-in organization from the bearer token
async fn authenticate(state: &AppState, req: &HttpRequest) -> Result<Organization, HttpResponse> {
    let Some(token) = session_token(req) else {
        return Err(auth_error_response(&AuthError::InvalidSession));
    };

    state
        .sessions
        .get(token)
        .await
        .ok_or_else(|| auth_error_response(&AuthError::InvalidSession))
}

/// Organization sign-up
///
/// POST /api/v1/organizations/signup
///
/// Creates an unverified organization and signs it in.
async fn signup(state: web::Data<AppState>, req: web::Json<SignupRequest>) -> impl Responder {
    let organization = match state.auth.signup(&req).await {
        Ok(organization) => organization,
        Err(e) => {
            tracing::info!("Signup rejected: {}", e);
            return auth_error_response(&e);
        }
    };

    let token = state.sessions.create(organization.clone()).await;

    HttpResponse::Created().json(AuthResponse {
        token,
        message: format!("Welcome to TeamConnect, {}!", organization.name),
        organization,
    })
}

/// Organization sign-in
///
/// POST /api/v1/organizations/login
///
/// Request body:
/// ```json
/// { "email": "demo@organization.com", "password": "password123" }
/// ```
async fn login(state: web::Data<AppState>, req: web::Json<LoginRequest>) -> impl Responder {
    let organization = match state.auth.login(&req).await {
        Ok(organization) => organization,
        Err(e) => return auth_error_response(&e),
    };

    let token = state.sessions.create(organization.clone()).await;

    HttpResponse::Ok().json(AuthResponse {
        token,
        message: format!("Signed in as {}", organization.name),
        organization,
    })
}

/// End the current session
async fn logout(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    match session_token(&req) {
        Some(token) if state.sessions.revoke(token).await => HttpResponse::NoContent().finish(),
        _ => auth_error_response(&AuthError::InvalidSession),
    }
}

/// Organization dashboard: profile, stats and listings with moderation status
async fn dashboard(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let organization = match authenticate(&state, &req).await {
        Ok(organization) => organization,
        Err(response) => return response,
    };

    let listings = state.catalog.listings().read().await;
    let stats = DashboardStats::from_listings(listings.for_organization(&organization.id));
    let activities = listings
        .for_organization(&organization.id)
        .map(ListingSummary::from)
        .collect();

    HttpResponse::Ok().json(DashboardResponse {
        organization,
        stats,
        activities,
    })
}

async fn list_listings(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let organization = match authenticate(&state, &req).await {
        Ok(organization) => organization,
        Err(response) => return response,
    };

    let listings = state.catalog.listings().read().await;
    let activities: Vec<ListingSummary> = listings
        .for_organization(&organization.id)
        .map(ListingSummary::from)
        .collect();

    HttpResponse::Ok().json(activities)
}

/// Create a listing
///
/// POST /api/v1/organizations/me/activities
///
/// New listings start unapproved. Coordinates default to the city's centre,
/// then to the default map centre.
async fn create_listing(
    state: web::Data<AppState>,
    req: web::Json<CreateActivityRequest>,
    http_req: HttpRequest,
) -> impl Responder {
    let organization = match authenticate(&state, &http_req).await {
        Ok(organization) => organization,
        Err(response) => return response,
    };

    if let Err(errors) = req.validate() {
        return validation_failed(errors.to_string());
    }

    let draft = match ListingDraft::from_request(req.into_inner(), &organization) {
        Ok(draft) => draft,
        Err(e) => return listing_error_response(&e),
    };

    let coordinates = draft
        .coordinates
        .or_else(|| state.locator.geocoder().locate_city(&draft.city, &draft.state))
        .unwrap_or_else(|| {
            tracing::warn!(
                "No coordinates for {}, {}; using the default map centre",
                draft.city,
                draft.state
            );
            DEFAULT_MAP_CENTER
        });

    let activity = state
        .catalog
        .listings()
        .write()
        .await
        .create(&organization, draft, coordinates);

    HttpResponse::Created().json(activity)
}

/// Edit a listing owned by the signed-in organization
async fn edit_listing(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<ActivityUpdateRequest>,
    http_req: HttpRequest,
) -> impl Responder {
    let organization = match authenticate(&state, &http_req).await {
        Ok(organization) => organization,
        Err(response) => return response,
    };

    if let Err(errors) = req.validate() {
        return validation_failed(errors.to_string());
    }

    let result = state
        .catalog
        .listings()
        .write()
        .await
        .edit(&organization.id, &path, req.into_inner());

    match result {
        Ok(activity) => HttpResponse::Ok().json(activity),
        Err(e) => listing_error_response(&e),
    }
}

/// Delete a listing owned by the signed-in organization
async fn delete_listing(
    state: web::Data<AppState>,
    path: web::Path<String>,
    http_req: HttpRequest,
) -> impl Responder {
    let organization = match authenticate(&state, &http_req).await {
        Ok(organization) => organization,
        Err(response) => return response,
    };

    let result = state
        .catalog
        .listings()
        .write()
        .await
        .delete(&organization.id, &path);

    match result {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => listing_error_response(&e),
    }
}
