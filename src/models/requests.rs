use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::domain::{Category, Coordinates, UserLocation};
use super::selection::{
    CategoryFilter, DateRange, DistanceRange, FilterSelection, GroupSizeBucket, PriceRange,
};

fn location_from_parts(
    lat: Option<f64>,
    lng: Option<f64>,
    city: Option<&String>,
    state: Option<&String>,
) -> Option<UserLocation> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => Some(UserLocation::new(
            city.cloned().unwrap_or_default(),
            state.cloned().unwrap_or_default(),
            lat,
            lng,
        )),
        _ => None,
    }
}

/// Browse query string
///
/// `GET /api/v1/activities?category=Adventure&price=50-75&lat=30.26&lng=-97.74&city=Austin&state=TX`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default)]
    pub price: PriceRange,
    #[serde(default)]
    pub group_size: GroupSizeBucket,
    #[serde(default)]
    pub distance: DistanceRange,
    #[serde(default)]
    pub date: DateRange,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl SearchQuery {
    pub fn selection(&self) -> FilterSelection {
        FilterSelection {
            category: self.category,
            price: self.price,
            group_size: self.group_size,
            distance: self.distance,
            date: self.date,
        }
    }

    /// User location, present only when both coordinates are given
    pub fn location(&self) -> Option<UserLocation> {
        location_from_parts(self.lat, self.lng, self.city.as_ref(), self.state.as_ref())
    }
}

/// Optional user location for the detail view
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl DetailQuery {
    pub fn location(&self) -> Option<UserLocation> {
        location_from_parts(self.lat, self.lng, self.city.as_ref(), self.state.as_ref())
    }
}

/// Request to book an activity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[validate(length(min = 1))]
    pub activity_id: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: Option<String>,
}

/// Organization sign-in
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub password: String,
}

/// Organization sign-up form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupRequest {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub website: Option<String>,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub contact_person: String,
}

/// New listing form
///
/// List fields may contain blank entries; they are dropped before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateActivityRequest {
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub category: Option<Category>,
    pub duration: String,
    pub group_size: String,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    pub location: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub image_url: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub highlights: Vec<String>,
    pub included: Vec<String>,
    pub available_dates: Vec<String>,
    pub available_times: Vec<String>,
}

/// Partial listing update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityUpdateRequest {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub category: Option<Category>,
    pub duration: Option<String>,
    pub group_size: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub highlights: Option<Vec<String>>,
    pub included: Option<Vec<String>>,
    #[validate(length(min = 1))]
    pub available_dates: Option<Vec<NaiveDate>>,
    #[validate(length(min = 1))]
    pub available_times: Option<Vec<String>>,
}

/// Error reported by the client's geolocation capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportedPositionError {
    /// 1 = permission denied, 2 = position unavailable, 3 = timeout
    pub code: u16,
    #[serde(default)]
    pub message: String,
}

/// Position fix (or failure) reported by the client for reverse geocoding
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectLocationRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub error: Option<ReportedPositionError>,
}

/// Manual city search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CitySearchQuery {
    #[serde(default)]
    pub q: String,
}
