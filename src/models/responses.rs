use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::domain::{Activity, DashboardStats, ListedActivity, Organization, UserLocation};

/// Response for the browse endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub activities: Vec<ListedActivity>,
    pub count: usize,
    pub total_activities: usize,
    pub sorted_by_distance: bool,
    pub has_active_filters: bool,
    pub location: Option<UserLocation>,
    /// e.g. "3 activities found • Sorted by distance from Austin, TX"
    pub summary: String,
}

/// Single activity with display extras
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDetailResponse {
    pub activity: Activity,
    pub distance: Option<u32>,
    pub next_available_date: Option<NaiveDate>,
}

/// Booking confirmation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub success: bool,
    pub booking_id: String,
    pub message: String,
}

/// Successful sign-in or sign-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub organization: Organization,
    pub message: String,
}

/// Listing row on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingSummary {
    #[serde(flatten)]
    pub activity: Activity,
    pub status: String,
}

impl From<&Activity> for ListingSummary {
    fn from(activity: &Activity) -> Self {
        Self {
            status: activity.status_label().to_string(),
            activity: activity.clone(),
        }
    }
}

/// Organization dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub organization: Organization,
    pub stats: DashboardStats,
    pub activities: Vec<ListingSummary>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub catalog_size: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code,
        }
    }
}
