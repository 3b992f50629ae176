use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic point in signed degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Activity category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Team Building")]
    TeamBuilding,
    #[serde(rename = "Creative Workshop")]
    CreativeWorkshop,
    #[serde(rename = "Cooking & Food")]
    CookingAndFood,
    #[serde(rename = "Adventure")]
    Adventure,
    #[serde(rename = "Problem Solving")]
    ProblemSolving,
    #[serde(rename = "Wellness")]
    Wellness,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::TeamBuilding,
        Category::CreativeWorkshop,
        Category::CookingAndFood,
        Category::Adventure,
        Category::ProblemSolving,
        Category::Wellness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::TeamBuilding => "Team Building",
            Category::CreativeWorkshop => "Creative Workshop",
            Category::CookingAndFood => "Cooking & Food",
            Category::Adventure => "Adventure",
            Category::ProblemSolving => "Problem Solving",
            Category::Wellness => "Wellness",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

/// Team activity listing
///
/// Seed entries carry no organization fields. Listings created through the
/// organization flow always have `organization_id`, `organization_name` and
/// `is_approved` set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    pub category: Category,
    pub duration: String,
    pub group_size: String,
    pub price: f64,
    pub rating: f64,
    pub review_count: u32,
    #[serde(default)]
    pub image_url: String,
    /// Venue name
    #[serde(default)]
    pub location: String,
    pub city: String,
    pub state: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub included: Vec<String>,
    pub available_dates: Vec<NaiveDate>,
    #[serde(default)]
    pub available_times: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,
}

impl Activity {
    /// Earliest available date on or after `today`
    pub fn next_available_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.available_dates
            .iter()
            .copied()
            .filter(|date| *date >= today)
            .min()
    }

    pub fn is_owned_by(&self, organization_id: &str) -> bool {
        self.organization_id.as_deref() == Some(organization_id)
    }

    pub fn approved(&self) -> bool {
        self.is_approved.unwrap_or(false)
    }

    /// Moderation label shown on the organization dashboard
    pub fn status_label(&self) -> &'static str {
        if self.approved() {
            "Live"
        } else {
            "Pending Review"
        }
    }
}

/// Activity annotated with its distance from the user, in miles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListedActivity {
    #[serde(flatten)]
    pub activity: Activity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<u32>,
}

/// Where the browsing user is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub city: String,
    pub state: String,
    pub coordinates: Coordinates,
}

impl UserLocation {
    pub fn new(city: impl Into<String>, state: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            coordinates: Coordinates::new(lat, lng),
        }
    }

    /// "City, ST"
    pub fn label(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

/// Organization that authors activity listings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub contact_person: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub is_verified: bool,
}

/// Aggregates shown on the organization dashboard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_activities: usize,
    pub total_bookings: u64,
    pub average_rating: f64,
    pub total_revenue: f64,
}

impl DashboardStats {
    /// Review counts stand in for bookings.
    pub fn from_listings<'a, I>(listings: I) -> Self
    where
        I: IntoIterator<Item = &'a Activity>,
    {
        let mut total_activities = 0usize;
        let mut total_bookings = 0u64;
        let mut rating_sum = 0.0;
        let mut total_revenue = 0.0;

        for activity in listings {
            total_activities += 1;
            total_bookings += u64::from(activity.review_count);
            rating_sum += activity.rating;
            total_revenue += activity.price * f64::from(activity.review_count);
        }

        let average_rating = if total_activities > 0 {
            rating_sum / total_activities as f64
        } else {
            0.0
        };

        Self {
            total_activities,
            total_bookings,
            average_rating,
            total_revenue,
        }
    }
}
