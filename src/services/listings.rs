use crate::models::{
    Activity, ActivityUpdateRequest, Category, Coordinates, CreateActivityRequest, Organization,
};
use chrono::NaiveDate;
use thiserror::Error;

/// Rating shown on listings that have not been reviewed yet
const NEW_LISTING_RATING: f64 = 4.5;

/// Errors raised by listing validation and mutation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ListingError {
    #[error("Please fill in all required fields.")]
    MissingRequiredFields,

    #[error("Please add at least one highlight and one included item.")]
    MissingHighlights,

    #[error("Please add at least one available date and time.")]
    MissingSchedule,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Activity not found: {0}")]
    NotFound(String),
}

fn non_blank(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .filter(|item| !item.trim().is_empty())
        .collect()
}

/// A validated new listing, ready to be stored
#[derive(Debug, Clone)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub category: Category,
    pub duration: String,
    pub group_size: String,
    pub price: f64,
    pub location: String,
    pub city: String,
    pub state: String,
    pub image_url: String,
    pub coordinates: Option<Coordinates>,
    pub highlights: Vec<String>,
    pub included: Vec<String>,
    pub available_dates: Vec<NaiveDate>,
    pub available_times: Vec<String>,
}

impl ListingDraft {
    /// Validate a listing form on behalf of `organization`
    ///
    /// Checks run in form order: required fields, then highlights/included,
    /// then dates/times. Blank list entries are dropped first. City and state
    /// fall back to the organization's address.
    pub fn from_request(
        request: CreateActivityRequest,
        organization: &Organization,
    ) -> Result<Self, ListingError> {
        let (category, price) = match (request.category, request.price) {
            (Some(category), Some(price))
                if !request.title.is_empty() && !request.description.is_empty() =>
            {
                (category, price)
            }
            _ => return Err(ListingError::MissingRequiredFields),
        };

        let highlights = non_blank(request.highlights);
        let included = non_blank(request.included);
        let raw_dates = non_blank(request.available_dates);
        let available_times = non_blank(request.available_times);

        if highlights.is_empty() || included.is_empty() {
            return Err(ListingError::MissingHighlights);
        }

        if raw_dates.is_empty() || available_times.is_empty() {
            return Err(ListingError::MissingSchedule);
        }

        let mut available_dates = raw_dates
            .iter()
            .map(|raw| {
                raw.trim()
                    .parse::<NaiveDate>()
                    .map_err(|_| ListingError::InvalidDate(raw.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        available_dates.sort();
        available_dates.dedup();

        let city = request
            .city
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| organization.city.clone());
        let state = request
            .state
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| organization.state.clone());

        Ok(Self {
            title: request.title,
            description: request.description,
            short_description: request.short_description,
            category,
            duration: request.duration,
            group_size: request.group_size,
            price,
            location: request.location,
            city,
            state,
            image_url: request.image_url.unwrap_or_default(),
            coordinates: request.coordinates,
            highlights,
            included,
            available_dates,
            available_times,
        })
    }
}

/// In-memory collection of organization-authored listings
#[derive(Debug, Default)]
pub struct ListingStore {
    activities: Vec<Activity>,
}

impl ListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> &[Activity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    pub fn for_organization<'a>(
        &'a self,
        organization_id: &'a str,
    ) -> impl Iterator<Item = &'a Activity> + 'a {
        self.activities
            .iter()
            .filter(move |a| a.is_owned_by(organization_id))
    }

    /// Append a new, unapproved listing
    pub fn create(
        &mut self,
        organization: &Organization,
        draft: ListingDraft,
        coordinates: Coordinates,
    ) -> Activity {
        let activity = Activity {
            id: format!("org-activity-{}", uuid::Uuid::new_v4().simple()),
            title: draft.title,
            description: draft.description,
            short_description: draft.short_description,
            category: draft.category,
            duration: draft.duration,
            group_size: draft.group_size,
            price: draft.price,
            rating: NEW_LISTING_RATING,
            review_count: 0,
            image_url: draft.image_url,
            location: draft.location,
            city: draft.city,
            state: draft.state,
            coordinates,
            highlights: draft.highlights,
            included: draft.included,
            available_dates: draft.available_dates,
            available_times: draft.available_times,
            organization_id: Some(organization.id.clone()),
            organization_name: Some(organization.name.clone()),
            is_approved: Some(false),
        };

        tracing::info!(
            "Organization {} created listing {} ({})",
            organization.id,
            activity.id,
            activity.title
        );

        self.activities.push(activity.clone());
        activity
    }

    /// Merge `update` into the listing with `id` owned by `organization_id`
    ///
    /// Blank list entries are dropped first; a supplied list that ends up empty
    /// rejects the whole edit.
    pub fn edit(
        &mut self,
        organization_id: &str,
        id: &str,
        update: ActivityUpdateRequest,
    ) -> Result<Activity, ListingError> {
        let index = self
            .activities
            .iter()
            .position(|a| a.id == id && a.is_owned_by(organization_id))
            .ok_or_else(|| ListingError::NotFound(id.to_string()))?;

        // Supplied lists must still hold an entry once blanks are dropped
        let highlights = update.highlights.map(non_blank);
        let included = update.included.map(non_blank);
        let available_times = update.available_times.map(non_blank);

        let emptied = |list: &Option<Vec<String>>| list.as_ref().is_some_and(Vec::is_empty);
        if emptied(&highlights) || emptied(&included) {
            return Err(ListingError::MissingHighlights);
        }
        if emptied(&available_times)
            || update.available_dates.as_ref().is_some_and(Vec::is_empty)
        {
            return Err(ListingError::MissingSchedule);
        }

        let activity = &mut self.activities[index];

        if let Some(title) = update.title {
            activity.title = title;
        }
        if let Some(description) = update.description {
            activity.description = description;
        }
        if let Some(short_description) = update.short_description {
            activity.short_description = short_description;
        }
        if let Some(category) = update.category {
            activity.category = category;
        }
        if let Some(duration) = update.duration {
            activity.duration = duration;
        }
        if let Some(group_size) = update.group_size {
            activity.group_size = group_size;
        }
        if let Some(price) = update.price {
            activity.price = price;
        }
        if let Some(location) = update.location {
            activity.location = location;
        }
        if let Some(image_url) = update.image_url {
            activity.image_url = image_url;
        }
        if let Some(coordinates) = update.coordinates {
            activity.coordinates = coordinates;
        }
        if let Some(highlights) = highlights {
            activity.highlights = highlights;
        }
        if let Some(included) = included {
            activity.included = included;
        }
        if let Some(mut dates) = update.available_dates {
            dates.sort();
            dates.dedup();
            activity.available_dates = dates;
        }
        if let Some(times) = available_times {
            activity.available_times = times;
        }

        tracing::debug!("Listing {} updated by {}", id, organization_id);
        Ok(activity.clone())
    }

    /// Remove the listing with `id` owned by `organization_id`
    pub fn delete(&mut self, organization_id: &str, id: &str) -> Result<Activity, ListingError> {
        let index = self
            .activities
            .iter()
            .position(|a| a.id == id && a.is_owned_by(organization_id))
            .ok_or_else(|| ListingError::NotFound(id.to_string()))?;

        let removed = self.activities.remove(index);
        tracing::info!("Organization {} deleted listing {}", organization_id, id);
        Ok(removed)
    }
}
