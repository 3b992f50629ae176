use chrono::NaiveDate;

use crate::core::{
    calendar::WeekStart,
    distance::distance_between,
    filters::{
        matches_category, matches_date, matches_distance, matches_group_size, matches_price,
        GroupSizeMatching,
    },
};
use crate::models::{Activity, FilterSelection, ListedActivity, UserLocation};

/// Result of running the browse pipeline
#[derive(Debug)]
pub struct SearchResult {
    pub activities: Vec<ListedActivity>,
    /// Catalog size before filtering
    pub total_activities: usize,
    pub sorted_by_distance: bool,
}

impl SearchResult {
    pub fn count(&self) -> usize {
        self.activities.len()
    }
}

/// Locale-dependent knobs of the pipeline
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterPolicy {
    pub week_start: WeekStart,
    pub group_size_matching: GroupSizeMatching,
}

/// Browse pipeline orchestrator
///
/// # Pipeline Stages
/// 1. Distance annotation (only with a user location)
/// 2. Stable nearest-first sort (only with a user location)
/// 3. Category, price, group size, distance and date predicates, ANDed
#[derive(Debug, Clone, Default)]
pub struct ActivityFinder {
    policy: FilterPolicy,
}

impl ActivityFinder {
    pub fn new(policy: FilterPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> FilterPolicy {
        self.policy
    }

    /// Filter and order a catalog for display
    ///
    /// # Arguments
    /// * `catalog` - Seed activities followed by organization listings
    /// * `location` - The user's location, if known
    /// * `selection` - Active filter values
    /// * `today` - Reference date for the date windows
    pub fn find_activities(
        &self,
        catalog: Vec<Activity>,
        location: Option<&UserLocation>,
        selection: &FilterSelection,
        today: NaiveDate,
    ) -> SearchResult {
        let total_activities = catalog.len();

        let mut listed: Vec<ListedActivity> = catalog
            .into_iter()
            .map(|activity| {
                let distance = location
                    .map(|loc| distance_between(&loc.coordinates, &activity.coordinates));
                ListedActivity { activity, distance }
            })
            .collect();

        let sorted_by_distance = location.is_some();
        if sorted_by_distance {
            listed.sort_by_key(|entry| entry.distance.unwrap_or(0));
        }

        let activities: Vec<ListedActivity> = listed
            .into_iter()
            .filter(|entry| matches_category(&entry.activity, selection.category))
            .filter(|entry| matches_price(&entry.activity, selection.price))
            .filter(|entry| {
                matches_group_size(
                    &entry.activity,
                    selection.group_size,
                    self.policy.group_size_matching,
                )
            })
            .filter(|entry| matches_distance(entry, location, selection.distance))
            .filter(|entry| {
                matches_date(&entry.activity, selection.date, today, self.policy.week_start)
            })
            .collect();

        tracing::debug!(
            "Filtered {} of {} activities (sorted by distance: {})",
            activities.len(),
            total_activities,
            sorted_by_distance
        );

        SearchResult {
            activities,
            total_activities,
            sorted_by_distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryFilter, Coordinates, DateRange, DistanceRange, PriceRange};

    fn create_activity(id: &str, city: &str, lat: f64, lng: f64, price: f64) -> Activity {
        Activity {
            id: id.to_string(),
            title: format!("Activity {}", id),
            description: "A test".to_string(),
            short_description: String::new(),
            category: Category::Adventure,
            duration: "3 hours".to_string(),
            group_size: "6-16 people".to_string(),
            price,
            rating: 4.5,
            review_count: 10,
            image_url: String::new(),
            location: String::new(),
            city: city.to_string(),
            state: "XX".to_string(),
            coordinates: Coordinates::new(lat, lng),
            highlights: vec![],
            included: vec![],
            available_dates: vec!["2025-01-10".parse().unwrap()],
            available_times: vec![],
            organization_id: None,
            organization_name: None,
            is_approved: None,
        }
    }

    fn today() -> NaiveDate {
        "2025-01-08".parse().unwrap()
    }

    #[test]
    fn test_no_location_keeps_catalog_order() {
        let finder = ActivityFinder::default();
        let catalog = vec![
            create_activity("1", "New York", 40.7128, -74.0060, 50.0),
            create_activity("2", "San Francisco", 37.7749, -122.4194, 50.0),
        ];

        let result = finder.find_activities(catalog, None, &FilterSelection::default(), today());

        assert!(!result.sorted_by_distance);
        assert_eq!(result.count(), 2);
        assert_eq!(result.activities[0].activity.id, "1");
        assert!(result.activities.iter().all(|a| a.distance.is_none()));
    }

    #[test]
    fn test_location_sorts_nearest_first() {
        let finder = ActivityFinder::default();
        let catalog = vec![
            create_activity("ny", "New York", 40.7128, -74.0060, 50.0),
            create_activity("sf", "San Francisco", 37.7749, -122.4194, 50.0),
            create_activity("la", "Los Angeles", 34.0522, -118.2437, 50.0),
        ];
        let sf = UserLocation::new("San Francisco", "CA", 37.7749, -122.4194);

        let result = finder.find_activities(catalog, Some(&sf), &FilterSelection::default(), today());

        let ids: Vec<&str> = result.activities.iter().map(|a| a.activity.id.as_str()).collect();
        assert_eq!(ids, vec!["sf", "la", "ny"]);
        assert_eq!(result.activities[0].distance, Some(0));
    }

    #[test]
    fn test_equal_distances_keep_catalog_order() {
        let finder = ActivityFinder::default();
        let catalog = vec![
            create_activity("b", "Austin", 30.2672, -97.7431, 50.0),
            create_activity("a", "Austin", 30.2672, -97.7431, 50.0),
        ];
        let austin = UserLocation::new("Austin", "TX", 30.2672, -97.7431);

        let result = finder.find_activities(catalog, Some(&austin), &FilterSelection::default(), today());

        assert_eq!(result.activities[0].activity.id, "b");
        assert_eq!(result.activities[1].activity.id, "a");
    }

    #[test]
    fn test_distance_filter_needs_location() {
        let finder = ActivityFinder::default();
        let catalog = vec![create_activity("ny", "New York", 40.7128, -74.0060, 50.0)];
        let selection = FilterSelection {
            distance: DistanceRange::Within10,
            ..Default::default()
        };

        let without = finder.find_activities(catalog.clone(), None, &selection, today());
        assert_eq!(without.count(), 1);

        let sf = UserLocation::new("San Francisco", "CA", 37.7749, -122.4194);
        let with = finder.find_activities(catalog, Some(&sf), &selection, today());
        assert_eq!(with.count(), 0);
        assert_eq!(with.total_activities, 1);
    }

    #[test]
    fn test_all_predicates_must_pass() {
        let finder = ActivityFinder::default();
        let catalog = vec![
            create_activity("cheap", "Austin", 30.2672, -97.7431, 40.0),
            create_activity("pricey", "Austin", 30.2672, -97.7431, 140.0),
        ];
        let selection = FilterSelection {
            category: CategoryFilter::Only(Category::Adventure),
            price: PriceRange::UpTo50,
            date: DateRange::ThisWeek,
            ..Default::default()
        };

        let result = finder.find_activities(catalog, None, &selection, today());
        assert_eq!(result.count(), 1);
        assert_eq!(result.activities[0].activity.id, "cheap");
    }

    #[test]
    fn test_date_filter_excludes_otherwise_matching() {
        let finder = ActivityFinder::default();
        let catalog = vec![create_activity("1", "Austin", 30.2672, -97.7431, 40.0)];
        let selection = FilterSelection {
            date: DateRange::Today,
            ..Default::default()
        };

        let result = finder.find_activities(catalog, None, &selection, today());
        assert_eq!(result.count(), 0);
    }
}
