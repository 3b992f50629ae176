// Unit tests for TeamConnect

use chrono::NaiveDate;
use teamconnect::core::{
    calculate_distance, is_date_in_range, matches_group_size, matches_price, parse_group_size,
    ActivityFinder, FilterPolicy, GroupSizeMatching, WeekStart,
};
use teamconnect::models::{
    Activity, Category, CategoryFilter, Coordinates, DateRange, DistanceRange, FilterSelection,
    GroupSizeBucket, PriceRange, UserLocation,
};
use teamconnect::services::load_seed_catalog;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seed() -> Vec<Activity> {
    load_seed_catalog(None).unwrap()
}

fn with_price(price: f64) -> Activity {
    let mut activity = seed().remove(0);
    activity.price = price;
    activity
}

#[test]
fn test_distance_is_symmetric() {
    let pairs = [
        (37.7749, -122.4194, 40.7128, -74.0060),
        (30.2672, -97.7431, 47.6062, -122.3321),
        (-33.8688, 151.2093, 51.5074, -0.1278),
    ];

    for (lat1, lng1, lat2, lng2) in pairs {
        assert_eq!(
            calculate_distance(lat1, lng1, lat2, lng2),
            calculate_distance(lat2, lng2, lat1, lng1)
        );
    }
}

#[test]
fn test_distance_to_self_is_zero() {
    assert_eq!(calculate_distance(41.8781, -87.6298, 41.8781, -87.6298), 0);
}

#[test]
fn test_distance_san_francisco_to_new_york() {
    let distance = calculate_distance(37.7749, -122.4194, 40.7128, -74.0060);
    assert!((2560..=2575).contains(&distance), "got {}", distance);
}

#[test]
fn test_seed_catalog_cooking_and_food() {
    let selection = FilterSelection {
        category: CategoryFilter::Only(Category::CookingAndFood),
        ..Default::default()
    };

    let result = ActivityFinder::default().find_activities(seed(), None, &selection, date(2025, 1, 8));

    assert_eq!(result.total_activities, 12);
    assert_eq!(result.count(), 2);
    let ids: Vec<&str> = result.activities.iter().map(|a| a.activity.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "10"]);
}

#[test]
fn test_price_bracket_boundaries() {
    assert!(matches_price(&with_price(50.0), PriceRange::UpTo50));
    assert!(matches_price(&with_price(50.0), PriceRange::From50To75));
    assert!(!matches_price(&with_price(50.01), PriceRange::UpTo50));
    assert!(matches_price(&with_price(100.0), PriceRange::From100));
    assert!(!matches_price(&with_price(100.0), PriceRange::UpTo50));
}

#[test]
fn test_price_filter_on_seed_catalog() {
    let selection = FilterSelection {
        price: PriceRange::UpTo50,
        ..Default::default()
    };

    let result = ActivityFinder::default().find_activities(seed(), None, &selection, date(2025, 1, 8));

    assert_eq!(result.count(), 1);
    assert!(result.activities.iter().all(|a| a.activity.price <= 50.0));
}

#[test]
fn test_sorted_nearest_first_with_location() {
    let austin = UserLocation::new("Austin", "TX", 30.2672, -97.7431);

    let result = ActivityFinder::default().find_activities(
        seed(),
        Some(&austin),
        &FilterSelection::default(),
        date(2025, 1, 8),
    );

    assert!(result.sorted_by_distance);
    assert_eq!(result.activities[0].activity.id, "3");
    assert_eq!(result.activities[0].distance, Some(0));

    let distances: Vec<u32> = result.activities.iter().map(|a| a.distance.unwrap()).collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_no_location_keeps_catalog_order() {
    let result = ActivityFinder::default().find_activities(
        seed(),
        None,
        &FilterSelection::default(),
        date(2025, 1, 8),
    );

    assert!(!result.sorted_by_distance);
    assert!(result.activities.iter().all(|a| a.distance.is_none()));
    let ids: Vec<&str> = result.activities.iter().map(|a| a.activity.id.as_str()).collect();
    assert_eq!(ids[..3], ["1", "2", "3"]);
}

#[test]
fn test_distance_buckets_from_san_francisco() {
    let san_francisco = UserLocation::new("San Francisco", "CA", 37.7749, -122.4194);
    let finder = ActivityFinder::default();

    for distance in [DistanceRange::Within10, DistanceRange::SameCity] {
        let selection = FilterSelection {
            distance,
            ..Default::default()
        };
        let result = finder.find_activities(seed(), Some(&san_francisco), &selection, date(2025, 1, 8));
        let mut ids: Vec<&str> = result.activities.iter().map(|a| a.activity.id.as_str()).collect();
        ids.sort();
        assert_eq!(ids, vec!["1", "6"], "{:?}", distance);
    }
}

#[test]
fn test_distance_bucket_ignored_without_location() {
    let selection = FilterSelection {
        distance: DistanceRange::Within10,
        ..Default::default()
    };
    let result = ActivityFinder::default().find_activities(seed(), None, &selection, date(2025, 1, 8));
    assert_eq!(result.count(), 12);
}

#[test]
fn test_today_filter_requires_exact_date() {
    let finder = ActivityFinder::default();
    let selection = FilterSelection {
        date: DateRange::Today,
        ..Default::default()
    };

    let result = finder.find_activities(seed(), None, &selection, date(2025, 1, 8));
    let ids: Vec<&str> = result.activities.iter().map(|a| a.activity.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3", "8", "12"]);

    // No seed activity runs on Jan 2
    let result = finder.find_activities(seed(), None, &selection, date(2025, 1, 2));
    assert_eq!(result.count(), 0);
}

#[test]
fn test_date_filter_combines_with_category() {
    let selection = FilterSelection {
        category: CategoryFilter::Only(Category::Adventure),
        date: DateRange::Today,
        ..Default::default()
    };

    // Denver (Adventure) runs on Jan 4; Chicago (Adventure) does not
    let result = ActivityFinder::default().find_activities(seed(), None, &selection, date(2025, 1, 4));
    let ids: Vec<&str> = result.activities.iter().map(|a| a.activity.id.as_str()).collect();
    assert_eq!(ids, vec!["4"]);
}

#[test]
fn test_week_start_policy() {
    // Sunday 2025-01-12
    let sunday = date(2025, 1, 12);
    assert!(is_date_in_range(date(2025, 1, 18), DateRange::ThisWeek, sunday, WeekStart::Sunday));
    assert!(!is_date_in_range(date(2025, 1, 18), DateRange::ThisWeek, sunday, WeekStart::Monday));
    assert!(is_date_in_range(date(2025, 1, 6), DateRange::ThisWeek, sunday, WeekStart::Monday));
}

#[test]
fn test_group_size_policies() {
    let mut activity = seed().remove(0);
    activity.group_size = "8-20 people".to_string();

    assert_eq!(
        parse_group_size(&activity.group_size).map(|r| (r.min, r.max)),
        Some((8, Some(20)))
    );

    for policy in [GroupSizeMatching::Range, GroupSizeMatching::Substring] {
        assert!(matches_group_size(&activity, GroupSizeBucket::All, policy));
        assert!(matches_group_size(&activity, GroupSizeBucket::Small, policy));
    }
    assert!(matches_group_size(&activity, GroupSizeBucket::Large, GroupSizeMatching::Range));
}

#[test]
fn test_has_active_filters() {
    assert!(!FilterSelection::default().has_active_filters());

    let selection = FilterSelection {
        group_size: GroupSizeBucket::Medium,
        ..Default::default()
    };
    assert!(selection.has_active_filters());
}

#[test]
fn test_finder_policy_round_trip() {
    let policy = FilterPolicy {
        week_start: WeekStart::Monday,
        group_size_matching: GroupSizeMatching::Substring,
    };
    let finder = ActivityFinder::new(policy);
    assert_eq!(finder.policy().week_start, WeekStart::Monday);
}

#[test]
fn test_coordinates_in_seed_catalog() {
    let seed = seed();
    let first = &seed[0];
    assert_eq!(first.coordinates, Coordinates::new(37.7749, -122.4194));
    assert_eq!(first.next_available_date(date(2025, 1, 9)), Some(date(2025, 1, 10)));
    assert_eq!(first.next_available_date(date(2025, 2, 1)), None);
}
