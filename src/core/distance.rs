use crate::models::Coordinates;

/// Earth's radius in miles
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Calculate the Haversine distance between two points in miles
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lng1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lng2` - Longitude of second point in degrees
///
/// # Returns
/// Unrounded distance in miles
#[inline]
pub fn haversine_miles(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Great-circle distance in whole miles, rounded to nearest
///
/// Coordinates are not range-checked.
#[inline]
pub fn calculate_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> u32 {
    haversine_miles(lat1, lng1, lat2, lng2).round() as u32
}

/// [`calculate_distance`] over two coordinate pairs
#[inline]
pub fn distance_between(from: &Coordinates, to: &Coordinates) -> u32 {
    calculate_distance(from.lat, from.lng, to.lat, to.lng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_san_francisco_to_new_york() {
        // 3959-mile radius puts this pair at 2565.85 before rounding
        let distance = calculate_distance(37.7749, -122.4194, 40.7128, -74.0060);
        assert_eq!(distance, 2566, "Distance should be 2566 miles, got {}", distance);
    }

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(calculate_distance(40.7128, -74.0060, 40.7128, -74.0060), 0);
    }

    #[test]
    fn test_symmetry() {
        let there = calculate_distance(30.2672, -97.7431, 47.6062, -122.3321);
        let back = calculate_distance(47.6062, -122.3321, 30.2672, -97.7431);
        assert_eq!(there, back);
    }

    #[test]
    fn test_rounds_to_nearest_mile() {
        // Two San Francisco venues just under a mile apart
        let raw = haversine_miles(37.7749, -122.4194, 37.7849, -122.4094);
        assert!(raw > 0.5 && raw < 1.5);
        assert_eq!(calculate_distance(37.7749, -122.4194, 37.7849, -122.4094), raw.round() as u32);
    }

    #[test]
    fn test_out_of_range_input_does_not_panic() {
        let distance = calculate_distance(123.0, 400.0, -95.0, -720.0);
        assert!(distance <= 12_500);
    }

    #[test]
    fn test_distance_between_coordinates() {
        let sf = Coordinates::new(37.7749, -122.4194);
        let la = Coordinates::new(34.0522, -118.2437);
        assert_eq!(distance_between(&sf, &la), calculate_distance(37.7749, -122.4194, 34.0522, -118.2437));
    }
}
