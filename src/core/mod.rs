// Core algorithm exports
pub mod calendar;
pub mod distance;
pub mod filters;
pub mod finder;

pub use calendar::{is_date_in_range, week_bounds, weekend_bounds, WeekStart};
pub use distance::{calculate_distance, distance_between, haversine_miles};
pub use filters::{
    matches_category, matches_date, matches_distance, matches_group_size, matches_price,
    parse_group_size, GroupSizeMatching, GroupSizeRange,
};
pub use finder::{ActivityFinder, FilterPolicy, SearchResult};
