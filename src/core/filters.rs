use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::calendar::{is_date_in_range, WeekStart};
use crate::models::{
    Activity, CategoryFilter, DateRange, DistanceRange, GroupSizeBucket, ListedActivity,
    PriceRange, UserLocation,
};

/// How the free-text group size is compared against a bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupSizeMatching {
    /// Parse "8-20 people" into a headcount range and test for overlap
    #[default]
    Range,
    /// Legacy substring heuristic ("8-" counts as small and medium)
    Substring,
}

/// Parsed headcount range; `max` is `None` for open-ended sizes like "15+"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSizeRange {
    pub min: u32,
    pub max: Option<u32>,
}

/// Parse a group size such as "8-20 people", "15+ people" or "12 people"
pub fn parse_group_size(text: &str) -> Option<GroupSizeRange> {
    let text = text.trim();
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let min_len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let min: u32 = rest[..min_len].parse().ok()?;
    let rest = rest[min_len..].trim_start();

    if rest.starts_with('+') {
        return Some(GroupSizeRange { min, max: None });
    }

    if let Some(upper) = rest.strip_prefix(|c: char| c == '-' || c == '–') {
        let upper = upper.trim_start();
        let max_len = upper.find(|c: char| !c.is_ascii_digit()).unwrap_or(upper.len());
        if let Ok(max) = upper[..max_len].parse::<u32>() {
            return Some(GroupSizeRange {
                min: min.min(max),
                max: Some(min.max(max)),
            });
        }
    }

    Some(GroupSizeRange { min, max: Some(min) })
}

#[inline]
pub fn matches_category(activity: &Activity, filter: CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Only(category) => activity.category == category,
    }
}

#[inline]
pub fn matches_price(activity: &Activity, range: PriceRange) -> bool {
    range.contains(activity.price)
}

/// Check the activity's free-text group size against a bucket
pub fn matches_group_size(
    activity: &Activity,
    bucket: GroupSizeBucket,
    matching: GroupSizeMatching,
) -> bool {
    let Some((low, high)) = bucket.bounds() else {
        return true;
    };

    match matching {
        GroupSizeMatching::Range => match parse_group_size(&activity.group_size) {
            Some(range) => {
                let below_high = high.map_or(true, |high| range.min <= high);
                let above_low = range.max.map_or(true, |max| max >= low);
                below_high && above_low
            }
            None => false,
        },
        GroupSizeMatching::Substring => {
            let text = activity.group_size.to_lowercase();
            let needles: &[&str] = match bucket {
                GroupSizeBucket::Small => &["4-", "5-", "6-", "8-"],
                GroupSizeBucket::Medium => &["8-", "10-", "15"],
                GroupSizeBucket::Large => &["15", "20", "25"],
                GroupSizeBucket::All => return true,
            };
            needles.iter().any(|needle| text.contains(needle))
        }
    }
}

/// Distance bucket check; a no-op without a user location
pub fn matches_distance(
    listed: &ListedActivity,
    location: Option<&UserLocation>,
    range: DistanceRange,
) -> bool {
    let Some(location) = location else {
        return true;
    };

    match range {
        DistanceRange::All => true,
        DistanceRange::SameCity => listed.activity.city == location.city,
        _ => {
            let distance = listed.distance.unwrap_or(0);
            range.max_miles().map_or(true, |max| distance <= max)
        }
    }
}

/// True if any available date falls inside the selected window
pub fn matches_date(
    activity: &Activity,
    range: DateRange,
    today: NaiveDate,
    week_start: WeekStart,
) -> bool {
    if range == DateRange::All {
        return true;
    }

    activity
        .available_dates
        .iter()
        .any(|date| is_date_in_range(*date, range, today, week_start))
}
