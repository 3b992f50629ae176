use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::domain::Category;

/// Category filter; `All` disables the constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => "All".to_string(),
            CategoryFilter::Only(category) => category.as_str().to_string(),
        }
    }
}

/// Fixed price brackets; the boundaries are inclusive on both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PriceRange {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "0-50")]
    UpTo50,
    #[serde(rename = "50-75")]
    From50To75,
    #[serde(rename = "75-100")]
    From75To100,
    /// An unencoded `+` in a query string arrives as a space
    #[serde(rename = "100+", alias = "100 ", alias = "100")]
    From100,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        match self {
            PriceRange::All => true,
            PriceRange::UpTo50 => price <= 50.0,
            PriceRange::From50To75 => (50.0..=75.0).contains(&price),
            PriceRange::From75To100 => (75.0..=100.0).contains(&price),
            PriceRange::From100 => price >= 100.0,
        }
    }
}

/// Coarse group-size buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupSizeBucket {
    #[default]
    All,
    /// 4-8 people
    Small,
    /// 8-15 people
    Medium,
    /// 15+ people
    Large,
}

impl GroupSizeBucket {
    /// Inclusive headcount bounds; `None` for the upper bound means open-ended
    pub fn bounds(&self) -> Option<(u32, Option<u32>)> {
        match self {
            GroupSizeBucket::All => None,
            GroupSizeBucket::Small => Some((4, Some(8))),
            GroupSizeBucket::Medium => Some((8, Some(15))),
            GroupSizeBucket::Large => Some((15, None)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceRange {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "10")]
    Within10,
    #[serde(rename = "25")]
    Within25,
    #[serde(rename = "50")]
    Within50,
    #[serde(rename = "same-city")]
    SameCity,
}

impl DistanceRange {
    pub fn max_miles(&self) -> Option<u32> {
        match self {
            DistanceRange::Within10 => Some(10),
            DistanceRange::Within25 => Some(25),
            DistanceRange::Within50 => Some(50),
            DistanceRange::All | DistanceRange::SameCity => None,
        }
    }
}

/// Relative calendar windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateRange {
    #[default]
    All,
    Today,
    Tomorrow,
    ThisWeek,
    NextWeek,
    ThisWeekend,
    Weekdays,
    Weekends,
}

/// The full set of browse filters. Every field defaults to "no constraint".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSelection {
    pub category: CategoryFilter,
    pub price: PriceRange,
    pub group_size: GroupSizeBucket,
    pub distance: DistanceRange,
    pub date: DateRange,
}

impl FilterSelection {
    pub fn has_active_filters(&self) -> bool {
        *self != FilterSelection::default()
    }
}
