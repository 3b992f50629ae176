use crate::models::Activity;
use crate::services::listings::ListingStore;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tokio::sync::RwLock;

/// Seed catalog bundled into the binary
const SEED_CATALOG: &str = include_str!("../../data/activities.json");

/// Errors that can occur while loading the seed catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid catalog entry: {0}")]
    InvalidEntry(String),
}

/// Load the seed catalog from `path`, or the bundled copy when `None`
pub fn load_seed_catalog(path: Option<&Path>) -> Result<Vec<Activity>, CatalogError> {
    let activities: Vec<Activity> = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str(&raw)?
        }
        None => serde_json::from_str(SEED_CATALOG)?,
    };

    let mut seen = HashSet::new();
    for activity in &activities {
        if !seen.insert(activity.id.as_str()) {
            return Err(CatalogError::InvalidEntry(format!(
                "duplicate activity id {}",
                activity.id
            )));
        }
        if activity.available_dates.is_empty() {
            return Err(CatalogError::InvalidEntry(format!(
                "activity {} has no available dates",
                activity.id
            )));
        }
    }

    Ok(activities)
}

/// Browseable catalog: the immutable seed entries followed by organization listings
pub struct Catalog {
    seed: Vec<Activity>,
    listings: RwLock<ListingStore>,
}

impl Catalog {
    pub fn new(seed: Vec<Activity>) -> Self {
        Self {
            seed,
            listings: RwLock::new(ListingStore::new()),
        }
    }

    pub fn seed(&self) -> &[Activity] {
        &self.seed
    }

    /// Organization listings, guarded for mutation
    pub fn listings(&self) -> &RwLock<ListingStore> {
        &self.listings
    }

    /// Seed entries then organization listings, both in insertion order
    pub async fn all_activities(&self) -> Vec<Activity> {
        let listings = self.listings.read().await;
        self.seed
            .iter()
            .chain(listings.all())
            .cloned()
            .collect()
    }

    pub async fn find(&self, id: &str) -> Option<Activity> {
        if let Some(activity) = self.seed.iter().find(|a| a.id == id) {
            return Some(activity.clone());
        }
        self.listings.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.seed.len() + self.listings.read().await.len()
    }
}
