//! TeamConnect - team activity directory and booking-request service
//!
//! This library provides the browse pipeline (Haversine distance plus
//! category, price, group size, distance and date filters), organization
//! listing management, mock organization auth and location detection, served
//! as a JSON API with actix-web.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{calculate_distance, ActivityFinder, FilterPolicy, SearchResult};
pub use models::{Activity, Category, Coordinates, FilterSelection, UserLocation};
pub use services::{load_seed_catalog, Catalog};
