// Model exports
pub mod domain;
pub mod requests;
pub mod responses;
pub mod selection;

pub use domain::{Activity, Category, Coordinates, DashboardStats, ListedActivity, Organization, UserLocation};
pub use requests::{
    ActivityUpdateRequest, BookingRequest, CitySearchQuery, CreateActivityRequest, DetailQuery,
    DetectLocationRequest, LoginRequest, SearchQuery, SignupRequest,
};
pub use responses::{
    ActivityDetailResponse, AuthResponse, BookingResponse, DashboardResponse, ErrorResponse,
    HealthResponse, ListingSummary, SearchResponse,
};
pub use selection::{
    CategoryFilter, DateRange, DistanceRange, FilterSelection, GroupSizeBucket, PriceRange,
};
