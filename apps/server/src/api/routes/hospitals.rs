//! Hospital directory routes
//!
//! Static segments take priority over `:hospital_id`, so
//! `/hospitals/positioning/all` never reaches the positioning handler.

use crate::api::handlers::{benchmarking, directory, geography};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn hospital_routes() -> Router<AppState> {
    Router::new()
        .route("/hospitals", get(directory::hospitals))
        .route("/hospital_addresses", get(directory::addresses))
        .route("/hospitals/full-profile", get(directory::full_profiles))
        .route("/hospitals/basic", get(directory::basic_listing))
        .route("/hospitals/contacts", get(directory::contacts))
        .route("/hospitals/specialties", get(directory::specialties))
        .route("/hospital/profile/:hospital_id", get(directory::hospital_profile))
        .route("/hospitals/geographic-coverage", get(geography::geographic_coverage))
        .route("/hospitals/locations", get(geography::locations))
        .route("/hospitals/dashboard", get(geography::dashboard))
        .route("/hospitals/by-city", get(geography::hospitals_by_city))
        .route("/hospitals/positioning/all", get(benchmarking::positioning_all))
        .route("/hospitals/:hospital_id/positioning", get(benchmarking::positioning))
        .route("/api/hospital-doctors-summary", get(directory::doctors_summary))
        .route("/api/doctors/:hospital_id", get(directory::hospital_doctors))
        .route("/api/wards-rooms", get(directory::wards))
}
