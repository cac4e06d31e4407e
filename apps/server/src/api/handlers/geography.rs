//! City coverage and location handlers

use axum::{extract::State, Json};
use medscope_analytics::geography::{
    CityCoverage, DashboardCard, GeographicEntry, HospitalLocation, HospitalsByCity,
    SpecialtyCoverageMatrix,
};

use super::run_report;
use crate::{state::AppState, Result};

/// GET /city-wise-medical-coverage
pub async fn city_coverage(State(state): State<AppState>) -> Result<Json<Vec<CityCoverage>>> {
    run_report(&state, "city_coverage", |r| r.city_coverage()).await
}

/// GET /hospitals/by-city
pub async fn hospitals_by_city(State(state): State<AppState>) -> Result<Json<HospitalsByCity>> {
    run_report(&state, "hospitals_by_city", |r| r.hospitals_by_city()).await
}

/// GET /api/specialty_coverage_matrix
pub async fn specialty_coverage_matrix(
    State(state): State<AppState>,
) -> Result<Json<SpecialtyCoverageMatrix>> {
    run_report(&state, "specialty_coverage_matrix", |r| r.specialty_coverage_matrix()).await
}

/// GET /hospitals/geographic-coverage
pub async fn geographic_coverage(State(state): State<AppState>) -> Result<Json<Vec<GeographicEntry>>> {
    run_report(&state, "geographic_coverage", |r| r.geographic_coverage()).await
}

/// GET /hospitals/locations
pub async fn locations(State(state): State<AppState>) -> Result<Json<Vec<HospitalLocation>>> {
    run_report(&state, "locations", |r| r.hospital_locations()).await
}

/// GET /hospitals/dashboard
pub async fn dashboard(State(state): State<AppState>) -> Result<Json<Vec<DashboardCard>>> {
    run_report(&state, "dashboard", |r| r.dashboard_cards()).await
}
