//! Hospital directory handlers: raw datasets, profiles, contacts,
//! specialties, doctors and wards.

use axum::{
    extract::{Path, State},
    Json,
};
use medscope_analytics::directory::{
    BasicHospital, ContactEntry, DoctorEntry, DoctorSummary, EnrichedWard, FullProfile,
    HospitalProfile, HospitalSpecialties,
};
use serde_json::Value;

use super::run_report;
use crate::{state::AppState, Result};

/// GET /hospitals
pub async fn hospitals(State(state): State<AppState>) -> Result<Json<Vec<Value>>> {
    run_report(&state, "hospitals", |r| r.hospitals()).await
}

/// GET /hospital_addresses
pub async fn addresses(State(state): State<AppState>) -> Result<Json<Vec<Value>>> {
    run_report(&state, "hospital_addresses", |r| r.addresses()).await
}

/// GET /hospitals/full-profile
pub async fn full_profiles(State(state): State<AppState>) -> Result<Json<Vec<FullProfile>>> {
    run_report(&state, "full_profile", |r| r.full_profiles()).await
}

/// GET /hospital/profile/{hospital_id}
pub async fn hospital_profile(
    State(state): State<AppState>,
    Path(hospital_id): Path<i64>,
) -> Result<Json<HospitalProfile>> {
    run_report(&state, "hospital_profile", move |r| r.hospital_profile(hospital_id)).await
}

/// GET /hospitals/basic
pub async fn basic_listing(State(state): State<AppState>) -> Result<Json<Vec<BasicHospital>>> {
    run_report(&state, "basic_listing", |r| r.basic_listing()).await
}

/// GET /hospitals/contacts
pub async fn contacts(State(state): State<AppState>) -> Result<Json<Vec<ContactEntry>>> {
    run_report(&state, "contacts", |r| r.contact_directory()).await
}

/// GET /hospitals/specialties
pub async fn specialties(State(state): State<AppState>) -> Result<Json<Vec<HospitalSpecialties>>> {
    run_report(&state, "specialties", |r| r.specialty_directory()).await
}

/// GET /api/hospital-doctors-summary
pub async fn doctors_summary(State(state): State<AppState>) -> Result<Json<Vec<DoctorSummary>>> {
    run_report(&state, "doctors_summary", |r| r.doctors_summary()).await
}

/// GET /api/doctors/{hospital_id}
///
/// An unknown hospital yields an empty list rather than 404.
pub async fn hospital_doctors(
    State(state): State<AppState>,
    Path(hospital_id): Path<i64>,
) -> Result<Json<Vec<DoctorEntry>>> {
    run_report(&state, "hospital_doctors", move |r| r.hospital_doctors(hospital_id)).await
}

/// GET /api/wards-rooms
pub async fn wards(State(state): State<AppState>) -> Result<Json<Vec<EnrichedWard>>> {
    run_report(&state, "wards_rooms", |r| r.enriched_wards()).await
}
