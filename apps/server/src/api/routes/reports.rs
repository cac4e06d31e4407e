//! Analytics report routes

use crate::api::handlers::{benchmarking, capacity, compliance, geography};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn report_routes() -> Router<AppState> {
    Router::new()
        // Benchmarking
        .route("/hospitals/quality-scores", get(benchmarking::quality_scores))
        .route("/hospitals/size-distribution", get(benchmarking::size_distribution))
        .route("/metrics/doctor-to-bed-ratio", get(benchmarking::ranked_doctor_bed_ratios))
        .route("/doctor-to-bed-ratio", get(benchmarking::computed_doctor_bed_ratios))
        .route("/analytics/summary", get(benchmarking::network_summary))
        // Risk and compliance
        .route("/api/hospitals/risk-profile/:hospital_id", get(compliance::risk_profile))
        .route("/api/hospitals/list", get(compliance::risk_list))
        .route("/hospitals/iso-certification", get(compliance::iso_certification))
        .route("/api/hospitals/document-status", get(compliance::document_status))
        // Capacity
        .route("/api/icu-capacity/summary", get(capacity::icu_summary))
        .route("/api/icu-capacity/hospitals", get(capacity::icu_by_hospital))
        .route("/equipment-data", get(capacity::equipment_inventory))
        .route("/equipment/critical-care", get(capacity::critical_care))
        .route("/equipment/maintenance-schedule", get(capacity::maintenance_schedule))
        .route("/api/hospitals/surgical-capacity", get(capacity::surgical_capacity))
        // Geography
        .route("/city-wise-medical-coverage", get(geography::city_coverage))
        .route("/api/specialty_coverage_matrix", get(geography::specialty_coverage_matrix))
}
