//! ICU, equipment, maintenance and surgical capacity handlers

use axum::{extract::State, Json};
use medscope_analytics::{
    equipment::{CriticalCareInventory, EquipmentInventory},
    icu::{HospitalIcuCapacity, IcuSummary},
    maintenance::MaintenanceItem,
    surgical::SurgicalCapacity,
};

use super::run_report;
use crate::{state::AppState, Result};

/// GET /api/icu-capacity/summary
pub async fn icu_summary(State(state): State<AppState>) -> Result<Json<IcuSummary>> {
    run_report(&state, "icu_summary", |r| r.icu_summary()).await
}

/// GET /api/icu-capacity/hospitals
pub async fn icu_by_hospital(State(state): State<AppState>) -> Result<Json<Vec<HospitalIcuCapacity>>> {
    run_report(&state, "icu_by_hospital", |r| r.icu_by_hospital()).await
}

/// GET /equipment-data
pub async fn equipment_inventory(State(state): State<AppState>) -> Result<Json<EquipmentInventory>> {
    run_report(&state, "equipment_inventory", |r| r.equipment_inventory()).await
}

/// GET /equipment/critical-care
pub async fn critical_care(State(state): State<AppState>) -> Result<Json<CriticalCareInventory>> {
    run_report(&state, "critical_care", |r| r.critical_care_inventory()).await
}

/// GET /equipment/maintenance-schedule
pub async fn maintenance_schedule(State(state): State<AppState>) -> Result<Json<Vec<MaintenanceItem>>> {
    run_report(&state, "maintenance_schedule", |r| r.maintenance_schedule()).await
}

/// GET /api/hospitals/surgical-capacity
pub async fn surgical_capacity(State(state): State<AppState>) -> Result<Json<Vec<SurgicalCapacity>>> {
    run_report(&state, "surgical_capacity", |r| r.surgical_capacity()).await
}
