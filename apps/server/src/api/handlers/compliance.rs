//! Risk, certification and document handlers

use axum::{
    extract::{Path, State},
    Json,
};
use medscope_analytics::{
    compliance::{DocumentStatus, IsoCertification},
    risk::{RiskProfile, RiskSummary},
};

use super::run_report;
use crate::{services::local_today, state::AppState, Result};

/// GET /api/hospitals/risk-profile/{hospital_id}
pub async fn risk_profile(
    State(state): State<AppState>,
    Path(hospital_id): Path<i64>,
) -> Result<Json<RiskProfile>> {
    let today = local_today();
    run_report(&state, "risk_profile", move |r| r.risk_profile(hospital_id, today)).await
}

/// GET /api/hospitals/list
pub async fn risk_list(State(state): State<AppState>) -> Result<Json<Vec<RiskSummary>>> {
    let today = local_today();
    run_report(&state, "risk_list", move |r| r.risk_list(today)).await
}

/// GET /hospitals/iso-certification
pub async fn iso_certification(State(state): State<AppState>) -> Result<Json<Vec<IsoCertification>>> {
    let today = local_today();
    run_report(&state, "iso_certification", move |r| r.iso_certification_status(today)).await
}

/// GET /api/hospitals/document-status
pub async fn document_status(State(state): State<AppState>) -> Result<Json<Vec<DocumentStatus>>> {
    run_report(&state, "document_status", |r| r.document_status()).await
}
