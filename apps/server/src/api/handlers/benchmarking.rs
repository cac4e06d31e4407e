//! Positioning, quality and staffing ratio handlers

use axum::{
    extract::{Path, State},
    Json,
};
use medscope_analytics::{
    positioning::PositioningReport,
    quality::QualityScore,
    staffing::{ComputedRatio, DataEnvelope, NetworkSummary, RankedRatio, SizeDistribution},
};

use super::run_report;
use crate::{state::AppState, Result};

/// GET /hospitals/{hospital_id}/positioning
pub async fn positioning(
    State(state): State<AppState>,
    Path(hospital_id): Path<i64>,
) -> Result<Json<PositioningReport>> {
    run_report(&state, "positioning", move |r| r.positioning(hospital_id)).await
}

/// GET /hospitals/positioning/all
pub async fn positioning_all(State(state): State<AppState>) -> Result<Json<Vec<PositioningReport>>> {
    run_report(&state, "positioning_all", |r| r.positioning_all()).await
}

/// GET /hospitals/quality-scores
pub async fn quality_scores(State(state): State<AppState>) -> Result<Json<Vec<QualityScore>>> {
    run_report(&state, "quality_scores", |r| r.quality_scores()).await
}

/// GET /metrics/doctor-to-bed-ratio
pub async fn ranked_doctor_bed_ratios(
    State(state): State<AppState>,
) -> Result<Json<DataEnvelope<RankedRatio>>> {
    run_report(&state, "ranked_doctor_bed_ratio", |r| r.ranked_doctor_bed_ratios()).await
}

/// GET /doctor-to-bed-ratio
pub async fn computed_doctor_bed_ratios(
    State(state): State<AppState>,
) -> Result<Json<DataEnvelope<ComputedRatio>>> {
    run_report(&state, "computed_doctor_bed_ratio", |r| r.computed_doctor_bed_ratios()).await
}

/// GET /hospitals/size-distribution
pub async fn size_distribution(State(state): State<AppState>) -> Result<Json<SizeDistribution>> {
    run_report(&state, "size_distribution", |r| r.size_distribution()).await
}

/// GET /analytics/summary
pub async fn network_summary(State(state): State<AppState>) -> Result<Json<NetworkSummary>> {
    run_report(&state, "network_summary", |r| r.network_summary()).await
}
