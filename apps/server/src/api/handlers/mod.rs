//! Request handlers for API endpoints
//!
//! Handlers extract path parameters, run the report on the blocking pool
//! and serialize the result. All report logic lives in
//! [`ReportService`](crate::services::ReportService).

pub mod benchmarking;
pub mod capacity;
pub mod compliance;
pub mod directory;
pub mod geography;
pub mod metrics;

use axum::Json;
use serde::Serialize;
use std::sync::Arc;

use crate::{services::ReportService, state::AppState, Error, Result};

/// Run a report on the blocking thread pool.
///
/// Reports read files and walk whole datasets, so they stay off the async
/// workers.
pub(crate) async fn run_report<T, F>(state: &AppState, report: &'static str, f: F) -> Result<Json<T>>
where
    T: Serialize + Send + 'static,
    F: FnOnce(&ReportService) -> medscope_analytics::Result<T> + Send + 'static,
{
    let reports = Arc::clone(&state.reports);
    let value = tokio::task::spawn_blocking(move || f(&reports))
        .await
        .map_err(|e| Error::Internal(format!("{report} report task failed: {e}")))??;
    Ok(Json(value))
}
