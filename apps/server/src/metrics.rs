//! Metrics collection for the analytics server
//!
//! This module defines and manages Prometheus metrics for monitoring the server.

use lazy_static::lazy_static;
use medscope_analytics::{LoadObserver, LoadOutcome};
use medscope_models::Dataset;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, register_int_gauge_vec, HistogramVec,
    IntCounterVec, IntGaugeVec,
};
use std::time::Duration;

lazy_static! {
    // HTTP Request Metrics

    /// Total HTTP requests by method, path, and status
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "medscope_http_requests_total",
        "Total number of HTTP requests",
        &["method", "path", "status"]
    )
    .expect("Failed to register HTTP_REQUESTS_TOTAL");

    /// HTTP request duration in seconds
    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "medscope_http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .expect("Failed to register HTTP_REQUEST_DURATION_SECONDS");

    /// In-flight HTTP requests
    pub static ref HTTP_REQUESTS_IN_FLIGHT: IntGaugeVec = register_int_gauge_vec!(
        "medscope_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
        &["method", "path"]
    )
    .expect("Failed to register HTTP_REQUESTS_IN_FLIGHT");

    // Dataset Metrics

    /// Dataset file loads by dataset and outcome
    pub static ref DATASET_LOADS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "medscope_dataset_loads_total",
        "Total number of dataset file loads",
        &["dataset", "outcome"]
    )
    .expect("Failed to register DATASET_LOADS_TOTAL");

    /// Dataset load duration, including JSON parsing
    pub static ref DATASET_LOAD_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "medscope_dataset_load_duration_seconds",
        "Dataset load duration in seconds",
        &["dataset"],
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]
    )
    .expect("Failed to register DATASET_LOAD_DURATION_SECONDS");
}

/// Records every dataset load in the Prometheus registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct DatasetLoadMetrics;

impl LoadObserver for DatasetLoadMetrics {
    fn on_load(&self, dataset: Dataset, outcome: LoadOutcome, elapsed: Duration) {
        DATASET_LOADS_TOTAL
            .with_label_values(&[dataset.as_str(), outcome.as_str()])
            .inc();
        DATASET_LOAD_DURATION_SECONDS
            .with_label_values(&[dataset.as_str()])
            .observe(elapsed.as_secs_f64());
    }
}

/// Collapse numeric path segments to `{id}` to keep label cardinality bounded.
pub fn sanitize_path(path: &str) -> String {
    if path == "/" || path.is_empty() {
        return "/".to_string();
    }

    path.split('/')
        .map(|segment| {
            if !segment.is_empty() && segment.parse::<i64>().is_ok() {
                "{id}"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_path() {
        assert_eq!(sanitize_path("/"), "/");
        assert_eq!(sanitize_path("/health"), "/health");
        assert_eq!(sanitize_path("/hospitals/12/positioning"), "/hospitals/{id}/positioning");
        assert_eq!(
            sanitize_path("/api/hospitals/risk-profile/7"),
            "/api/hospitals/risk-profile/{id}"
        );
        assert_eq!(sanitize_path("/api/doctors/-3"), "/api/doctors/{id}");
        assert_eq!(sanitize_path("/hospitals/positioning/all"), "/hospitals/positioning/all");
    }

    #[test]
    fn dataset_loads_are_counted() {
        let counter = DATASET_LOADS_TOTAL.with_label_values(&["equipment", "corrupt"]);
        let before = counter.get();

        DatasetLoadMetrics.on_load(Dataset::Equipment, LoadOutcome::Corrupt, Duration::from_millis(2));

        assert_eq!(counter.get(), before + 1);
    }
}
