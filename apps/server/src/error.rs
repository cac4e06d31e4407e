//! Error types for the API server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Analytics(#[from] medscope_analytics::Error),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Analytics(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            Error::Analytics(medscope_analytics::Error::NotFound { .. }) => self.to_string(),
            Error::Analytics(e @ medscope_analytics::Error::DataUnavailable { .. }) => {
                tracing::error!(error = %e, "Report data unavailable");
                self.to_string()
            }
            Error::Internal(_) | Error::Other(_) => {
                tracing::error!("Internal error: {}", self);
                "Internal server error".to_string()
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medscope_analytics::DataFault;
    use medscope_models::Dataset;

    async fn body_of(error: Error) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let (status, body) = body_of(medscope_analytics::Error::hospital_not_found(9).into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Hospital not found: 9"}));
    }

    #[tokio::test]
    async fn unavailable_data_names_the_file() {
        let error = medscope_analytics::Error::DataUnavailable {
            dataset: Dataset::Doctors,
            fault: DataFault::Missing(std::io::Error::from(std::io::ErrorKind::NotFound)),
        };
        let (status, body) = body_of(error.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "Required data file not found: doctors.json");
    }

    #[tokio::test]
    async fn corrupt_data_says_the_file_might_be_corrupted() {
        let error = medscope_analytics::Error::DataUnavailable {
            dataset: Dataset::WardsRooms,
            fault: DataFault::Corrupt(serde_json::from_str::<Vec<u8>>("{").unwrap_err()),
        };
        let (status, body) = body_of(error.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["detail"],
            "Could not parse data from file: wards_rooms.json. The file might be corrupted."
        );
    }

    #[tokio::test]
    async fn internal_errors_hide_details() {
        let (status, body) = body_of(Error::Internal("worker panicked".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "Internal server error");
    }
}
