pub mod assertions;
pub mod fixtures;

use anyhow::Context as _;
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use medscope::{api::create_router, AppState, Config};
use medscope_models::Dataset;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt as _;

// Re-export commonly used items
pub use assertions::*;
pub use fixtures::*;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    data_dir: TempDir,
}

impl TestApp {
    /// App over the full fixture network.
    pub fn new() -> anyhow::Result<Self> {
        Self::with_datasets(fixtures::network(), |_| {})
    }

    pub fn new_with_config(configure: impl FnOnce(&mut Config)) -> anyhow::Result<Self> {
        Self::with_datasets(fixtures::network(), configure)
    }

    /// App over the given datasets only. Hospitals and metrics must be
    /// present for the baseline to compute.
    pub fn with_datasets(
        datasets: Vec<(Dataset, Value)>,
        configure: impl FnOnce(&mut Config),
    ) -> anyhow::Result<Self> {
        let data_dir = tempfile::tempdir().context("create data directory")?;
        for (dataset, records) in &datasets {
            fs::write(
                data_dir.path().join(dataset.file_name()),
                serde_json::to_vec(records)?,
            )
            .with_context(|| format!("write {}", dataset.file_name()))?;
        }

        let mut config = Config::default();
        config.data.directory = data_dir.path().to_path_buf();
        configure(&mut config);

        let state = AppState::new(config).context("initialize AppState")?;
        let router = create_router(state.clone());

        Ok(Self {
            router,
            state,
            data_dir,
        })
    }

    /// Replace a dataset file after startup.
    pub fn write_raw(&self, dataset: Dataset, contents: &str) -> anyhow::Result<()> {
        fs::write(self.data_dir.path().join(dataset.file_name()), contents)
            .with_context(|| format!("overwrite {}", dataset.file_name()))
    }

    /// Delete a dataset file after startup.
    pub fn remove(&self, dataset: Dataset) -> anyhow::Result<()> {
        fs::remove_file(self.data_dir.path().join(dataset.file_name()))
            .with_context(|| format!("remove {}", dataset.file_name()))
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        extra_headers: &[(&str, &str)],
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header("host", "example.org")
            .header("accept", "application/json");
        for (name, value) in extra_headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(Body::empty()).context("build request")?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .context("dispatch request")?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .context("read response body")?;

        Ok((status, headers, body))
    }

    /// GET a path and decode the JSON body.
    pub async fn get_json(&self, path: &str) -> anyhow::Result<(StatusCode, Value)> {
        let (status, _headers, body) = self.request(Method::GET, path, &[]).await?;
        let json = serde_json::from_slice(&body)
            .with_context(|| format!("decode JSON from {path}: {}", String::from_utf8_lossy(&body)))?;
        Ok((status, json))
    }
}
