//! Data access: typed loading of the JSON datasets.
//!
//! Every call reads the file again so results always reflect what is on
//! disk. A missing or malformed file fails the load as a whole; there is
//! no partial result.

use medscope_models::{Dataset, Record};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{DataFault, Error, Result};

/// Outcome of a single dataset load, reported to a [`LoadObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Missing,
    Corrupt,
}

impl LoadOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            LoadOutcome::Loaded => "loaded",
            LoadOutcome::Missing => "missing",
            LoadOutcome::Corrupt => "corrupt",
        }
    }
}

/// Hook for instrumenting dataset loads.
pub trait LoadObserver: Send + Sync {
    fn on_load(&self, dataset: Dataset, outcome: LoadOutcome, elapsed: Duration);
}

/// Reads datasets from a directory of JSON files.
#[derive(Clone)]
pub struct DataStore {
    root: PathBuf,
    observer: Option<Arc<dyn LoadObserver>>,
}

impl fmt::Debug for DataStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataStore")
            .field("root", &self.root)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

impl DataStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn LoadObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, dataset: Dataset) -> PathBuf {
        self.root.join(dataset.file_name())
    }

    /// Load every record of `R`'s dataset.
    pub fn load<R: Record>(&self) -> Result<Vec<R>> {
        self.load_as(R::DATASET)
    }

    /// Load a dataset as untyped JSON records, exactly as stored.
    pub fn load_raw(&self, dataset: Dataset) -> Result<Vec<Value>> {
        self.load_as(dataset)
    }

    fn load_as<T: DeserializeOwned>(&self, dataset: Dataset) -> Result<Vec<T>> {
        let started = Instant::now();
        let result: Result<Vec<T>> = self.read_records(dataset);

        let outcome = match &result {
            Ok(_) => LoadOutcome::Loaded,
            Err(Error::DataUnavailable {
                fault: DataFault::Corrupt(_),
                ..
            }) => LoadOutcome::Corrupt,
            Err(_) => LoadOutcome::Missing,
        };
        if let Some(observer) = &self.observer {
            observer.on_load(dataset, outcome, started.elapsed());
        }

        match &result {
            Ok(records) => tracing::debug!(
                dataset = dataset.as_str(),
                records = records.len(),
                "Dataset loaded"
            ),
            Err(e) => tracing::warn!(dataset = dataset.as_str(), error = %e, "Dataset unavailable"),
        }

        result
    }

    fn read_records<T: DeserializeOwned>(&self, dataset: Dataset) -> Result<Vec<T>> {
        let bytes = fs::read(self.path_of(dataset)).map_err(|e| Error::DataUnavailable {
            dataset,
            fault: DataFault::Missing(e),
        })?;

        serde_json::from_slice(&bytes).map_err(|e| Error::DataUnavailable {
            dataset,
            fault: DataFault::Corrupt(e),
        })
    }
}
