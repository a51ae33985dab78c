//! Dataset sources.
//!
//! A source is fetched exactly once per render. There is no retry and no
//! caching: any failure aborts the render before anything is drawn.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use heatmap_common::{Dataset, HeatmapError, HeatmapResult};
use reqwest::Client;
use tracing::{debug, info, instrument};

/// Something that can produce the dataset document.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch and parse the document. Single attempt.
    async fn fetch(&self) -> HeatmapResult<Dataset>;

    /// Human-readable origin for logs.
    fn describe(&self) -> String;
}

/// Fetches the document with one HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpDataSource {
    client: Client,
    url: String,
}

impl HttpDataSource {
    /// Create a source for `url`. Without a timeout the request may wait forever.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> HeatmapResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| HeatmapError::Fetch(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> HeatmapResult<Dataset> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| HeatmapError::Fetch(format!("GET {} failed: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HeatmapError::Fetch(format!(
                "GET {} returned {}",
                self.url, status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| HeatmapError::Fetch(format!("Failed to read body: {}", e)))?;
        debug!(bytes = body.len(), "Downloaded dataset");

        let dataset = Dataset::from_slice(&body)?;
        info!(
            observations = dataset.len(),
            base_temperature = dataset.base_temperature,
            "Fetched dataset"
        );
        Ok(dataset)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the same document from a local file.
#[derive(Debug, Clone)]
pub struct FileDataSource {
    path: PathBuf,
}

impl FileDataSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl DataSource for FileDataSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch(&self) -> HeatmapResult<Dataset> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            HeatmapError::Fetch(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let dataset = Dataset::from_slice(&bytes)?;
        info!(observations = dataset.len(), "Loaded dataset from file");
        Ok(dataset)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
