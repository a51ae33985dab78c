//! Heatmap configuration.
//!
//! Values come from, in increasing priority: built-in defaults, an optional
//! YAML file, environment variables and command-line flags (the last two are
//! handled by `clap` in `main.rs`).

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use heatmap_common::Dimensions;
use renderer::chart::DEFAULT_TITLE;
use renderer::document::DEFAULT_SELECTOR;
use serde::{Deserialize, Serialize};

/// Published global land-surface temperature document.
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Top-level chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Where the dataset is fetched from
    #[serde(default = "default_source_url")]
    pub source_url: String,

    /// Request timeout; unset means wait as long as it takes
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Plot size and margins
    #[serde(default)]
    pub dimensions: Dimensions,

    /// Chart heading
    #[serde(default = "default_title")]
    pub title: String,

    /// Mount point in the generated page
    #[serde(default = "default_selector")]
    pub selector: String,
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_selector() -> String {
    DEFAULT_SELECTOR.to_string()
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            timeout_secs: None,
            dimensions: Dimensions::default(),
            title: default_title(),
            selector: default_selector(),
        }
    }
}

impl ChartConfig {
    /// Parse configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse chart config")
    }

    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        let config = Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid config file: {:?}", path))?;

        tracing::info!(path = ?path, "Loaded chart config");
        Ok(config)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
