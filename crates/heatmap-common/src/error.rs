//! Error types for the heatmap crates.

use thiserror::Error;

/// Result type alias using HeatmapError.
pub type HeatmapResult<T> = Result<T, HeatmapError>;

/// Primary error type for loading and rendering the chart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HeatmapError {
    // === Data Source Errors ===
    #[error("Failed to fetch dataset: {0}")]
    Fetch(String),

    #[error("Malformed dataset: {0}")]
    Parse(String),

    // === Data Errors ===
    #[error("Dataset contains no observations")]
    EmptyDataset,

    #[error("Invalid observation for {year}: month {month} is outside 1..12")]
    InvalidObservation { year: i32, month: u32 },

    // === Rendering Errors ===
    #[error("Invalid container selector '{0}': expected '#id'")]
    InvalidSelector(String),

    #[error("Rendering failed: {0}")]
    Render(String),

    // === Infrastructure Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl HeatmapError {
    /// Whether the failure happened before any data reached the renderer.
    pub fn is_data_source_error(&self) -> bool {
        matches!(self, HeatmapError::Fetch(_) | HeatmapError::Parse(_))
    }
}

// Conversion from common error types
impl From<std::io::Error> for HeatmapError {
    fn from(err: std::io::Error) -> Self {
        HeatmapError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HeatmapError {
    fn from(err: serde_json::Error) -> Self {
        HeatmapError::Parse(format!("JSON error: {}", err))
    }
}
