//! Common test fixtures for heatmap tests.
//!
//! This module provides pre-defined documents and datasets that represent
//! common scenarios when loading and rendering the chart.

use heatmap_common::{Dataset, Observation};

/// Facts about the published global land-surface temperature document.
pub mod reference {
    /// Base temperature of the published document, in °C.
    pub const BASE_TEMPERATURE: f64 = 8.66;

    /// First year present in the published document.
    pub const FIRST_YEAR: i32 = 1753;

    /// Last year present in the published document.
    pub const LAST_YEAR: i32 = 2015;

    /// Coldest variance in the published document.
    pub const MIN_VARIANCE: f64 = -6.976;

    /// Warmest variance in the published document.
    pub const MAX_VARIANCE: f64 = 5.228;
}

/// The first months of the published document, verbatim.
pub const SAMPLE_JSON: &str = r#"{
  "baseTemperature": 8.66,
  "monthlyVariance": [
    {"year": 1753, "month": 1, "variance": -1.366},
    {"year": 1753, "month": 2, "variance": -2.223},
    {"year": 1753, "month": 3, "variance": 0.211},
    {"year": 1753, "month": 4, "variance": -0.443},
    {"year": 1753, "month": 5, "variance": -1.252},
    {"year": 1753, "month": 6, "variance": -1.226},
    {"year": 1753, "month": 7, "variance": -0.326},
    {"year": 1753, "month": 8, "variance": -0.316},
    {"year": 1753, "month": 9, "variance": -0.244},
    {"year": 1753, "month": 10, "variance": -0.874},
    {"year": 1753, "month": 11, "variance": -1.266},
    {"year": 1753, "month": 12, "variance": -0.833},
    {"year": 1754, "month": 1, "variance": -2.706},
    {"year": 1754, "month": 2, "variance": -0.773}
  ]
}"#;

/// Number of observations in [`SAMPLE_JSON`].
pub const SAMPLE_LEN: usize = 14;

/// A document with no observations.
pub const EMPTY_JSON: &str = r#"{"baseTemperature": 8.66, "monthlyVariance": []}"#;

/// Documents that must be rejected by the data source.
pub const MALFORMED_JSON: &[&str] = &[
    "",
    "not json",
    r#"{"baseTemperature": 8.66}"#,
    r#"{"baseTemperature": "warm", "monthlyVariance": []}"#,
    r#"{"baseTemperature": 8.66, "monthlyVariance": [{"year": 1753, "month": 1}]}"#,
];

/// [`SAMPLE_JSON`] parsed.
pub fn sample_dataset() -> Dataset {
    Dataset::from_json(SAMPLE_JSON).expect("sample document parses")
}

/// A single cold January reading against an 8.0℃ base.
///
/// Hovering its cell reads "1900 - January" / "Temperature: 7.50℃".
pub fn hover_dataset() -> Dataset {
    Dataset::new(8.0, vec![Observation::new(1900, 1, -0.5)])
}

/// Readings listed in reverse chronological order.
pub fn shuffled_dataset() -> Dataset {
    Dataset::new(
        8.66,
        vec![
            Observation::new(1901, 12, 1.2),
            Observation::new(1901, 6, 0.4),
            Observation::new(1900, 3, -0.9),
            Observation::new(1900, 1, -1.5),
        ],
    )
}
