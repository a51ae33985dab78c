//! Common types and utilities shared across the heatmap crates.

pub mod dataset;
pub mod dimensions;
pub mod error;
pub mod month;

pub use dataset::{Dataset, Extent, Observation};
pub use dimensions::{Dimensions, Margin};
pub use error::{HeatmapError, HeatmapResult};
pub use month::{month_name, MONTHS, MONTH_NAMES};
