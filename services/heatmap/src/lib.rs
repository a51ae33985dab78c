//! Temperature heatmap service library.
//!
//! Exposes the pipeline pieces used by the `heatmap` binary so they can be
//! tested with substitute data sources.

pub mod config;
pub mod pipeline;
pub mod source;

pub use config::ChartConfig;
pub use pipeline::{load_and_render, render, render_with_config, OutputFormat, RenderResult};
pub use source::{DataSource, FileDataSource, HttpDataSource};
