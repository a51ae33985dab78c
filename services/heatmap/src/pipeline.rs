//! Load the dataset, render the chart, encode the output.

use std::fmt;
use std::time::Instant;

use clap::ValueEnum;
use heatmap_common::{Dataset, HeatmapResult};
use renderer::png::svg_to_png;
use renderer::{render_document, ChartRenderer, Container, RenderedChart};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::config::ChartConfig;
use crate::source::{DataSource, HttpDataSource};

/// What gets written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Standalone page with hover tooltips
    #[default]
    Html,
    /// The drawing surface only
    Svg,
    /// Rasterized drawing surface
    Png,
}

impl OutputFormat {
    pub fn is_binary(&self) -> bool {
        matches!(self, OutputFormat::Png)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Html => "html",
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        };
        f.write_str(name)
    }
}

/// Everything one render produced.
#[derive(Debug, Clone)]
pub struct RenderResult {
    pub dataset: Dataset,
    pub chart: RenderedChart,
    pub container: Container,
}

impl RenderResult {
    pub fn cell_count(&self) -> usize {
        self.chart.cells.len()
    }

    /// One-line description for logs.
    pub fn summary(&self) -> String {
        format!(
            "{} cells, years {}-{}, variance {:.3}..{:.3}, mounted at {}",
            self.cell_count(),
            self.chart.years.min,
            self.chart.years.max,
            self.chart.variance.min,
            self.chart.variance.max,
            self.container.selector()
        )
    }

    pub fn to_html(&self) -> HeatmapResult<String> {
        render_document(&self.chart, &self.container)
    }

    pub fn to_svg(&self) -> HeatmapResult<String> {
        self.chart.to_svg_string()
    }

    pub fn to_png(&self) -> HeatmapResult<Vec<u8>> {
        svg_to_png(&self.to_svg()?)
    }

    pub fn encode(&self, format: OutputFormat) -> HeatmapResult<Vec<u8>> {
        match format {
            OutputFormat::Html => self.to_html().map(String::into_bytes),
            OutputFormat::Svg => self.to_svg().map(String::into_bytes),
            OutputFormat::Png => self.to_png(),
        }
    }
}

/// Fetch from `source`, then render into `container`.
///
/// Nothing is drawn until the fetch has completed; a failed fetch or an
/// empty dataset returns an error and no chart.
#[instrument(skip_all, fields(source = %source.describe(), container = %container.selector()))]
pub async fn load_and_render(
    source: &dyn DataSource,
    container: &Container,
    renderer: &ChartRenderer,
) -> HeatmapResult<RenderResult> {
    let started = Instant::now();
    let dataset = source.fetch().await?;
    let chart = renderer.render(&dataset)?;

    let result = RenderResult {
        dataset,
        chart,
        container: container.clone(),
    };
    info!(
        cells = result.cell_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Rendered chart"
    );
    Ok(result)
}

/// Render the published dataset into the container named by `container_selector`,
/// using default settings.
pub async fn render(container_selector: &str) -> HeatmapResult<RenderResult> {
    let config = ChartConfig {
        selector: container_selector.to_string(),
        ..ChartConfig::default()
    };
    render_with_config(&config).await
}

/// Render using the HTTP source and geometry from `config`.
pub async fn render_with_config(config: &ChartConfig) -> HeatmapResult<RenderResult> {
    let container = Container::from_selector(&config.selector)?;
    let source = HttpDataSource::new(&config.source_url, config.timeout())?;
    let renderer = ChartRenderer::new(config.dimensions).with_title(config.title.clone());
    load_and_render(&source, &container, &renderer).await
}
