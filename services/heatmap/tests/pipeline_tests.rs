//! End-to-end render tests: source -> chart -> encoded output.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use heatmap::{load_and_render, DataSource, HttpDataSource, OutputFormat};
use heatmap_common::{Dataset, HeatmapError, HeatmapResult};
use renderer::{ChartRenderer, Container, ContainerBox, PointerEvent};
use test_utils::{create_linear_dataset, hover_dataset, sample_dataset, EMPTY_JSON, SAMPLE_JSON};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Hands out a fixed result and counts how often it was asked.
struct StubSource {
    result: HeatmapResult<Dataset>,
    calls: AtomicUsize,
}

impl StubSource {
    fn ok(dataset: Dataset) -> Self {
        Self {
            result: Ok(dataset),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing(err: HeatmapError) -> Self {
        Self {
            result: Err(err),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl DataSource for StubSource {
    async fn fetch(&self) -> HeatmapResult<Dataset> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn describe(&self) -> String {
        "stub".to_string()
    }
}

fn default_container() -> Container {
    Container::from_selector("#chart").unwrap()
}

// ============================================================================
// Pipeline
// ============================================================================

#[tokio::test]
async fn test_render_draws_one_cell_per_observation() {
    let source = StubSource::ok(create_linear_dataset(1900, 10, 8.66));
    let result = load_and_render(&source, &default_container(), &ChartRenderer::default())
        .await
        .unwrap();

    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    assert_eq!(result.cell_count(), 120);
    assert_eq!(result.dataset.len(), 120);
    assert!(result.summary().starts_with("120 cells, years 1900-1909"));
    assert!(result.summary().ends_with("mounted at #chart"));
}

#[tokio::test]
async fn test_fetch_failure_draws_nothing() {
    let source = StubSource::failing(HeatmapError::Fetch("connection refused".to_string()));
    let err = load_and_render(&source, &default_container(), &ChartRenderer::default())
        .await
        .unwrap_err();

    assert!(matches!(err, HeatmapError::Fetch(_)));
}

#[tokio::test]
async fn test_empty_dataset_is_rejected() {
    let source = StubSource::ok(Dataset::new(8.66, Vec::new()));
    let err = load_and_render(&source, &default_container(), &ChartRenderer::default())
        .await
        .unwrap_err();

    assert_eq!(err, HeatmapError::EmptyDataset);
}

#[tokio::test]
async fn test_hover_after_render_reports_reading() {
    let source = StubSource::ok(hover_dataset());
    let mut result = load_and_render(&source, &default_container(), &ChartRenderer::default())
        .await
        .unwrap();

    result
        .chart
        .hover(
            0,
            PointerEvent {
                page_x: 500.0,
                page_y: 300.0,
            },
            ContainerBox::default(),
            40.0,
        )
        .unwrap();

    assert_eq!(result.chart.tooltip.text(), "1900 - January\nTemperature: 7.50℃");
    assert!(result.chart.tooltip.is_visible());
    let html = result.to_html().unwrap();
    assert!(html.contains(r#"data-year="1900""#));
}

// ============================================================================
// Output encodings
// ============================================================================

#[tokio::test]
async fn test_encode_each_format() {
    let source = StubSource::ok(sample_dataset());
    let result = load_and_render(&source, &default_container(), &ChartRenderer::default())
        .await
        .unwrap();

    let html = String::from_utf8(result.encode(OutputFormat::Html).unwrap()).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"id="tooltip""#));

    let svg = String::from_utf8(result.encode(OutputFormat::Svg).unwrap()).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(!svg.contains("tooltip"));

    let png = result.encode(OutputFormat::Png).unwrap();
    assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
}

#[test]
fn test_output_format_names() {
    assert_eq!(OutputFormat::default(), OutputFormat::Html);
    assert_eq!(OutputFormat::Svg.to_string(), "svg");
    assert!(OutputFormat::Png.is_binary());
    assert!(!OutputFormat::Html.is_binary());
}

// ============================================================================
// Over HTTP
// ============================================================================

#[tokio::test]
async fn test_render_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_JSON))
        .mount(&server)
        .await;

    let source = HttpDataSource::new(server.uri(), None).unwrap();
    let container = Container::from_selector("#heatmap").unwrap();
    let result = load_and_render(&source, &container, &ChartRenderer::default())
        .await
        .unwrap();

    assert_eq!(result.cell_count(), sample_dataset().len());
    assert!(result.to_html().unwrap().contains(r#"<div id="heatmap">"#));
}

#[tokio::test]
async fn test_empty_document_over_http_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_JSON))
        .mount(&server)
        .await;

    let source = HttpDataSource::new(server.uri(), None).unwrap();
    let err = load_and_render(&source, &default_container(), &ChartRenderer::default())
        .await
        .unwrap_err();
    assert_eq!(err, HeatmapError::EmptyDataset);
}

#[tokio::test]
async fn test_invalid_selector_is_rejected_before_fetch() {
    let err = heatmap::render("main > div").await.unwrap_err();
    assert!(matches!(err, HeatmapError::InvalidSelector(_)));
}
