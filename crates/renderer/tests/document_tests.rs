//! Tests for the HTML page and PNG export.

use renderer::document::DEFAULT_SELECTOR;
use renderer::png::svg_to_png;
use renderer::{render_document, ChartRenderer, Container};
use test_utils::{hover_dataset, sample_dataset};

#[test]
fn test_document_mounts_chart_and_tooltip_in_container() {
    let chart = ChartRenderer::default().render(&sample_dataset()).unwrap();
    let container = Container::from_selector(DEFAULT_SELECTOR).unwrap();

    let mounted = container.mount(&chart);
    assert_eq!(mounted.id(), Some("chart"));
    let children: Vec<&str> = mounted.child_elements().map(|e| e.name()).collect();
    assert_eq!(children, vec!["svg", "div"]);
    assert!(mounted.find_by_id("tooltip").is_some());

    let html = render_document(&chart, &container).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<div id="chart"><svg xmlns="http://www.w3.org/2000/svg""#));
    assert!(html.contains(r#"<div id="tooltip" style="opacity: 0;" data-date=""></div>"#));
    assert!(html.contains("var BASE = 8.66;"));
    assert!(html.contains(r##"var SELECTOR = "#chart";"##));
    assert!(html.contains("<title>Monthly Global Land-Surface Temperature</title>"));
}

#[test]
fn test_document_uses_custom_container() {
    let chart = ChartRenderer::default().render(&hover_dataset()).unwrap();
    let container = Container::from_selector("#heatmap").unwrap();
    let html = render_document(&chart, &container).unwrap();
    assert!(html.contains(r#"<div id="heatmap">"#));
    assert!(html.contains("#heatmap { position: relative;"));
}

#[test]
fn test_svg_contains_every_required_id() {
    let chart = ChartRenderer::default().render(&sample_dataset()).unwrap();
    let svg = chart.to_svg_string().unwrap();
    for id in ["title", "description", "legend", "x-axis", "y-axis"] {
        assert!(svg.contains(&format!(r#"id="{}""#, id)), "missing #{}", id);
    }
    assert!(svg.contains(r#"data-temp="-1.366""#));
}

#[test]
fn test_chart_rasterizes_to_png() {
    let chart = ChartRenderer::default().render(&sample_dataset()).unwrap();
    let png = svg_to_png(&chart.to_svg_string().unwrap()).unwrap();
    assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
}
