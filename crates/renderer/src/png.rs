//! PNG export of the rendered chart.
//!
//! The SVG markup is parsed with `usvg`, drawn with `resvg` onto a
//! `tiny-skia` pixmap the size of the drawing surface, and encoded as PNG.

use heatmap_common::{HeatmapError, HeatmapResult};
use tracing::{debug, warn};

/// Rasterize SVG markup to PNG bytes.
///
/// System fonts are loaded so titles and labels show up; if none are
/// available the marks are still drawn, only the text is missing.
pub fn svg_to_png(svg: &str) -> HeatmapResult<Vec<u8>> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    if opt.fontdb.is_empty() {
        warn!("No system fonts found, PNG will have no text");
    }

    let tree = usvg::Tree::from_str(svg, &opt)
        .map_err(|e| HeatmapError::Render(format!("Failed to parse SVG: {}", e)))?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        HeatmapError::Render(format!(
            "Invalid surface size {}x{}",
            size.width(),
            size.height()
        ))
    })?;

    // white page; the chart itself has no background
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    let png = pixmap
        .encode_png()
        .map_err(|e| HeatmapError::Render(format!("PNG encoding failed: {}", e)))?;
    debug!(
        width = size.width(),
        height = size.height(),
        bytes = png.len(),
        "Encoded PNG"
    );
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rasterize_simple_svg() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10">
            <rect x="0" y="0" width="10" height="10" fill="#D73027"/>
        </svg>"##;
        let png = svg_to_png(svg).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }

    #[test]
    fn test_invalid_svg_is_render_error() {
        assert!(matches!(svg_to_png("<nope"), Err(HeatmapError::Render(_))));
    }
}
